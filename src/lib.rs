//! A fast 2D Delaunay triangulation library.
//!
//! Ported from the sweep-hull algorithm behind [Delaunator][d3-delaunay] /
//! [mapbox/delaunator][delaunator-js]: points are swept in order of distance
//! from the seed triangle's circumcenter, each insertion extends a convex
//! hull maintained as a doubly linked list, and the flip-propagation
//! ("legalize") step restores the Delaunay property after every insertion.
//!
//! ```
//! use sweephull::{Point, Triangulation};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let t = Triangulation::new(&points).unwrap();
//! assert_eq!(t.num_triangles(), 2);
//! assert_eq!(t.hull.len(), 4);
//! ```
//!
//! [delaunator-js]: https://github.com/mapbox/delaunator
//! [d3-delaunay]: https://github.com/d3/d3-delaunay

mod elem;
mod error;
mod hull;
mod iter;
mod legalize;
mod mesh;
#[cfg(feature = "mint")]
mod mint;
mod point;
mod predicates;
mod sort;
mod triangulation;

pub use crate::elem::{HalfEdge, Triangle, Vertex};
pub use crate::error::TriangulationError;
pub use crate::iter::{
    HalfEdges, TriangleEdgeIter, TriangleVertexIter, Triangles, VertexEdgeIter, VertexTriangleIter,
};
pub use crate::point::Point;
pub use crate::triangulation::Triangulation;
