//! Read-only views over a [`crate::Triangulation`]'s mesh: a triangle, a
//! half-edge, and a vertex, each borrowing from the triangulation they came
//! from so their fields always reflect the most recent `update()`.

use crate::iter::{TriangleEdgeIter, TriangleVertexIter, VertexEdgeIter, VertexTriangleIter};
use crate::mesh::{next_halfedge, prev_halfedge};
use crate::point::Point;
use crate::Triangulation;

/// One of the mesh's triangles, identified by its first half-edge `3t`.
#[derive(Clone, Copy, Debug)]
pub struct Triangle<'a> {
    pub(crate) triangulation: &'a Triangulation,
    pub(crate) index: usize,
}

impl<'a> Triangle<'a> {
    /// This triangle's own id (`t`, where its half-edges are `3t, 3t+1, 3t+2`).
    pub fn id(&self) -> usize {
        self.index
    }

    /// The triangle's three half-edges, in CCW winding order.
    pub fn edges(&self) -> TriangleEdgeIter<'a> {
        TriangleEdgeIter::new(self.triangulation, self.index)
    }

    /// The triangle's three vertices, in CCW winding order.
    pub fn vertices(&self) -> TriangleVertexIter<'a> {
        TriangleVertexIter::new(self.triangulation, self.index)
    }

    pub fn points(&self) -> [Point; 3] {
        [self.a().point(), self.b().point(), self.c().point()]
    }

    /// The first vertex, the start of half-edge `3t`.
    pub fn a(&self) -> Vertex<'a> {
        self.ab().start()
    }

    /// The second vertex, the start of half-edge `3t+1`.
    pub fn b(&self) -> Vertex<'a> {
        self.bc().start()
    }

    /// The third vertex, the start of half-edge `3t+2`.
    pub fn c(&self) -> Vertex<'a> {
        self.ca().start()
    }

    /// The half-edge from `a()` to `b()`.
    pub fn ab(&self) -> HalfEdge<'a> {
        HalfEdge { triangulation: self.triangulation, index: 3 * self.index }
    }

    /// The half-edge from `b()` to `c()`.
    pub fn bc(&self) -> HalfEdge<'a> {
        HalfEdge { triangulation: self.triangulation, index: 3 * self.index + 1 }
    }

    /// The half-edge from `c()` to `a()`.
    pub fn ca(&self) -> HalfEdge<'a> {
        HalfEdge { triangulation: self.triangulation, index: 3 * self.index + 2 }
    }
}

/// One directed half-edge of the mesh.
#[derive(Clone, Copy, Debug)]
pub struct HalfEdge<'a> {
    pub(crate) triangulation: &'a Triangulation,
    pub(crate) index: usize,
}

impl<'a> HalfEdge<'a> {
    /// This half-edge's own id (an index into `triangles`/`half_edges`).
    pub fn id(&self) -> usize {
        self.index
    }

    /// The triangle this half-edge belongs to.
    pub fn triangle(&self) -> Triangle<'a> {
        Triangle { triangulation: self.triangulation, index: self.index / 3 }
    }

    /// The vertex this half-edge starts from.
    pub fn start(&self) -> Vertex<'a> {
        Vertex {
            triangulation: self.triangulation,
            id: self.triangulation.triangles[self.index],
        }
    }

    /// The vertex this half-edge points to (the start of `next()`).
    pub fn end(&self) -> Vertex<'a> {
        self.next().start()
    }

    /// The next half-edge around this triangle, CCW.
    pub fn next(&self) -> HalfEdge<'a> {
        HalfEdge { triangulation: self.triangulation, index: next_halfedge(self.index) }
    }

    /// The previous half-edge around this triangle, CCW.
    pub fn prev(&self) -> HalfEdge<'a> {
        HalfEdge { triangulation: self.triangulation, index: prev_halfedge(self.index) }
    }

    /// The twin half-edge on the adjacent triangle, or `None` if this
    /// half-edge lies on the convex hull.
    pub fn twin(&self) -> Option<HalfEdge<'a>> {
        self.triangulation.half_edges[self.index].map(|opp| HalfEdge {
            triangulation: self.triangulation,
            index: opp,
        })
    }

    /// The triangle on this half-edge's own side.
    pub fn left(&self) -> Triangle<'a> {
        self.triangle()
    }

    /// The triangle on the other side of this half-edge, or `None` on the hull.
    pub fn right(&self) -> Option<Triangle<'a>> {
        self.twin().map(|t| t.triangle())
    }

    pub fn is_hull_edge(&self) -> bool {
        self.twin().is_none()
    }
}

/// One vertex, identified by its point id.
#[derive(Clone, Copy, Debug)]
pub struct Vertex<'a> {
    pub(crate) triangulation: &'a Triangulation,
    pub(crate) id: usize,
}

impl<'a> Vertex<'a> {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn point(&self) -> Point {
        self.triangulation.points()[self.id]
    }

    /// The half-edges outgoing from this vertex, walked CCW around its
    /// one-ring neighborhood. Stops short of a full cycle if the vertex
    /// sits on the convex hull.
    pub fn edges(&self) -> VertexEdgeIter<'a> {
        VertexEdgeIter::new(self.triangulation, self.id)
    }

    /// The triangles incident to this vertex, walked CCW around its
    /// one-ring neighborhood.
    pub fn triangles(&self) -> VertexTriangleIter<'a> {
        VertexTriangleIter::new(self.triangulation, self.id)
    }
}
