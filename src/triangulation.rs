//! Top-level orchestrator: seed search, the collinear fast path, the main
//! sweep-hull loop, and hull extraction.

use crate::error::TriangulationError;
use crate::hull::Hull;
use crate::legalize::legalize;
use crate::mesh::MeshStore;
use crate::point::Point;
use crate::predicates::{self, EPSILON};
use crate::sort::quicksort;

/// A Delaunay triangulation of a planar point set, held as a half-edge mesh.
///
/// Built once via [`Triangulation::new`] or [`Triangulation::from_coords`],
/// and cheaply rebuilt in place via [`Triangulation::update`] whenever the
/// backing coordinates change (the working arrays are sized once and reused,
/// so repeated relaxation passes over the same point count allocate
/// nothing after the first build).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangulation {
    points: Vec<Point>,

    /// `triangles[e]` is the point id half-edge `e` starts from.
    pub triangles: Vec<usize>,
    /// `half_edges[e]` is the twin of half-edge `e`, or `None` on the hull.
    pub half_edges: Vec<Option<usize>>,
    /// The convex hull of the input, in CCW order.
    pub hull: Vec<usize>,

    #[cfg_attr(feature = "serde", serde(skip, default = "MeshStore::empty"))]
    mesh: MeshStore,
    #[cfg_attr(feature = "serde", serde(skip, default = "Hull::empty"))]
    hull_state: Hull,
    ids: Vec<usize>,
    dists: Vec<f64>,
}

impl Triangulation {
    /// Builds a triangulation from points given as `(x, y)` pairs.
    pub fn new(points: &[Point]) -> Result<Self, TriangulationError> {
        Self::validate(points)?;

        let n = points.len();
        let max_triangles = (2 * n).saturating_sub(5);

        let mut t = Triangulation {
            points: points.to_vec(),
            triangles: Vec::new(),
            half_edges: Vec::new(),
            hull: Vec::new(),
            mesh: MeshStore::with_capacity(n),
            hull_state: Hull::empty(),
            ids: vec![0; n],
            dists: vec![0.0; n],
        };
        t.triangles.reserve(max_triangles * 3);
        t.half_edges.reserve(max_triangles * 3);

        t.update()?;
        Ok(t)
    }

    /// Builds a triangulation from a flat `[x0, y0, x1, y1, ...]` buffer.
    pub fn from_coords(coords: &[f64]) -> Result<Self, TriangulationError> {
        if coords.len() % 2 != 0 {
            return Err(TriangulationError::InvalidInput {
                index: coords.len() / 2,
            });
        }
        let points: Vec<Point> = coords.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect();
        Self::new(&points)
    }

    fn validate(points: &[Point]) -> Result<(), TriangulationError> {
        if points.len() < 3 {
            return Err(TriangulationError::InsufficientPoints { found: points.len() });
        }
        for (i, p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(TriangulationError::InvalidInput { index: i });
            }
        }
        Ok(())
    }

    /// Re-runs the build over the current coordinates in place. Call this
    /// after mutating the coordinates passed to [`Triangulation::new`]
    /// (via [`Triangulation::points_mut`]) to re-triangulate without
    /// reallocating the working arrays.
    pub fn update(&mut self) -> Result<(), TriangulationError> {
        Self::validate(&self.points)?;

        let n = self.points.len();
        let points = &self.points;

        for i in 0..n {
            self.ids[i] = i;
        }

        let (min_x, min_y, max_x, max_y) = bounding_box(points);
        let center = Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

        let i0 = nearest_point(points, center, false, |_| true).expect("n >= 3");
        let i1 = match nearest_point(points, points[i0], true, |j| j != i0) {
            Some(i1) => i1,
            // Every other point is an exact duplicate of i0: fewer than 2
            // distinct points, so no triangulation is defined.
            None => return Err(TriangulationError::InsufficientPoints { found: 1 }),
        };

        let mut min_radius = f64::INFINITY;
        let mut i2 = usize::MAX;
        for j in 0..n {
            if j == i0 || j == i1 {
                continue;
            }
            let r = predicates::circumradius_squared(points[i0], points[i1], points[j]);
            if r < min_radius {
                min_radius = r;
                i2 = j;
            }
        }

        if !min_radius.is_finite() {
            self.build_collinear_hull();
            return Ok(());
        }

        let (i0, i1, i2) = reorder_seed_ccw(points, i0, i1, i2);

        let seed_center = points[i0].circumcenter(points[i1], points[i2]);

        for i in 0..n {
            self.dists[i] = points[i].distance_squared(seed_center);
        }

        let last = n - 1;
        quicksort(&mut self.ids, &self.dists, 0, last);

        self.mesh.reset(n);
        self.hull_state.reset(n, seed_center, i0, i1, i2, points);
        let mesh = &mut self.mesh;
        let hull = &mut self.hull_state;

        mesh.add_triangle(i0, i1, i2, None, None, None);

        let mut prev_x = f64::NAN;
        let mut prev_y = f64::NAN;

        for k in 0..n {
            let i = self.ids[k];
            let p = points[i];

            if k > 0 && (p.x - prev_x).abs() <= EPSILON && (p.y - prev_y).abs() <= EPSILON {
                continue;
            }
            prev_x = p.x;
            prev_y = p.y;

            if i == i0 || i == i1 || i == i2 {
                continue;
            }

            let (mut e, walked_to_start) = match hull.find_visible_edge(p, points) {
                Some(found) => found,
                None => continue,
            };

            let t = mesh.add_triangle(e, i, hull.next[e], None, None, Some(hull.tri[e]));
            hull.tri[i] = legalize(mesh, hull, points, t + 2);
            hull.tri[e] = t;

            let mut n_walk = hull.next[e];
            loop {
                let q = hull.next[n_walk];
                if !p.is_ccw(points[n_walk], points[q]) {
                    break;
                }
                let t = mesh.add_triangle(n_walk, i, q, Some(hull.tri[i]), None, Some(hull.tri[n_walk]));
                hull.tri[i] = legalize(mesh, hull, points, t + 2);
                hull.remove(n_walk);
                n_walk = q;
            }

            if walked_to_start {
                loop {
                    let q = hull.prev[e];
                    if !p.is_ccw(points[q], points[e]) {
                        break;
                    }
                    let t = mesh.add_triangle(q, i, e, None, Some(hull.tri[e]), Some(hull.tri[q]));
                    legalize(mesh, hull, points, t + 2);
                    hull.tri[q] = t;
                    hull.remove(e);
                    e = q;
                }
            }

            hull.insert(e, i, n_walk);
            hull.hash_edge(p, i);
            hull.hash_edge(points[e], e);
        }

        self.hull.clear();
        let mut e = hull.start;
        loop {
            self.hull.push(e);
            e = hull.next[e];
            if e == hull.start {
                break;
            }
        }

        self.triangles.clear();
        self.triangles.extend_from_slice(self.mesh.triangles());
        self.half_edges.clear();
        self.half_edges.extend_from_slice(self.mesh.halfedges());

        Ok(())
    }

    fn build_collinear_hull(&mut self) {
        let points = &self.points;
        let n = points.len();

        for i in 0..n {
            let dx = points[i].x - points[0].x;
            self.dists[i] = if dx != 0.0 { dx } else { points[i].y - points[0].y };
        }

        let last = n - 1;
        quicksort(&mut self.ids, &self.dists, 0, last);

        self.hull.clear();
        let mut prev_dist = f64::NEG_INFINITY;
        for &i in self.ids.iter() {
            if self.dists[i] > prev_dist {
                self.hull.push(i);
                prev_dist = self.dists[i];
            }
        }

        self.triangles.clear();
        self.half_edges.clear();
    }

    /// Mutable access to the backing coordinates, for relaxation-style
    /// algorithms that perturb points and call [`Triangulation::update`].
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of triangles in the mesh.
    pub fn num_triangles(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Iterates over the mesh's triangles.
    pub fn iter_triangles(&self) -> crate::iter::Triangles<'_> {
        crate::iter::Triangles::new(self)
    }

    /// Iterates over the mesh's half-edges.
    pub fn iter_half_edges(&self) -> crate::iter::HalfEdges<'_> {
        crate::iter::HalfEdges::new(self)
    }

    /// The triangle `t`, or `None` if `t >= num_triangles()`.
    pub fn get_triangle(&self, t: usize) -> Option<crate::elem::Triangle<'_>> {
        if t < self.num_triangles() {
            Some(crate::elem::Triangle { triangulation: self, index: t })
        } else {
            None
        }
    }

    /// The half-edge `e`, or `None` if `e >= triangles.len()`.
    pub fn get_half_edge(&self, e: usize) -> Option<crate::elem::HalfEdge<'_>> {
        if e < self.triangles.len() {
            Some(crate::elem::HalfEdge { triangulation: self, index: e })
        } else {
            None
        }
    }

    /// The vertex with point id `id`, or `None` if out of range.
    pub fn get_vertex(&self, id: usize) -> Option<crate::elem::Vertex<'_>> {
        if id < self.points.len() {
            Some(crate::elem::Vertex { triangulation: self, id })
        } else {
            None
        }
    }
}

fn bounding_box(points: &[Point]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    (min_x, min_y, max_x, max_y)
}

/// Finds the point minimizing squared distance to `target` among points
/// satisfying `filter`, breaking ties toward the lowest id. When
/// `require_positive` is set, zero-distance matches are skipped (spec's i1
/// search requires d > 0, to skip exact duplicates of the already-chosen
/// i0); the bbox-center search for i0 itself has no such restriction.
fn nearest_point(
    points: &[Point],
    target: Point,
    require_positive: bool,
    filter: impl Fn(usize) -> bool,
) -> Option<usize> {
    let mut best = None;
    let mut best_dist = f64::INFINITY;
    for (i, p) in points.iter().enumerate() {
        if !filter(i) {
            continue;
        }
        let d = p.distance_squared(target);
        if (d > 0.0 || !require_positive) && d < best_dist {
            best_dist = d;
            best = Some(i);
        }
    }
    best
}

/// Orders the seed triangle CCW, swapping i1/i2 (never i0, which is fixed by
/// the bbox-center search) if the raw search result is CW.
fn reorder_seed_ccw(points: &[Point], i0: usize, i1: usize, i2: usize) -> (usize, usize, usize) {
    if points[i0].is_ccw(points[i1], points[i2]) {
        (i0, i1, i2)
    } else {
        (i0, i2, i1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pts(coords: &[f64]) -> Vec<Point> {
        coords.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect()
    }

    fn check_involution(t: &Triangulation) {
        for (e, &opp) in t.half_edges.iter().enumerate() {
            if let Some(opp) = opp {
                assert_eq!(t.half_edges[opp], Some(e));
            }
        }
    }

    #[test]
    fn rejects_too_few_points() {
        let err = Triangulation::new(&pts(&[0.0, 0.0, 1.0, 0.0])).unwrap_err();
        assert_eq!(err, TriangulationError::InsufficientPoints { found: 2 });
    }

    #[test]
    fn rejects_non_finite_coordinate() {
        let points = pts(&[0.0, 0.0, 1.0, 0.0, f64::NAN, 1.0]);
        let err = Triangulation::new(&points).unwrap_err();
        assert_eq!(err, TriangulationError::InvalidInput { index: 2 });
    }

    #[test]
    fn unit_square_has_two_triangles() {
        let points = pts(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
        let t = Triangulation::new(&points).unwrap();
        assert_eq!(t.num_triangles(), 2);
        assert_eq!(t.hull.len(), 4);
        check_involution(&t);
    }

    #[test]
    fn all_collinear_has_no_triangles() {
        let points = pts(&[0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        let t = Triangulation::new(&points).unwrap();
        assert_eq!(t.triangles.len(), 0);
        assert_eq!(t.half_edges.len(), 0);
        assert_eq!(t.hull, vec![0, 1, 2, 3]);
    }

    #[test]
    fn five_point_scenario_matches_expected_counts() {
        let points = pts(&[19.0, 93.0, 1.0, 64.0, 23.0, 93.0, 192.0, 43.0, 14.0, 2.0]);
        let t = Triangulation::new(&points).unwrap();
        assert_eq!(t.num_triangles(), 4);
        assert_eq!(t.hull.len(), 5);
        check_involution(&t);
    }

    #[test]
    fn update_after_moving_a_point_is_consistent() {
        let points = pts(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0, 5.0, 5.0]);
        let mut t = Triangulation::new(&points).unwrap();
        check_involution(&t);
        t.points_mut()[4] = Point::new(5.0, 4.0);
        t.update().unwrap();
        check_involution(&t);
    }

    #[test]
    fn read_api_walks_a_triangle() {
        let points = pts(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
        let t = Triangulation::new(&points).unwrap();
        let tri = t.get_triangle(0).unwrap();
        let edges: Vec<_> = tri.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].left().id(), 0);
        assert_eq!(edges[0].next().id(), edges[1].id());
        assert_eq!(edges[0].prev().id(), edges[2].id());
        assert_eq!(tri.ab().id(), edges[0].id());
        assert_eq!(tri.bc().id(), edges[1].id());
        assert_eq!(tri.ca().id(), edges[2].id());
        assert_eq!(tri.a().id(), edges[0].start().id());
        assert_eq!(tri.id(), 0);
        assert_eq!(t.iter_triangles().count(), t.num_triangles());
        assert_eq!(t.iter_half_edges().count(), t.triangles.len());
    }

    #[test]
    fn vertex_one_ring_matches_incident_triangles() {
        let points = pts(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0, 5.0, 5.0]);
        let t = Triangulation::new(&points).unwrap();
        // Vertex 4 is the interior point: its one-ring is a closed cycle
        // touching every triangle (the unit square split into 4 around it).
        let centre = t.get_vertex(4).unwrap();
        let edges: Vec<_> = centre.edges().collect();
        let triangles: Vec<_> = centre.triangles().collect();
        assert_eq!(edges.len(), triangles.len());
        assert_eq!(edges.len(), t.num_triangles());
        for e in &edges {
            assert_eq!(e.start().id(), 4);
        }

        // Vertex 0 sits on the hull: its one-ring can't be a closed cycle,
        // so it must be bounded by a hull edge on each side.
        let corner = t.get_vertex(0).unwrap();
        let ring: Vec<_> = corner.edges().collect();
        assert!(!ring.is_empty());
        assert!(ring.first().unwrap().is_hull_edge());
        assert!(ring.last().unwrap().prev().is_hull_edge());
    }

    #[test]
    fn every_triangle_is_wound_ccw() {
        let points = pts(&[
            0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0, 3.0, 4.0, 6.0, 2.0, 8.0, 7.0, 2.0, 8.0,
        ]);
        let t = Triangulation::new(&points).unwrap();
        for tri in t.triangles.chunks_exact(3) {
            let a = t.points[tri[0]];
            let b = t.points[tri[1]];
            let c = t.points[tri[2]];
            assert!(a.is_ccw(b, c), "triangle {:?} not CCW", tri);
        }
    }
}
