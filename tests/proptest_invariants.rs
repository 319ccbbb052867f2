use proptest::prelude::*;
use sweephull::{Point, Triangulation};

fn arb_points(min: usize, max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), min..=max)
        .prop_map(|coords| coords.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

proptest! {
    /// Invariant 1: half-edge involution.
    #[test]
    fn half_edges_are_involutions(points in arb_points(3, 120)) {
        if let Ok(t) = Triangulation::new(&points) {
            for (e, &opp) in t.half_edges.iter().enumerate() {
                if let Some(opp) = opp {
                    prop_assert_eq!(t.half_edges[opp], Some(e));
                }
            }
        }
    }

    /// Invariant 3: every triangle is wound CCW.
    #[test]
    fn triangles_are_wound_ccw(points in arb_points(3, 120)) {
        if let Ok(t) = Triangulation::new(&points) {
            for tri in t.triangles.chunks_exact(3) {
                let a = t.points()[tri[0]];
                let b = t.points()[tri[1]];
                let c = t.points()[tri[2]];
                // Skip triangles whose three points are (numerically)
                // collinear; orientation is meaningless there.
                if a.circumradius_squared(b, c).is_finite() {
                    prop_assert!(a.is_ccw(b, c));
                }
            }
        }
    }

    /// Invariant 4: hull convexity — consecutive turns keep a consistent sign.
    #[test]
    fn hull_is_convex(points in arb_points(4, 120)) {
        if let Ok(t) = Triangulation::new(&points) {
            let h = &t.hull;
            if h.len() >= 3 {
                for i in 0..h.len() {
                    let a = t.points()[h[i]];
                    let b = t.points()[h[(i + 1) % h.len()]];
                    let c = t.points()[h[(i + 2) % h.len()]];
                    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
                    prop_assert!(cross >= -1e-6, "hull turn at {i} is reflex: cross = {cross}");
                }
            }
        }
    }

    /// Invariant 7: update() without mutating coordinates is idempotent.
    #[test]
    fn update_without_mutation_is_idempotent(points in arb_points(3, 80)) {
        if let Ok(mut t) = Triangulation::new(&points) {
            let triangles_before = t.triangles.clone();
            let half_edges_before = t.half_edges.clone();
            let hull_before = t.hull.clone();
            t.update().unwrap();
            prop_assert_eq!(t.triangles, triangles_before);
            prop_assert_eq!(t.half_edges, half_edges_before);
            prop_assert_eq!(t.hull, hull_before);
        }
    }
}
