//! Iterative edge-flip propagation ("legalization") that restores the local
//! Delaunay property after a point insertion.
//!
//! A direct translation of Delaunator's own flip loop: recursion here would
//! put stack depth proportional to the number of flips triggered by a
//! single insertion, which is unbounded in the worst case. The loop instead
//! keeps going with the same half-edge after a flip (the newly formed
//! triangle on that side may itself now be illegal against its further
//! neighbor) and stashes the *other* newly formed edge on a fixed-capacity
//! stack to revisit once the first side settles.

use crate::hull::Hull;
use crate::mesh::MeshStore;
use crate::point::Point;
use crate::predicates::in_circle;

const EDGE_STACK_CAPACITY: usize = 512;

/// Legalizes starting from half-edge `start_edge`, whose triangle was just
/// created. Returns the "outer" half-edge the caller should record as the
/// new hull-incident edge for the point that triggered this call.
pub(crate) fn legalize(
    mesh: &mut MeshStore,
    hull: &mut Hull,
    points: &[Point],
    start_edge: usize,
) -> usize {
    let mut stack = [0usize; EDGE_STACK_CAPACITY];
    let mut stack_len = 0usize;
    let mut a = start_edge;

    loop {
        let a0 = a - a % 3;
        let ar = a0 + (a + 2) % 3;

        let b = match mesh.halfedges[a] {
            Some(b) => b,
            None => {
                // `a` is a hull edge: nothing to flip against.
                if stack_len == 0 {
                    return ar;
                }
                stack_len -= 1;
                a = stack[stack_len];
                continue;
            }
        };

        let b0 = b - b % 3;
        let al = a0 + (a + 1) % 3;
        let bl = b0 + (b + 2) % 3;

        let p0 = mesh.triangles[ar];
        let pr = mesh.triangles[a];
        let pl = mesh.triangles[al];
        let p1 = mesh.triangles[bl];

        let illegal = in_circle(points[p0], points[pr], points[pl], points[p1]);

        if !illegal {
            if stack_len == 0 {
                return ar;
            }
            stack_len -= 1;
            a = stack[stack_len];
            continue;
        }

        // Flip the shared edge of triangles (a0..) and (b0..).
        mesh.triangles[a] = p1;
        mesh.triangles[b] = p0;

        let hbl = mesh.halfedges[bl];
        let har = mesh.halfedges[ar];

        // `bl` was a hull edge; the flip moves it onto `a`, so the hull's
        // record of which half-edge is incident to that vertex must move
        // too.
        if hbl.is_none() {
            hull.rewrite_hull_tri(bl, a);
        }

        mesh.link(a, hbl);
        mesh.link(b, har);
        mesh.link(ar, Some(bl));

        let br = b0 + (b + 1) % 3;
        if stack_len < EDGE_STACK_CAPACITY {
            stack[stack_len] = br;
            stack_len += 1;
        }
        // Silently drop `br` on overflow: only reachable on pathological
        // inputs, and subsequent insertions re-establish legality.

        // Keep propagating from `a`; `br` waits on the stack.
    }
}
