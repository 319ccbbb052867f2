//! The advancing convex hull: a doubly linked list over point ids, plus an
//! angular hash used to jump close to a visible edge in O(1) instead of
//! walking the whole hull for every inserted point.

use crate::point::Point;
use crate::predicates::pseudo_angle;

/// Doubly linked hull plus its angular edge hash.
///
/// `next[i] == i` is the tombstone for "`i` has been removed from the
/// hull" — there is no separate liveness flag, by design: every vertex that
/// has ever been on the hull keeps a slot in these arrays for the lifetime
/// of one triangulation.
pub(crate) struct Hull {
    pub(crate) start: usize,
    pub(crate) prev: Vec<usize>,
    pub(crate) next: Vec<usize>,
    pub(crate) tri: Vec<usize>,
    hash: Vec<Option<usize>>,
    center: Point,
}

impl Hull {
    /// An empty hull with no reserved capacity, used as the placeholder
    /// before a [`crate::Triangulation`]'s first `update()` call and as the
    /// `serde` default (the hull is rebuilt by the next `update()`, not
    /// carried over the wire).
    pub(crate) fn empty() -> Self {
        Hull {
            start: 0,
            prev: Vec::new(),
            next: Vec::new(),
            tri: Vec::new(),
            hash: Vec::new(),
            center: Point::new(0.0, 0.0),
        }
    }

    pub(crate) fn new(n: usize, center: Point, i0: usize, i1: usize, i2: usize, points: &[Point]) -> Self {
        let mut hull = Hull {
            start: i0,
            prev: Vec::new(),
            next: Vec::new(),
            tri: Vec::new(),
            hash: Vec::new(),
            center,
        };
        hull.reset(n, center, i0, i1, i2, points);
        hull
    }

    /// Re-seeds the hull around a new seed triangle, growing the backing
    /// arrays to fit `n` points if they aren't already big enough. Reused
    /// across `update()` calls on the same [`crate::Triangulation`] so
    /// repeated relaxation passes over a stable point count allocate
    /// nothing after the first call.
    pub(crate) fn reset(&mut self, n: usize, center: Point, i0: usize, i1: usize, i2: usize, points: &[Point]) {
        let hash_len = (n as f64).sqrt().ceil().max(1.0) as usize;

        if self.prev.len() < n {
            self.prev.resize(n, 0);
            self.next.resize(n, 0);
            self.tri.resize(n, 0);
        }
        if self.hash.len() < hash_len {
            self.hash.resize(hash_len, None);
        }
        for slot in self.hash.iter_mut() {
            *slot = None;
        }

        self.start = i0;
        self.center = center;

        self.next[i0] = i1;
        self.prev[i2] = i1;
        self.next[i1] = i2;
        self.prev[i0] = i2;
        self.next[i2] = i0;
        self.prev[i1] = i0;

        self.tri[i0] = 0;
        self.tri[i1] = 1;
        self.tri[i2] = 2;

        self.hash_edge(points[i0], i0);
        self.hash_edge(points[i1], i1);
        self.hash_edge(points[i2], i2);
    }

    pub(crate) fn is_removed(&self, i: usize) -> bool {
        self.next[i] == i
    }

    pub(crate) fn remove(&mut self, i: usize) {
        self.next[i] = i;
    }

    /// Splices `i` into the hull immediately after `e` (i.e. between `e`
    /// and `e`'s current successor `n`).
    pub(crate) fn insert(&mut self, e: usize, i: usize, n: usize) {
        self.prev[i] = e;
        self.next[e] = i;
        self.prev[n] = i;
        self.next[i] = n;
        self.start = e;
    }

    fn hash_key(&self, p: Point) -> usize {
        let len = self.hash.len();
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        let bucket = (pseudo_angle(dx, dy) * len as f64).floor() as usize;
        bucket % len
    }

    pub(crate) fn hash_edge(&mut self, p: Point, i: usize) {
        let key = self.hash_key(p);
        self.hash[key] = Some(i);
    }

    /// Finds a hull edge `(e, next[e])` visible from `p` (i.e. `p` is to the
    /// left of it), starting the search from the angular hash bucket
    /// nearest `p`. Returns `(e, walked_back_to_start)`, or `None` if the
    /// forward walk cycled all the way back to its start without finding a
    /// visible edge — which only happens for a near-duplicate point.
    pub(crate) fn find_visible_edge(&self, p: Point, points: &[Point]) -> Option<(usize, bool)> {
        let key = self.hash_key(p);
        let len = self.hash.len();

        let mut start = None;
        for j in 0..len {
            let candidate = self.hash[(key + j) % len];
            if let Some(candidate) = candidate {
                if !self.is_removed(candidate) {
                    start = Some(candidate);
                    break;
                }
            }
        }
        let start = start?;
        let start = self.prev[start];
        let mut e = start;

        loop {
            let n = self.next[e];
            if p.is_ccw(points[e], points[n]) {
                break;
            }
            e = n;
            if e == start {
                return None;
            }
        }
        Some((e, e == start))
    }

    /// Rewrites the incident half-edge recorded for whichever live hull
    /// vertex currently points at `from` to `to`. Used by the legalizer
    /// when a flip touches a half-edge that sits on the hull.
    ///
    /// The scan is a closed walk of the linked list starting and ending at
    /// `start`; since `tri[v]` is maintained as an invariant for every live
    /// vertex `v`, the scan is guaranteed to find a match before it returns
    /// to `start`. A failure to find one indicates `tri` was left
    /// inconsistent elsewhere, so we assert loudly in debug builds instead
    /// of quietly leaving the caller's edge unlinked.
    pub(crate) fn rewrite_hull_tri(&mut self, from: usize, to: usize) {
        let mut v = self.start;
        loop {
            if self.tri[v] == from {
                self.tri[v] = to;
                return;
            }
            v = self.prev[v];
            if v == self.start {
                break;
            }
        }
        debug_assert!(
            false,
            "hull_tri scan failed to find half-edge {from}; hull invariant violated"
        );
    }
}
