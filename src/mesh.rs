//! Append-only triangle/half-edge storage.
//!
//! `triangles[e]` is the point id the half-edge `e` starts from;
//! `halfedges[e]` is the id of its twin, or `None` if `e` sits on the
//! convex hull. Triangle `t` always occupies half-edges `3t, 3t+1, 3t+2` in
//! CCW winding order.

#[inline]
pub(crate) fn next_halfedge(e: usize) -> usize {
    if e % 3 == 2 {
        e - 2
    } else {
        e + 1
    }
}

#[inline]
pub(crate) fn prev_halfedge(e: usize) -> usize {
    if e % 3 == 0 {
        e + 2
    } else {
        e - 1
    }
}

pub(crate) struct MeshStore {
    pub(crate) triangles: Vec<usize>,
    pub(crate) halfedges: Vec<Option<usize>>,
    len: usize,
}

impl MeshStore {
    /// Preallocates for the maximum possible triangle count of an
    /// `n`-point triangulation, `3 * max(2n - 5, 0)` half-edges.
    pub(crate) fn with_capacity(n: usize) -> Self {
        let mut mesh = MeshStore { triangles: Vec::new(), halfedges: Vec::new(), len: 0 };
        mesh.reset(n);
        mesh
    }

    /// An empty store with no reserved capacity, used as the `serde`
    /// default when deserializing a [`crate::Triangulation`] (the mesh
    /// itself is rebuilt by the next `update()`, not carried over the wire).
    pub(crate) fn empty() -> Self {
        MeshStore::with_capacity(0)
    }

    /// Rewinds the store to empty, growing the backing arrays to fit an
    /// `n`-point triangulation if they aren't already big enough. Reused
    /// across `update()` calls on the same [`crate::Triangulation`] so
    /// repeated relaxation passes over a stable point count allocate
    /// nothing after the first call.
    pub(crate) fn reset(&mut self, n: usize) {
        let max_triangles = (2 * n).saturating_sub(5);
        let capacity = max_triangles * 3;
        if self.triangles.len() < capacity {
            self.triangles.resize(capacity, 0);
            self.halfedges.resize(capacity, None);
        }
        self.len = 0;
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn triangles(&self) -> &[usize] {
        &self.triangles[..self.len]
    }

    pub(crate) fn halfedges(&self) -> &[Option<usize>] {
        &self.halfedges[..self.len]
    }

    /// Links half-edge `e` to `opp` as mutual twins (or detaches it if
    /// `opp` is `None`).
    pub(crate) fn link(&mut self, e: usize, opp: Option<usize>) {
        self.halfedges[e] = opp;
        if let Some(opp) = opp {
            self.halfedges[opp] = Some(e);
        }
    }

    /// Appends one CCW triangle `(i0, i1, i2)` whose three edges are
    /// twinned with `a`, `b`, `c` respectively, and returns the half-edge
    /// id of its first edge.
    pub(crate) fn add_triangle(
        &mut self,
        i0: usize,
        i1: usize,
        i2: usize,
        a: Option<usize>,
        b: Option<usize>,
        c: Option<usize>,
    ) -> usize {
        let t = self.len;

        self.triangles[t] = i0;
        self.triangles[t + 1] = i1;
        self.triangles[t + 2] = i2;

        self.link(t, a);
        self.link(t + 1, b);
        self.link(t + 2, c);

        self.len += 3;
        t
    }
}
