//! Robust-ish geometric predicates used by the rest of the crate.
//!
//! `orient` is the one predicate that needs to be genuinely robust: the
//! sweep-hull loop and the legalizer both rely on it to classify points as
//! strictly left/right/on an edge, and an inconsistent answer there can
//! desync the hull linked list. `in_circle` is left as a plain determinant;
//! its occasional wrong answer near-degenerate only slows convergence of the
//! flip loop, it never corrupts the mesh.

use crate::point::Point;

/// 2^-52, the ULP of 1.0 for `f64`. Used both as the orientation error bound
/// scale and as the duplicate-point coordinate threshold.
pub(crate) const EPSILON: f64 = f64::EPSILON;

/// Shewchuk's forward error bound for the non-adaptive 2D orientation
/// determinant in double precision.
const ORIENT_ERROR_BOUND: f64 = 3.3306690738754716e-16;

/// Twice the signed area of triangle (p, r, q), or 0.0 if that can't be
/// determined to be non-zero within the error bound above.
#[inline]
fn orient_if_sure(px: f64, py: f64, rx: f64, ry: f64, qx: f64, qy: f64) -> f64 {
    let l = (ry - py) * (qx - px);
    let r = (rx - px) * (qy - py);
    if (l - r).abs() >= ORIENT_ERROR_BOUND * (l + r).abs() {
        l - r
    } else {
        0.0
    }
}

/// Tests whether `r -> q -> p` turns counter-clockwise.
///
/// Evaluated three times under cyclic rotation of the arguments so that the
/// result doesn't depend on which vertex of the triangle happens to be
/// passed first; the first rotation whose determinant clears the error
/// bound decides the sign.
pub(crate) fn orient(r: Point, q: Point, p: Point) -> bool {
    let mut o = orient_if_sure(p.x, p.y, r.x, r.y, q.x, q.y);
    if o == 0.0 {
        o = orient_if_sure(r.x, r.y, q.x, q.y, p.x, p.y);
    }
    if o == 0.0 {
        o = orient_if_sure(q.x, q.y, p.x, p.y, r.x, r.y);
    }
    o < 0.0
}

/// Tests whether `p` lies inside the circumcircle of `a`, `b`, `c`.
///
/// Only ever called after `orient` has already established `(a, b, c)` as a
/// valid counter-clockwise triangle, so a non-robust determinant is enough:
/// the flip loop converges to a globally-legal triangulation even if an
/// individual near-degenerate call here gets the sign wrong.
pub(crate) fn in_circle(a: Point, b: Point, c: Point, p: Point) -> bool {
    let dx = a.x - p.x;
    let dy = a.y - p.y;
    let ex = b.x - p.x;
    let ey = b.y - p.y;
    let fx = c.x - p.x;
    let fy = c.y - p.y;

    let ap = dx * dx + dy * dy;
    let bp = ex * ex + ey * ey;
    let cp = fx * fx + fy * fy;

    let det = dx * (ey * cp - bp * fy) - dy * (ex * cp - bp * fx) + ap * (ex * fy - ey * fx);
    det < 0.0
}

/// Squared distance between two points.
#[inline]
pub(crate) fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// The offset from `a` to the circumcenter of `a`, `b`, `c`.
#[inline]
fn circumdelta(a: Point, b: Point, c: Point) -> Point {
    let d = b.x - a.x;
    let dy = b.y - a.y;
    let e = c.x - a.x;
    let ey = c.y - a.y;

    let bl = d * d + dy * dy;
    let cl = e * e + ey * ey;
    let k = 0.5 / (d * ey - dy * e);

    Point {
        x: (ey * bl - dy * cl) * k,
        y: (d * cl - e * bl) * k,
    }
}

/// Squared circumradius of triangle (a, b, c); `+inf` if the three points
/// are collinear (the denominator in `circumdelta` is then zero).
pub(crate) fn circumradius_squared(a: Point, b: Point, c: Point) -> f64 {
    let d = circumdelta(a, b, c);
    d.x * d.x + d.y * d.y
}

/// Circumcenter of triangle (a, b, c).
pub(crate) fn circumcenter(a: Point, b: Point, c: Point) -> Point {
    let d = circumdelta(a, b, c);
    Point {
        x: a.x + d.x,
        y: a.y + d.y,
    }
}

/// A value in `[0, 1)` that increases monotonically with the true angle of
/// `(dx, dy)` without using trigonometry. Used only for hashing into
/// [`crate::hull::Hull`]'s angular buckets, never for exact comparisons.
#[inline]
pub(crate) fn pseudo_angle(dx: f64, dy: f64) -> f64 {
    let p = dx / (dx.abs() + dy.abs());
    (if dy > 0.0 { 3.0 - p } else { 1.0 + p }) / 4.0
}
