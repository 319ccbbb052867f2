//! Optional interop with the [`mint`] crate's neutral math types, enabled by
//! the `mint` feature.

use crate::point::Point;

impl From<mint::Point2<f64>> for Point {
    fn from(p: mint::Point2<f64>) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<Point> for mint::Point2<f64> {
    fn from(p: Point) -> Self {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips_through_mint() {
        let p = Point::new(1.5, -2.25);
        let m: mint::Point2<f64> = p.into();
        let back: Point = m.into();
        assert_eq!(p, back);
    }
}
