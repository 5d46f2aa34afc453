//! Coordinate value type.
//!
//! `Point` is a plain `Copy` value; every operation returns a new point.
//! Conversions to `glam::DVec2` are provided for the transform math.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

/// A 2D coordinate in user units
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Componentwise sum
    pub fn add(self, other: Point) -> Point {
        self + other
    }

    /// Componentwise difference
    pub fn subtract(self, other: Point) -> Point {
        self - other
    }

    /// Multiply both coordinates by `factor`
    pub fn scale(self, factor: f64) -> Point {
        self * factor
    }

    /// `"x,y"` using the shortest float representation (`1.0` prints as `1`)
    pub fn format(&self) -> String {
        format!("{},{}", self.x, self.y)
    }

    pub fn cartesian_coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[inline]
    pub fn to_vec(self) -> DVec2 {
        dvec2(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.to_vec()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.to_vec().abs_diff_eq(b.to_vec(), 1e-9)
    }

    #[test]
    fn format_drops_trailing_zero() {
        assert_eq!(Point::new(1.0, 2.0).format(), "1,2");
        assert_eq!(Point::new(-0.5, 3.25).format(), "-0.5,3.25");
        assert_eq!(Point::new(1.0, 2.0).to_string(), "1,2");
    }

    #[test]
    fn add_then_subtract_is_identity() {
        let samples = [
            (Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            (Point::new(3.5, -2.25), Point::new(-7.0, 0.125)),
            (Point::new(1e6, -1e-6), Point::new(0.1, 0.2)),
        ];
        for (p, q) in samples {
            assert!(close(p.add(q).subtract(q), p), "{p:?} {q:?}");
        }
    }

    #[test]
    fn scale_is_invertible() {
        let p = Point::new(3.0, -4.5);
        for s in [2.0, 0.5, -3.0, 7.25] {
            assert!(close(p.scale(s).scale(1.0 / s), p));
        }
    }

    #[test]
    fn operators_match_named_methods() {
        let p = Point::new(1.0, 2.0);
        let q = Point::new(10.0, 20.0);
        assert_eq!(p + q, p.add(q));
        assert_eq!(q - p, q.subtract(p));
        assert_eq!(p * 3.0, p.scale(3.0));
        assert_eq!(-p, Point::new(-1.0, -2.0));

        let mut r = p;
        r += q;
        assert_eq!(r, Point::new(11.0, 22.0));
    }

    #[test]
    fn glam_round_trip() {
        let p = Point::new(4.0, 5.0);
        let v: DVec2 = p.into();
        assert_eq!(Point::from(v), p);
        assert_eq!(p.cartesian_coordinates(), (4.0, 5.0));
    }
}
