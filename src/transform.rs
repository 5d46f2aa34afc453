//! Affine transforms applied to groups.
//!
//! Each transform renders to SVG `transform` attribute syntax and can map a
//! point through itself.
//!
//! `Rotation::transform` rotates about the coordinate-system origin and
//! ignores `Rotation::origin`, while `text()` and `as_matrix()` pivot about
//! it. Positions computed through `GroupedDrawable::location_of` therefore
//! only match the rendered output for rotations about `(0,0)`. Use
//! `as_matrix()` when the pivot matters.

use enum_dispatch::enum_dispatch;
use glam::{DAffine2, DVec2};

use crate::types::Point;

/// An atomic SVG transformation
#[enum_dispatch]
pub trait Transform {
    /// SVG transform descriptor, e.g. `translate(1.000000,2.000000)`
    fn text(&self) -> String;

    /// Map a point through this transform
    fn transform(&self, point: Point) -> Point;

    /// The affine matrix matching `text()`
    fn as_matrix(&self) -> DAffine2;
}

/// Translation by a fixed vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation {
    pub vector: Point,
}

impl Translation {
    pub fn new(vector: Point) -> Self {
        Self { vector }
    }
}

impl Transform for Translation {
    fn text(&self) -> String {
        let (x, y) = self.vector.cartesian_coordinates();
        format!("translate({x:.6},{y:.6})")
    }

    fn transform(&self, point: Point) -> Point {
        point + self.vector
    }

    fn as_matrix(&self) -> DAffine2 {
        DAffine2::from_translation(self.vector.to_vec())
    }
}

/// Rotation by `angle` degrees; `origin` is the pivot written to the descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub angle: f64,
    pub origin: Point,
}

impl Rotation {
    pub fn new(angle: f64) -> Self {
        Self::about(angle, Point::ORIGIN)
    }

    pub fn about(angle: f64, origin: Point) -> Self {
        Self { angle, origin }
    }
}

impl Transform for Rotation {
    fn text(&self) -> String {
        format!(
            "rotate({:.6},{:.6},{:.6})",
            self.angle, self.origin.x, self.origin.y
        )
    }

    fn transform(&self, point: Point) -> Point {
        // Pivot is always (0,0) here, regardless of `origin`.
        DVec2::from_angle(self.angle.to_radians())
            .rotate(point.to_vec())
            .into()
    }

    fn as_matrix(&self) -> DAffine2 {
        let pivot = self.origin.to_vec();
        DAffine2::from_translation(pivot)
            * DAffine2::from_angle(self.angle.to_radians())
            * DAffine2::from_translation(-pivot)
    }
}

/// Any transform a group can carry
#[enum_dispatch(Transform)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    Translation(Translation),
    Rotation(Rotation),
}
