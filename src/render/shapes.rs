//! Primitive shapes
//!
//! Each shape is anchored at a single point (`top_left`) and knows how to
//! produce its own element. Optional styling is set through consuming
//! builder methods; arbitrary extra attributes go through `attr` and are
//! merged onto the element last, so they can override anything above.

use std::fmt;

use super::defaults;
use super::drawable::Drawable;
use super::style::{Style, whole};
use super::{Attributes, Element};
use crate::types::Point;

/// A drawable positioned by one anchor point
pub trait SimpleItem: Sized {
    fn top_left(&self) -> Point;

    fn top_left_mut(&mut self) -> &mut Point;

    /// Replace the anchor
    fn move_to(mut self, point: Point) -> Self {
        *self.top_left_mut() = point;
        self
    }

    /// Shift the anchor by `vector`
    fn move_by(mut self, vector: Point) -> Self {
        *self.top_left_mut() += vector;
        self
    }
}

/// Implements `SimpleItem` and the `attr` builder for types with
/// `top_left` and `attributes` fields.
macro_rules! impl_simple_item {
    ($($ty:ty),*) => {
        $(
            impl $crate::render::shapes::SimpleItem for $ty {
                fn top_left(&self) -> $crate::types::Point { self.top_left }
                fn top_left_mut(&mut self) -> &mut $crate::types::Point { &mut self.top_left }
            }

            impl $ty {
                /// Extra attribute merged onto the element as-is
                pub fn attr(
                    mut self,
                    key: impl Into<String>,
                    value: impl Into<$crate::render::AttrValue>,
                ) -> Self {
                    self.attributes.insert(key, value);
                    self
                }

                pub fn attributes(&self) -> &$crate::render::Attributes {
                    &self.attributes
                }
            }
        )*
    };
}

pub(crate) use impl_simple_item;

impl_simple_item!(Rectangle, Line, Text, Circle, Image, Dimple);

/// `stroke-linecap` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

/// `text-anchor` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        })
    }
}

// ============================================================================
// Rectangle
// ============================================================================

/// A `rect`, anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    top_left: Point,
    pub width: f64,
    pub height: f64,
    stroke_width: f64,
    stroke: String,
    stroke_dasharray: Option<String>,
    rounded: bool,
    attributes: Attributes,
}

impl Rectangle {
    /// A `width` x `height` rectangle at the origin
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            top_left: Point::ORIGIN,
            width,
            height,
            stroke_width: defaults::STROKE_WIDTH,
            stroke: defaults::STROKE.to_string(),
            stroke_dasharray: None,
            rounded: false,
            attributes: Attributes::new(),
        }
    }

    /// Stroke width; rendered as a whole number
    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn stroke(mut self, color: impl Into<String>) -> Self {
        self.stroke = color.into();
        self
    }

    pub fn dasharray(mut self, pattern: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(pattern.into());
        self
    }

    /// Round the corners with a fixed radius
    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    /// Move so the centroid lands on `(x, y)`
    pub fn set_center(self, x: f64, y: f64) -> Self {
        let (w, h) = (self.width, self.height);
        self.move_to(Point::new(x - 0.5 * w, y - 0.5 * h))
    }

    pub fn center(&self) -> Point {
        self.top_left + Point::new(self.width, self.height).scale(0.5)
    }

    pub fn set_fill(&mut self, color: impl Into<String>) {
        self.attributes.insert("fill", color.into());
    }
}

impl Drawable for Rectangle {
    fn element(&self) -> Element {
        let style = Style::new()
            .set("stroke-width", whole(self.stroke_width))
            .set("stroke", &self.stroke)
            .set_opt("stroke-dasharray", self.stroke_dasharray.as_deref());

        let mut rect = Element::new("rect")
            .with_attr("x", self.top_left.x)
            .with_attr("y", self.top_left.y)
            .with_attr("width", self.width)
            .with_attr("height", self.height)
            .with_attr("style", style);
        if self.rounded {
            rect.set("rx", defaults::CORNER_RADIUS);
            rect.set("ry", defaults::CORNER_RADIUS);
        }
        rect.merge(&self.attributes);
        rect
    }
}

// ============================================================================
// Line
// ============================================================================

/// A straight `line`, stored as a start point and a displacement
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    top_left: Point,
    vector: Point,
    color: String,
    stroke_width: f64,
    linecap: LineCap,
    stroke_dasharray: Option<String>,
    attributes: Attributes,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            top_left: start,
            vector: end - start,
            color: defaults::STROKE.to_string(),
            stroke_width: defaults::STROKE_WIDTH,
            linecap: LineCap::default(),
            stroke_dasharray: None,
            attributes: Attributes::new(),
        }
    }

    /// A line running `length` units to the right of `start`
    pub fn horizontal(start: Point, length: f64) -> Self {
        Self::new(start, start + Point::new(length, 0.0))
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn linecap(mut self, linecap: LineCap) -> Self {
        self.linecap = linecap;
        self
    }

    pub fn dasharray(mut self, pattern: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(pattern.into());
        self
    }

    pub fn end(&self) -> Point {
        self.top_left + self.vector
    }

    /// Keep the start, point the line at `point`
    pub fn set_end(&mut self, point: Point) {
        self.vector = point - self.top_left;
    }

    pub fn vector(&self) -> Point {
        self.vector
    }
}

/// See [`Line::horizontal`]
pub fn horizontal_line(start: Point, length: f64) -> Line {
    Line::horizontal(start, length)
}

impl Drawable for Line {
    fn element(&self) -> Element {
        let style = Style::new()
            .set("stroke", &self.color)
            .set("stroke-width", whole(self.stroke_width))
            .set("stroke-linecap", self.linecap)
            .set_opt("stroke-dasharray", self.stroke_dasharray.as_deref());
        let end = self.end();

        let mut line = Element::new("line")
            .with_attr("x1", self.top_left.x)
            .with_attr("y1", self.top_left.y)
            .with_attr("x2", end.x)
            .with_attr("y2", end.y)
            .with_attr("style", style);
        line.merge(&self.attributes);
        line
    }
}

// ============================================================================
// Text
// ============================================================================

/// A `text` run positioned at its baseline start
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    text: String,
    top_left: Point,
    color: String,
    anchor: TextAnchor,
    size: f64,
    font_weight: String,
    font_family: Option<String>,
    angle: f64,
    attributes: Attributes,
}

impl Text {
    pub fn new(text: impl Into<String>, start: Point) -> Self {
        Self {
            text: text.into(),
            top_left: start,
            color: defaults::TEXT_COLOR.to_string(),
            anchor: TextAnchor::default(),
            size: defaults::FONT_SIZE,
            font_weight: defaults::FONT_WEIGHT.to_string(),
            font_family: None,
            angle: 0.0,
            attributes: Attributes::new(),
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Font size in points; rendered as a whole number
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = weight.into();
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Rotate about the text's own anchor. Replaces any earlier angle.
    pub fn rotate(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn content(&self) -> &str {
        &self.text
    }
}

impl Drawable for Text {
    fn element(&self) -> Element {
        let style = Style::new()
            .set("fill", &self.color)
            .set("text-anchor", self.anchor)
            .set("font-size", format_args!("{}pt", whole(self.size)))
            .set("font-weight", &self.font_weight)
            .set_opt("font-family", self.font_family.as_deref());

        let mut text = Element::new("text")
            .with_attr("x", self.top_left.x)
            .with_attr("y", self.top_left.y)
            .with_attr("style", style);
        text.set_text(self.text.as_str());
        if self.angle != 0.0 {
            text.set(
                "transform",
                format_args!(
                    "rotate({},{},{})",
                    whole(self.angle),
                    whole(self.top_left.x),
                    whole(self.top_left.y)
                ),
            );
        }
        text.merge(&self.attributes);
        text
    }
}

// ============================================================================
// Circle
// ============================================================================

/// A `circle`, anchored at the top-left of its bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    top_left: Point,
    pub radius: f64,
    attributes: Attributes,
}

impl Circle {
    pub fn new(start: Point, radius: f64) -> Self {
        Self {
            top_left: start,
            radius,
            attributes: Attributes::new(),
        }
    }

    pub fn center(&self) -> Point {
        self.top_left + Point::new(self.radius, self.radius)
    }

    /// Move so the center lands on `point`
    pub fn move_center_to(self, point: Point) -> Self {
        let r = self.radius;
        self.move_to(point - Point::new(r, r))
    }
}

impl Drawable for Circle {
    fn element(&self) -> Element {
        let center = self.center();
        let mut circle = Element::new("circle")
            .with_attr("cx", center.x)
            .with_attr("cy", center.y)
            .with_attr("r", self.radius);
        circle.merge(&self.attributes);
        circle
    }
}

// ============================================================================
// Image
// ============================================================================

/// An `image` referencing an external file
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    top_left: Point,
    file_name: String,
    pub width: f64,
    pub height: f64,
    attributes: Attributes,
}

impl Image {
    pub fn new(start: Point, file_name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            top_left: start,
            file_name: file_name.into(),
            width,
            height,
            attributes: Attributes::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Drawable for Image {
    fn element(&self) -> Element {
        let mut image = Element::new("image")
            .with_attr("xlink:href", &self.file_name)
            .with_attr("x", self.top_left.x)
            .with_attr("y", self.top_left.y)
            .with_attr("width", self.width)
            .with_attr("height", self.height);
        image.merge(&self.attributes);
        image
    }
}

// ============================================================================
// Dimple
// ============================================================================

/// A semicircular bump drawn as a `path`, from the top of the circle
/// around to the bottom. Coordinates are truncated to whole numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimple {
    top_left: Point,
    pub radius: f64,
    attributes: Attributes,
}

impl Dimple {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            top_left: center,
            radius,
            attributes: Attributes::new(),
        }
    }
}

impl Drawable for Dimple {
    fn element(&self) -> Element {
        let Point { x, y } = self.top_left;
        let r = self.radius;
        let d = format!(
            "M {} {} A {} {} 0 1 1 {} {}",
            whole(x),
            whole(y - r),
            whole(r),
            whole(r),
            whole(x),
            whole(y + r)
        );
        let mut path = Element::new("path").with_attr("d", d);
        path.merge(&self.attributes);
        path
    }
}
