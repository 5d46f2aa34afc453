//! Compound paths built from relative segments

use enum_dispatch::enum_dispatch;

use super::drawable::Drawable;
use super::shapes::impl_simple_item;
use super::{Attributes, Element};
use crate::types::Point;

/// One fragment of path data
#[enum_dispatch]
pub trait PathSegment {
    fn specification(&self) -> String;
}

/// Relative line-to (`l dx,dy`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeVector {
    pub point: Point,
}

impl RelativeVector {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            point: Point::new(x, y),
        }
    }

    /// Multiply the offset by `factor`
    pub fn scale(mut self, factor: f64) -> Self {
        self.point = self.point.scale(factor);
        self
    }
}

impl PathSegment for RelativeVector {
    fn specification(&self) -> String {
        format!("l {} ", self.point.format())
    }
}

pub fn vector(x: f64, y: f64) -> RelativeVector {
    RelativeVector::new(x, y)
}

/// Relative elliptical arc (`a rx,ry, rot, large, sweep, dx,dy`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub rx: f64,
    pub ry: f64,
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub end_x: f64,
    pub end_y: f64,
}

impl PathSegment for Arc {
    fn specification(&self) -> String {
        format!(
            "a {:.6},{:.6}, {:.6}, {}, {}, {:.6},{:.6}",
            self.rx,
            self.ry,
            self.x_axis_rotation,
            u8::from(self.large_arc),
            u8::from(self.sweep),
            self.end_x,
            self.end_y
        )
    }
}

pub fn arc(
    rx: f64,
    ry: f64,
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
    end_x: f64,
    end_y: f64,
) -> Arc {
    Arc {
        rx,
        ry,
        x_axis_rotation,
        large_arc,
        sweep,
        end_x,
        end_y,
    }
}

#[enum_dispatch(PathSegment)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    RelativeVector(RelativeVector),
    Arc(Arc),
}

/// A `path` starting at an absolute point followed by relative segments.
///
/// Closed (`Z`) unless told otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    top_left: Point,
    segments: Vec<Segment>,
    closed: bool,
    attributes: Attributes,
}

impl_simple_item!(Path);

impl Path {
    pub fn new<S: Into<Segment>>(start: Point, segments: impl IntoIterator<Item = S>) -> Self {
        Self {
            top_left: start,
            segments: segments.into_iter().map(Into::into).collect(),
            closed: true,
            attributes: Attributes::new(),
        }
    }

    /// A path with no segments
    pub fn at(start: Point) -> Self {
        Self::new(start, Vec::<Segment>::new())
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The `d` attribute value
    pub fn data(&self) -> String {
        let mut d = format!("M {} ", self.top_left.format());
        for segment in &self.segments {
            d.push(' ');
            d.push_str(&segment.specification());
        }
        if self.closed {
            d.push_str(" Z");
        }
        d
    }
}

impl Drawable for Path {
    fn element(&self) -> Element {
        let mut path = Element::new("path").with_attr("d", self.data());
        path.merge(&self.attributes);
        // A `width` attribute also sets the stroke width; the merge above already
        // copied it verbatim. Both are emitted.
        if let Some(width) = self.attributes.get("width") {
            path.set("stroke-width", width);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::shapes::SimpleItem;

    #[test]
    fn vector_specification() {
        assert_eq!(vector(10.0, -2.5).specification(), "l 10,-2.5 ");
        assert_eq!(vector(1.0, 2.0).scale(3.0).specification(), "l 3,6 ");
    }

    #[test]
    fn arc_specification_uses_fixed_formatting() {
        let a = arc(5.0, 5.0, 0.0, false, true, 10.0, 0.0);
        assert_eq!(
            a.specification(),
            "a 5.000000,5.000000, 0.000000, 0, 1, 10.000000,0.000000"
        );
    }

    #[test]
    fn path_data_with_vectors() {
        let p = Path::new(Point::ORIGIN, [vector(10.0, 10.0), vector(-10.0, 0.0)]);
        assert_eq!(p.element().get("d"), Some("M 0,0  l 10,10  l -10,0  Z"));
    }

    #[test]
    fn open_path_has_no_close() {
        let p = Path::new(Point::new(1.0, 2.0), [vector(3.0, 0.0)]).closed(false);
        assert!(!p.is_closed());
        assert_eq!(p.data(), "M 1,2  l 3,0 ");
        assert!(Path::at(Point::ORIGIN).data().ends_with(" Z"));
    }

    #[test]
    fn mixed_segments_keep_order() {
        let segments: [Segment; 3] = [
            vector(1.0, 0.0).into(),
            arc(1.0, 1.0, 0.0, true, false, 0.0, 2.0).into(),
            vector(-1.0, 0.0).into(),
        ];
        let p = Path::new(Point::ORIGIN, segments);
        assert_eq!(p.segments().len(), 3);
        assert_eq!(
            p.data(),
            "M 0,0  l 1,0  a 1.000000,1.000000, 0.000000, 1, 0, 0.000000,2.000000 l -1,0  Z"
        );
    }

    #[test]
    fn width_attribute_doubles_as_stroke_width() {
        let e = Path::at(Point::ORIGIN)
            .attr("width", 2)
            .attr("fill", "none")
            .element();
        assert_eq!(e.get("width"), Some("2"));
        assert_eq!(e.get("stroke-width"), Some("2"));
        assert_eq!(e.get("fill"), Some("none"));

        let plain = Path::at(Point::ORIGIN).element();
        assert_eq!(plain.get("stroke-width"), None);
    }

    #[test]
    fn moving_changes_start_only() {
        let p = Path::new(Point::ORIGIN, [vector(1.0, 1.0)]).move_by(Point::new(5.0, 5.0));
        assert_eq!(p.data(), "M 5,5  l 1,1  Z");
    }
}
