//! The `Drawable` capability and the closed set of things that implement it

use enum_dispatch::enum_dispatch;

use super::Element;
use super::group::GroupedDrawable;
use super::path::Path;
use super::shapes::{Circle, Dimple, Image, Line, Rectangle, Text};

/// Anything that can produce one markup element
#[enum_dispatch]
pub trait Drawable {
    fn element(&self) -> Element;
}

/// Any drawable that can live inside a group or document
#[enum_dispatch(Drawable)]
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Rectangle(Rectangle),
    Line(Line),
    Circle(Circle),
    Text(Text),
    Image(Image),
    Dimple(Dimple),
    Path(Path),
    Group(GroupedDrawable),
}
