//! Containers: a child list plus a wrapping element

use super::Element;
use super::defaults;
use super::drawable::{Drawable, Item};
use crate::transform::{Rotation, Transform, TransformOp, Translation};
use crate::types::Point;

/// Ordered list of child drawables. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeItem {
    children: Vec<Item>,
}

impl CompositeItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: impl Into<Item>) {
        self.children.push(item.into());
    }

    pub fn children(&self) -> &[Item] {
        &self.children
    }

    /// Drop every child
    pub fn empty(&mut self) {
        self.children.clear();
    }
}

/// A drawable made of a wrapper element around its children's elements
pub trait Composite {
    /// The wrapper element, without children
    fn container(&self) -> Element;

    fn contents(&self) -> &CompositeItem;

    /// Wrapper with each child's element appended in insertion order
    fn composite_element(&self) -> Element {
        let mut element = self.container();
        for child in self.contents().children() {
            element.append(child.element());
        }
        element
    }
}

/// A `g` element applying transforms and opacity to its children
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedDrawable {
    contents: CompositeItem,
    transformations: Vec<TransformOp>,
    opacity: u32,
}

impl Default for GroupedDrawable {
    fn default() -> Self {
        Self::with_opacity(defaults::OPACITY)
    }
}

impl GroupedDrawable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `opacity` is an integer percentage; 100 is fully opaque
    pub fn with_opacity(opacity: u32) -> Self {
        Self {
            contents: CompositeItem::new(),
            transformations: Vec::new(),
            opacity,
        }
    }

    pub fn add(&mut self, item: impl Into<Item>) {
        self.contents.add(item);
    }

    /// Builder form of [`GroupedDrawable::add`]
    pub fn with(mut self, item: impl Into<Item>) -> Self {
        self.add(item);
        self
    }

    pub fn children(&self) -> &[Item] {
        self.contents.children()
    }

    pub fn empty(&mut self) {
        self.contents.empty();
    }

    pub fn opacity(&self) -> u32 {
        self.opacity
    }

    pub fn transformations(&self) -> &[TransformOp] {
        &self.transformations
    }

    /// Append a rotation about `(0,0)`
    pub fn rotate(self, angle: f64) -> Self {
        self.rotate_about(angle, Point::ORIGIN)
    }

    /// Append a rotation whose descriptor pivots about `origin`
    pub fn rotate_about(mut self, angle: f64, origin: Point) -> Self {
        self.transformations.push(Rotation::about(angle, origin).into());
        self
    }

    /// Append a translation by `point`. Earlier transforms are kept.
    pub fn move_to(mut self, point: Point) -> Self {
        self.transformations.push(Translation::new(point).into());
        self
    }

    /// Space-joined descriptors of every transform, in order
    pub fn transformation(&self) -> String {
        self.transformations
            .iter()
            .map(|t| t.text())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Where `point` ends up after every transform, applied first to last
    pub fn location_of(&self, point: Point) -> Point {
        self.transformations
            .iter()
            .fold(point, |p, t| t.transform(p))
    }
}

impl Composite for GroupedDrawable {
    fn container(&self) -> Element {
        let mut group = Element::new("g");
        if !self.transformations.is_empty() {
            group.set("transform", self.transformation());
        }
        if self.opacity != defaults::OPACITY {
            group.set("opacity", self.opacity);
        }
        group
    }

    fn contents(&self) -> &CompositeItem {
        &self.contents
    }
}

impl Drawable for GroupedDrawable {
    fn element(&self) -> Element {
        self.composite_element()
    }
}
