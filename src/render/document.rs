//! Root `svg` element

use std::path::Path as FsPath;

use super::Element;
use super::defaults;
use super::drawable::{Drawable, Item};
use super::group::{Composite, CompositeItem};
use super::svg::{MarkupOptions, to_markup};
use crate::errors::Result;

/// A complete SVG document: the root element and its top-level drawables
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    contents: CompositeItem,
}

impl Document {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            contents: CompositeItem::new(),
        }
    }

    pub fn add(&mut self, item: impl Into<Item>) {
        self.contents.add(item);
    }

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

    pub fn to_markup(&self, options: &MarkupOptions) -> Result<String> {
        to_markup(&self.element(), options)
    }

    /// Serialize and write to `path`, replacing any existing file
    pub fn save(&self, path: impl AsRef<FsPath>, options: &MarkupOptions) -> Result<()> {
        let markup = self.to_markup(options)?;
        crate::output::write(&markup, path)
    }
}

impl Composite for Document {
    fn container(&self) -> Element {
        Element::new("svg")
            .with_attr("xmlns", defaults::SVG_NS)
            .with_attr("xmlns:xlink", defaults::XLINK_NS)
            .with_attr("version", "1.1")
            .with_attr("width", self.width)
            .with_attr("height", self.height)
            .with_attr("viewBox", format_args!("0 0 {} {}", self.width, self.height))
    }

    fn contents(&self) -> &CompositeItem {
        &self.contents
    }
}

impl Drawable for Document {
    fn element(&self) -> Element {
        self.composite_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::shapes::Rectangle;

    #[test]
    fn root_carries_namespaces_and_size() {
        let e = Document::new(200.0, 100.0).element();
        assert_eq!(e.name(), "svg");
        assert_eq!(e.get("xmlns"), Some("http://www.w3.org/2000/svg"));
        assert_eq!(e.get("xmlns:xlink"), Some("http://www.w3.org/1999/xlink"));
        assert_eq!(e.get("viewBox"), Some("0 0 200 100"));
    }

    #[test]
    fn children_are_serialized_in_order() {
        let doc = Document::new(10.0, 10.0)
            .with(Rectangle::new(1.0, 2.0))
            .with(Rectangle::new(3.0, 4.0));
        let markup = doc.to_markup(&MarkupOptions::default()).unwrap();
        let first = markup.find(r#"width="1""#).unwrap();
        let second = markup.find(r#"width="3""#).unwrap();
        assert!(first < second);
        assert!(markup.ends_with("</svg>"));
    }
}
