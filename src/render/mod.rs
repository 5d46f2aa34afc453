//! Scene graph and element production.
//!
//! Drawables produce [`Element`] trees; [`svg`] turns a tree into markup
//! text.

pub mod defaults;
pub mod document;
pub mod drawable;
pub mod group;
pub mod path;
pub mod shapes;
pub mod style;
pub mod svg;

use std::fmt;

pub use document::Document;
pub use drawable::{Drawable, Item};
pub use group::{Composite, CompositeItem, GroupedDrawable};
pub use path::{Arc, Path, PathSegment, RelativeVector, Segment, arc, vector};
pub use shapes::{
    Circle, Dimple, Image, Line, LineCap, Rectangle, SimpleItem, Text, TextAnchor, horizontal_line,
};
pub use style::Style;
pub use svg::MarkupOptions;

/// A markup node: name, ordered attributes, optional text and children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder form of [`Element::set`]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.set(key, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute. An existing key keeps its position and takes the new value.
    pub fn set(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        let key = key.into();
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge caller-supplied attributes on top of what is already set
    pub fn merge(&mut self, extra: &Attributes) {
        for (key, value) in extra.iter() {
            self.set(key, value);
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Compact markup for this element and its subtree
    pub fn to_markup(&self) -> crate::Result<String> {
        svg::to_markup(self, &MarkupOptions::default())
    }
}

/// Value of a caller-supplied attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Number(n.into())
    }
}

/// Ordered string-keyed attribute map; inserting an existing key replaces its value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut e = Element::new("rect").with_attr("x", 1).with_attr("y", 2);
        e.set("x", 5);
        let attrs: Vec<_> = e.attributes().collect();
        assert_eq!(attrs, [("x", "5"), ("y", "2")]);
    }

    #[test]
    fn merge_appends_new_and_overrides_existing() {
        let mut e = Element::new("circle").with_attr("r", 3);
        let extra: Attributes = [("fill", AttrValue::from("red")), ("r", 4.5.into())]
            .into_iter()
            .collect();
        e.merge(&extra);
        assert_eq!(e.get("r"), Some("4.5"));
        assert_eq!(e.get("fill"), Some("red"));
        assert_eq!(e.attributes().count(), 2);
    }

    #[test]
    fn number_values_use_shortest_form() {
        assert_eq!(AttrValue::from(2).to_string(), "2");
        assert_eq!(AttrValue::from(0.25).to_string(), "0.25");
    }

    #[test]
    fn attributes_insert_keeps_first_position() {
        let mut a = Attributes::new();
        a.insert("a", 1);
        a.insert("b", 2);
        a.insert("a", "x");
        let keys: Vec<_> = a.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(a.get("a"), Some(&AttrValue::Text("x".into())));
        assert!(a.contains_key("b"));
        assert_eq!(a.len(), 2);
    }
}
