//! Markup serialization of element trees

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::Element;
use crate::errors::{Error, Result};

/// Serialization settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkupOptions {
    /// Spaces per nesting level; `None` writes everything on one line
    pub indent: Option<usize>,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` first
    pub declaration: bool,
}

impl MarkupOptions {
    /// Indented output with an XML declaration, suitable for files
    pub fn pretty() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }
}

/// Serialize `element` and its subtree to markup text.
///
/// Attribute values and text content are XML-escaped.
pub fn to_markup(element: &Element, options: &MarkupOptions) -> Result<String> {
    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
        None => Writer::new(Vec::new()),
    };

    if options.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(Error::markup)?;
    }

    write_element(&mut writer, element)?;

    let bytes = writer.into_inner();
    crate::log::trace!(root = element.name(), bytes = bytes.len(), "serialized markup");
    String::from_utf8(bytes).map_err(Error::markup)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for attr in element.attributes() {
        start.push_attribute(attr);
    }

    if element.text().is_none() && element.children().is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(Error::markup);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(Error::markup)?;
    if let Some(text) = element.text() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(Error::markup)?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(Error::markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn childless_element_is_self_closing() {
        let e = Element::new("rect").with_attr("x", 1).with_attr("y", 2);
        assert_eq!(e.to_markup().unwrap(), r#"<rect x="1" y="2"/>"#);
    }

    #[test]
    fn children_nest_in_order() {
        let mut g = Element::new("g");
        g.append(Element::new("circle").with_attr("r", 1));
        g.append(Element::new("line"));
        assert_eq!(g.to_markup().unwrap(), r#"<g><circle r="1"/><line/></g>"#);
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let mut t = Element::new("text").with_attr("data-note", "a<b");
        t.set_text("x & y");
        assert_eq!(
            t.to_markup().unwrap(),
            r#"<text data-note="a&lt;b">x &amp; y</text>"#
        );
    }

    #[test]
    fn declaration_is_optional() {
        let options = MarkupOptions {
            indent: None,
            declaration: true,
        };
        let out = to_markup(&Element::new("svg"), &options).unwrap();
        assert!(out.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(out.ends_with("<svg/>"));
    }

    #[test]
    fn pretty_output_indents_children() {
        let mut g = Element::new("g");
        g.append(Element::new("rect"));
        let out = to_markup(&g, &MarkupOptions::pretty()).unwrap();
        assert!(out.contains("\n  <rect/>"), "{out}");
    }
}
