//! Build SVG documents from Rust values.
//!
//! Shapes, paths and groups form an in-memory scene graph. Every node can
//! produce an [`Element`]; elements serialize to markup text, which
//! [`write`] puts on disk.
//!
//! ```
//! use svgkit::{Document, GroupedDrawable, Point, Rectangle, SimpleItem};
//!
//! let group = GroupedDrawable::new()
//!     .rotate(90.0)
//!     .with(Rectangle::new(10.0, 20.0).move_to(Point::new(1.0, 2.0)));
//! let doc = Document::new(100.0, 100.0).with(group);
//! let markup = doc.to_markup(&Default::default()).unwrap();
//! assert!(markup.contains("<rect"));
//! ```

pub mod errors;
pub mod log;
pub mod output;
pub mod render;
pub mod transform;
pub mod types;

pub use errors::{Error, Result};
pub use output::write;
pub use render::{
    Arc, AttrValue, Attributes, Circle, Composite, CompositeItem, Dimple, Document, Drawable,
    Element, GroupedDrawable, Image, Item, Line, LineCap, MarkupOptions, Path, PathSegment,
    Rectangle, RelativeVector, Segment, SimpleItem, Style, Text, TextAnchor, arc,
    horizontal_line, vector,
};
pub use transform::{Rotation, Transform, TransformOp, Translation};
pub use types::Point;
