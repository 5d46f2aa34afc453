//! Default styling values applied when a builder option is not set

pub const STROKE: &str = "black";
pub const STROKE_WIDTH: f64 = 1.0;
pub const TEXT_COLOR: &str = "black";
pub const FONT_SIZE: f64 = 8.0;
pub const FONT_WEIGHT: &str = "normal";
/// Corner radius used by rounded rectangles (`rx`/`ry`)
pub const CORNER_RADIUS: u32 = 4;
/// Fully opaque, as an integer percentage
pub const OPACITY: u32 = 100;
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
