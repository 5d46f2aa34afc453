//! Draws a small badge and writes it to the path given on the command line
//! (default `badge.svg`).
//!
//! Run with: cargo run --example badge --features tracing -- out.svg

use svgkit::{
    Circle, Document, GroupedDrawable, Line, LineCap, MarkupOptions, Path, Point, Rectangle,
    Segment, SimpleItem, Text, TextAnchor, arc, vector,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let out = std::env::args().nth(1).unwrap_or_else(|| "badge.svg".to_string());

    let mut frame = Rectangle::new(160.0, 60.0)
        .set_center(100.0, 50.0)
        .stroke_width(2.0)
        .rounded(true);
    frame.set_fill("ivory");

    let outline: [Segment; 3] = [
        vector(20.0, 0.0).into(),
        arc(10.0, 10.0, 0.0, false, true, 0.0, 20.0).into(),
        vector(-20.0, 0.0).into(),
    ];
    let tab = Path::new(Point::new(20.0, 20.0), outline)
        .attr("fill", "steelblue")
        .attr("width", 1);

    let badge = GroupedDrawable::new()
        .rotate_about(-5.0, Point::new(100.0, 50.0))
        .with(frame)
        .with(tab)
        .with(
            Circle::new(Point::ORIGIN, 6.0)
                .move_center_to(Point::new(165.0, 35.0))
                .attr("fill", "tomato"),
        )
        .with(
            Text::new("svgkit", Point::new(100.0, 56.0))
                .anchor(TextAnchor::Middle)
                .size(14.0),
        )
        .with(
            Line::horizontal(Point::new(60.0, 66.0), 80.0)
                .color("gray")
                .linecap(LineCap::Round)
                .dasharray("4,2"),
        );

    let doc = Document::new(200.0, 100.0).with(badge);
    doc.save(&out, &MarkupOptions::pretty())?;
    println!("wrote {out}");
    Ok(())
}
