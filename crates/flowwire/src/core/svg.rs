//! SVG serialization of connectors
//!
//! Emits the two primitives the overlay understands: `<line>` for straight
//! connectors and `<polyline fill="none">` for orthogonal ones. No arrowheads,
//! labels or interactivity.

use std::fmt::Write as _;

use super::{Connector, DrawingSurface, Point};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Format a coordinate in its shortest form (`110`, `155.5`)
pub fn format_number(value: f64) -> String {
    // -0 prints as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

fn format_point(point: Point) -> String {
    format!("{},{}", format_number(point.x), format_number(point.y))
}

/// Escape a value for use inside a double-quoted attribute
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Serialize a single connector as an SVG element
pub fn connector_to_svg(connector: &Connector) -> String {
    match connector {
        Connector::Line { from, to, stroke } => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            format_number(from.x),
            format_number(from.y),
            format_number(to.x),
            format_number(to.y),
            escape_attribute(&stroke.color),
            format_number(stroke.width),
        ),
        Connector::Polyline { points, stroke } => {
            let points = points
                .iter()
                .map(|p| format_point(*p))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                points,
                escape_attribute(&stroke.color),
                format_number(stroke.width),
            )
        }
    }
}

/// Serialize the surface and its connectors as a standalone SVG overlay
pub fn surface_to_svg(surface: &DrawingSurface, surface_class: &str) -> String {
    let width = format_number(surface.rect.width());
    let height = format_number(surface.rect.height());

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="{}" class="{}" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        SVG_NAMESPACE,
        escape_attribute(surface_class),
        width,
        height,
        width,
        height
    );
    for connector in surface.connectors() {
        let _ = writeln!(out, "  {}", connector_to_svg(connector));
    }
    out.push_str("</svg>\n");
    out
}
