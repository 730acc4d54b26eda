//! Flowwire - Draw connectors between laid-out flowchart nodes
//!
//! Given a snapshot of an already laid-out document (node boxes, each
//! optionally naming a parent node, plus one overlay surface), flowwire
//! computes the line or right-angled path joining every child to its parent
//! and emits it as SVG in the surface's local coordinates.
//!
//! # Quick Start
//!
//! ```rust
//! use flowwire::render;
//!
//! let snapshot = r#"{"elements": [
//!     {"class": "flowchart-lines", "rect": {"left": 0, "top": 0, "right": 500, "bottom": 300}},
//!     {"id": "a", "class": "node", "rect": {"left": 10, "top": 10, "right": 110, "bottom": 50}},
//!     {"id": "b", "class": "node", "attributes": {"data-parent": "a"},
//!      "rect": {"left": 200, "top": 60, "right": 300, "bottom": 100}}
//! ]}"#;
//! let svg = render(snapshot).unwrap();
//! assert!(svg.contains(r#"x1="110" y1="30" x2="200" y2="80""#));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use flowwire::prelude::*;
//!
//! let document = Document::new()
//!     .with_element(Element::new(Rect::new(0.0, 0.0, 500.0, 300.0)).with_class("flowchart-lines"))
//!     .with_element(Element::new(Rect::new(10.0, 10.0, 110.0, 50.0)).with_id("a").with_class("node"))
//!     .with_element(
//!         Element::new(Rect::new(200.0, 60.0, 300.0, 100.0))
//!             .with_id("b")
//!             .with_class("node")
//!             .with_attribute("data-parent", "a"),
//!     );
//!
//! let renderer = ConnectorRenderer::with_style(ConnectorStyle::Orthogonal);
//! let (flowchart, report) = renderer.render_document(&document).unwrap();
//!
//! assert_eq!(report.drawn, 1);
//! assert_eq!(flowchart.surface.connectors()[0].points()[1], Point::new(155.0, 30.0));
//! ```

pub mod connector;
pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::connector::*;
pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::connector::{ConnectorRenderer, RenderConfig, RenderReport};
    pub use crate::core::{
        Connector, ConnectorStyle, Document, DrawingSurface, Element, Flowchart, FlowwireError,
        Node, Point, Rect, Selectors, Stroke,
    };
}

/// Render connectors for a JSON layout snapshot and return the SVG overlay
///
/// Uses the default straight-horizontal style and selectors (`.node`,
/// `data-parent`, `.flowchart-lines`).
///
/// # Returns
/// * `Ok(String)` - The SVG overlay markup
/// * `Err` - If the snapshot is malformed or has no drawing surface
pub fn render(input: &str) -> anyhow::Result<String> {
    render_with_style(input, ConnectorStyle::default())
}

/// Render connectors for a JSON layout snapshot with a specific style
///
/// # Example
/// ```rust
/// use flowwire::{render_with_style, ConnectorStyle};
///
/// let snapshot = r#"{"elements": [
///     {"class": "flowchart-lines", "rect": {"left": 0, "top": 0, "right": 100, "bottom": 100}}
/// ]}"#;
/// let svg = render_with_style(snapshot, ConnectorStyle::StraightVertical).unwrap();
/// assert!(!svg.contains("<line"));
/// ```
pub fn render_with_style(input: &str, style: ConnectorStyle) -> anyhow::Result<String> {
    let document = Document::from_json(input)?;
    let renderer = ConnectorRenderer::with_style(style);
    let (flowchart, _report) = renderer.render_document(&document)?;
    Ok(renderer.to_svg(&flowchart))
}

/// Parse a JSON layout snapshot without rendering
///
/// # Example
/// ```rust
/// use flowwire::parse;
///
/// let doc = parse(r#"{"elements": []}"#).unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn parse(input: &str) -> anyhow::Result<Document> {
    Ok(Document::from_json(input)?)
}
