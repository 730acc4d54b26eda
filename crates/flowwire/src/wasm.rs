//! WebAssembly bindings for Flowwire
//!
//! Lets a page hand over a layout snapshot after its content has rendered and
//! get the connector overlay back as SVG markup.

use wasm_bindgen::prelude::*;

use crate::connector::ConnectorRenderer;
use crate::core::{ConnectorStyle, Document};

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

fn parse_style(style: &str) -> Result<ConnectorStyle, String> {
    if style.is_empty() {
        return Ok(ConnectorStyle::default());
    }
    style.parse()
}

/// Render connectors for a JSON layout snapshot
///
/// # Arguments
/// * `input` - Layout snapshot JSON (`{"elements": [...]}`)
/// * `style` - "straight-horizontal", "straight-vertical" or "orthogonal"
///   (empty for the default)
///
/// # Returns
/// * The SVG overlay markup
/// * A JavaScript error if the snapshot is invalid or has no surface
#[wasm_bindgen]
pub fn render_connectors(input: &str, style: &str) -> Result<String, JsValue> {
    let style = parse_style(style).map_err(|e| JsValue::from_str(&e))?;
    let document = Document::from_json(input).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let renderer = ConnectorRenderer::with_style(style);
    let (flowchart, _report) = renderer
        .render_document(&document)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(renderer.to_svg(&flowchart))
}

/// Render connectors and return JSON with output and any warnings
///
/// # Returns
/// * JSON string with fields: output, warnings, error
#[wasm_bindgen]
pub fn render_connectors_json(input: &str, style: &str) -> String {
    let style = match parse_style(style) {
        Ok(style) => style,
        Err(e) => {
            return serde_json::json!({
                "output": "",
                "warnings": [],
                "error": e
            })
            .to_string();
        }
    };

    let renderer = ConnectorRenderer::with_style(style);
    let result = Document::from_json(input).and_then(|doc| renderer.render_document(&doc));

    match result {
        Ok((flowchart, report)) => serde_json::json!({
            "output": renderer.to_svg(&flowchart),
            "warnings": report.warnings(),
            "error": null
        })
        .to_string(),
        Err(e) => serde_json::json!({
            "output": "",
            "warnings": [],
            "error": e.to_string()
        })
        .to_string(),
    }
}
