//! Tests for public API functions in lib.rs

use flowwire::{parse, render, render_with_style, ConnectorStyle, FlowwireError};

const SNAPSHOT: &str = r#"{
    "elements": [
        {"class": "flowchart-lines", "rect": {"left": 0, "top": 0, "right": 500, "bottom": 300}},
        {"id": "parent", "class": "node", "rect": {"left": 10, "top": 10, "right": 110, "bottom": 50}},
        {"id": "child", "class": "node", "attributes": {"data-parent": "parent"},
         "rect": {"left": 200, "top": 60, "right": 300, "bottom": 100}}
    ]
}"#;

#[test]
fn test_render_default() {
    let output = render(SNAPSHOT).unwrap();
    assert!(output.contains(r#"<line x1="110" y1="30" x2="200" y2="80" stroke="black" stroke-width="2"/>"#));
}

#[test]
fn test_render_with_each_style() {
    for style in ConnectorStyle::all() {
        let output = render_with_style(SNAPSHOT, style).unwrap();
        assert!(output.starts_with("<svg"), "style {} produced {}", style, output);
        if style.is_straight() {
            assert!(output.contains("<line"));
        } else {
            assert!(output.contains("<polyline"));
        }
    }
}

#[test]
fn test_render_malformed_snapshot() {
    let err = render("not json").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FlowwireError>(),
        Some(FlowwireError::Document { .. })
    ));
}

#[test]
fn test_parse_snapshot() {
    let doc = parse(SNAPSHOT).unwrap();
    assert_eq!(doc.len(), 3);
    assert_eq!(doc.elements_with_class("node").count(), 2);
    assert_eq!(
        doc.element_by_id("child").unwrap().attribute("data-parent"),
        Some("parent")
    );
}
