//! Integration tests for tracing events emitted by the connector pass

use std::io;
use std::sync::{Arc, Mutex};

use flowwire::prelude::*;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Shared in-memory sink for formatted events
#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn document(parent: &str) -> Document {
    Document::new()
        .with_element(Element::new(Rect::new(0.0, 0.0, 500.0, 300.0)).with_class("flowchart-lines"))
        .with_element(
            Element::new(Rect::new(10.0, 10.0, 110.0, 50.0))
                .with_id("a")
                .with_class("node"),
        )
        .with_element(
            Element::new(Rect::new(200.0, 60.0, 300.0, 100.0))
                .with_id("b")
                .with_class("node")
                .with_attribute("data-parent", parent),
        )
}

fn capture<F: FnOnce()>(level: tracing::Level, f: F) -> String {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(level)
        .with_ansi(false)
        .finish();
    let guard = subscriber.set_default();
    f();
    drop(guard);
    writer.contents()
}

#[test]
fn test_unresolved_reference_emits_warning() {
    let output = capture(tracing::Level::WARN, || {
        let (flowchart, report) = ConnectorRenderer::new()
            .render_document(&document("missing-id"))
            .unwrap();
        assert!(flowchart.surface.is_empty());
        assert_eq!(report.unresolved.len(), 1);
    });

    assert!(output.contains("WARN"));
    assert!(output.contains("missing-id"));
}

#[test]
fn test_clean_pass_emits_no_warning() {
    let output = capture(tracing::Level::WARN, || {
        ConnectorRenderer::new()
            .render_document(&document("a"))
            .unwrap();
    });

    assert!(!output.contains("WARN"));
}

#[test]
fn test_pass_summary_logged_at_info() {
    let output = capture(tracing::Level::INFO, || {
        ConnectorRenderer::new()
            .render_document(&document("a"))
            .unwrap();
    });

    assert!(output.contains("Connector pass completed"));
    assert!(output.contains("drawn=1"));
}

#[test]
fn test_trace_level_records_each_link() {
    let output = capture(tracing::Level::TRACE, || {
        ConnectorRenderer::with_style(ConnectorStyle::Orthogonal)
            .render_document(&document("a"))
            .unwrap();
    });

    assert!(output.contains("Routed connector"));
    assert!(output.contains("Resolved parent link"));
}
