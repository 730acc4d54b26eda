//! Drawing surface and the connectors appended to it

use serde::Serialize;

use super::{Point, Rect, Stroke};

/// A drawn connector, in surface-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Connector {
    /// Two-point straight segment
    Line { from: Point, to: Point, stroke: Stroke },
    /// Four-point right-angled path
    Polyline { points: [Point; 4], stroke: Stroke },
}

impl Connector {
    /// Point on the parent's boundary
    pub fn start(&self) -> Point {
        match self {
            Connector::Line { from, .. } => *from,
            Connector::Polyline { points, .. } => points[0],
        }
    }

    /// Point on the child's boundary
    pub fn end(&self) -> Point {
        match self {
            Connector::Line { to, .. } => *to,
            Connector::Polyline { points, .. } => points[3],
        }
    }

    pub fn points(&self) -> Vec<Point> {
        match self {
            Connector::Line { from, to, .. } => vec![*from, *to],
            Connector::Polyline { points, .. } => points.to_vec(),
        }
    }

    pub fn stroke(&self) -> &Stroke {
        match self {
            Connector::Line { stroke, .. } | Connector::Polyline { stroke, .. } => stroke,
        }
    }

    /// SVG element name this connector is emitted as
    pub fn kind(&self) -> &'static str {
        match self {
            Connector::Line { .. } => "line",
            Connector::Polyline { .. } => "polyline",
        }
    }
}

/// The single overlay region connectors are drawn on
///
/// Its bounding box is the coordinate origin for every connector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawingSurface {
    pub rect: Rect,
    connectors: Vec<Connector>,
}

impl DrawingSurface {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            connectors: Vec::new(),
        }
    }

    /// Local origin in the document-global frame
    pub fn origin(&self) -> Point {
        self.rect.origin()
    }

    pub fn append(&mut self, connector: Connector) {
        self.connectors.push(connector);
    }

    /// Remove every connector left by a previous pass
    pub fn clear(&mut self) {
        self.connectors.clear();
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    /// Plain-data view of the connectors, for JSON output
    pub fn summary(&self) -> Vec<ConnectorSummary> {
        self.connectors.iter().map(ConnectorSummary::from).collect()
    }
}

/// Serializable description of a connector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorSummary {
    pub kind: &'static str,
    pub points: Vec<Point>,
    pub stroke: String,
    pub stroke_width: f64,
}

impl From<&Connector> for ConnectorSummary {
    fn from(connector: &Connector) -> Self {
        Self {
            kind: connector.kind(),
            points: connector.points(),
            stroke: connector.stroke().color.clone(),
            stroke_width: connector.stroke().width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConnectorStyle;

    fn line() -> Connector {
        Connector::Line {
            from: Point::new(1.0, 2.0),
            to: Point::new(3.0, 4.0),
            stroke: Stroke::for_style(ConnectorStyle::StraightHorizontal),
        }
    }

    #[test]
    fn test_connector_endpoints() {
        let polyline = Connector::Polyline {
            points: [
                Point::new(0.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(5.0, 9.0),
                Point::new(10.0, 9.0),
            ],
            stroke: Stroke::for_style(ConnectorStyle::Orthogonal),
        };
        assert_eq!(polyline.start(), Point::new(0.0, 0.0));
        assert_eq!(polyline.end(), Point::new(10.0, 9.0));
        assert_eq!(polyline.points().len(), 4);
        assert_eq!(polyline.kind(), "polyline");

        assert_eq!(line().start(), Point::new(1.0, 2.0));
        assert_eq!(line().end(), Point::new(3.0, 4.0));
        assert_eq!(line().kind(), "line");
    }

    #[test]
    fn test_surface_append_and_clear() {
        let mut surface = DrawingSurface::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(surface.is_empty());
        surface.append(line());
        surface.append(line());
        assert_eq!(surface.len(), 2);
        surface.clear();
        assert!(surface.is_empty());
    }

    #[test]
    fn test_summary() {
        let mut surface = DrawingSurface::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        surface.append(line());
        let summary = surface.summary();
        assert_eq!(summary[0].kind, "line");
        assert_eq!(summary[0].stroke, "black");
        assert_eq!(summary[0].stroke_width, 2.0);
    }
}
