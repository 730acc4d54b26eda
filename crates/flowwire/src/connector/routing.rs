//! Connector geometry
//!
//! Endpoints are computed in the document-global frame and then shifted into
//! the surface's local frame, so translating the whole document leaves every
//! connector unchanged.

use crate::core::{Connector, ConnectorStyle, Point, Rect, Stroke};

/// Start (on the parent) and end (on the child) in the global frame
pub fn endpoints(parent: &Rect, child: &Rect, style: ConnectorStyle) -> (Point, Point) {
    match style {
        ConnectorStyle::StraightHorizontal | ConnectorStyle::Orthogonal => {
            (parent.right_mid(), child.left_mid())
        }
        ConnectorStyle::StraightVertical => (parent.bottom_mid(), child.top_mid()),
    }
}

/// Right-angled route: start, two elbows on the vertical midline, end
pub fn orthogonal_points(start: Point, end: Point) -> [Point; 4] {
    let mid_x = (start.x + end.x) / 2.0;
    [
        start,
        Point::new(mid_x, start.y),
        Point::new(mid_x, end.y),
        end,
    ]
}

/// Build the connector for one parent/child pair, relative to `origin`
pub fn route(
    parent: &Rect,
    child: &Rect,
    origin: Point,
    style: ConnectorStyle,
    color: &str,
) -> Connector {
    let (start, end) = endpoints(parent, child, style);
    let stroke = Stroke::new(color, style.stroke_width());

    if style.is_straight() {
        Connector::Line {
            from: start.relative_to(origin),
            to: end.relative_to(origin),
            stroke,
        }
    } else {
        Connector::Polyline {
            points: orthogonal_points(start, end).map(|p| p.relative_to(origin)),
            stroke,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent() -> Rect {
        Rect::new(10.0, 10.0, 110.0, 50.0)
    }

    fn child() -> Rect {
        Rect::new(200.0, 60.0, 300.0, 100.0)
    }

    #[test]
    fn test_straight_horizontal() {
        let connector = route(
            &parent(),
            &child(),
            Point::new(0.0, 0.0),
            ConnectorStyle::StraightHorizontal,
            "black",
        );
        assert_eq!(
            connector,
            Connector::Line {
                from: Point::new(110.0, 30.0),
                to: Point::new(200.0, 80.0),
                stroke: Stroke::new("black", 2.0),
            }
        );
    }

    #[test]
    fn test_straight_vertical() {
        let (start, end) = endpoints(&parent(), &child(), ConnectorStyle::StraightVertical);
        assert_eq!(start, Point::new(60.0, 50.0));
        assert_eq!(end, Point::new(250.0, 60.0));
    }

    #[test]
    fn test_orthogonal() {
        let connector = route(
            &parent(),
            &child(),
            Point::new(0.0, 0.0),
            ConnectorStyle::Orthogonal,
            "black",
        );
        assert_eq!(
            connector.points(),
            vec![
                Point::new(110.0, 30.0),
                Point::new(155.0, 30.0),
                Point::new(155.0, 80.0),
                Point::new(200.0, 80.0),
            ]
        );
        assert_eq!(connector.stroke().width, 1.0);
    }

    #[test]
    fn test_origin_is_subtracted() {
        let connector = route(
            &parent(),
            &child(),
            Point::new(10.0, 5.0),
            ConnectorStyle::StraightHorizontal,
            "black",
        );
        assert_eq!(connector.start(), Point::new(100.0, 25.0));
        assert_eq!(connector.end(), Point::new(190.0, 75.0));
    }

    #[test]
    fn test_orthogonal_with_child_left_of_parent() {
        let points = orthogonal_points(Point::new(100.0, 0.0), Point::new(20.0, 40.0));
        assert_eq!(points[1], Point::new(60.0, 0.0));
        assert_eq!(points[2], Point::new(60.0, 40.0));
    }
}
