//! Core type definitions for connector geometry
//!
//! Points and rectangles are plain `f64` values in CSS pixel units. Rectangles
//! come from the host layout in a document-global frame; connectors are
//! expressed relative to the drawing surface's top-left corner.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance used when comparing computed coordinates
pub const EPSILON: f64 = 1e-9;

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift the point by a constant offset
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Express this point in the local frame whose origin is `origin`
    pub fn relative_to(self, origin: Point) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }

    /// Approximate equality within [`EPSILON`]
    pub fn approx_eq(self, other: Point) -> bool {
        (self.x - other.x).abs() <= EPSILON && (self.y - other.y).abs() <= EPSILON
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned bounding box, as reported by the host layout
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rectangle from its top-left corner and size
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns true if right >= left and bottom >= top, with finite values
    /// and a finite width and height
    pub fn is_well_formed(&self) -> bool {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .all(|v| v.is_finite())
            && self.width().is_finite()
            && self.height().is_finite()
            && self.right >= self.left
            && self.bottom >= self.top
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    pub fn right_mid(&self) -> Point {
        Point::new(self.right, self.top + self.height() / 2.0)
    }

    pub fn left_mid(&self) -> Point {
        Point::new(self.left, self.top + self.height() / 2.0)
    }

    pub fn top_mid(&self) -> Point {
        Point::new(self.left + self.width() / 2.0, self.top)
    }

    pub fn bottom_mid(&self) -> Point {
        Point::new(self.left + self.width() / 2.0, self.bottom)
    }

    /// Returns true if `point` lies on one of the four edges
    pub fn contains_on_boundary(&self, point: Point) -> bool {
        let within_x = point.x >= self.left - EPSILON && point.x <= self.right + EPSILON;
        let within_y = point.y >= self.top - EPSILON && point.y <= self.bottom + EPSILON;
        let on_vertical_edge = (point.x - self.left).abs() <= EPSILON
            || (point.x - self.right).abs() <= EPSILON;
        let on_horizontal_edge = (point.y - self.top).abs() <= EPSILON
            || (point.y - self.bottom).abs() <= EPSILON;

        (on_vertical_edge && within_y) || (on_horizontal_edge && within_x)
    }
}

/// Which edges of the boxes are connected, and how the connector is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ConnectorStyle {
    /// Parent's right-edge midpoint to child's left-edge midpoint, one segment
    #[default]
    StraightHorizontal,
    /// Parent's bottom-edge midpoint to child's top-edge midpoint, one segment
    StraightVertical,
    /// Same endpoints as `StraightHorizontal`, routed through a vertical
    /// segment halfway between the two boxes
    Orthogonal,
}

impl ConnectorStyle {
    /// Stroke width used for this style
    pub fn stroke_width(&self) -> f64 {
        match self {
            ConnectorStyle::StraightHorizontal | ConnectorStyle::StraightVertical => 2.0,
            ConnectorStyle::Orthogonal => 1.0,
        }
    }

    /// Returns true if this style emits a single segment
    pub fn is_straight(&self) -> bool {
        !matches!(self, ConnectorStyle::Orthogonal)
    }

    /// Get all valid style names
    pub fn variants() -> &'static [&'static str] {
        &["straight-horizontal", "straight-vertical", "orthogonal"]
    }

    /// All styles, in the same order as [`ConnectorStyle::variants`]
    pub fn all() -> [ConnectorStyle; 3] {
        [
            ConnectorStyle::StraightHorizontal,
            ConnectorStyle::StraightVertical,
            ConnectorStyle::Orthogonal,
        ]
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ConnectorStyle::StraightHorizontal => {
                "Straight line from the parent's right edge to the child's left edge"
            }
            ConnectorStyle::StraightVertical => {
                "Straight line from the parent's bottom edge to the child's top edge"
            }
            ConnectorStyle::Orthogonal => {
                "Right-angled path from the parent's right edge to the child's left edge"
            }
        }
    }
}

impl FromStr for ConnectorStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "straight-horizontal" | "horizontal" | "lr" => Ok(ConnectorStyle::StraightHorizontal),
            "straight-vertical" | "vertical" | "td" => Ok(ConnectorStyle::StraightVertical),
            "orthogonal" | "elbow" => Ok(ConnectorStyle::Orthogonal),
            _ => Err(format!(
                "Unknown connector style: {}. Use one of: {}",
                s,
                Self::variants().join(", ")
            )),
        }
    }
}

impl fmt::Display for ConnectorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorStyle::StraightHorizontal => write!(f, "straight-horizontal"),
            ConnectorStyle::StraightVertical => write!(f, "straight-vertical"),
            ConnectorStyle::Orthogonal => write!(f, "orthogonal"),
        }
    }
}

/// Presentation constants applied to every emitted connector
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    /// Default black stroke for the given style
    pub fn for_style(style: ConnectorStyle) -> Self {
        Self::new(DEFAULT_STROKE_COLOR, style.stroke_width())
    }
}

/// Stroke color used when none is configured
pub const DEFAULT_STROKE_COLOR: &str = "black";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_midpoints() {
        let rect = Rect::new(10.0, 10.0, 110.0, 50.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 40.0);
        assert_eq!(rect.right_mid(), Point::new(110.0, 30.0));
        assert_eq!(rect.left_mid(), Point::new(10.0, 30.0));
        assert_eq!(rect.top_mid(), Point::new(60.0, 10.0));
        assert_eq!(rect.bottom_mid(), Point::new(60.0, 50.0));
    }

    #[test]
    fn test_rect_from_origin_size() {
        let rect = Rect::from_origin_size(5.0, 6.0, 10.0, 20.0);
        assert_eq!(rect, Rect::new(5.0, 6.0, 15.0, 26.0));
    }

    #[test]
    fn test_rect_well_formed() {
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).is_well_formed());
        assert!(!Rect::new(10.0, 0.0, 5.0, 5.0).is_well_formed());
        assert!(!Rect::new(0.0, 10.0, 5.0, 5.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, f64::NAN, 5.0).is_well_formed());
    }

    #[test]
    fn test_rect_with_overflowing_extent() {
        assert!(!Rect::new(-1e308, 0.0, 1e308, 10.0).is_well_formed());
        assert!(!Rect::new(0.0, -1e308, 10.0, 1e308).is_well_formed());
        assert!(Rect::new(-1e300, 0.0, 1e300, 10.0).is_well_formed());
    }

    #[test]
    fn test_boundary_check() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_on_boundary(Point::new(10.0, 5.0)));
        assert!(rect.contains_on_boundary(Point::new(5.0, 0.0)));
        assert!(rect.contains_on_boundary(Point::new(0.0, 0.0)));
        assert!(!rect.contains_on_boundary(Point::new(5.0, 5.0)));
        assert!(!rect.contains_on_boundary(Point::new(10.0, 20.0)));
    }

    #[test]
    fn test_point_relative_to() {
        let point = Point::new(110.0, 30.0).relative_to(Point::new(10.0, 5.0));
        assert_eq!(point, Point::new(100.0, 25.0));
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!(
            "straight-horizontal".parse::<ConnectorStyle>().unwrap(),
            ConnectorStyle::StraightHorizontal
        );
        assert_eq!(
            "TD".parse::<ConnectorStyle>().unwrap(),
            ConnectorStyle::StraightVertical
        );
        assert_eq!(
            "elbow".parse::<ConnectorStyle>().unwrap(),
            ConnectorStyle::Orthogonal
        );
        assert!("curved".parse::<ConnectorStyle>().is_err());
    }

    #[test]
    fn test_style_display_round_trips_variants() {
        for (style, name) in ConnectorStyle::all().iter().zip(ConnectorStyle::variants()) {
            assert_eq!(style.to_string(), *name);
        }
    }

    #[test]
    fn test_style_stroke_width() {
        assert_eq!(ConnectorStyle::StraightHorizontal.stroke_width(), 2.0);
        assert_eq!(ConnectorStyle::StraightVertical.stroke_width(), 2.0);
        assert_eq!(ConnectorStyle::Orthogonal.stroke_width(), 1.0);
        assert_eq!(ConnectorStyle::default(), ConnectorStyle::StraightHorizontal);
    }
}
