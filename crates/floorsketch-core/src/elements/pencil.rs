//! Free-hand pencil path.

use super::{ElementId, STROKE_HIT_SLACK, SerializableColor, point_to_polyline_dist};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-hand polyline.
///
/// Points keep raw cursor resolution; they are never grid-snapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PencilPath {
    pub id: ElementId,
    /// Points in capture order; valid paths have at least two.
    pub points: Vec<Point>,
    pub color: SerializableColor,
    pub line_width: f64,
}

impl PencilPath {
    /// Default stroke width for newly drawn paths.
    pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

    /// Default stroke color, readable on the dark canvas.
    pub fn default_color() -> SerializableColor {
        SerializableColor::new(226, 232, 240, 255)
    }

    /// Create a path from captured points with the default stroke.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            color: Self::default_color(),
            line_width: Self::DEFAULT_LINE_WIDTH,
        }
    }

    /// Number of captured points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Hit when any consecutive point pair is within the stroke width plus
    /// the shared slack.
    pub fn hit_test(&self, point: Point) -> bool {
        point_to_polyline_dist(point, &self.points) < self.line_width + STROKE_HIT_SLACK
    }
}
