//! Wall element: a straight segment with stroke thickness.

use super::{ElementId, STROKE_HIT_SLACK, point_to_segment_dist};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A wall segment. Endpoints are grid-snapped model points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub id: ElementId,
    pub start: Point,
    pub end: Point,
    /// Stroke thickness in model units.
    pub thickness: f64,
}

impl Wall {
    /// Default thickness for newly drawn walls.
    pub const DEFAULT_THICKNESS: f64 = 3.0;

    /// Create a wall with the default thickness.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            thickness: Self::DEFAULT_THICKNESS,
        }
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Hit when within half the thickness plus the shared stroke slack.
    pub fn hit_test(&self, point: Point) -> bool {
        point_to_segment_dist(point, self.start, self.end) < self.thickness / 2.0 + STROKE_HIT_SLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let wall = Wall::new(Point::new(0.0, 0.0), Point::new(60.0, 80.0));
        assert!((wall.length() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_hit_test_band_around_segment() {
        let wall = Wall::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        // Band is thickness/2 + 5 = 6.5 wide.
        assert!(wall.hit_test(Point::new(50.0, 6.0)));
        assert!(!wall.hit_test(Point::new(50.0, 7.0)));
        assert!(!wall.hit_test(Point::new(120.0, 0.0)));
    }
}
