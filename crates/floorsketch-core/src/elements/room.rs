//! Room element: an axis-aligned rectangular room.

use super::ElementId;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An axis-aligned rectangular room.
///
/// Width and height are non-negative; a zero-area room is never committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: ElementId,
    /// Top-left corner in model coordinates.
    pub position: Point,
    pub width: f64,
    pub height: f64,
}

impl Room {
    /// Create a room from two opposite corners, normalizing to a top-left
    /// anchor with non-negative width and height.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: Point::new(a.x.min(b.x), a.y.min(b.y)),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// The room's footprint as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Bounding-box containment, closed on all edges.
    pub fn hit_test(&self, point: Point) -> bool {
        let r = self.as_rect();
        point.x >= r.x0 && point.x <= r.x1 && point.y >= r.y0 && point.y <= r.y1
    }
}
