//! Door element: a hinged leaf with a swing arc.

use super::{ElementId, POINT_HIT_RADIUS};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A door placed at a grid point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    pub id: ElementId,
    /// Anchor position in model coordinates.
    pub position: Point,
    /// Orientation in degrees.
    pub rotation: f64,
}

impl Door {
    /// Place a door at `position` with no rotation.
    pub fn at(position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            rotation: 0.0,
        }
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.position.distance(point) < POINT_HIT_RADIUS
    }
}
