//! Camera element: a surveillance camera with a view cone.

use super::{ElementId, POINT_HIT_RADIUS};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A camera placed at a grid point. The rotation orients the view cone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub id: ElementId,
    /// Anchor position in model coordinates.
    pub position: Point,
    /// Orientation in degrees.
    pub rotation: f64,
}

impl Camera {
    /// Place a camera at `position` with no rotation.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_ignores_rotation() {
        let mut camera = Camera::at(Point::new(100.0, 100.0));
        camera.rotation = 90.0;
        assert!(camera.hit_test(Point::new(110.0, 110.0)));
        assert!(!camera.hit_test(Point::new(130.0, 100.0)));
    }
}
