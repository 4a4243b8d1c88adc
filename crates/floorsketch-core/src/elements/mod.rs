//! Element definitions for the floor plan.

mod camera;
mod door;
mod pencil;
mod room;
mod wall;
mod window;

pub use camera::Camera;
pub use door::Door;
pub use pencil::PencilPath;
pub use room::Room;
pub use wall::Wall;
pub use window::Window;

use kurbo::{Point, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Hit radius in model units for point-placed elements (doors, windows,
/// cameras).
pub const POINT_HIT_RADIUS: f64 = 20.0;

/// Extra slack in model units added around stroked geometry when
/// hit-testing walls and pencil paths.
pub const STROKE_HIT_SLACK: f64 = 5.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Distance from a point to a line segment (a→b).
///
/// Projects the point onto the infinite line through the endpoints, clamps
/// the projection parameter to `[0, 1]`, and measures the Euclidean distance
/// to the clamped position.
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = Vec2::new(b.x - a.x, b.y - a.y);
    let pv = Vec2::new(point.x - a.x, point.y - a.y);
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * seg.x, a.y + t * seg.y);
    point.distance(proj)
}

/// Minimum distance from a point to a polyline (consecutive point pairs).
///
/// Infinite for polylines with fewer than two points.
pub fn point_to_polyline_dist(point: Point, points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| point_to_segment_dist(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

/// Enum wrapper over all element kinds.
///
/// The six kinds are a closed set: render and hit-test match exhaustively,
/// so adding a variant is a compile-time-checked exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Element {
    Room(Room),
    Wall(Wall),
    Door(Door),
    Window(Window),
    Camera(Camera),
    Pencil(PencilPath),
}

impl Element {
    /// Get the unique identifier.
    pub fn id(&self) -> ElementId {
        match self {
            Element::Room(e) => e.id,
            Element::Wall(e) => e.id,
            Element::Door(e) => e.id,
            Element::Window(e) => e.id,
            Element::Camera(e) => e.id,
            Element::Pencil(e) => e.id,
        }
    }

    /// Check if a model-space point hits this element.
    pub fn hit_test(&self, point: Point) -> bool {
        match self {
            Element::Room(e) => e.hit_test(point),
            Element::Wall(e) => e.hit_test(point),
            Element::Door(e) => e.hit_test(point),
            Element::Window(e) => e.hit_test(point),
            Element::Camera(e) => e.hit_test(point),
            Element::Pencil(e) => e.hit_test(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_dist_endpoint_and_interior() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);

        // Perpendicular from the interior.
        let d = point_to_segment_dist(Point::new(5.0, 3.0), a, b);
        assert!((d - 3.0).abs() < 1e-12);

        // Beyond an endpoint the projection clamps to the endpoint.
        let d = point_to_segment_dist(Point::new(14.0, 3.0), a, b);
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_dist_degenerate_segment() {
        let a = Point::new(2.0, 2.0);
        let d = point_to_segment_dist(Point::new(5.0, 6.0), a, a);
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_polyline_dist_picks_nearest_segment() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let d = point_to_polyline_dist(Point::new(12.0, 5.0), &points);
        assert!((d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_polyline_dist_too_few_points() {
        let d = point_to_polyline_dist(Point::new(0.0, 0.0), &[Point::new(1.0, 1.0)]);
        assert!(d.is_infinite());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Element::Door(Door::at(Point::new(0.0, 0.0)));
        let b = Element::Door(Door::at(Point::new(0.0, 0.0)));
        assert_ne!(a.id(), b.id());
    }
}
