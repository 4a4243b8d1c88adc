//! Grid quantization for element placement.

use kurbo::Point;

/// Grid cell size in model units (matches the visual grid).
pub const GRID_SIZE: f64 = 20.0;

/// Round half-up, matching the behavior pointer coordinates were quantized
/// with historically. `f64::round` rounds halves away from zero instead,
/// which disagrees at negative `.5` boundaries.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Quantize a point to the nearest grid intersection.
///
/// Pure and total; idempotent, and both result coordinates are exact
/// multiples of `grid`. Applied to room corners, wall endpoints, and
/// point-placed elements, never to pencil strokes.
pub fn snap_to_grid(point: Point, grid: f64) -> Point {
    Point::new(
        round_half_up(point.x / grid) * grid,
        round_half_up(point.y / grid) * grid,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snaps_to_nearest_multiple() {
        let snapped = snap_to_grid(Point::new(33.0, 47.0), GRID_SIZE);
        assert_eq!(snapped, Point::new(40.0, 40.0));

        let snapped = snap_to_grid(Point::new(102.0, 98.0), GRID_SIZE);
        assert_eq!(snapped, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_idempotent() {
        let p = Point::new(137.3, -41.9);
        let once = snap_to_grid(p, GRID_SIZE);
        let twice = snap_to_grid(once, GRID_SIZE);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_results_are_grid_multiples() {
        for &(x, y) in &[(3.2, 9.9), (-17.0, 250.4), (1999.99, -0.01)] {
            let snapped = snap_to_grid(Point::new(x, y), GRID_SIZE);
            assert_eq!(snapped.x % GRID_SIZE, 0.0);
            assert_eq!(snapped.y % GRID_SIZE, 0.0);
        }
    }

    #[test]
    fn test_half_rounds_up() {
        let snapped = snap_to_grid(Point::new(30.0, -10.0), GRID_SIZE);
        assert_eq!(snapped.x, 40.0);
        // -10 / 20 = -0.5 rounds up to 0, not away from zero to -20.
        assert_eq!(snapped.y, 0.0);
    }

    #[test]
    fn test_other_grid_sizes() {
        let snapped = snap_to_grid(Point::new(12.0, 13.0), 10.0);
        assert_eq!(snapped, Point::new(10.0, 10.0));
    }
}
