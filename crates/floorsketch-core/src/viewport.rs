//! Viewport pan state and coordinate conversion.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Viewport manages the pan translation between model and screen space.
///
/// Elements are stored in model coordinates. Incoming pointer positions have
/// the offset subtracted at the input boundary; the renderer adds it back
/// when painting. Panning never alters stored element coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Current translation offset (pan).
    pub offset: Vec2,
}

impl Viewport {
    /// Create a viewport with no pan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a screen point to model coordinates.
    pub fn screen_to_model(&self, screen: Point) -> Point {
        screen - self.offset
    }

    /// Convert a model point to screen coordinates.
    pub fn model_to_screen(&self, model: Point) -> Point {
        model + self.offset
    }

    /// Pan by a delta in screen coordinates.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Reset the pan to the origin.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }
}
