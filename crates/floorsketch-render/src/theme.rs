//! Editor color palette.

use peniko::Color;

/// Colors used by the scene renderer.
///
/// The default palette is the dark blueprint theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub grid: Color,
    pub room_stroke: Color,
    pub room_fill: Color,
    pub room_label: Color,
    pub wall_stroke: Color,
    pub door_stroke: Color,
    pub door_arc: Color,
    pub window_stroke: Color,
    pub window_fill: Color,
    pub camera_body: Color,
    pub cone_fill: Color,
    pub cone_stroke: Color,
    /// Stroke color for the selected element.
    pub highlight: Color,
    /// Translucent variant of the highlight, used for glow passes.
    pub highlight_soft: Color,
    /// Translucent fill for in-progress room previews.
    pub preview_fill: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(10, 25, 41, 255),
            grid: Color::from_rgba8(30, 58, 95, 255),
            room_stroke: Color::from_rgba8(59, 130, 246, 255),
            room_fill: Color::from_rgba8(59, 130, 246, 26),
            room_label: Color::from_rgba8(147, 197, 253, 255),
            wall_stroke: Color::from_rgba8(226, 232, 240, 255),
            door_stroke: Color::from_rgba8(139, 92, 246, 255),
            door_arc: Color::from_rgba8(139, 92, 246, 128),
            window_stroke: Color::from_rgba8(6, 182, 212, 255),
            window_fill: Color::from_rgba8(6, 182, 212, 51),
            camera_body: Color::from_rgba8(34, 197, 94, 255),
            cone_fill: Color::from_rgba8(34, 197, 94, 26),
            cone_stroke: Color::from_rgba8(34, 197, 94, 77),
            highlight: Color::from_rgba8(96, 165, 250, 255),
            highlight_soft: Color::from_rgba8(96, 165, 250, 153),
            preview_fill: Color::from_rgba8(96, 165, 250, 26),
        }
    }
}
