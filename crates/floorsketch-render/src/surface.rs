//! Paint surface abstraction.
//!
//! The renderer draws through this capability trait instead of a concrete
//! canvas handle, so frames can be recorded headlessly and compared in
//! tests.

use kurbo::{Point, Rect, Size};
use peniko::Color;

/// Stroke parameters for outlined primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// Dashed strokes are used for live previews.
    pub dashed: bool,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: false,
        }
    }

    pub fn dashed(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dashed: true,
        }
    }
}

/// Drawing capabilities required by the scene renderer.
///
/// All coordinates are screen space. Angles are radians, measured clockwise
/// from the positive x axis (y grows downward).
pub trait PaintSurface {
    /// Surface size in pixels; the renderer paints the full extent.
    fn size(&self) -> Size;

    /// Fill the whole surface, discarding prior content.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);

    fn line(&mut self, from: Point, to: Point, stroke: Stroke);

    /// Stroke an open polyline through `points` in order.
    fn polyline(&mut self, points: &[Point], stroke: Stroke);

    /// Fill and optionally outline a closed polygon.
    fn polygon(&mut self, points: &[Point], fill: Color, stroke: Option<Stroke>);

    /// Stroke a circular arc around `center` between two angles.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64, stroke: Stroke);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Draw `text` horizontally centered on `center`.
    fn text(&mut self, text: &str, center: Point, size: f64, color: Color);
}

/// A recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCmd {
    Clear(Color),
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Polygon {
        points: Vec<Point>,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        stroke: Stroke,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    Text {
        text: String,
        center: Point,
        size: f64,
        color: Color,
    },
}

/// Paint surface that records commands instead of painting pixels.
///
/// `clear` drops previously recorded commands, so a surface always holds
/// exactly one full frame.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<PaintCmd>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// The recorded frame, in draw order.
    pub fn commands(&self) -> &[PaintCmd] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<PaintCmd> {
        std::mem::take(&mut self.commands)
    }
}

impl PaintSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(PaintCmd::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(PaintCmd::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.commands.push(PaintCmd::StrokeRect { rect, stroke });
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(PaintCmd::Line { from, to, stroke });
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.commands.push(PaintCmd::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn polygon(&mut self, points: &[Point], fill: Color, stroke: Option<Stroke>) {
        self.commands.push(PaintCmd::Polygon {
            points: points.to_vec(),
            fill,
            stroke,
        });
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64, stroke: Stroke) {
        self.commands.push(PaintCmd::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            stroke,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(PaintCmd::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, text: &str, center: Point, size: f64, color: Color) {
        self.commands.push(PaintCmd::Text {
            text: text.to_string(),
            center,
            size,
            color,
        });
    }
}
