//! FloorSketch Render Library
//!
//! Paint-surface abstraction and scene renderer for FloorSketch. The
//! renderer draws through the [`PaintSurface`] capability trait, so a frame
//! can be recorded and inspected headlessly via [`RecordingSurface`].

mod scene;
mod surface;
mod theme;

pub use scene::{RenderContext, render};
pub use surface::{PaintCmd, PaintSurface, RecordingSurface, Stroke};
pub use theme::Theme;
