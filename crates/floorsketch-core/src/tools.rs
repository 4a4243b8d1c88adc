//! Tool selection and draft gesture state.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Pan,
    Room,
    Wall,
    Pencil,
    Door,
    Window,
    Camera,
}

impl ToolKind {
    /// Point-placed tools commit on pointer-down with no drag phase.
    pub fn is_point_tool(self) -> bool {
        matches!(self, ToolKind::Door | ToolKind::Window | ToolKind::Camera)
    }
}

/// In-progress gesture state for the active tool.
///
/// At most one gesture is ever in flight. Every pointer-up, and any
/// unmatched event combination, collapses back to `Idle` so no partial
/// draft survives a handler invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DraftState {
    #[default]
    Idle,
    /// Pan gesture; `anchor` is the last screen position already folded
    /// into the viewport offset.
    Panning { anchor: Point },
    /// Room drag; both corners are grid-snapped model points.
    DrawingRoom { start: Point, current: Point },
    /// Wall drag; both endpoints are grid-snapped model points.
    DrawingWall { start: Point, current: Point },
    /// Free-hand stroke; raw model points in capture order.
    DrawingPencil { points: Vec<Point> },
}

impl DraftState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DraftState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tool_is_select() {
        assert_eq!(ToolKind::default(), ToolKind::Select);
    }

    #[test]
    fn test_point_tools() {
        assert!(ToolKind::Door.is_point_tool());
        assert!(ToolKind::Window.is_point_tool());
        assert!(ToolKind::Camera.is_point_tool());
        assert!(!ToolKind::Room.is_point_tool());
        assert!(!ToolKind::Pencil.is_point_tool());
    }

    #[test]
    fn test_default_draft_is_idle() {
        assert!(DraftState::default().is_idle());
    }
}
