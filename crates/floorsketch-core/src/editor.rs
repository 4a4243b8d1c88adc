//! The tool input state machine.
//!
//! Consumes pointer and keyboard events, interprets them according to the
//! active tool, and either updates the draft preview or commits a finished
//! element into the host-owned store. All transitions complete synchronously
//! within the handler invocation; nothing blocks or suspends.

use kurbo::Point;

use crate::elements::{Camera, Door, Element, PencilPath, Room, Wall, Window};
use crate::input::{Modifiers, PointerButton};
use crate::snap::{GRID_SIZE, snap_to_grid};
use crate::store::ElementStore;
use crate::tools::{DraftState, ToolKind};
use crate::viewport::Viewport;

/// Interactive editor state: active tool, draft gesture, and pan viewport.
///
/// The element store is owned by the host and passed into each handler;
/// commits and deletions go through its whole-collection replace contract,
/// and selection changes land in the store's selection id.
#[derive(Debug, Clone)]
pub struct Editor {
    active_tool: ToolKind,
    draft: DraftState,
    viewport: Viewport,
    grid_size: f64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            active_tool: ToolKind::default(),
            draft: DraftState::Idle,
            viewport: Viewport::new(),
            grid_size: GRID_SIZE,
        }
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    /// Switch tools; any in-flight gesture is abandoned.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.active_tool = tool;
        self.draft = DraftState::Idle;
    }

    /// The in-progress draft, for preview rendering.
    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Handle pointer-down at a canvas-relative screen position.
    ///
    /// The pan chord (pan tool, middle button, or left+alt) wins over every
    /// tool. Point tools commit immediately; drag tools open a draft.
    pub fn pointer_down(
        &mut self,
        store: &mut ElementStore,
        screen: Point,
        button: PointerButton,
        modifiers: Modifiers,
    ) {
        if self.active_tool == ToolKind::Pan
            || button == PointerButton::Middle
            || (button == PointerButton::Left && modifiers.alt)
        {
            self.draft = DraftState::Panning { anchor: screen };
            return;
        }

        let model = self.viewport.screen_to_model(screen);

        match self.active_tool {
            ToolKind::Select => {
                let hit = store.element_at(screen, self.viewport.offset);
                store.set_selected(hit);
            }
            ToolKind::Room => {
                let snapped = snap_to_grid(model, self.grid_size);
                self.draft = DraftState::DrawingRoom {
                    start: snapped,
                    current: snapped,
                };
            }
            ToolKind::Wall => {
                let snapped = snap_to_grid(model, self.grid_size);
                self.draft = DraftState::DrawingWall {
                    start: snapped,
                    current: snapped,
                };
            }
            ToolKind::Pencil => {
                self.draft = DraftState::DrawingPencil {
                    points: vec![model],
                };
            }
            ToolKind::Door | ToolKind::Window | ToolKind::Camera => {
                let snapped = snap_to_grid(model, self.grid_size);
                let element = match self.active_tool {
                    ToolKind::Door => Element::Door(Door::at(snapped)),
                    ToolKind::Window => Element::Window(Window::at(snapped)),
                    _ => Element::Camera(Camera::at(snapped)),
                };
                self.commit(store, element);
            }
            // Pan is handled by the chord check above.
            ToolKind::Pan => {}
        }
    }

    /// Handle pointer movement: pan, or advance the active draft.
    pub fn pointer_move(&mut self, screen: Point) {
        match &mut self.draft {
            DraftState::Panning { anchor } => {
                self.viewport.pan(screen - *anchor);
                *anchor = screen;
            }
            DraftState::DrawingRoom { current, .. } | DraftState::DrawingWall { current, .. } => {
                *current = snap_to_grid(self.viewport.screen_to_model(screen), self.grid_size);
            }
            DraftState::DrawingPencil { points } => {
                points.push(self.viewport.screen_to_model(screen));
            }
            DraftState::Idle => {}
        }
    }

    /// Handle pointer-up: commit or discard the in-flight draft.
    ///
    /// Degenerate geometry (a room within one grid cell on either axis, a
    /// wall no longer than a grid cell, a pencil stroke of two or fewer
    /// points) is discarded silently; that is policy, not a fault. The
    /// draft always returns to `Idle`.
    pub fn pointer_up(&mut self, store: &mut ElementStore) {
        match std::mem::take(&mut self.draft) {
            DraftState::Idle | DraftState::Panning { .. } => {}
            DraftState::DrawingRoom { start, current } => {
                if (current.x - start.x).abs() > self.grid_size
                    && (current.y - start.y).abs() > self.grid_size
                {
                    self.commit(store, Element::Room(Room::from_corners(start, current)));
                } else {
                    log::debug!("discarding degenerate room draft {start:?} -> {current:?}");
                }
            }
            DraftState::DrawingWall { start, current } => {
                if start.distance(current) > self.grid_size {
                    self.commit(store, Element::Wall(Wall::new(start, current)));
                } else {
                    log::debug!("discarding degenerate wall draft {start:?} -> {current:?}");
                }
            }
            DraftState::DrawingPencil { points } => {
                if points.len() > 2 {
                    self.commit(store, Element::Pencil(PencilPath::from_points(points)));
                } else {
                    log::debug!("discarding pencil draft with {} points", points.len());
                }
            }
        }
    }

    /// Treat the pointer leaving the canvas as an implicit pointer-up so no
    /// draft survives an interrupted gesture.
    pub fn pointer_leave(&mut self, store: &mut ElementStore) {
        self.pointer_up(store);
    }

    /// Handle a key press. Delete and Backspace remove the selected element
    /// and clear the selection; with no selection this is a no-op, and a
    /// dangling selection id is cleared without removing anything.
    pub fn key_down(&mut self, store: &mut ElementStore, key: &str) {
        if !matches!(key, "Delete" | "Backspace") {
            return;
        }
        let Some(selected) = store.selected_id() else {
            return;
        };
        let remaining: Vec<Element> = store
            .iter()
            .filter(|e| e.id() != selected)
            .cloned()
            .collect();
        if remaining.len() == store.len() {
            // Dangling selection id: nothing to delete, but drop the stale id.
            store.set_selected(None);
            return;
        }
        match store.replace(remaining) {
            Ok(()) => {
                store.set_selected(None);
                log::debug!("deleted element {selected}");
            }
            Err(err) => log::error!("delete rejected: {err}"),
        }
    }

    /// Append `element` through the whole-collection replace contract.
    fn commit(&mut self, store: &mut ElementStore, element: Element) {
        let id = element.id();
        let mut next = store.elements().to_vec();
        next.push(element);
        match store.replace(next) {
            Ok(()) => log::debug!("committed element {id}"),
            Err(err) => log::error!("commit rejected: {err}"),
        }
    }
}
