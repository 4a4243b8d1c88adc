//! FloorSketch Core Library
//!
//! Platform-agnostic data model and interaction logic for the FloorSketch
//! floor-plan editor.

pub mod editor;
pub mod elements;
pub mod input;
pub mod snap;
pub mod store;
pub mod tools;
pub mod viewport;

pub use editor::Editor;
pub use elements::{Camera, Door, Element, ElementId, PencilPath, Room, Wall, Window};
pub use input::{Modifiers, PointerButton};
pub use snap::{GRID_SIZE, snap_to_grid};
pub use store::{ElementStore, StoreError};
pub use tools::{DraftState, ToolKind};
pub use viewport::Viewport;
