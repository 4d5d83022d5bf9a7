//! Pointer input handling

pub mod drag;

pub use drag::{DragPhase, DragSession, DragTracker, DragUpdate, DropProposal, ViewRegion};
