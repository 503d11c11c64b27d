//! Pointer input plumbing for the creation controller.
//!
//! ## Modules
//!
//! - `state` - Session state machine enum
//! - `source` - Drag source signals and listener registry
//! - `resolver` - Drag-start target to column resolution
//! - `coords` - Pixel/row coordinate conversion

pub mod coords;
mod resolver;
mod source;
mod state;

pub use resolver::TargetResolver;
pub use source::{DragHandler, DragInput, DragSignal, DragSource};
pub use state::SessionState;
