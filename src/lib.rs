//! Drag-to-create time range controller for vertical time-grid views.
//!
//! Pointer drags over a day column become grid-snapped time ranges and a
//! small set of lifecycle events (`creation-drag-start`, `-move`, `-end`,
//! `-click`) for a creation guide and a scheduling controller to consume.

pub mod column;
pub mod config;
pub mod constants;
pub mod creation;
pub mod datetime;
pub mod dom;
pub mod emitter;
pub mod error;
pub mod input;
pub mod types;

pub use column::{ColumnCollection, ColumnRef, LinearTimeColumn, TimeColumn};
pub use config::CreationConfig;
pub use creation::{Revise, TimeCreation};
pub use dom::Element;
pub use emitter::{EventEmitter, SubscriptionId};
pub use error::{CreationError, CreationResult};
pub use input::{DragHandler, DragInput, DragSignal, DragSource, SessionState, TargetResolver};
pub use types::{
    ColumnId, CreationEvent, CreationPayload, GridPosition, PointerEvent, PointerSample,
    ScheduleRequest, TimeRange,
};
