//! Creation session state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active     (drag start resolved to a column)
//! Active -> Idle     (drag end, click, or destroy)
//! ```
//!
//! The column and the start snapshot only exist while a session is active,
//! so there is no half-cleared state to guard against.

use crate::column::ColumnRef;
use crate::types::PointerSample;

#[derive(Debug, Clone, Default)]
pub enum SessionState {
    /// No session; only drag starts are accepted
    #[default]
    Idle,

    /// One drag gesture in progress
    Active {
        /// Column every conversion in this session uses
        column: ColumnRef,
        /// Sample captured at drag start
        start: PointerSample,
    },
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Column bound to the active session
    pub fn column(&self) -> Option<&ColumnRef> {
        match self {
            Self::Active { column, .. } => Some(column),
            Self::Idle => None,
        }
    }

    /// Start snapshot of the active session
    pub fn start(&self) -> Option<&PointerSample> {
        match self {
            Self::Active { start, .. } => Some(start),
            Self::Idle => None,
        }
    }

    pub fn begin(&mut self, column: ColumnRef, start: PointerSample) {
        *self = Self::Active { column, start };
    }

    /// End the session, handing back what it held.
    pub fn take(&mut self) -> Option<(ColumnRef, PointerSample)> {
        match std::mem::take(self) {
            Self::Active { column, start } => Some((column, start)),
            Self::Idle => None,
        }
    }
}
