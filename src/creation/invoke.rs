//! Programmatic creation click at a timestamp.

use super::TimeCreation;
use crate::column::TimeColumn;
use crate::constants::EVENT_DRAG_CLICK;
use crate::error::CreationResult;
use crate::types::{CreationPayload, PointerSample};
use std::rc::Rc;

impl TimeCreation {
    /// Emit a creation click as if the user had clicked at `timestamp_ms`.
    ///
    /// Targets the column rendering that day, or the first column when the
    /// day is not on screen. Does not start a session; ignored while one is
    /// active or when the view has no columns.
    pub fn invoke_creation_click(&mut self, timestamp_ms: i64) -> CreationResult<Option<PointerSample>> {
        if self.state.is_active() {
            tracing::debug!("Creation click requested during a session, ignored");
            return Ok(None);
        }
        let Some(column) = self.columns.for_timestamp(timestamp_ms).map(Rc::clone) else {
            return Ok(None);
        };

        let event = column.event_at(timestamp_ms)?;
        let sample = self.drag_sample(&column, &event, None)?;

        tracing::debug!(column = column.id(), "Creation click invoked");
        self.emit(EVENT_DRAG_CLICK, CreationPayload::Sample(sample.clone()));
        Ok(Some(sample))
    }
}
