//! Drag move - conversion against the session column.
//!
//! Every signal after the start goes through [`TimeCreation::drag_sample`],
//! which converts against the column captured at drag start (never the one
//! under the pointer) and applies the forward bias.

use super::{Revise, TimeCreation};
use crate::column::{self, ColumnRef, TimeColumn};
use crate::constants::EVENT_DRAG_MOVE;
use crate::error::CreationResult;
use crate::types::{CreationPayload, PointerEvent, PointerSample};
use std::rc::Rc;

impl TimeCreation {
    /// Emit a move sample for the active session. No-op while idle.
    ///
    /// A failed conversion ends the session before the error is returned.
    pub fn on_drag(
        &mut self,
        event: &PointerEvent,
        event_name: Option<&str>,
        revise: Revise<'_>,
    ) -> CreationResult<Option<PointerSample>> {
        let Some(column) = self.state.column().map(Rc::clone) else {
            tracing::debug!("Drag signal without a session, ignored");
            return Ok(None);
        };

        let sample = match self.drag_sample(&column, event, revise) {
            Ok(sample) => sample,
            Err(e) => {
                tracing::warn!(column = column.id(), "Drag conversion failed, session dropped: {e}");
                self.finish_session();
                return Err(e);
            }
        };
        tracing::trace!(grid_y = sample.grid_y, nearest_grid_y = sample.nearest_grid_y, "Creation drag");

        self.emit(
            event_name.unwrap_or(EVENT_DRAG_MOVE),
            CreationPayload::Sample(sample.clone()),
        );
        Ok(Some(sample))
    }

    /// Convert, bias, then revise.
    ///
    /// The bias moves `nearest_grid_y` onto the line below the pointer for the
    /// guide; `nearest_grid_time_y` keeps the unbiased snapped time.
    pub(super) fn drag_sample(
        &self,
        column: &ColumnRef,
        event: &PointerEvent,
        revise: Revise<'_>,
    ) -> CreationResult<PointerSample> {
        let mut sample = column::convert(column.as_ref(), event)?;
        sample.nearest_grid_y += self.config.move_bias;
        if let Some(revise) = revise {
            revise(&mut sample);
        }
        Ok(sample)
    }
}
