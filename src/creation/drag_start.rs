//! Drag start - target resolution and session start.

use super::{Revise, TimeCreation};
use crate::column::{self, TimeColumn};
use crate::constants::EVENT_DRAG_START;
use crate::dom::Element;
use crate::error::CreationResult;
use crate::types::{CreationPayload, PointerEvent, PointerSample};
use std::rc::Rc;

impl TimeCreation {
    /// Start a session if `target` lies in a time-grid column.
    ///
    /// Returns the emitted sample, or `None` when the gesture is not ours
    /// (no column under the pointer, or a session already running). A failed
    /// conversion leaves the controller idle.
    pub fn on_drag_start(
        &mut self,
        target: &Element,
        event: &PointerEvent,
        event_name: Option<&str>,
        revise: Revise<'_>,
    ) -> CreationResult<Option<PointerSample>> {
        if self.state.is_active() {
            tracing::debug!("Drag start while a session is active, ignored");
            return Ok(None);
        }

        let Some(column) = self.resolver.resolve(target, &self.columns).map(Rc::clone) else {
            tracing::trace!(class = crate::dom::get_class_name(target), "Drag start outside time grid");
            return Ok(None);
        };

        let mut sample = column::convert(column.as_ref(), event)?;
        if let Some(revise) = revise {
            revise(&mut sample);
        }

        tracing::debug!(
            column = column.id(),
            time_y = sample.time_y,
            nearest_grid_time_y = sample.nearest_grid_time_y,
            "Creation session started"
        );
        self.state.begin(column, sample.clone());
        self.listen_for_session();

        self.emit(
            event_name.unwrap_or(EVENT_DRAG_START),
            CreationPayload::Sample(sample.clone()),
        );
        Ok(Some(sample))
    }
}
