//! Drag end and click - final sample, range computation, teardown.
//!
//! Both endings detach the session listeners and clear the session before
//! converting the terminal event, so a failed conversion still leaves the
//! controller idle and listening for the next drag start.

use super::TimeCreation;
use crate::column::{ColumnRef, TimeColumn};
use crate::constants::{EVENT_BEFORE_CREATE_SCHEDULE, EVENT_DRAG_CLICK, EVENT_DRAG_END};
use crate::datetime::{self, TimeUnit};
use crate::error::{CreationError, CreationResult};
use crate::types::{CreationPayload, PointerEvent, PointerSample, ScheduleRequest, TimeRange};

/// Range from `start_ms` to `end_ms`, padded past whichever endpoint is later.
pub(crate) fn padded_range(start_ms: i64, end_ms: i64, pad_ms: i64) -> TimeRange {
    if end_ms >= start_ms {
        TimeRange::ordered(start_ms, end_ms.saturating_add(pad_ms))
    } else {
        TimeRange::ordered(end_ms, start_ms.saturating_add(pad_ms))
    }
}

impl TimeCreation {
    /// Finish the session with a range. No-op while idle.
    pub fn on_drag_end(&mut self, event: &PointerEvent) -> CreationResult<Option<PointerSample>> {
        let Some((column, start)) = self.finish_session() else {
            tracing::debug!("Drag end without a session, ignored");
            return Ok(None);
        };

        let pad_ms = datetime::millis_from(TimeUnit::Minutes, i64::from(self.config.range_pad_minutes))
            .ok_or_else(|| CreationError::Config("range padding out of range".into()))?;
        let mut attach_range = |sample: &mut PointerSample| {
            sample.range = Some(padded_range(start.time_y, sample.time_y, pad_ms));
            sample.nearest_range = Some(padded_range(
                start.nearest_grid_time_y,
                sample.nearest_grid_time_y,
                pad_ms,
            ));
        };

        let sample = self
            .drag_sample(&column, event, Some(&mut attach_range))
            .inspect_err(|e| tracing::warn!(column = column.id(), "Drag end conversion failed: {e}"))?;

        if let Some(range) = sample.nearest_range {
            tracing::debug!(
                column = column.id(),
                start = %datetime::format_timestamp(range.start()),
                end = %datetime::format_timestamp(range.end()),
                "Creation session ended"
            );
        }

        self.emit(EVENT_DRAG_END, CreationPayload::Sample(sample.clone()));
        if self.config.emit_schedule_request {
            if let Some(request) = ScheduleRequest::from_sample(&sample) {
                self.emit(EVENT_BEFORE_CREATE_SCHEDULE, CreationPayload::Schedule(request));
            }
        }
        Ok(Some(sample))
    }

    /// Finish the session as a click: single point, no range. No-op while idle.
    pub fn on_click(&mut self, event: &PointerEvent) -> CreationResult<Option<PointerSample>> {
        let Some((column, _start)) = self.finish_session() else {
            tracing::debug!("Click without a session, ignored");
            return Ok(None);
        };

        let sample = self
            .drag_sample(&column, event, None)
            .inspect_err(|e| tracing::warn!(column = column.id(), "Click conversion failed: {e}"))?;

        tracing::debug!(column = column.id(), "Creation session ended by click");
        self.emit(EVENT_DRAG_CLICK, CreationPayload::Sample(sample.clone()));
        Ok(Some(sample))
    }

    /// Unsubscribe session listeners and take the session out of the state.
    pub(super) fn finish_session(&mut self) -> Option<(ColumnRef, PointerSample)> {
        let session = self.state.take()?;
        self.listen_for_start();
        Some(session)
    }
}
