//! Core types for the creation pipeline.
//!
//! This module defines the pointer input, the per-signal sample produced by a
//! column mapping, and the payloads handed to event listeners.

use serde::{Deserialize, Serialize};

/// Index of a column within the time-grid view
pub type ColumnId = usize;

// ============================================================================
// Pointer Input
// ============================================================================

/// Raw pointer event as delivered by the drag source.
///
/// Carried through to every emitted sample unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Client x coordinate in pixels
    pub x: f64,
    /// Client y coordinate in pixels
    pub y: f64,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Grid Samples
// ============================================================================

/// Where a pointer lands on a column's time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPosition {
    /// Pixel offset along the time axis, relative to the column top
    pub mouse_y: f64,
    /// Continuous row index
    pub grid_y: f64,
    /// Timestamp (ms) under the pointer
    pub time_y: i64,
    /// Row index snapped to the nearest grid line
    pub nearest_grid_y: f64,
    /// Timestamp (ms) of the snapped grid line
    pub nearest_grid_time_y: i64,
}

/// Inclusive `[start_ms, end_ms]` pair, always ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange(i64, i64);

impl TimeRange {
    /// Build an ordered range from two endpoints in any order.
    pub fn ordered(a: i64, b: i64) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    #[inline]
    pub fn start(&self) -> i64 {
        self.0
    }

    #[inline]
    pub fn end(&self) -> i64 {
        self.1
    }

    pub fn duration_ms(&self) -> i64 {
        self.1 - self.0
    }
}

/// Everything listeners learn about one pointer signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSample {
    /// Column the session is bound to
    pub related_view: ColumnId,
    pub origin_event: PointerEvent,
    pub mouse_y: f64,
    pub grid_y: f64,
    pub time_y: i64,
    pub nearest_grid_y: f64,
    pub nearest_grid_time_y: i64,
    /// Set on drag-end only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<TimeRange>,
    /// Set on drag-end only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearest_range: Option<TimeRange>,
}

impl PointerSample {
    pub fn new(related_view: ColumnId, origin_event: PointerEvent, position: GridPosition) -> Self {
        Self {
            related_view,
            origin_event,
            mouse_y: position.mouse_y,
            grid_y: position.grid_y,
            time_y: position.time_y,
            nearest_grid_y: position.nearest_grid_y,
            nearest_grid_time_y: position.nearest_grid_time_y,
            range: None,
            nearest_range: None,
        }
    }
}

// ============================================================================
// Emitted Events
// ============================================================================

/// Request handed to the scheduling side after a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub column: ColumnId,
    pub start_ms: i64,
    pub end_ms: i64,
    pub is_all_day: bool,
}

impl ScheduleRequest {
    /// Derive a request from a drag-end sample's snapped range.
    pub fn from_sample(sample: &PointerSample) -> Option<Self> {
        let range = sample.nearest_range?;
        Some(Self {
            column: sample.related_view,
            start_ms: range.start(),
            end_ms: range.end(),
            is_all_day: false,
        })
    }
}

/// Payload carried by an emitted event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CreationPayload {
    Sample(PointerSample),
    Schedule(ScheduleRequest),
}

impl CreationPayload {
    pub fn as_sample(&self) -> Option<&PointerSample> {
        match self {
            Self::Sample(sample) => Some(sample),
            Self::Schedule(_) => None,
        }
    }

    pub fn as_schedule(&self) -> Option<&ScheduleRequest> {
        match self {
            Self::Schedule(request) => Some(request),
            Self::Sample(_) => None,
        }
    }
}

/// A named event as seen by listeners
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreationEvent {
    pub name: String,
    pub payload: CreationPayload,
}
