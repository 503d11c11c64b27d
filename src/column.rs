//! Time-grid columns and their pixel-to-time mapping.
//!
//! A column is one vertical lane of the grid (one day). The controller only
//! talks to columns through [`TimeColumn`], so views with non-linear layouts
//! can plug in their own mapping; [`LinearTimeColumn`] covers the common case
//! of evenly spaced rows.

use crate::config::CreationConfig;
use crate::constants::{DEFAULT_HOUR_END, DEFAULT_HOUR_START};
use crate::datetime::{self, TimeUnit};
use crate::error::{CreationError, CreationResult};
use crate::input::coords::{GridConverter, GridGeometry};
use crate::types::{ColumnId, GridPosition, PointerEvent, PointerSample};
use std::fmt;
use std::rc::Rc;

/// Pixel-to-time capability of a single column.
pub trait TimeColumn: fmt::Debug {
    fn id(&self) -> ColumnId;

    /// Map a pointer event onto this column's time axis.
    fn position_of(&self, event: &PointerEvent) -> CreationResult<GridPosition>;

    /// Pointer event that lands on `timestamp_ms` in this column.
    fn event_at(&self, timestamp_ms: i64) -> CreationResult<PointerEvent>;

    /// Whether `timestamp_ms` falls on the day this column renders.
    fn contains_day(&self, timestamp_ms: i64) -> bool;
}

/// Shared, read-only handle to a column
pub type ColumnRef = Rc<dyn TimeColumn>;

/// Convert a raw pointer event into a sample bound to `column`.
///
/// This is the single conversion path every signal goes through.
pub fn convert(column: &dyn TimeColumn, event: &PointerEvent) -> CreationResult<PointerSample> {
    let position = column.position_of(event)?;
    Ok(PointerSample::new(column.id(), *event, position))
}

// ============================================================================
// Linear Column
// ============================================================================

/// Column whose rows are evenly spaced over its rendered height.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearTimeColumn {
    id: ColumnId,
    /// Midnight of the rendered day
    day_start_ms: i64,
    hour_start: u32,
    hour_end: u32,
    unit_minutes: u32,
    top: f64,
    height: f64,
}

impl LinearTimeColumn {
    pub fn new(id: ColumnId, day_start_ms: i64, top: f64, height: f64) -> Self {
        Self {
            id,
            day_start_ms,
            hour_start: DEFAULT_HOUR_START,
            hour_end: DEFAULT_HOUR_END,
            unit_minutes: crate::constants::DEFAULT_GRID_UNIT_MINUTES,
            top,
            height,
        }
    }

    /// Restrict the column to `[hour_start, hour_end)`.
    pub fn with_hours(mut self, hour_start: u32, hour_end: u32) -> Self {
        self.hour_start = hour_start;
        self.hour_end = hour_end;
        self
    }

    pub fn with_unit_minutes(mut self, unit_minutes: u32) -> Self {
        self.unit_minutes = unit_minutes;
        self
    }

    /// Timestamp of row 0
    pub fn origin_ms(&self) -> CreationResult<i64> {
        datetime::add_duration(self.day_start_ms, TimeUnit::Hours, i64::from(self.hour_start))
            .ok_or_else(|| self.out_of_range())
    }

    fn out_of_range(&self) -> CreationError {
        CreationError::TimeOutOfRange { column: self.id }
    }

    fn rows(&self) -> f64 {
        f64::from((self.hour_end - self.hour_start) * 60) / f64::from(self.unit_minutes)
    }

    fn geometry(&self) -> CreationResult<GridGeometry> {
        if self.hour_start >= self.hour_end || self.hour_end > DEFAULT_HOUR_END {
            return Err(CreationError::InvalidHourRange {
                column: self.id,
                start: self.hour_start,
                end: self.hour_end,
            });
        }
        if self.unit_minutes == 0 {
            return Err(CreationError::Config(format!(
                "column {} has a zero grid unit",
                self.id
            )));
        }
        if !self.top.is_finite() {
            return Err(CreationError::InvalidColumnTop {
                column: self.id,
                top: self.top,
            });
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(CreationError::InvalidColumnHeight {
                column: self.id,
                height: self.height,
            });
        }
        Ok(GridGeometry::new(self.top, self.height, self.rows()))
    }
}

impl TimeColumn for LinearTimeColumn {
    fn id(&self) -> ColumnId {
        self.id
    }

    fn position_of(&self, event: &PointerEvent) -> CreationResult<GridPosition> {
        if !event.y.is_finite() {
            return Err(CreationError::NonFinitePointer(event.y));
        }
        let geometry = self.geometry()?;
        let unit = f64::from(self.unit_minutes);

        let mouse_y = GridConverter::client_to_offset(event.y, &geometry);
        let grid_y = GridConverter::offset_to_grid(mouse_y, &geometry);
        let nearest_grid_y = GridConverter::snap(grid_y);
        let origin = self.origin_ms()?;

        let time_y = datetime::millis_from_fractional(TimeUnit::Minutes, grid_y * unit)
            .and_then(|offset| origin.checked_add(offset))
            .ok_or_else(|| self.out_of_range())?;
        let nearest_grid_time_y = datetime::millis_from(
            TimeUnit::Minutes,
            nearest_grid_y as i64 * i64::from(self.unit_minutes),
        )
        .and_then(|offset| origin.checked_add(offset))
        .ok_or_else(|| self.out_of_range())?;

        Ok(GridPosition {
            mouse_y,
            grid_y,
            time_y,
            nearest_grid_y,
            nearest_grid_time_y,
        })
    }

    fn event_at(&self, timestamp_ms: i64) -> CreationResult<PointerEvent> {
        let geometry = self.geometry()?;
        let unit_ms = datetime::millis_from(TimeUnit::Minutes, i64::from(self.unit_minutes))
            .ok_or_else(|| self.out_of_range())? as f64;
        // Timestamps far off the column clamp to its first or last row
        let since_origin = timestamp_ms.saturating_sub(self.origin_ms()?);
        let grid_y = (since_origin as f64 / unit_ms).clamp(0.0, geometry.rows);
        let offset = GridConverter::grid_to_offset(grid_y, &geometry);
        Ok(PointerEvent::new(0.0, geometry.top + offset))
    }

    fn contains_day(&self, timestamp_ms: i64) -> bool {
        datetime::same_day(self.day_start_ms, timestamp_ms)
    }
}

// ============================================================================
// Column Collection
// ============================================================================

/// Ordered columns of a time-grid view, addressed by position.
#[derive(Debug, Default, Clone)]
pub struct ColumnCollection {
    columns: Vec<ColumnRef>,
}

impl ColumnCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out one linear column per day, all sharing the same geometry.
    pub fn from_days<I>(days: I, top: f64, height: f64, config: &CreationConfig) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let columns = days
            .into_iter()
            .enumerate()
            .map(|(id, day_start_ms)| {
                let column = LinearTimeColumn::new(id, day_start_ms, top, height)
                    .with_hours(config.hour_start, config.hour_end)
                    .with_unit_minutes(config.grid_unit_minutes);
                Rc::new(column) as ColumnRef
            })
            .collect();
        Self { columns }
    }

    pub fn push(&mut self, column: ColumnRef) {
        self.columns.push(column);
    }

    pub fn get(&self, index: usize) -> Option<&ColumnRef> {
        self.columns.get(index)
    }

    /// Column rendering the day of `timestamp_ms`, falling back to the first.
    pub fn for_timestamp(&self, timestamp_ms: i64) -> Option<&ColumnRef> {
        self.columns
            .iter()
            .find(|column| column.contains_day(timestamp_ms))
            .or_else(|| self.columns.first())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnRef> {
        self.columns.iter()
    }
}
