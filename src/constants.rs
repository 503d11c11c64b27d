//! Crate-wide constants.
//!
//! Centralizes the grid defaults, event names and class-name conventions so
//! the controller and the resolver agree on them.

// ============================================================================
// Grid Defaults
// ============================================================================

/// Default length of one grid row in minutes
pub const DEFAULT_GRID_UNIT_MINUTES: u32 = 30;

/// Default padding added past the terminal sample of a drag-end range
pub const DEFAULT_RANGE_PAD_MINUTES: u32 = 30;

/// Default forward bias applied to `nearest_grid_y` while dragging
pub const DEFAULT_MOVE_BIAS: f64 = 0.5;

/// Default first hour rendered by a column
pub const DEFAULT_HOUR_START: u32 = 0;

/// Default hour (exclusive) where a column stops
pub const DEFAULT_HOUR_END: u32 = 24;

/// Minutes in one calendar day
pub const MINUTES_PER_DAY: u32 = 24 * 60;

// ============================================================================
// Class Names
// ============================================================================

/// Default prefix shared by every class name the resolver looks at
pub const DEFAULT_CLASS_PREFIX: &str = "view-";

/// Suffix of the class carried by a time-grid column element
pub const COLUMN_CLASS_SUFFIX: &str = "time-date";

/// Suffix of the class carried by a rendered entry inside a column
pub const EVENT_BLOCK_CLASS_SUFFIX: &str = "time-date-schedule-block";

// ============================================================================
// Event Names
// ============================================================================

pub const EVENT_DRAG_START: &str = "creation-drag-start";
pub const EVENT_DRAG_MOVE: &str = "creation-drag-move";
pub const EVENT_DRAG_END: &str = "creation-drag-end";
pub const EVENT_DRAG_CLICK: &str = "creation-drag-click";

/// Emitted after `creation-drag-end` when schedule requests are enabled
pub const EVENT_BEFORE_CREATE_SCHEDULE: &str = "before-create-schedule";
