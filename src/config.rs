//! Controller configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config file.

use crate::constants::{
    DEFAULT_CLASS_PREFIX, DEFAULT_GRID_UNIT_MINUTES, DEFAULT_HOUR_END, DEFAULT_HOUR_START,
    DEFAULT_MOVE_BIAS, DEFAULT_RANGE_PAD_MINUTES, MINUTES_PER_DAY,
};
use crate::error::{CreationError, CreationResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreationConfig {
    /// Prefix of the column and event-block class names
    pub class_prefix: String,
    /// Length of one grid row
    pub grid_unit_minutes: u32,
    /// Padding added past the terminal sample of a drag-end range
    pub range_pad_minutes: u32,
    /// Added to `nearest_grid_y` on move, end and click samples
    pub move_bias: f64,
    pub hour_start: u32,
    pub hour_end: u32,
    /// Emit `before-create-schedule` after every drag-end
    pub emit_schedule_request: bool,
}

impl Default for CreationConfig {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            grid_unit_minutes: DEFAULT_GRID_UNIT_MINUTES,
            range_pad_minutes: DEFAULT_RANGE_PAD_MINUTES,
            move_bias: DEFAULT_MOVE_BIAS,
            hour_start: DEFAULT_HOUR_START,
            hour_end: DEFAULT_HOUR_END,
            emit_schedule_request: false,
        }
    }
}

impl CreationConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> CreationResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded creation config");
        Ok(config)
    }

    pub fn validate(&self) -> CreationResult<()> {
        if self.grid_unit_minutes == 0 || MINUTES_PER_DAY % self.grid_unit_minutes != 0 {
            return Err(CreationError::Config(format!(
                "grid unit of {} minutes does not divide a day",
                self.grid_unit_minutes
            )));
        }
        if self.range_pad_minutes == 0 {
            return Err(CreationError::Config("range padding must be positive".into()));
        }
        if !self.move_bias.is_finite() {
            return Err(CreationError::Config("move bias must be finite".into()));
        }
        if self.hour_start >= self.hour_end || self.hour_end > DEFAULT_HOUR_END {
            return Err(CreationError::Config(format!(
                "invalid hour range {}..{}",
                self.hour_start, self.hour_end
            )));
        }
        if self.class_prefix.chars().any(char::is_whitespace) {
            return Err(CreationError::Config("class prefix cannot contain whitespace".into()));
        }
        Ok(())
    }
}
