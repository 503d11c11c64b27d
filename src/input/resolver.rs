//! Drag-start target resolution.
//!
//! Decides whether a gesture starts inside a time-grid column and which
//! column it belongs to, purely from the element's class names.

use crate::column::{ColumnCollection, ColumnRef};
use crate::config::CreationConfig;
use crate::constants::{COLUMN_CLASS_SUFFIX, EVENT_BLOCK_CLASS_SUFFIX};
use crate::dom::{self, Element};
use crate::error::CreationResult;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct TargetResolver {
    /// `^<prefix>time-date\s+<prefix>(\d+)`
    column_pattern: Regex,
    event_block_class: String,
}

impl TargetResolver {
    pub fn new(class_prefix: &str) -> CreationResult<Self> {
        let prefix = regex::escape(class_prefix);
        let column_pattern = Regex::new(&format!(r"^{prefix}{COLUMN_CLASS_SUFFIX}\s+{prefix}(\d+)"))?;
        Ok(Self {
            column_pattern,
            event_block_class: format!("{class_prefix}{EVENT_BLOCK_CLASS_SUFFIX}"),
        })
    }

    pub fn from_config(config: &CreationConfig) -> CreationResult<Self> {
        Self::new(&config.class_prefix)
    }

    /// Column index encoded in the element's class names.
    ///
    /// Existing entries are looked through to the column they sit in.
    pub fn column_index(&self, element: &Element) -> Option<usize> {
        let element = if dom::has_class(element, &self.event_block_class) {
            element.parent()?
        } else {
            element
        };

        let captures = self.column_pattern.captures(dom::get_class_name(element))?;
        captures.get(1)?.as_str().parse().ok()
    }

    /// Resolve the column a drag starting on `element` targets.
    pub fn resolve<'a>(&self, element: &Element, columns: &'a ColumnCollection) -> Option<&'a ColumnRef> {
        let index = self.column_index(element)?;
        columns.get(index)
    }
}
