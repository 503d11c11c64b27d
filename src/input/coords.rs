//! Coordinate conversion between pointer pixels and grid rows.
//!
//! Centralizes the formulas shared by pixel-to-time conversion and its
//! inverse so the two directions cannot drift apart.

/// Vertical geometry of one column, in client pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    /// Client y of the column's top edge
    pub top: f64,
    /// Rendered height of the column
    pub height: f64,
    /// Number of grid rows the height is divided into
    pub rows: f64,
}

impl GridGeometry {
    #[inline]
    pub fn new(top: f64, height: f64, rows: f64) -> Self {
        Self { top, height, rows }
    }
}

pub struct GridConverter;

impl GridConverter {
    /// Convert a client y coordinate to an offset from the column top
    #[inline]
    pub fn client_to_offset(client_y: f64, geometry: &GridGeometry) -> f64 {
        client_y - geometry.top
    }

    /// Convert a column offset to a continuous row index, clamped to the column
    #[inline]
    pub fn offset_to_grid(offset: f64, geometry: &GridGeometry) -> f64 {
        (offset * geometry.rows / geometry.height).clamp(0.0, geometry.rows)
    }

    /// Convert a row index back to a column offset
    #[inline]
    pub fn grid_to_offset(grid_y: f64, geometry: &GridGeometry) -> f64 {
        grid_y * geometry.height / geometry.rows
    }

    /// Snap a continuous row index to the closest grid line
    #[inline]
    pub fn snap(grid_y: f64) -> f64 {
        grid_y.round()
    }
}
