//! Intensity grid with a reserved sentinel for missing pixels
//!
//! Values are stored in a single contiguous `rows × cols` buffer. Every
//! accessor is bounds-checked and returns `None` outside the grid, so the
//! traversal and fill passes never index out of range.

use ndarray::Array2;

use crate::io::configuration::MISSING_VALUE;
use crate::io::error::{FillError, Result};
use crate::spatial::pixel::Pixel;

/// Grayscale intensity grid, normally normalized to `[0, 1]`
///
/// A cell holding [`MISSING_VALUE`] is unknown and belongs to some hole.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGrid {
    values: Array2<f64>,
}

impl ImageGrid {
    /// Create a grid filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            values: Array2::zeros((rows, cols)),
        }
    }

    /// Wrap an existing array of intensities
    pub const fn from_array(values: Array2<f64>) -> Self {
        Self { values }
    }

    /// Build a grid from row-major values
    ///
    /// # Errors
    ///
    /// Returns an error if `values.len()` is not `rows * cols`
    pub fn from_shape_vec(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        let len = values.len();
        Array2::from_shape_vec((rows, cols), values)
            .map(Self::from_array)
            .map_err(|e| FillError::InvalidSourceData {
                reason: format!("{len} values cannot form a {rows}x{cols} grid: {e}"),
            })
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    /// Check if a pixel lies inside the grid
    pub fn contains(&self, pixel: Pixel) -> bool {
        pixel.x < self.rows() && pixel.y < self.cols()
    }

    /// Value at a pixel, `None` outside the grid
    pub fn get(&self, pixel: Pixel) -> Option<f64> {
        self.values.get([pixel.x, pixel.y]).copied()
    }

    /// Overwrite the value at a pixel
    ///
    /// Returns `false` when the pixel lies outside the grid.
    pub fn set(&mut self, pixel: Pixel, value: f64) -> bool {
        self.values.get_mut([pixel.x, pixel.y]).is_some_and(|cell| {
            *cell = value;
            true
        })
    }

    /// Mark a pixel as missing
    pub fn mark_missing(&mut self, pixel: Pixel) -> bool {
        self.set(pixel, MISSING_VALUE)
    }

    /// Check if a pixel holds the sentinel
    pub fn is_missing(&self, pixel: Pixel) -> bool {
        self.get(pixel).is_some_and(is_missing_value)
    }

    /// Check if a pixel holds a known value
    pub fn is_known(&self, pixel: Pixel) -> bool {
        self.get(pixel).is_some_and(|value| !is_missing_value(value))
    }

    /// Count cells holding the sentinel
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|&&v| is_missing_value(v)).count()
    }

    /// Borrow the underlying array
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Consume the grid and return the underlying array
    pub fn into_array(self) -> Array2<f64> {
        self.values
    }
}

/// Check a raw value against the sentinel
#[allow(clippy::float_cmp)]
pub fn is_missing_value(value: f64) -> bool {
    // Sentinel is an exact, representable constant
    value == MISSING_VALUE
}
