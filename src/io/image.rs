//! Grayscale image loading and PNG export of intensity grids

use crate::io::error::{FillError, Result};
use crate::spatial::{ImageGrid, grid::is_missing_value};
use image::{GrayImage, Luma};
use ndarray::Array2;
use std::path::Path;

/// Load an image as luma intensities normalized to `[0, 1]`
///
/// Color images are converted to 8-bit luma first; alpha is discarded.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<ImageGrid> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| FillError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(grid_from_luma(&img.to_luma8()))
}

/// Convert an 8-bit luma image into a normalized grid
pub fn grid_from_luma(luma: &GrayImage) -> ImageGrid {
    let (width, height) = luma.dimensions();
    let mut values = Array2::zeros((height as usize, width as usize));

    for (x, y, pixel) in luma.enumerate_pixels() {
        if let Some(value) = values.get_mut((y as usize, x as usize)) {
            *value = f64::from(pixel.0[0]) / 255.0;
        }
    }

    ImageGrid::from_array(values)
}

/// Convert a grid back to 8-bit luma
///
/// Values are clamped to `[0, 1]`; missing pixels render black.
pub fn grid_to_luma(grid: &ImageGrid) -> GrayImage {
    let mut img = GrayImage::new(grid.cols() as u32, grid.rows() as u32);

    for ((row, col), &value) in grid.values().indexed_iter() {
        img.put_pixel(col as u32, row as u32, Luma([intensity_to_byte(value)]));
    }

    img
}

/// Map a normalized intensity to a byte, rendering the sentinel as 0
pub fn intensity_to_byte(value: f64) -> u8 {
    if is_missing_value(value) || !value.is_finite() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Export the grid as a grayscale PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<P: AsRef<Path>>(grid: &ImageGrid, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    ensure_parent_dir(output_path)?;

    grid_to_luma(grid)
        .save(output_path)
        .map_err(|e| FillError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Create the parent directory of an output path if it is missing
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FillError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
