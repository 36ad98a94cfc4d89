//! Boundary overlay rendering for inspecting discovered holes

use crate::algorithm::hole::Hole;
use crate::io::configuration::BOUNDARY_COLOR;
use crate::io::error::{FillError, Result};
use crate::io::image::{ensure_parent_dir, intensity_to_byte};
use crate::spatial::ImageGrid;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Render the grid in gray with every hole boundary painted in `color`
pub fn render_boundary_overlay<'a, I>(grid: &ImageGrid, holes: I, color: [u8; 4]) -> RgbaImage
where
    I: IntoIterator<Item = &'a Hole>,
{
    let mut img = RgbaImage::new(grid.cols() as u32, grid.rows() as u32);

    for ((row, col), &value) in grid.values().indexed_iter() {
        let gray = intensity_to_byte(value);
        img.put_pixel(col as u32, row as u32, Rgba([gray, gray, gray, 255]));
    }

    for hole in holes {
        for pixel in hole.boundary() {
            if let Some(target) = img.get_pixel_mut_checked(pixel.y as u32, pixel.x as u32) {
                *target = Rgba(color);
            }
        }
    }

    img
}

/// Export a boundary overlay PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_boundary_overlay<'a, I, P>(grid: &ImageGrid, holes: I, output_path: P) -> Result<()>
where
    I: IntoIterator<Item = &'a Hole>,
    P: AsRef<Path>,
{
    let output_path = output_path.as_ref();
    ensure_parent_dir(output_path)?;

    render_boundary_overlay(grid, holes, BOUNDARY_COLOR)
        .save(output_path)
        .map_err(|e| FillError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
