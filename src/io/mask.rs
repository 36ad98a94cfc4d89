//! Hole sources: mask images, random rectangles and explicit pixel lists

use crate::io::configuration::{MASK_THRESHOLD, RANDOM_HOLE_MAX_DIVISOR, RANDOM_HOLE_MIN_DIVISOR};
use crate::io::error::{FillError, Result, invalid_parameter};
use crate::spatial::{ImageGrid, Pixel};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::Path;

/// Pixels to blank out before hole filling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoleMask {
    pixels: Vec<Pixel>,
}

impl HoleMask {
    /// Wrap an explicit list of pixels
    pub const fn new(pixels: Vec<Pixel>) -> Self {
        Self { pixels }
    }

    /// Read a mask image where bright pixels mark the hole
    ///
    /// A pixel is missing when its luma exceeds [`MASK_THRESHOLD`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The mask file cannot be loaded
    /// - The mask dimensions differ from `rows × cols`
    pub fn from_png(path: &Path, rows: usize, cols: usize) -> Result<Self> {
        let img = image::open(path).map_err(|e| FillError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        let luma = img.to_luma8();
        let (width, height) = luma.dimensions();

        if height as usize != rows || width as usize != cols {
            return Err(FillError::InvalidSourceData {
                reason: format!(
                    "mask '{}' is {height}x{width} but the image is {rows}x{cols}",
                    path.display()
                ),
            });
        }

        // Row-major so the first mask pixel is also the first seed
        let mut pixels = Vec::new();
        for (row_index, row) in luma.rows().enumerate() {
            for (col_index, pixel) in row.enumerate() {
                if pixel.0[0] > MASK_THRESHOLD {
                    pixels.push(Pixel::new(row_index, col_index));
                }
            }
        }

        Ok(Self { pixels })
    }

    /// Generate a seeded random rectangle strictly inside the image
    ///
    /// Sides span between `1/RANDOM_HOLE_MIN_DIVISOR` and
    /// `1/RANDOM_HOLE_MAX_DIVISOR` of the image side and the rectangle never
    /// touches the border, so the resulting hole always has a boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is smaller than 3x3
    pub fn random_rectangle(rows: usize, cols: usize, seed: u64) -> Result<Self> {
        if rows < 3 || cols < 3 {
            return Err(FillError::InvalidSourceData {
                reason: format!("a {rows}x{cols} image is too small for an interior hole"),
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let (top, height) = random_span(&mut rng, rows);
        let (left, width) = random_span(&mut rng, cols);

        let pixels = (top..top + height)
            .flat_map(|x| (left..left + width).map(move |y| Pixel::new(x, y)))
            .collect();

        Ok(Self { pixels })
    }

    /// Parse `"row,col;row,col;..."`
    ///
    /// Whitespace around entries is ignored, as is a trailing separator.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry is not a pair of non-negative integers
    pub fn from_pixel_list(list: &str) -> Result<Self> {
        let pixels = list
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_pixel)
            .collect::<Result<Vec<_>>>()?;

        if pixels.is_empty() {
            return Err(invalid_parameter(
                "pixels",
                &list,
                &"expected at least one row,col pair",
            ));
        }

        Ok(Self { pixels })
    }

    /// Pixels marked by this mask
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Test if the mask marks nothing
    pub const fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Write the sentinel into every masked pixel
    ///
    /// # Errors
    ///
    /// Returns an error if any pixel lies outside the grid; the grid is left
    /// unchanged in that case
    pub fn apply(&self, grid: &mut ImageGrid) -> Result<()> {
        if let Some(outside) = self.pixels.iter().find(|&&p| !grid.contains(p)) {
            return Err(invalid_parameter(
                "pixels",
                outside,
                &format!("outside the {}x{} image", grid.rows(), grid.cols()),
            ));
        }

        for &pixel in &self.pixels {
            grid.mark_missing(pixel);
        }
        Ok(())
    }
}

// Start and length of one rectangle side, keeping a one-pixel margin
fn random_span(rng: &mut StdRng, extent: usize) -> (usize, usize) {
    let interior = extent - 2;
    let min_len = (extent / RANDOM_HOLE_MIN_DIVISOR).clamp(1, interior);
    let max_len = (extent / RANDOM_HOLE_MAX_DIVISOR).clamp(min_len, interior);
    let len = rng.random_range(min_len..=max_len);
    let start = rng.random_range(1..=extent - 1 - len);
    (start, len)
}

fn parse_pixel(entry: &str) -> Result<Pixel> {
    let (row, col) = entry
        .split_once(',')
        .ok_or_else(|| invalid_parameter("pixels", &entry, &"expected row,col"))?;
    let coordinate = |text: &str| {
        text.trim()
            .parse::<usize>()
            .map_err(|e| invalid_parameter("pixels", &entry, &e))
    };
    Ok(Pixel::new(coordinate(row)?, coordinate(col)?))
}
