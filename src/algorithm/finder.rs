use crate::{
    algorithm::hole::Hole,
    algorithm::visited::VisitedMask,
    io::error::{FillError, Result, invalid_parameter},
    spatial::{Connectivity, ImageGrid, Pixel},
};
use std::collections::VecDeque;

/// Find the first missing pixel in row-major order
///
/// # Errors
///
/// Returns [`FillError::NoMissingPixel`] when the grid holds no sentinel.
/// This is the normal way a multi-hole pass ends.
pub fn find_seed(grid: &ImageGrid) -> Result<Pixel> {
    grid.values()
        .indexed_iter()
        .find(|&(_, &value)| crate::spatial::grid::is_missing_value(value))
        .map(|((x, y), _)| Pixel::new(x, y))
        .ok_or(FillError::NoMissingPixel)
}

/// Discover the hole containing `seed` and its boundary
///
/// Breadth-first search over the implicit grid graph. A pixel is marked
/// visited the moment it is discovered, not when it is dequeued, so no pixel
/// is enqueued twice and a boundary pixel touching several interior pixels is
/// recorded once.
///
/// # Errors
///
/// Returns an error if `seed` lies outside the grid or is not missing
pub fn calculate_hole(grid: &ImageGrid, seed: Pixel, connectivity: Connectivity) -> Result<Hole> {
    if !grid.contains(seed) {
        return Err(invalid_parameter(
            "seed",
            &seed,
            &format!("outside the {}x{} grid", grid.rows(), grid.cols()),
        ));
    }
    if !grid.is_missing(seed) {
        return Err(invalid_parameter(
            "seed",
            &seed,
            &"seed pixel is not missing",
        ));
    }

    let (rows, cols) = (grid.rows(), grid.cols());
    let mut hole = Hole::new();
    let mut visited = VisitedMask::new(rows, cols);
    let mut frontier = VecDeque::new();

    visited.visit(seed);
    frontier.push_back(seed);

    while let Some(current) = frontier.pop_front() {
        hole.push_interior(current);

        for neighbour in current.neighbours(connectivity, rows, cols) {
            if !visited.visit(neighbour) {
                continue;
            }
            if grid.is_missing(neighbour) {
                frontier.push_back(neighbour);
            } else {
                hole.push_boundary(neighbour);
            }
        }
    }

    log::debug!(
        "Hole at seed {seed}: {} interior, {} boundary ({connectivity}-connected)",
        hole.interior().len(),
        hole.boundary().len()
    );

    Ok(hole)
}

/// Find the next hole in the grid
///
/// # Errors
///
/// Returns [`FillError::NoMissingPixel`] when the grid is fully known
pub fn find_next_hole(grid: &ImageGrid, connectivity: Connectivity) -> Result<Hole> {
    let seed = find_seed(grid)?;
    calculate_hole(grid, seed, connectivity)
}
