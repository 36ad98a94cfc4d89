//! Hole filling for grayscale images by inverse-distance weighted interpolation
//!
//! A hole is a connected region of pixels holding the missing-value sentinel.
//! The crate finds a hole by breadth-first search under 4- or 8-connectivity,
//! collects its boundary, and replaces each missing pixel with a weighted
//! average of known pixels using `1 / (distance^z + epsilon)` weights.

#![forbid(unsafe_code)]

/// Hole discovery, weighting and reconstruction
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Distance kernels used by the weight functions
pub mod math;
/// Pixel coordinates, adjacency and the intensity grid
pub mod spatial;

pub use algorithm::executor::{FillConfig, FillReport, HoleFillExecutor};
pub use algorithm::filler::{FillPolicy, HoleFiller};
pub use algorithm::finder::{calculate_hole, find_seed};
pub use algorithm::hole::Hole;
pub use algorithm::weights::{DefaultWeight, WeightFunction};
pub use io::error::{FillError, Result};
pub use spatial::{Connectivity, ImageGrid, Pixel};
