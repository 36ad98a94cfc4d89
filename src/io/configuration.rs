//! Algorithm constants and runtime configuration defaults

use crate::spatial::Connectivity;

/// Sentinel marking a missing pixel
pub const MISSING_VALUE: f64 = -1.0;

// Default weighting parameters
/// Regularizer added to `distance^z`
pub const DEFAULT_EPSILON: f64 = 0.01;
/// Distance exponent
pub const DEFAULT_Z: f64 = 3.0;
/// Adjacency used when none is given
pub const DEFAULT_CONNECTIVITY: Connectivity = Connectivity::Eight;

/// Fixed seed for reproducible random holes
pub const DEFAULT_SEED: u64 = 42;

// Random rectangle holes span between 1/8 and 1/3 of each image side
/// Smallest rectangle side as a fraction denominator
pub const RANDOM_HOLE_MIN_DIVISOR: usize = 8;
/// Largest rectangle side as a fraction denominator
pub const RANDOM_HOLE_MAX_DIVISOR: usize = 3;

/// Mask luma strictly above this marks a pixel as missing
pub const MASK_THRESHOLD: u8 = 127;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to filled output filenames
pub const OUTPUT_SUFFIX: &str = "_filled";
/// Suffix added to boundary overlay filenames
pub const BOUNDARY_SUFFIX: &str = "_boundary";
/// Suffix of a mask image placed next to its input
pub const MASK_SUFFIX: &str = "_mask";
/// Overlay color for boundary pixels
pub const BOUNDARY_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Image extensions picked up when the target is a directory
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];
