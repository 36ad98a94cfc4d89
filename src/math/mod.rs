//! Mathematical utilities for the fill pass

/// Euclidean distance and inverse-distance weighting kernels
pub mod distance;
