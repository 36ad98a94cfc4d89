//! Spatial data structures for hole discovery
//!
//! This module contains spatial-related functionality including:
//! - Pixel coordinates and connectivity-based adjacency
//! - The intensity grid with its missing-value sentinel

/// Intensity grid storage and sentinel handling
pub mod grid;
/// Pixel coordinates and neighbour enumeration
pub mod pixel;

pub use grid::ImageGrid;
pub use pixel::{Connectivity, Pixel};
