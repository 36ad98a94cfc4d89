//! Input/output operations around the hole filling core

/// Command-line parsing and batch file processing
pub mod cli;
/// Constants and default parameters
pub mod configuration;
/// Error types and context management
pub mod error;
/// Grayscale image loading and export
pub mod image;
/// Logger backend setup
pub mod logging;
/// Hole sources applied before filling
pub mod mask;
/// Batch progress display
pub mod progress;
/// Boundary overlay rendering
pub mod visualization;
