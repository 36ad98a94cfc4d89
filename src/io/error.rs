//! Error types and context management for hole finding and filling

use crate::spatial::Pixel;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all hole filling operations
#[derive(Debug)]
pub enum FillError {
    /// The grid contains no sentinel value
    ///
    /// This is the expected terminal outcome once every hole has been filled,
    /// callers decide whether it means "nothing to do" or a user error.
    NoMissingPixel,

    /// Weighted average could not be formed for a hole pixel
    ///
    /// Occurs when:
    /// - The hole has no boundary pixels (it covers the whole grid)
    /// - Every candidate weight is zero or the weight sum is not finite
    DegenerateHole {
        /// Hole pixel whose value could not be reconstructed
        pixel: Pixel,
        /// Index of the hole within a multi-hole pass, when known
        hole_index: Option<usize>,
        /// Description of the failure
        reason: String,
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source data doesn't meet algorithm requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Logger backend could not be started
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl FillError {
    /// Check whether this is the benign "nothing left to fill" outcome
    pub const fn is_no_missing_pixel(&self) -> bool {
        matches!(self, Self::NoMissingPixel)
    }
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMissingPixel => write!(f, "No missing pixel in the image"),
            Self::DegenerateHole {
                pixel,
                hole_index,
                reason,
            } => match hole_index {
                Some(index) => write!(f, "Degenerate hole #{index} at pixel {pixel}: {reason}"),
                None => write!(f, "Degenerate hole at pixel {pixel}: {reason}"),
            },
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Logging { reason } => write!(f, "Failed to start logger: {reason}"),
        }
    }
}

impl std::error::Error for FillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for hole filling results
pub type Result<T> = std::result::Result<T, FillError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Index of the hole being processed
    pub hole_index: Option<usize>,
    /// Operation being performed, prefixed to the failure reason
    pub operation: Option<&'static str>,
}

/// Enriches error messages with pipeline state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the hole index context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the hole index applied
    fn with_hole_index(self, hole_index: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<FillError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only degenerate holes carry positional context
            if let FillError::DegenerateHole {
                hole_index, reason, ..
            } = &mut error
            {
                if context.hole_index.is_some() {
                    *hole_index = context.hole_index;
                }
                if let Some(operation) = context.operation {
                    *reason = format!("{operation}: {reason}");
                }
            }
            error
        })
    }

    fn with_hole_index(self, hole_index: usize) -> Result<T> {
        self.with_context(ErrorContext {
            hole_index: Some(hole_index),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for FillError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for FillError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FillError {
    FillError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a degenerate hole error for a pixel outside any multi-hole pass
pub fn degenerate_hole(pixel: Pixel, reason: &impl ToString) -> FillError {
    FillError::DegenerateHole {
        pixel,
        hole_index: None,
        reason: reason.to_string(),
    }
}

/// Create an invalid path error
pub fn path_error(msg: &str) -> FillError {
    FillError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
