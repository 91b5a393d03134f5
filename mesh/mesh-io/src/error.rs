//! Error types for mesh I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while loading a mesh.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Unknown file format (unrecognized extension).
    #[error("unsupported file format: .{extension} (expected .stl or .obj)")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// Binary STL shorter than its header claims.
    #[error("truncated STL: expected {expected} bytes, got {got}")]
    TruncatedStl {
        /// Size implied by the header and face count.
        expected: usize,
        /// Actual size of the data.
        got: usize,
    },

    /// The file parsed but holds no triangles.
    #[error("no mesh data found in {format} file")]
    NoGeometry {
        /// Name of the format that was parsed.
        format: &'static str,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Create an `InvalidContent` error pointing at a 1-based line number.
    #[must_use]
    pub fn at_line(line: usize, message: impl std::fmt::Display) -> Self {
        Self::InvalidContent {
            message: format!("line {line}: {message}"),
        }
    }

    /// Whether the error comes from the file contents rather than from
    /// reaching the file.
    #[must_use]
    pub const fn is_content_error(&self) -> bool {
        !matches!(
            self,
            Self::FileNotFound { .. } | Self::UnknownFormat { .. } | Self::Io(_)
        )
    }
}
