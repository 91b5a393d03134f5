//! Error types for the inspection pipeline.

use mesh_integrity::IntegrityError;
use mesh_io::IoError;
use mesh_measure::MeasureError;
use thiserror::Error;

/// Result type alias for inspection.
pub type InspectResult<T> = Result<T, InspectError>;

/// Anything that stops a file from being inspected.
///
/// Advisory findings are not errors: a mesh with open edges still inspects
/// successfully and reports them in [`Inspection::findings`].
///
/// [`Inspection::findings`]: crate::Inspection::findings
#[derive(Debug, Error)]
pub enum InspectError {
    /// The file could not be read or parsed.
    #[error("failed to load mesh: {0}")]
    Io(#[from] IoError),

    /// The mesh buffers are malformed.
    #[error("malformed mesh: {0}")]
    Integrity(#[from] IntegrityError),

    /// Dimensions could not be computed.
    #[error("cannot measure mesh: {0}")]
    Measure(#[from] MeasureError),
}

impl InspectError {
    /// Whether the mesh loaded but its buffers are unusable.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Integrity(_) | Self::Measure(_))
    }
}
