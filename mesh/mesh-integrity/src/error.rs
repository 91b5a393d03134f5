//! Error types for integrity analysis.

use thiserror::Error;

/// Result type for integrity analysis.
pub type IntegrityResult<T> = Result<T, IntegrityError>;

/// Reasons a mesh is rejected before analysis.
///
/// Every variant describes a malformed mesh. No partial report is produced
/// for any of them, and the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// The mesh has no vertex positions at all.
    #[error("malformed mesh: no vertex positions")]
    MissingPositions,

    /// The index sequence does not split into whole triangles.
    #[error("malformed mesh: index count {count} is not a multiple of 3")]
    IndexCountNotMultipleOfThree {
        /// Length of the (explicit or implicit) index sequence.
        count: usize,
    },

    /// A triangle references a vertex that does not exist.
    #[error(
        "malformed mesh: index {index} at position {corner} is out of range (mesh has {vertex_count} vertices)"
    )]
    IndexOutOfRange {
        /// Position of the offending entry in the index sequence.
        corner: usize,
        /// The offending vertex index.
        index: u32,
        /// Total number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A corner has no `u32` vertex index, e.g. a soup with more than
    /// `u32::MAX` vertices.
    #[error("malformed mesh: corner {corner} cannot be addressed with a 32-bit index")]
    UnaddressableCorner {
        /// Position of the corner in the index sequence.
        corner: usize,
    },
}

impl IntegrityError {
    /// Whether this error describes malformed input.
    ///
    /// True for every current variant.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MissingPositions
                | Self::IndexCountNotMultipleOfThree { .. }
                | Self::IndexOutOfRange { .. }
                | Self::UnaddressableCorner { .. }
        )
    }
}
