//! Inspection options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Recommended maximum triangle count for a jewelry model.
///
/// Advisory only: larger meshes are still analyzed, they just get a
/// [`Finding::TriangleLimitExceeded`](crate::Finding::TriangleLimitExceeded).
pub const TRIANGLE_LIMIT: usize = 200_000;

/// Options for [`inspect_path`](crate::inspect_path) and
/// [`assess`](crate::assess).
///
/// # Example
///
/// ```
/// use mesh_inspect::{InspectOptions, TRIANGLE_LIMIT};
///
/// assert_eq!(InspectOptions::default().triangle_limit, TRIANGLE_LIMIT);
///
/// let strict = InspectOptions::default().with_triangle_limit(50_000);
/// assert_eq!(strict.triangle_limit, 50_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InspectOptions {
    /// Triangle count above which a mesh is flagged.
    pub triangle_limit: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            triangle_limit: TRIANGLE_LIMIT,
        }
    }
}

impl InspectOptions {
    /// Set the advisory triangle limit.
    #[must_use]
    pub const fn with_triangle_limit(mut self, limit: usize) -> Self {
        self.triangle_limit = limit;
        self
    }
}
