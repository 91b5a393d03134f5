//! Mesh inspection for jewelry CAD files.
//!
//! This umbrella crate re-exports the mesh-* crates and ties them into one
//! pipeline: load an STL or OBJ file, compute its dimensions, check that it
//! is a closed manifold, and flag anything worth a second look.
//!
//! # Quick Start
//!
//! ```no_run
//! use mesh_inspect::prelude::*;
//!
//! let inspection = inspect_path("ring.stl", &InspectOptions::default()).unwrap();
//!
//! println!("{inspection}");
//! for finding in &inspection.findings {
//!     println!("- {finding}");
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `IndexedMesh`, `TriangleSoup`, `Vertex`, `Aabb`
//! - [`io`] - STL and OBJ loading
//! - [`measure`] - Dimensions and point-to-point distance
//! - [`integrity`] - Closed-manifold analysis by edge counting
//!
//! # Feature Flags
//!
//! - `serde` (default) - Serialize inspections and options; required by the
//!   `mesh-inspect` binary for `--json`

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `IndexedMesh`, `TriangleSoup`, `Vertex`, `Aabb`.
pub use mesh_types as types;

/// STL and OBJ loading.
pub use mesh_io as io;

/// Dimensions and point-to-point distance.
pub use mesh_measure as measure;

/// Closed-manifold analysis.
pub use mesh_integrity as integrity;

mod advisory;
mod error;
mod format;
mod inspect;
mod options;

pub use advisory::{Finding, HEALTHY_MESSAGE, assess, summarize};
pub use error::{InspectError, InspectResult};
pub use format::{format_bytes, format_dimensions};
pub use inspect::{Inspection, display_name, inspect_bytes, inspect_path};
pub use options::{InspectOptions, TRIANGLE_LIMIT};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for mesh inspection.
///
/// # Usage
///
/// ```
/// use mesh_inspect::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{
        Aabb, IndexedMesh, MeshBounds, MeshTopology, SurfaceMesh, TriangleSoup, Vertex,
    };

    // I/O
    pub use mesh_io::{MeshFormat, load_mesh};

    // Analysis
    pub use mesh_integrity::{IntegrityReport, analyze};
    pub use mesh_measure::{DimensionalMetrics, MeasurementPoints, compute_dimensions};

    // Pipeline
    pub use crate::{Finding, InspectOptions, Inspection, assess, inspect_path};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use prelude::*;

        let mesh = IndexedMesh::new();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(InspectOptions::default().triangle_limit, TRIANGLE_LIMIT);
    }

    #[test]
    fn test_module_reexports() {
        let cube = types::unit_cube();
        let report = integrity::analyze(&cube).unwrap();
        let dims = measure::compute_dimensions(&cube).unwrap();

        assert!(report.manifold);
        assert_eq!(dims.triangle_count, report.triangle_count);
        assert_eq!(io::MeshFormat::from_path("a.stl"), Some(io::MeshFormat::Stl));
    }
}
