//! Mesh integrity analysis for triangulated surfaces.
//!
//! Decides whether a mesh is a closed (watertight) manifold by counting how
//! many triangles use each undirected edge:
//!
//! - every edge used exactly twice: closed manifold
//! - edges used once: boundary edges, i.e. holes
//! - edges used three or more times: non-manifold "fin" edges
//!
//! The check is exact integer counting over vertex indices. It needs no
//! tolerances and is deterministic. Each call builds its own
//! [`EdgeUsageTable`] and drops it on return, so independent meshes can be
//! analyzed from several threads at once.
//!
//! A manifold result is not a full print-readiness verdict: self-intersections,
//! inverted normals and disconnected shells are out of reach of edge counting.
//!
//! # Layer 0
//!
//! This crate has no framework dependencies and does no I/O or logging.
//!
//! # Example
//!
//! ```
//! use mesh_types::shapes::icosahedron;
//! use mesh_integrity::analyze;
//!
//! let report = analyze(&icosahedron(1.0)).unwrap();
//! assert!(report.manifold);
//! assert_eq!(report.boundary_edge_count, 0);
//! assert_eq!(report.triangle_count, 20);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod analyze;
mod edges;
mod error;

pub use analyze::{IntegrityReport, analyze, analyze_edges, check_layout};
pub use edges::{EdgeUsageTable, UndirectedEdge};
pub use error::{IntegrityError, IntegrityResult};
