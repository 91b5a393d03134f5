//! Core mesh types for jewelry mesh inspection.
//!
//! This crate provides the buffers that the inspection crates operate on:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`IndexedMesh`] - Vertices plus an explicit, flat triangle index list
//! - [`TriangleSoup`] - Vertices only; every three consecutive vertices form a triangle
//! - [`SurfaceMesh`] - Either of the two, as produced by the file loaders
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layer 0 Crate
//!
//! This crate has no framework dependencies. It can be used in CLI tools,
//! WASM front ends and servers alike.
//!
//! # Index Modes
//!
//! The two mesh modes are kept as separate types rather than an optional
//! index field. Both implement [`MeshTopology`], which exposes the *corner*
//! sequence: the explicit index list for [`IndexedMesh`], or `0, 1, 2, ...`
//! for [`TriangleSoup`].
//!
//! The flat index list of an [`IndexedMesh`] is deliberately not forced into
//! `[u32; 3]` chunks. A list whose length is not a multiple of three, or one
//! that references missing vertices, is representable here and rejected by
//! the analysis crates instead of being silently truncated.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`. Jewelry
//! files are conventionally authored in millimeters.
//!
//! # Example
//!
//! ```
//! use mesh_types::{IndexedMesh, MeshTopology, Vertex};
//!
//! let mesh = IndexedMesh::from_parts(
//!     vec![
//!         Vertex::from_coords(0.0, 0.0, 0.0),
//!         Vertex::from_coords(1.0, 0.0, 0.0),
//!         Vertex::from_coords(0.5, 1.0, 0.0),
//!     ],
//!     vec![0, 1, 2],
//! );
//!
//! assert_eq!(mesh.triangle_count(), 1);
//! assert_eq!(mesh.face(0), Some([0, 1, 2]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
pub mod shapes;
mod traits;
mod vertex;

// Re-export core types
pub use bounds::Aabb;
pub use mesh::{IndexLayout, IndexedMesh, SurfaceMesh, TriangleSoup};
pub use shapes::unit_cube;
pub use traits::{MeshBounds, MeshTopology};
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
