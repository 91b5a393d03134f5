//! Measurement and dimensioning tools for triangle meshes.
//!
//! # Features
//!
//! - **Dimensions**: bounding-box extents with vertex and triangle counts
//! - **Distance**: point-to-point distance with per-axis components
//! - **Picking**: a two-point selection that always measures the latest pair
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero framework dependencies**. It does no
//! I/O and no logging.
//!
//! # Example
//!
//! ```
//! use mesh_types::shapes::cuboid;
//! use mesh_measure::compute_dimensions;
//!
//! let band = cuboid(18.0, 2.0, 4.0);
//! let dims = compute_dimensions(&band).unwrap();
//!
//! assert!((dims.width - 18.0).abs() < 1e-10);
//! assert!((dims.height - 2.0).abs() < 1e-10);
//! assert!((dims.depth - 4.0).abs() < 1e-10);
//! ```
//!
//! # Coordinate System
//!
//! Extents are reported in file axes with no reorientation:
//! - X: width
//! - Y: height
//! - Z: depth

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod dimensions;
mod distance;
mod error;

pub use dimensions::{DimensionalMetrics, compute_dimensions};
pub use distance::{DistanceMeasurement, MeasurementPoints, measure_distance};
pub use error::{MeasureError, MeasureResult};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
