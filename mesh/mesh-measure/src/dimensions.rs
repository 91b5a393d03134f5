//! Mesh dimension extraction.
//!
//! Bounding-box extents plus the vertex and triangle counts shown next to
//! them in a viewer.

use mesh_types::{MeshBounds, MeshTopology, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};

/// Dimensional summary of a mesh.
///
/// Sizes follow the axis order of the file: `width` is the X extent,
/// `height` the Y extent and `depth` the Z extent.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_measure::compute_dimensions;
///
/// let dims = compute_dimensions(&unit_cube()).unwrap();
///
/// assert!((dims.width - 1.0).abs() < 1e-10);
/// assert!((dims.height - 1.0).abs() < 1e-10);
/// assert!((dims.depth - 1.0).abs() < 1e-10);
/// assert_eq!(dims.vertex_count, 8);
/// assert_eq!(dims.triangle_count, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionalMetrics {
    /// Bounding box minimum point.
    pub min: Point3<f64>,
    /// Bounding box maximum point.
    pub max: Point3<f64>,
    /// Center of bounding box.
    pub center: Point3<f64>,
    /// X extent.
    pub width: f64,
    /// Y extent.
    pub height: f64,
    /// Z extent.
    pub depth: f64,
    /// Number of vertices in the buffer.
    pub vertex_count: usize,
    /// Number of complete triangles.
    pub triangle_count: usize,
}

impl DimensionalMetrics {
    /// Extents as a vector `(width, height, depth)`.
    #[must_use]
    pub const fn size(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.height, self.depth)
    }

    /// Extents as an array, in X, Y, Z order.
    #[must_use]
    pub const fn extents(&self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }

    /// Get the longest dimension.
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.width.max(self.height).max(self.depth)
    }

    /// Get the shortest dimension.
    #[must_use]
    pub fn min_extent(&self) -> f64 {
        self.width.min(self.height).min(self.depth)
    }

    /// Diagonal length of the bounding box.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.size().norm()
    }
}

/// Compute the bounding-box dimensions and element counts of a mesh.
///
/// Only the vertex buffer is read; the index list is neither used nor
/// checked, so this works on meshes the integrity analysis would reject.
/// The triangle count is the number of complete triangles in the index
/// sequence.
///
/// # Errors
///
/// - [`MeasureError::EmptyMesh`] if the mesh has no vertices
/// - [`MeasureError::NonFiniteVertex`] if a coordinate is NaN or infinite
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_measure::compute_dimensions;
///
/// let mesh = IndexedMesh::from_parts(
///     vec![
///         Vertex::from_coords(0.0, 0.0, 0.0),
///         Vertex::from_coords(10.0, 0.0, 0.0),
///         Vertex::from_coords(5.0, 5.0, 0.0),
///     ],
///     vec![0, 1, 2],
/// );
///
/// let dims = compute_dimensions(&mesh).unwrap();
/// assert!((dims.width - 10.0).abs() < 1e-10);
/// assert!((dims.height - 5.0).abs() < 1e-10);
/// assert!(dims.depth.abs() < 1e-10);
/// ```
pub fn compute_dimensions<M: MeshTopology + ?Sized>(mesh: &M) -> MeasureResult<DimensionalMetrics> {
    let vertices = mesh.vertices();
    if vertices.is_empty() {
        return Err(MeasureError::EmptyMesh);
    }

    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(MeasureError::NonFiniteVertex { index });
    }

    let bounds = mesh.bounds();
    let size = bounds.size();

    Ok(DimensionalMetrics {
        min: bounds.min,
        max: bounds.max,
        center: bounds.center(),
        width: size.x,
        height: size.y,
        depth: size.z,
        vertex_count: vertices.len(),
        triangle_count: mesh.triangle_count(),
    })
}
