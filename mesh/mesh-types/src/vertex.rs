//! Vertex type.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex in 3D space.
///
/// Loaders only carry positions; normals and colors belong to the renderer.
///
/// # Example
///
/// ```
/// use mesh_types::{Vertex, Point3};
///
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
///
/// assert_eq!(v1, v2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Create a vertex at the given position.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self { position }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Check that every coordinate is finite (no NaN or infinity).
    ///
    /// ```
    /// use mesh_types::Vertex;
    ///
    /// assert!(Vertex::from_coords(1.0, 2.0, 3.0).is_finite());
    /// assert!(!Vertex::from_coords(f64::NAN, 0.0, 0.0).is_finite());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite())
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_array() {
        let v = Vertex::from([1.0, -2.0, 3.5]);
        assert!((v.position.x - 1.0).abs() < f64::EPSILON);
        assert!((v.position.y + 2.0).abs() < f64::EPSILON);
        assert!((v.position.z - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn infinite_coordinate_is_not_finite() {
        assert!(!Vertex::from_coords(0.0, f64::INFINITY, 0.0).is_finite());
        assert!(!Vertex::from_coords(0.0, 0.0, f64::NEG_INFINITY).is_finite());
    }
}
