//! Point-to-point measurement.
//!
//! [`measure_distance`] measures between two known points. [`MeasurementPoints`]
//! holds the points a user picks one at a time, keeping only the latest two.

use mesh_types::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance measurement result between two points.
///
/// # Example
///
/// ```
/// use mesh_measure::measure_distance;
/// use nalgebra::Point3;
///
/// let from = Point3::origin();
/// let to = Point3::new(3.0, 4.0, 0.0);
/// let result = measure_distance(from, to);
///
/// assert!((result.distance - 5.0).abs() < 1e-10); // 3-4-5 triangle
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceMeasurement {
    /// Start point.
    pub from: Point3<f64>,
    /// End point.
    pub to: Point3<f64>,
    /// Euclidean distance.
    pub distance: f64,
    /// Absolute distance along X axis.
    pub dx: f64,
    /// Absolute distance along Y axis.
    pub dy: f64,
    /// Absolute distance along Z axis.
    pub dz: f64,
}

impl DistanceMeasurement {
    /// Get the direction vector (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector3<f64> {
        self.to - self.from
    }

    /// Get the normalized direction vector.
    ///
    /// Returns `None` if the distance is zero.
    #[must_use]
    pub fn direction_normalized(&self) -> Option<Vector3<f64>> {
        if self.distance.abs() < f64::EPSILON {
            None
        } else {
            Some(self.direction() / self.distance)
        }
    }

    /// Get the midpoint between from and to.
    #[must_use]
    pub fn midpoint(&self) -> Point3<f64> {
        Point3::from((self.from.coords + self.to.coords) / 2.0)
    }
}

impl std::fmt::Display for DistanceMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.3} (dx {:.3}, dy {:.3}, dz {:.3})",
            self.distance, self.dx, self.dy, self.dz
        )
    }
}

/// Measure distance between two points.
///
/// # Example
///
/// ```
/// use mesh_measure::measure_distance;
/// use nalgebra::Point3;
///
/// let result = measure_distance(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0)
/// );
///
/// assert!((result.distance - 10.0).abs() < 1e-10);
/// assert!((result.dx - 10.0).abs() < 1e-10);
/// assert!((result.dy).abs() < 1e-10);
/// assert!((result.dz).abs() < 1e-10);
/// ```
#[must_use]
pub fn measure_distance(from: Point3<f64>, to: Point3<f64>) -> DistanceMeasurement {
    let diff = to - from;
    DistanceMeasurement {
        from,
        to,
        distance: diff.norm(),
        dx: diff.x.abs(),
        dy: diff.y.abs(),
        dz: diff.z.abs(),
    }
}

/// The most recently picked measurement points, at most two.
///
/// Picking a third point drops the oldest, so the pair always spans the
/// last two picks.
///
/// # Example
///
/// ```
/// use mesh_measure::MeasurementPoints;
/// use nalgebra::Point3;
///
/// let mut points = MeasurementPoints::new();
/// points.push(Point3::new(0.0, 0.0, 0.0));
/// assert!(points.distance().is_none());
///
/// points.push(Point3::new(2.0, 0.0, 0.0));
/// points.push(Point3::new(2.0, 5.0, 0.0));
///
/// let m = points.distance().unwrap();
/// assert!((m.distance - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementPoints {
    points: Vec<Point3<f64>>,
}

impl MeasurementPoints {
    const CAPACITY: usize = 2;

    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(Self::CAPACITY),
        }
    }

    /// Record a picked point, dropping the oldest when two are already held.
    pub fn push(&mut self, point: Point3<f64>) {
        if self.points.len() == Self::CAPACITY {
            self.points.remove(0);
        }
        self.points.push(point);
    }

    /// Points currently held, oldest first.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Number of points held (0, 1 or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has been picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Measurement between the two held points, if there are two.
    #[must_use]
    pub fn distance(&self) -> Option<DistanceMeasurement> {
        match self.points.as_slice() {
            [from, to] => Some(measure_distance(*from, *to)),
            _ => None,
        }
    }

    /// Forget all picked points.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Extend<Point3<f64>> for MeasurementPoints {
    fn extend<I: IntoIterator<Item = Point3<f64>>>(&mut self, iter: I) {
        for point in iter {
            self.push(point);
        }
    }
}
