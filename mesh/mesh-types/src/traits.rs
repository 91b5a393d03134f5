//! Traits for mesh types.

use crate::{Aabb, IndexLayout, Vertex};

/// Read access to a triangulated surface, regardless of index mode.
///
/// A mesh is seen as a vertex buffer plus a sequence of *corners*: vertex
/// indices, three per triangle. Implementations only provide the corner
/// lookup; face iteration is derived from it.
///
/// Nothing here validates the corner sequence. A corner count that is not a
/// multiple of three leaves a trailing partial triangle that [`faces`] skips,
/// and corners may point past the vertex buffer. Analysis code is expected
/// to check both before trusting the topology.
///
/// [`faces`]: MeshTopology::faces
pub trait MeshTopology {
    /// The vertex buffer.
    fn vertices(&self) -> &[Vertex];

    /// Length of the (explicit or implicit) index sequence.
    fn corner_count(&self) -> usize;

    /// Vertex index stored at corner `index`.
    ///
    /// Returns `None` if `index >= corner_count()`.
    fn corner(&self, index: usize) -> Option<u32>;

    /// Whether corners come from an explicit index list or vertex order.
    fn layout(&self) -> IndexLayout;

    /// Get the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of complete triangles: `corner_count() / 3`.
    fn triangle_count(&self) -> usize {
        self.corner_count() / 3
    }

    /// Check if the mesh has no vertices or no triangles.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.triangle_count() == 0
    }

    /// Get a vertex by index.
    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices().get(index)
    }

    /// Get triangle `index` as three vertex indices.
    ///
    /// Returns `None` past the last complete triangle.
    fn face(&self, index: usize) -> Option<[u32; 3]> {
        let base = index.checked_mul(3)?;
        Some([
            self.corner(base)?,
            self.corner(base + 1)?,
            self.corner(base + 2)?,
        ])
    }

    /// Iterate over the corner sequence.
    ///
    /// Corners without an index are skipped. A [`crate::TriangleSoup`] can
    /// only address its first `u32::MAX + 1` vertices this way.
    fn corners(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.corner_count()).filter_map(move |i| self.corner(i))
    }

    /// Iterate over all complete triangles in sequence order.
    fn faces(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        (0..self.triangle_count()).filter_map(move |t| self.face(t))
    }
}

/// Bounding-box queries, available on every [`MeshTopology`].
pub trait MeshBounds: MeshTopology {
    /// Compute the axis-aligned bounding box of the vertex buffer.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices().iter().map(|v| &v.position))
    }
}

impl<T: MeshTopology + ?Sized> MeshBounds for T {}
