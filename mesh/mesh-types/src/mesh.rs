//! Indexed meshes, triangle soups, and the enum that carries either.

use crate::{MeshTopology, Vertex};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a mesh's triangles reference its vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexLayout {
    /// An explicit index list; triangles may share vertices.
    Explicit,
    /// No index list; vertex `i` belongs to triangle `i / 3`.
    Implicit,
}

/// A triangle mesh with an explicit, flat index list.
///
/// Triangle `t` is `indices[3t..3t + 3]`. The list is kept flat so that a
/// length that is not a multiple of three can reach the analyzer and be
/// reported instead of being truncated on construction.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex, MeshTopology};
///
/// let mut mesh = IndexedMesh::new();
/// let a = mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
/// let b = mesh.push_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
/// let c = mesh.push_vertex(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.push_triangle(a, b, c);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Flat triangle index list into `vertices`.
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Create a mesh from a vertex buffer and a flat index list.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Create a mesh from raw coordinate and index data.
    ///
    /// * `positions` - Flat array `[x0, y0, z0, x1, y1, z1, ...]`
    /// * `indices` - Flat triangle index list, copied as-is
    ///
    /// Returns `None` if `positions.len()` is not divisible by 3. The index
    /// list is not checked here.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, MeshTopology};
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let mesh = IndexedMesh::from_raw(&positions, &[0, 1, 2]).unwrap();
    /// assert_eq!(mesh.vertex_count(), 3);
    /// assert_eq!(mesh.triangle_count(), 1);
    ///
    /// assert!(IndexedMesh::from_raw(&positions[..4], &[0, 1, 2]).is_none());
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Option<Self> {
        if positions.len() % 3 != 0 {
            return None;
        }

        let vertices = positions
            .chunks_exact(3)
            .map(|c| Vertex::from_coords(c[0], c[1], c[2]))
            .collect();

        Some(Self {
            vertices,
            indices: indices.to_vec(),
        })
    }

    /// Append a vertex and return its index.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
    pub fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Append a triangle by vertex indices.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Reverse the winding of every complete triangle.
    ///
    /// A trailing partial triangle is left untouched.
    pub fn flip_winding(&mut self) {
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
    }

    /// Translate all vertices by `offset`.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Expand into a triangle soup: every triangle gets its own three
    /// vertices, so no vertex is shared any more.
    ///
    /// This is what an STL export of the mesh looks like. Corners that point
    /// outside the vertex buffer are dropped together with their triangle.
    #[must_use]
    pub fn to_soup(&self) -> TriangleSoup {
        let vertices = self
            .faces()
            .filter_map(|[a, b, c]| {
                Some([
                    *self.vertex(a as usize)?,
                    *self.vertex(b as usize)?,
                    *self.vertex(c as usize)?,
                ])
            })
            .flatten()
            .collect();
        TriangleSoup { vertices }
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    fn corner_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    fn corner(&self, index: usize) -> Option<u32> {
        self.indices.get(index).copied()
    }

    #[inline]
    fn layout(&self) -> IndexLayout {
        IndexLayout::Explicit
    }
}

/// A mesh without an index list.
///
/// Every three consecutive vertices form one triangle. This is the natural
/// shape of STL data, where each facet carries its own copy of its corners.
///
/// # Example
///
/// ```
/// use mesh_types::{TriangleSoup, Vertex, MeshTopology};
///
/// let mut soup = TriangleSoup::new();
/// soup.push_triangle([
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 1.0, 0.0),
/// ]);
///
/// assert_eq!(soup.triangle_count(), 1);
/// assert_eq!(soup.face(0), Some([0, 1, 2]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleSoup {
    /// Vertex data, three per triangle.
    pub vertices: Vec<Vertex>,
}

impl TriangleSoup {
    /// Create an empty soup.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Create an empty soup with room for `triangle_count` triangles.
    #[inline]
    #[must_use]
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Wrap an existing vertex buffer.
    #[inline]
    #[must_use]
    pub const fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Append one triangle.
    pub fn push_triangle(&mut self, corners: [Vertex; 3]) {
        self.vertices.extend_from_slice(&corners);
    }

    /// Reverse the winding of every complete triangle.
    pub fn flip_winding(&mut self) {
        for tri in self.vertices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
    }

    /// Convert to an indexed mesh with the sequential index list
    /// `0, 1, 2, ...`.
    ///
    /// No welding happens: the result has exactly the same topology.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
    pub fn to_indexed(&self) -> IndexedMesh {
        let len = self.vertices.len() as u32;
        IndexedMesh {
            vertices: self.vertices.clone(),
            indices: (0..len).collect(),
        }
    }
}

impl MeshTopology for TriangleSoup {
    #[inline]
    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    fn corner_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn corner(&self, index: usize) -> Option<u32> {
        if index < self.vertices.len() {
            u32::try_from(index).ok()
        } else {
            None
        }
    }

    #[inline]
    fn layout(&self) -> IndexLayout {
        IndexLayout::Implicit
    }
}

/// A surface mesh in either index mode.
///
/// This is what the file loaders hand out: STL data arrives as a
/// [`TriangleSoup`], OBJ data as an [`IndexedMesh`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SurfaceMesh {
    /// Explicit index list.
    Indexed(IndexedMesh),
    /// Implicit sequential triangles.
    Soup(TriangleSoup),
}

impl Default for SurfaceMesh {
    fn default() -> Self {
        Self::Indexed(IndexedMesh::new())
    }
}

impl From<IndexedMesh> for SurfaceMesh {
    fn from(mesh: IndexedMesh) -> Self {
        Self::Indexed(mesh)
    }
}

impl From<TriangleSoup> for SurfaceMesh {
    fn from(soup: TriangleSoup) -> Self {
        Self::Soup(soup)
    }
}

impl MeshTopology for SurfaceMesh {
    fn vertices(&self) -> &[Vertex] {
        match self {
            Self::Indexed(mesh) => mesh.vertices(),
            Self::Soup(soup) => soup.vertices(),
        }
    }

    fn corner_count(&self) -> usize {
        match self {
            Self::Indexed(mesh) => mesh.corner_count(),
            Self::Soup(soup) => soup.corner_count(),
        }
    }

    fn corner(&self, index: usize) -> Option<u32> {
        match self {
            Self::Indexed(mesh) => mesh.corner(index),
            Self::Soup(soup) => soup.corner(index),
        }
    }

    fn layout(&self) -> IndexLayout {
        match self {
            Self::Indexed(_) => IndexLayout::Explicit,
            Self::Soup(_) => IndexLayout::Implicit,
        }
    }
}
