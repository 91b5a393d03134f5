//! Manifold analysis and the integrity report.

use mesh_types::MeshTopology;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edges::EdgeUsageTable;
use crate::error::{IntegrityError, IntegrityResult};

/// Outcome of a manifold check.
///
/// `manifold` is necessary but not sufficient for printable geometry: it
/// catches open boundaries and fin edges, not self-intersections, inverted
/// normals or disconnected shells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntegrityReport {
    /// Number of triangles analyzed.
    pub triangle_count: usize,
    /// Number of distinct undirected edges.
    pub edge_count: usize,
    /// True iff every edge is used by exactly two triangles.
    pub manifold: bool,
    /// Edges used by exactly one triangle.
    pub boundary_edge_count: usize,
    /// Edges used by three or more triangles.
    pub non_manifold_edge_count: usize,
}

impl IntegrityReport {
    /// True when there were no triangles to check.
    ///
    /// Such a report says `manifold == true` vacuously; treat it as
    /// "nothing to check", not as a healthy mesh.
    #[must_use]
    pub const fn is_vacuous(&self) -> bool {
        self.triangle_count == 0
    }

    /// Whether the surface has no holes (no boundary edges).
    #[must_use]
    pub const fn is_watertight(&self) -> bool {
        self.boundary_edge_count == 0
    }

    /// Total number of defective edges found.
    #[must_use]
    pub const fn defect_count(&self) -> usize {
        self.boundary_edge_count + self.non_manifold_edge_count
    }
}

impl std::fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Integrity Report:")?;
        writeln!(f, "  Triangles: {}", self.triangle_count)?;
        writeln!(f, "  Edges: {}", self.edge_count)?;

        if self.is_vacuous() {
            return writeln!(f, "  Status: nothing to check");
        }

        writeln!(
            f,
            "  Manifold: {}",
            if self.manifold { "Yes" } else { "No" }
        )?;
        if self.boundary_edge_count > 0 {
            writeln!(f, "    Open edges: {}", self.boundary_edge_count)?;
        }
        if self.non_manifold_edge_count > 0 {
            writeln!(f, "    Non-manifold edges: {}", self.non_manifold_edge_count)?;
        }

        Ok(())
    }
}

/// Check that a mesh can be analyzed.
///
/// Fails on the first problem found, in this order: no vertices, an index
/// sequence that does not split into whole triangles, then the first corner
/// that is either missing or past the end of the vertex buffer.
///
/// # Errors
///
/// Returns an [`IntegrityError`] describing the violation.
pub fn check_layout<M: MeshTopology + ?Sized>(mesh: &M) -> IntegrityResult<()> {
    let vertex_count = mesh.vertex_count();
    if vertex_count == 0 {
        return Err(IntegrityError::MissingPositions);
    }

    let count = mesh.corner_count();
    if count % 3 != 0 {
        return Err(IntegrityError::IndexCountNotMultipleOfThree { count });
    }

    for corner in 0..count {
        let Some(index) = mesh.corner(corner) else {
            return Err(IntegrityError::UnaddressableCorner { corner });
        };
        if index as usize >= vertex_count {
            return Err(IntegrityError::IndexOutOfRange {
                corner,
                index,
                vertex_count,
            });
        }
    }

    Ok(())
}

/// Validate a mesh and count how often each of its edges is used.
///
/// Use this instead of [`analyze`] when the individual defective edges are
/// needed, e.g. to highlight holes.
///
/// # Errors
///
/// Returns an [`IntegrityError`] if the mesh is malformed; see
/// [`check_layout`].
pub fn analyze_edges<M: MeshTopology + ?Sized>(mesh: &M) -> IntegrityResult<EdgeUsageTable> {
    check_layout(mesh)?;
    Ok(EdgeUsageTable::build(mesh.faces()))
}

/// Decide whether a mesh is a closed manifold and count its open edges.
///
/// Works on either index mode: an explicit index list, or a triangle soup
/// where vertex order is the index sequence. Only vertex *indices* are
/// compared, never positions, so an unwelded soup reports every edge as
/// open.
///
/// The result is a pure function of the index sequence. Triangle order and
/// winding direction do not affect it.
///
/// # Errors
///
/// Returns an [`IntegrityError`] if the mesh has no vertices, its index
/// count is not a multiple of 3, or an index is out of range. No partial
/// report is produced.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex};
/// use mesh_integrity::analyze;
///
/// let mesh = IndexedMesh::from_parts(
///     vec![
///         Vertex::from_coords(0.0, 0.0, 0.0),
///         Vertex::from_coords(1.0, 0.0, 0.0),
///         Vertex::from_coords(0.0, 1.0, 0.0),
///     ],
///     vec![0, 1, 2],
/// );
///
/// let report = analyze(&mesh).unwrap();
/// assert!(!report.manifold);
/// assert_eq!(report.boundary_edge_count, 3);
/// ```
pub fn analyze<M: MeshTopology + ?Sized>(mesh: &M) -> IntegrityResult<IntegrityReport> {
    let table = analyze_edges(mesh)?;

    Ok(IntegrityReport {
        triangle_count: mesh.triangle_count(),
        edge_count: table.edge_count(),
        manifold: table.is_closed_manifold(),
        boundary_edge_count: table.boundary_edge_count(),
        non_manifold_edge_count: table.non_manifold_edge_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::shapes::{cuboid, icosahedron, icosphere, torus};
    use mesh_types::{IndexLayout, IndexedMesh, MeshTopology, TriangleSoup, Vertex, unit_cube};

    /// Three vertices whose last corner has no index, as happens to a soup
    /// past `u32::MAX` vertices.
    struct HoleyCorners([Vertex; 3]);

    impl MeshTopology for HoleyCorners {
        fn vertices(&self) -> &[Vertex] {
            &self.0
        }

        fn corner_count(&self) -> usize {
            3
        }

        fn corner(&self, index: usize) -> Option<u32> {
            [Some(0), Some(1), None].get(index).copied().flatten()
        }

        fn layout(&self) -> IndexLayout {
            IndexLayout::Implicit
        }
    }

    fn simple_triangle() -> IndexedMesh {
        IndexedMesh::from_parts(
            vec![
                Vertex::from_coords(0.0, 0.0, 0.0),
                Vertex::from_coords(10.0, 0.0, 0.0),
                Vertex::from_coords(0.0, 10.0, 0.0),
            ],
            vec![0, 1, 2],
        )
    }

    fn fan(wings: u32) -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.push_vertex(Vertex::from_coords(0.0, 0.0, 1.0));
        for i in 0..wings {
            let angle = f64::from(i);
            let tip = mesh.push_vertex(Vertex::from_coords(angle.cos(), angle.sin(), 0.5));
            mesh.push_triangle(0, 1, tip);
        }
        mesh
    }

    #[test]
    fn closed_shapes_are_manifold() {
        for mesh in [
            unit_cube(),
            cuboid(3.0, 1.0, 2.0),
            icosahedron(1.0),
            icosphere(5.0, 3),
            torus(8.5, 1.2, 48, 12),
        ] {
            let report = analyze(&mesh).unwrap();
            assert!(report.manifold);
            assert!(report.is_watertight());
            assert_eq!(report.boundary_edge_count, 0);
            assert_eq!(report.non_manifold_edge_count, 0);
            assert_eq!(report.edge_count * 2, report.triangle_count * 3);
        }
    }

    #[test]
    fn single_triangle_is_open() {
        let report = analyze(&simple_triangle()).unwrap();

        assert_eq!(report.triangle_count, 1);
        assert!(!report.manifold);
        assert_eq!(report.boundary_edge_count, 3);
    }

    #[test]
    fn reversed_winding_gives_same_report() {
        let mut ico = icosahedron(1.0);
        let before = analyze(&ico).unwrap();
        ico.flip_winding();
        assert_eq!(analyze(&ico).unwrap(), before);
    }

    #[test]
    fn zero_triangles_is_vacuous() {
        let mut mesh = simple_triangle();
        mesh.indices.clear();

        let report = analyze(&mesh).unwrap();
        assert!(report.manifold);
        assert!(report.is_vacuous());
        assert_eq!(report.boundary_edge_count, 0);
        assert_eq!(report.triangle_count, 0);
    }

    #[test]
    fn three_triangles_on_one_edge() {
        let report = analyze(&fan(3)).unwrap();

        assert!(!report.manifold);
        assert_eq!(report.non_manifold_edge_count, 1);
        // Each wing keeps its two outer edges open
        assert_eq!(report.boundary_edge_count, 6);
    }

    #[test]
    fn fin_on_closed_mesh_still_non_manifold() {
        let mut cube = unit_cube();
        let extra = cube.push_vertex(Vertex::from_coords(2.0, 2.0, 2.0));
        // Edge (0, 1) is shared by two cube triangles already
        cube.push_triangle(0, 1, extra);

        let report = analyze(&cube).unwrap();
        assert!(!report.manifold);
        assert_eq!(report.non_manifold_edge_count, 1);
        assert_eq!(report.boundary_edge_count, 2);
    }

    #[test]
    fn index_count_not_multiple_of_three() {
        let mut mesh = simple_triangle();
        mesh.indices.push(0);

        assert_eq!(
            analyze(&mesh),
            Err(IntegrityError::IndexCountNotMultipleOfThree { count: 4 })
        );
    }

    #[test]
    fn index_out_of_range() {
        let mut mesh = simple_triangle();
        mesh.indices[2] = 3;

        assert_eq!(
            analyze(&mesh),
            Err(IntegrityError::IndexOutOfRange {
                corner: 2,
                index: 3,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn missing_positions() {
        let mesh = IndexedMesh::from_parts(Vec::new(), vec![0, 1, 2]);
        assert_eq!(analyze(&mesh), Err(IntegrityError::MissingPositions));

        let soup = TriangleSoup::new();
        assert_eq!(analyze(&soup), Err(IntegrityError::MissingPositions));
    }

    #[test]
    fn soup_with_partial_triangle_is_malformed() {
        let mut soup = simple_triangle().to_soup();
        soup.vertices.push(Vertex::from_coords(1.0, 1.0, 1.0));

        assert!(analyze(&soup).is_err_and(|e| e.is_malformed()));
    }

    #[test]
    fn unwelded_soup_is_all_open() {
        let soup = unit_cube().to_soup();
        let report = analyze(&soup).unwrap();

        assert_eq!(report.triangle_count, 12);
        assert!(!report.manifold);
        assert_eq!(report.boundary_edge_count, 36);
    }

    #[test]
    fn soup_and_sequential_indices_agree() {
        let soup = icosahedron(1.0).to_soup();
        assert_eq!(analyze(&soup).unwrap(), analyze(&soup.to_indexed()).unwrap());
    }

    #[test]
    fn analyze_edges_lists_hole() {
        let mut cube = unit_cube();
        // Drop the last triangle: opens a three-edge hole
        cube.indices.truncate(cube.indices.len() - 3);

        let table = analyze_edges(&cube).unwrap();
        let hole: Vec<_> = table
            .sorted_boundary_edges()
            .into_iter()
            .map(|e| e.endpoints())
            .collect();
        assert_eq!(hole, vec![(1, 5), (1, 6), (5, 6)]);
    }

    #[test]
    fn report_display() {
        let report = analyze(&simple_triangle()).unwrap();
        let display = report.to_string();

        assert!(display.contains("Triangles: 1"));
        assert!(display.contains("Manifold: No"));
        assert!(display.contains("Open edges: 3"));
    }

    #[test]
    fn vacuous_report_display() {
        let report = IntegrityReport {
            manifold: true,
            ..Default::default()
        };
        assert!(report.to_string().contains("nothing to check"));
    }

    #[test]
    fn defect_count() {
        let report = IntegrityReport {
            boundary_edge_count: 3,
            non_manifold_edge_count: 2,
            ..Default::default()
        };
        assert_eq!(report.defect_count(), 5);
    }

    #[test]
    fn unaddressable_corner_rejected() {
        let mesh = HoleyCorners([
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
        ]);

        let err = analyze(&mesh).unwrap_err();
        assert_eq!(err, IntegrityError::UnaddressableCorner { corner: 2 });
        assert!(err.is_malformed());
    }
}
