//! Property-based tests for integrity analysis.
//!
//! These tests use proptest to generate random index buffers and verify the
//! analyzer's invariants.
//!
//! Run with: cargo test -p mesh-integrity -- proptest

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

use mesh_integrity::{IntegrityError, analyze, analyze_edges};
use mesh_types::shapes::{icosphere, torus};
use mesh_types::{IndexedMesh, MeshTopology, Vertex};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generate a vertex buffer of the given length. Positions never matter to
/// the analyzer, so a line of points is enough.
fn vertices(count: usize) -> Vec<Vertex> {
    (0..count)
        .map(|i| Vertex::from_coords(i as f64, 0.0, 0.0))
        .collect()
}

/// Generate a well-formed mesh: whole triangles, all indices in range.
fn arb_mesh(
    max_vertices: usize,
    max_triangles: usize,
) -> impl Strategy<Value = IndexedMesh> {
    (3..=max_vertices).prop_flat_map(move |n| {
        let triangle = prop::array::uniform3(0..n as u32);
        prop::collection::vec(triangle, 0..=max_triangles).prop_map(move |tris| {
            IndexedMesh::from_parts(vertices(n), tris.into_iter().flatten().collect())
        })
    })
}

/// Generate an arbitrary index buffer, well-formed or not.
fn arb_raw_mesh() -> impl Strategy<Value = IndexedMesh> {
    (0usize..20, prop::collection::vec(0u32..25, 0..60))
        .prop_map(|(n, indices)| IndexedMesh::from_parts(vertices(n), indices))
}

// =============================================================================
// Property Tests: Robustness
// =============================================================================

proptest! {
    /// Analysis never panics, whatever the index buffer looks like.
    #[test]
    fn analyze_never_panics(mesh in arb_raw_mesh()) {
        let _ = analyze(&mesh);
    }

    /// Malformed buffers are always rejected, well-formed ones never.
    #[test]
    fn malformed_iff_layout_violated(mesh in arb_raw_mesh()) {
        let n = mesh.vertices.len();
        let violated = n == 0
            || mesh.indices.len() % 3 != 0
            || mesh.indices.iter().any(|&i| i as usize >= n);

        match analyze(&mesh) {
            Ok(_) => prop_assert!(!violated),
            Err(e) => {
                prop_assert!(violated);
                prop_assert!(e.is_malformed());
            }
        }
    }

    /// A dangling trailing index is reported as a count problem.
    #[test]
    fn partial_triangle_rejected(mesh in arb_mesh(20, 30), extra in 0u32..3) {
        let mut mesh = mesh;
        mesh.indices.push(extra);
        let count = mesh.indices.len();
        prop_assert_eq!(
            analyze(&mesh),
            Err(IntegrityError::IndexCountNotMultipleOfThree { count })
        );
    }
}

// =============================================================================
// Property Tests: Invariance
// =============================================================================

proptest! {
    /// Running the analysis twice yields identical reports.
    #[test]
    fn analysis_is_deterministic(mesh in arb_mesh(30, 60)) {
        prop_assert_eq!(analyze(&mesh).unwrap(), analyze(&mesh).unwrap());
    }

    /// Reversing every triangle's winding leaves the report unchanged.
    #[test]
    fn winding_does_not_matter(mesh in arb_mesh(30, 60)) {
        let before = analyze(&mesh).unwrap();
        let mut flipped = mesh.clone();
        flipped.flip_winding();
        prop_assert_eq!(analyze(&flipped).unwrap(), before);
    }

    /// Triangle order does not matter.
    #[test]
    fn triangle_order_does_not_matter(
        (mesh, order) in arb_mesh(30, 60).prop_flat_map(|mesh| {
            let t = mesh.triangle_count();
            (Just(mesh), Just((0..t).collect::<Vec<_>>()).prop_shuffle())
        })
    ) {
        let shuffled = IndexedMesh::from_parts(
            mesh.vertices.clone(),
            order.iter().filter_map(|&t| mesh.face(t)).flatten().collect(),
        );
        prop_assert_eq!(analyze(&shuffled).unwrap(), analyze(&mesh).unwrap());
    }

    /// Rotating the corners of a triangle does not change its edges.
    #[test]
    fn corner_rotation_does_not_matter(mesh in arb_mesh(30, 60)) {
        let rotated = IndexedMesh::from_parts(
            mesh.vertices.clone(),
            mesh.faces().flat_map(|[a, b, c]| [b, c, a]).collect(),
        );
        prop_assert_eq!(analyze(&rotated).unwrap(), analyze(&mesh).unwrap());
    }

    /// Every triangle contributes exactly three edge uses.
    #[test]
    fn usage_sums_to_three_per_triangle(mesh in arb_mesh(30, 60)) {
        let table = analyze_edges(&mesh).unwrap();
        let total: u64 = table.iter().map(|(_, count)| u64::from(count)).sum();
        prop_assert_eq!(total, 3 * mesh.triangle_count() as u64);
    }

    /// The manifold flag agrees with the per-edge counts.
    #[test]
    fn manifold_flag_matches_counts(mesh in arb_mesh(12, 40)) {
        let report = analyze(&mesh).unwrap();
        let table = analyze_edges(&mesh).unwrap();
        let all_twice = table.iter().all(|(_, count)| count == 2);
        prop_assert_eq!(report.manifold, all_twice);
        if report.boundary_edge_count > 0 || report.non_manifold_edge_count > 0 {
            prop_assert!(!report.manifold);
        }
    }
}

// =============================================================================
// Property Tests: Closed shapes
// =============================================================================

proptest! {
    /// Tessellated spheres are closed at every level and size.
    #[test]
    fn spheres_are_closed(radius in 0.1f64..50.0, level in 0u32..3) {
        let report = analyze(&icosphere(radius, level)).unwrap();
        prop_assert!(report.manifold);
        prop_assert_eq!(report.boundary_edge_count, 0);
    }

    /// Ring bands are closed for any segment counts.
    #[test]
    fn ring_bands_are_closed(major in 3usize..64, minor in 3usize..16) {
        let report = analyze(&torus(9.0, 1.0, major, minor)).unwrap();
        prop_assert!(report.manifold);
        prop_assert_eq!(report.triangle_count, major * minor * 2);
    }
}
