//! Closed reference shapes.
//!
//! Small watertight meshes used as fixtures by the analysis crates and their
//! benchmarks. All of them use CCW winding when viewed from outside.

use std::collections::HashMap;
use std::f64::consts::TAU;

use crate::{IndexedMesh, Vertex};

/// Create a unit cube from (0,0,0) to (1,1,1).
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.triangle_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    let mut cube = cuboid(1.0, 1.0, 1.0);
    cube.translate(nalgebra::Vector3::new(0.5, 0.5, 0.5));
    cube
}

/// Create a box of size `width × height × depth` (X × Y × Z) centered at
/// the origin, built on its 8 corners.
///
/// # Example
///
/// ```
/// use mesh_types::{shapes::cuboid, MeshBounds};
///
/// let bar = cuboid(4.0, 2.0, 1.0);
/// let size = bar.bounds().size();
/// assert!((size.x - 4.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn cuboid(width: f64, height: f64, depth: f64) -> IndexedMesh {
    let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
    let mut mesh = IndexedMesh::with_capacity(8, 12);

    for [x, y, z] in [
        [-hx, -hy, -hz], // 0
        [hx, -hy, -hz],  // 1
        [hx, hy, -hz],   // 2
        [-hx, hy, -hz],  // 3
        [-hx, -hy, hz],  // 4
        [hx, -hy, hz],   // 5
        [hx, hy, hz],    // 6
        [-hx, hy, hz],   // 7
    ] {
        mesh.push_vertex(Vertex::from_coords(x, y, z));
    }

    for [a, b, c] in [
        // -Z
        [0, 2, 1],
        [0, 3, 2],
        // +Z
        [4, 5, 6],
        [4, 6, 7],
        // -Y
        [0, 1, 5],
        [0, 5, 4],
        // +Y
        [3, 7, 6],
        [3, 6, 2],
        // -X
        [0, 4, 7],
        [0, 7, 3],
        // +X
        [1, 2, 6],
        [1, 6, 5],
    ] {
        mesh.push_triangle(a, b, c);
    }

    mesh
}

/// Create a regular icosahedron with its vertices on a sphere of `radius`.
///
/// 12 vertices, 20 triangles, 30 edges.
#[must_use]
pub fn icosahedron(radius: f64) -> IndexedMesh {
    let phi = f64::midpoint(1.0, 5.0_f64.sqrt());
    let a = 1.0;
    let b = 1.0 / phi;

    let corners = [
        [0.0, b, -a],
        [b, a, 0.0],
        [-b, a, 0.0],
        [0.0, b, a],
        [0.0, -b, a],
        [-a, 0.0, b],
        [0.0, -b, -a],
        [a, 0.0, -b],
        [a, 0.0, b],
        [-a, 0.0, -b],
        [b, -a, 0.0],
        [-b, -a, 0.0],
    ];

    let mut mesh = IndexedMesh::with_capacity(12, 20);
    for [x, y, z] in corners {
        let len = z.mul_add(z, x.mul_add(x, y * y)).sqrt();
        let s = radius / len;
        mesh.push_vertex(Vertex::from_coords(x * s, y * s, z * s));
    }

    for [i, j, k] in [
        [0, 1, 2],
        [3, 2, 1],
        [3, 4, 5],
        [3, 8, 4],
        [0, 6, 7],
        [0, 9, 6],
        [4, 10, 11],
        [6, 11, 10],
        [2, 5, 9],
        [11, 9, 5],
        [1, 7, 8],
        [10, 8, 7],
        [3, 5, 2],
        [3, 1, 8],
        [0, 2, 9],
        [0, 7, 1],
        [6, 9, 11],
        [6, 10, 7],
        [4, 11, 5],
        [4, 8, 10],
    ] {
        mesh.push_triangle(i, j, k);
    }

    mesh
}

/// Create a tessellated sphere by repeatedly splitting every icosahedron
/// triangle into four and projecting the new vertices onto the sphere.
///
/// Level `n` has `20 · 4ⁿ` triangles. Shared edges share their midpoint, so
/// the result stays closed.
#[must_use]
pub fn icosphere(radius: f64, subdivisions: u32) -> IndexedMesh {
    let mut mesh = icosahedron(radius);
    for _ in 0..subdivisions {
        mesh = subdivide_sphere(&mesh, radius);
    }
    mesh
}

fn subdivide_sphere(mesh: &IndexedMesh, radius: f64) -> IndexedMesh {
    let mut out = IndexedMesh::with_capacity(mesh.vertices.len() * 4, mesh.indices.len() * 4 / 3);
    out.vertices.clone_from(&mesh.vertices);

    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();

    for tri in mesh.indices.chunks_exact(3) {
        let (v0, v1, v2) = (tri[0], tri[1], tri[2]);

        let m01 = midpoint_index(v0, v1, &mut out, &mut midpoints, radius);
        let m12 = midpoint_index(v1, v2, &mut out, &mut midpoints, radius);
        let m20 = midpoint_index(v2, v0, &mut out, &mut midpoints, radius);

        out.push_triangle(v0, m01, m20);
        out.push_triangle(v1, m12, m01);
        out.push_triangle(v2, m20, m12);
        out.push_triangle(m01, m12, m20);
    }

    out
}

/// Create a torus around the Z axis, the usual stand-in for a plain ring
/// band.
///
/// * `major_radius` - Distance from the Z axis to the center of the tube
/// * `minor_radius` - Tube radius
/// * `major_segments` - Segments around the ring (clamped to at least 3)
/// * `minor_segments` - Segments around the tube (clamped to at least 3)
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
// Segment counts are small; u32 indices and f64 angles are exact here
pub fn torus(
    major_radius: f64,
    minor_radius: f64,
    major_segments: usize,
    minor_segments: usize,
) -> IndexedMesh {
    let n_major = major_segments.max(3);
    let n_minor = minor_segments.max(3);
    let mut mesh = IndexedMesh::with_capacity(n_major * n_minor, n_major * n_minor * 2);

    for i in 0..n_major {
        let u = TAU * (i as f64) / (n_major as f64);
        let (su, cu) = u.sin_cos();
        for j in 0..n_minor {
            let v = TAU * (j as f64) / (n_minor as f64);
            let (sv, cv) = v.sin_cos();
            let ring = minor_radius.mul_add(cv, major_radius);
            mesh.push_vertex(Vertex::from_coords(ring * cu, ring * su, minor_radius * sv));
        }
    }

    let index = |i: usize, j: usize| ((i % n_major) * n_minor + (j % n_minor)) as u32;
    for i in 0..n_major {
        for j in 0..n_minor {
            let a = index(i, j);
            let b = index(i + 1, j);
            let c = index(i + 1, j + 1);
            let d = index(i, j + 1);
            mesh.push_triangle(a, b, c);
            mesh.push_triangle(a, c, d);
        }
    }

    mesh
}

fn midpoint_index(
    v1: u32,
    v2: u32,
    mesh: &mut IndexedMesh,
    midpoints: &mut HashMap<(u32, u32), u32>,
    radius: f64,
) -> u32 {
    let key = if v1 < v2 { (v1, v2) } else { (v2, v1) };
    if let Some(&idx) = midpoints.get(&key) {
        return idx;
    }

    let p1 = mesh.vertices[v1 as usize].position;
    let p2 = mesh.vertices[v2 as usize].position;
    let mid = (p1.coords + p2.coords) * 0.5;
    let on_sphere = mid * (radius / mid.norm());

    let idx = mesh.push_vertex(Vertex::from_coords(on_sphere.x, on_sphere.y, on_sphere.z));
    midpoints.insert(key, idx);
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MeshBounds, MeshTopology};
    use approx::assert_relative_eq;

    #[test]
    fn unit_cube_spans_zero_to_one() {
        let bounds = unit_cube().bounds();
        assert_relative_eq!(bounds.min.x, 0.0);
        assert_relative_eq!(bounds.max.z, 1.0);
    }

    #[test]
    fn cuboid_is_centered() {
        let bar = cuboid(6.0, 2.0, 1.5);
        let bounds = bar.bounds();
        assert_relative_eq!(bounds.center().coords.norm(), 0.0);
        assert_relative_eq!(bounds.size().x, 6.0);
        assert_relative_eq!(bounds.size().y, 2.0);
        assert_relative_eq!(bounds.size().z, 1.5);
    }

    #[test]
    fn icosahedron_counts() {
        let ico = icosahedron(2.0);
        assert_eq!(ico.vertex_count(), 12);
        assert_eq!(ico.triangle_count(), 20);
        for v in &ico.vertices {
            assert_relative_eq!(v.position.coords.norm(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn icosphere_counts() {
        let sphere = icosphere(1.0, 2);
        assert_eq!(sphere.triangle_count(), 20 * 16);
        // V - E + F = 2 with E = 3F / 2
        assert_eq!(sphere.vertex_count(), 2 + sphere.triangle_count() / 2);
    }

    #[test]
    fn torus_counts() {
        let ring = torus(9.0, 1.0, 32, 8);
        assert_eq!(ring.vertex_count(), 32 * 8);
        assert_eq!(ring.triangle_count(), 32 * 8 * 2);
        let size = ring.bounds().size();
        assert_relative_eq!(size.z, 2.0, epsilon = 1e-9);
    }
}
