//! Wavefront OBJ loading.
//!
//! Only geometry is read: `v` positions and `f` faces. Texture coordinates,
//! normals, materials, smoothing groups and line elements are skipped, and
//! all objects and groups are merged into one buffer.
//!
//! Face references may be `i`, `i/t`, `i//n` or `i/t/n`. Positive indices
//! are 1-based; negative ones count back from the last vertex defined so
//! far. Polygons with more than three corners are split into a fan around
//! their first corner.

use mesh_types::{IndexedMesh, Vertex};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Parse OBJ text into an indexed mesh.
///
/// # Errors
///
/// - [`IoError::InvalidContent`] naming the offending line for a malformed
///   vertex, a face with fewer than three corners, or a face index that is
///   zero or does not refer to a vertex defined before it
/// - [`IoError::NoGeometry`] if the file holds no faces
///
/// # Example
///
/// ```
/// use mesh_io::parse_obj;
/// use mesh_types::MeshTopology;
///
/// let text = "
/// v 0 0 0
/// v 1 0 0
/// v 1 1 0
/// v 0 1 0
/// f 1 2 3 4
/// ";
///
/// let mesh = parse_obj(text).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
pub fn parse_obj(text: &str) -> IoResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();
    let mut polygon: Vec<u32> = Vec::with_capacity(4);
    let mut groups = 0usize;

    for (line_no, raw) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let line = raw.split('#').next().unwrap_or_default();
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("v") => {
                let vertex =
                    parse_position(parts).map_err(|msg| IoError::at_line(line_no, msg))?;
                mesh.vertices.push(vertex);
            }
            Some("f") => {
                polygon.clear();
                for reference in parts {
                    let index = resolve_index(reference, mesh.vertices.len())
                        .map_err(|msg| IoError::at_line(line_no, msg))?;
                    polygon.push(index);
                }
                if polygon.len() < 3 {
                    return Err(IoError::at_line(
                        line_no,
                        format!("face needs at least 3 vertices, found {}", polygon.len()),
                    ));
                }
                for pair in polygon[1..].windows(2) {
                    mesh.push_triangle(polygon[0], pair[0], pair[1]);
                }
            }
            Some("o" | "g") => groups += 1,
            _ => {}
        }
    }

    if mesh.indices.is_empty() {
        return Err(IoError::NoGeometry { format: "OBJ" });
    }

    debug!(
        vertices = mesh.vertices.len(),
        triangles = mesh.indices.len() / 3,
        groups,
        "parsed OBJ"
    );
    Ok(mesh)
}

/// Parse `x y z [w]`. The optional weight is ignored.
fn parse_position<'a>(mut parts: impl Iterator<Item = &'a str>) -> Result<Vertex, String> {
    let mut coord = |axis: &str| -> Result<f64, String> {
        let token = parts
            .next()
            .ok_or_else(|| format!("vertex is missing its {axis} coordinate"))?;
        token
            .parse()
            .map_err(|e| format!("bad {axis} coordinate {token:?}: {e}"))
    };

    let x = coord("x")?;
    let y = coord("y")?;
    let z = coord("z")?;
    Ok(Vertex::from_coords(x, y, z))
}

/// Resolve one face reference to a 0-based vertex index.
fn resolve_index(reference: &str, defined: usize) -> Result<u32, String> {
    let position = reference.split('/').next().unwrap_or_default();
    let index: i64 = position
        .parse()
        .map_err(|e| format!("bad face index {reference:?}: {e}"))?;

    let resolved = match index {
        0 => return Err("face index 0 is not allowed (indices are 1-based)".to_string()),
        i if i > 0 => usize::try_from(i - 1).ok(),
        i => usize::try_from(i.unsigned_abs())
            .ok()
            .and_then(|back| defined.checked_sub(back)),
    };

    resolved
        .filter(|&i| i < defined)
        .and_then(|i| u32::try_from(i).ok())
        .ok_or_else(|| format!("face index {index} is out of range ({defined} vertices defined)"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use mesh_types::MeshTopology;

    const QUAD_CUBE: &str = "\
# unit cube, one quad per side
o cube
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1
vn 0 0 -1
f 1 4 3 2
f 5 6 7 8
f 1 2 6 5
f 2 3 7 6
f 3 4 8 7
f 4 1 5 8
";

    #[test]
    fn quads_are_fan_triangulated() {
        let mesh = parse_obj(QUAD_CUBE).unwrap();

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.face(0), Some([0, 3, 2]));
        assert_eq!(mesh.face(1), Some([0, 2, 1]));
    }

    #[test]
    fn pentagon_fan() {
        let text = "v 0 0 0\nv 1 0 0\nv 2 1 0\nv 1 2 0\nv 0 1 0\nf 1 2 3 4 5\n";
        let mesh = parse_obj(text).unwrap();

        let faces: Vec<_> = mesh.faces().collect();
        assert_eq!(faces, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
    }

    #[test]
    fn reference_forms() {
        let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vn 0 0 1
f 1/1 2/1 3/1
f 1//1 2//1 3//1
f 1/1/1 2/1/1 3/1/1
";
        let mesh = parse_obj(text).unwrap();

        assert_eq!(mesh.triangle_count(), 3);
        assert!(mesh.faces().all(|f| f == [0, 1, 2]));
    }

    #[test]
    fn negative_indices_are_relative() {
        let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
f -3 -2 -1
v 5 5 5
f -4 -3 -1
";
        let mesh = parse_obj(text).unwrap();

        assert_eq!(mesh.face(0), Some([0, 1, 2]));
        assert_eq!(mesh.face(1), Some([0, 1, 3]));
    }

    #[test]
    fn homogeneous_weight_ignored() {
        let mesh = parse_obj("v 1 2 3 0.5\nv 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap();
        let p = mesh.vertices[0].position;
        assert_eq!((p.x, p.y, p.z), (1.0, 2.0, 3.0));
    }

    #[test]
    fn groups_are_merged() {
        let text = "\
o first
v 0 0 0
v 1 0 0
v 0 1 0
f 1 2 3
g second
v 0 0 1
f 1 2 4
";
        let mesh = parse_obj(text).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn comments_and_unknown_statements_skipped() {
        let text = "\
mtllib ring.mtl
v 0 0 0 # origin
v 1 0 0
v 0 1 0
usemtl gold
s off
l 1 2
f 1 2 3 # the only face
";
        let mesh = parse_obj(text).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn zero_index_names_line() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n").unwrap_err();

        assert!(matches!(err, IoError::InvalidContent { .. }));
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn out_of_range_index() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n").unwrap_err();
        assert!(err.to_string().contains("out of range"));

        let err = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -4 1 2\n").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn face_too_small() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err();
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn bad_vertex() {
        let err = parse_obj("v 0 0\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
        assert!(err.to_string().contains("z coordinate"));

        let err = parse_obj("v 0 nope 0\n").unwrap_err();
        assert!(err.to_string().contains("y coordinate"));
    }

    #[test]
    fn no_faces_is_no_geometry() {
        let err = parse_obj("# points only\nv 0 0 0\nv 1 0 0\n").unwrap_err();
        assert!(matches!(err, IoError::NoGeometry { format: "OBJ" }));

        assert!(matches!(parse_obj(""), Err(IoError::NoGeometry { .. })));
    }
}
