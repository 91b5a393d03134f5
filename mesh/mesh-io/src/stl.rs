//! STL (Stereolithography) loading.
//!
//! Supports both ASCII and binary STL. Every facet carries its own three
//! corners, so the result is a [`TriangleSoup`]: no vertex is shared between
//! triangles.
//!
//! # Format Detection
//!
//! Many binary exporters write "solid" at the start of the 80-byte header, so
//! the keyword alone is not trusted:
//! - data whose length is exactly `84 + 50 * n` for the header's face count
//!   `n` is binary
//! - otherwise data starting with "solid" (after optional whitespace) is ASCII
//! - anything else is binary, and must be long enough for its face count
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored, often contains file info)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector (often not accurate)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (usually 0)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```

use mesh_types::{TriangleSoup, Vertex};
use tracing::{debug, warn};

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Header plus the face count.
const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Parse STL data, binary or ASCII.
///
/// # Errors
///
/// - [`IoError::TruncatedStl`] if binary data is shorter than its face count
///   requires
/// - [`IoError::InvalidContent`] for an ASCII facet without exactly three
///   vertices, or a malformed `vertex` line
/// - [`IoError::Utf8`] / [`IoError::ParseFloat`] for unreadable ASCII
/// - [`IoError::NoGeometry`] if the file holds no facets
///
/// # Example
///
/// ```
/// use mesh_io::parse_stl;
/// use mesh_types::MeshTopology;
///
/// let data = b"solid tri
///   facet normal 0 0 1
///     outer loop
///       vertex 0 0 0
///       vertex 1 0 0
///       vertex 0 1 0
///     endloop
///   endfacet
/// endsolid tri";
///
/// let soup = parse_stl(data).unwrap();
/// assert_eq!(soup.triangle_count(), 1);
/// ```
pub fn parse_stl(data: &[u8]) -> IoResult<TriangleSoup> {
    let soup = if is_exact_binary(data) {
        debug!(bytes = data.len(), "binary STL (size matches face count)");
        parse_binary(data)?
    } else if starts_with_solid(data) {
        debug!(bytes = data.len(), "ASCII STL");
        parse_ascii(std::str::from_utf8(data)?)?
    } else {
        debug!(bytes = data.len(), "binary STL");
        parse_binary(data)?
    };

    if soup.vertices.is_empty() {
        return Err(IoError::NoGeometry { format: "STL" });
    }

    Ok(soup)
}

/// Face count stored after the header, if the data is long enough to hold it.
fn face_count(data: &[u8]) -> Option<u32> {
    let bytes = data.get(HEADER_SIZE..PREAMBLE_SIZE)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Byte length a binary STL with `faces` triangles must have.
fn binary_size(faces: u32) -> usize {
    PREAMBLE_SIZE + faces as usize * TRIANGLE_SIZE
}

fn is_exact_binary(data: &[u8]) -> bool {
    face_count(data).is_some_and(|n| binary_size(n) == data.len())
}

fn starts_with_solid(data: &[u8]) -> bool {
    data.trim_ascii_start()
        .get(..5)
        .is_some_and(|head| head.eq_ignore_ascii_case(b"solid"))
}

fn parse_binary(data: &[u8]) -> IoResult<TriangleSoup> {
    let Some(faces) = face_count(data) else {
        return Err(IoError::TruncatedStl {
            expected: PREAMBLE_SIZE,
            got: data.len(),
        });
    };

    let expected = binary_size(faces);
    if data.len() < expected {
        return Err(IoError::TruncatedStl {
            expected,
            got: data.len(),
        });
    }
    if data.len() > expected {
        warn!(
            extra = data.len() - expected,
            "ignoring trailing bytes after last STL facet"
        );
    }

    let mut soup = TriangleSoup::with_capacity(faces as usize);
    for facet in data[PREAMBLE_SIZE..expected].chunks_exact(TRIANGLE_SIZE) {
        // Skip normal (12 bytes), read 3 vertices (36 bytes total)
        soup.push_triangle([
            read_vertex(&facet[12..24]),
            read_vertex(&facet[24..36]),
            read_vertex(&facet[36..48]),
        ]);
    }

    debug!(triangles = faces, "parsed binary STL");
    Ok(soup)
}

/// Read a vertex from 12 bytes (3 f32s).
fn read_vertex(buf: &[u8]) -> Vertex {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Vertex::from_coords(f64::from(x), f64::from(y), f64::from(z))
}

fn parse_ascii(text: &str) -> IoResult<TriangleSoup> {
    let mut soup = TriangleSoup::new();
    let mut facet: Vec<Vertex> = Vec::with_capacity(3);
    let mut in_facet = false;

    for (line_no, line) in text.lines().enumerate() {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        if keyword.eq_ignore_ascii_case("facet") {
            in_facet = true;
            facet.clear();
        } else if keyword.eq_ignore_ascii_case("vertex") {
            if !in_facet {
                return Err(IoError::at_line(line_no + 1, "vertex outside of a facet"));
            }
            let coords: Vec<&str> = parts.collect();
            if coords.len() != 3 {
                return Err(IoError::at_line(
                    line_no + 1,
                    format!("vertex needs 3 coordinates, found {}", coords.len()),
                ));
            }
            facet.push(Vertex::from_coords(
                coords[0].parse()?,
                coords[1].parse()?,
                coords[2].parse()?,
            ));
        } else if keyword.eq_ignore_ascii_case("endfacet") {
            if !in_facet {
                return Err(IoError::at_line(line_no + 1, "endfacet without a matching facet"));
            }
            let &[a, b, c] = facet.as_slice() else {
                return Err(IoError::at_line(
                    line_no + 1,
                    format!("facet has {} vertices, expected 3", facet.len()),
                ));
            };
            soup.push_triangle([a, b, c]);
            facet.clear();
            in_facet = false;
        } else if keyword.eq_ignore_ascii_case("endsolid") {
            break;
        }
        // "solid", "outer loop" and "endloop" carry nothing we need
    }

    if in_facet {
        warn!(vertices = facet.len(), "dropping unterminated facet at end of ASCII STL");
    }

    debug!(triangles = soup.vertices.len() / 3, "parsed ASCII STL");
    Ok(soup)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::cast_possible_truncation
)]
mod tests {
    use super::*;
    use mesh_types::MeshTopology;

    /// Encode triangles as binary STL with the given header text.
    fn binary_stl(header: &[u8], triangles: &[[[f32; 3]; 3]]) -> Vec<u8> {
        let mut data = vec![0u8; HEADER_SIZE];
        data[..header.len()].copy_from_slice(header);
        data.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
        for tri in triangles {
            data.extend_from_slice(&[0u8; 12]);
            for corner in tri {
                for c in corner {
                    data.extend_from_slice(&c.to_le_bytes());
                }
            }
            data.extend_from_slice(&0u16.to_le_bytes());
        }
        data
    }

    const TRIANGLE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

    const ASCII_TRIANGLE: &[u8] = b"solid test
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test";

    #[test]
    fn binary_parsing() {
        let data = binary_stl(b"exported", &[TRIANGLE, TRIANGLE]);
        let soup = parse_stl(&data).unwrap();

        assert_eq!(soup.triangle_count(), 2);
        assert_eq!(soup.vertex_count(), 6);
        assert_eq!(soup.vertices[1].position.x, 1.0);
    }

    #[test]
    fn binary_with_solid_header() {
        let data = binary_stl(b"solid part exported by a CAD tool", &[TRIANGLE]);
        let soup = parse_stl(&data).unwrap();

        assert_eq!(soup.triangle_count(), 1);
        assert_eq!(soup.vertices[2].position.y, 1.0);
    }

    #[test]
    fn ascii_parsing() {
        let soup = parse_stl(ASCII_TRIANGLE).unwrap();

        assert_eq!(soup.triangle_count(), 1);
        assert_eq!(soup.vertex_count(), 3);
    }

    #[test]
    fn ascii_keywords_are_case_insensitive() {
        let upper = String::from_utf8_lossy(ASCII_TRIANGLE).to_uppercase();
        let soup = parse_stl(upper.as_bytes()).unwrap();
        assert_eq!(soup.triangle_count(), 1);
    }

    #[test]
    fn ascii_scientific_notation() {
        let data = b"solid s
facet normal 0 0 1
outer loop
vertex 1.5e+01 -2.0E-1 0
vertex 1 0 0
vertex 0 1 0
endloop
endfacet
endsolid s";
        let soup = parse_stl(data).unwrap();
        assert_eq!(soup.vertices[0].position.x, 15.0);
        assert_eq!(soup.vertices[0].position.y, -0.2);
    }

    #[test]
    fn ascii_facet_with_four_vertices_rejected() {
        let data = b"solid quad
facet normal 0 0 1
outer loop
vertex 0 0 0
vertex 1 0 0
vertex 1 1 0
vertex 0 1 0
endloop
endfacet
endsolid quad";

        let err = parse_stl(data).unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { .. }));
        assert!(err.to_string().contains("line 9"));
        assert!(err.to_string().contains("4 vertices"));
    }

    #[test]
    fn ascii_stray_endfacet_rejected() {
        let text = String::from_utf8_lossy(ASCII_TRIANGLE)
            .replace("  endfacet\n", "  endfacet\n  endfacet\n");

        let err = parse_stl(text.as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::InvalidContent { .. }));
        assert!(err.to_string().contains("line 9"));
    }

    #[test]
    fn ascii_unterminated_facet_dropped() {
        let data = b"solid s
facet normal 0 0 1
outer loop
vertex 0 0 0
vertex 1 0 0
vertex 0 1 0
endloop
endfacet
facet normal 0 0 1
outer loop
vertex 0 0 1
vertex 1 0 1
";
        let soup = parse_stl(data).unwrap();
        assert_eq!(soup.triangle_count(), 1);
    }

    #[test]
    fn ascii_bad_number() {
        let text =
            String::from_utf8_lossy(ASCII_TRIANGLE).replace("vertex 1 0 0", "vertex 1 zero 0");
        let err = parse_stl(text.as_bytes()).unwrap_err();
        assert!(matches!(err, IoError::ParseFloat(_)));
    }

    #[test]
    fn truncated_binary() {
        let mut data = binary_stl(b"", &[TRIANGLE, TRIANGLE]);
        data.truncate(data.len() - 30);

        let err = parse_stl(&data).unwrap_err();
        assert!(matches!(
            err,
            IoError::TruncatedStl {
                expected: 184,
                got: 154
            }
        ));
    }

    #[test]
    fn too_short_for_header() {
        let err = parse_stl(&[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            IoError::TruncatedStl {
                expected: 84,
                got: 3
            }
        ));
    }

    #[test]
    fn trailing_bytes_ignored() {
        let mut data = binary_stl(b"", &[TRIANGLE]);
        data.extend_from_slice(b"junk");

        let soup = parse_stl(&data).unwrap();
        assert_eq!(soup.triangle_count(), 1);
    }

    #[test]
    fn empty_file_has_no_geometry() {
        let data = binary_stl(b"", &[]);
        assert!(matches!(
            parse_stl(&data),
            Err(IoError::NoGeometry { format: "STL" })
        ));

        assert!(matches!(
            parse_stl(b"solid empty\nendsolid empty\n"),
            Err(IoError::NoGeometry { .. })
        ));
    }

    #[test]
    fn facets_do_not_share_vertices() {
        let data = binary_stl(b"", &[TRIANGLE, TRIANGLE]);
        let soup = parse_stl(&data).unwrap();

        let faces: Vec<_> = soup.faces().collect();
        assert_eq!(faces, vec![[0, 1, 2], [3, 4, 5]]);
    }
}
