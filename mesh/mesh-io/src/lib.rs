//! Mesh file loading for STL and OBJ.
//!
//! Just enough parsing to get a triangle buffer out of the two formats jewelry
//! CAD tools export most:
//!
//! - **STL** (Stereolithography) - Binary and ASCII, loaded as a
//!   [`TriangleSoup`](mesh_types::TriangleSoup)
//! - **OBJ** (Wavefront) - ASCII, loaded as an
//!   [`IndexedMesh`](mesh_types::IndexedMesh)
//!
//! No vertex welding happens. An STL file never shares vertices between
//! facets, so edge-based checks see every STL edge as open.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero framework dependencies**. Parsing is
//! reported through `tracing` at debug level.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::load_mesh;
//! use mesh_types::MeshTopology;
//!
//! // Format detected from .stl extension
//! let mesh = load_mesh("ring.stl").unwrap();
//! println!("{} triangles", mesh.triangle_count());
//! ```
//!
//! Data already in memory is parsed with [`parse_mesh`]:
//!
//! ```
//! use mesh_io::{MeshFormat, parse_mesh};
//! use mesh_types::MeshTopology;
//!
//! let obj = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
//! let mesh = parse_mesh(obj, MeshFormat::Obj).unwrap();
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod obj;
mod stl;

pub use error::{IoError, IoResult};
pub use obj::parse_obj;
pub use stl::parse_stl;

use std::path::Path;

use mesh_types::SurfaceMesh;
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MeshFormat {
    /// STL (Stereolithography) format.
    /// Supports binary and ASCII variants.
    Stl,
    /// OBJ (Wavefront) format.
    /// ASCII only, supports vertices and faces.
    Obj,
}

impl MeshFormat {
    /// Detect format from file extension, ignoring case.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "stl" => Some(Self::Stl),
            "obj" => Some(Self::Obj),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Stl => "stl",
            Self::Obj => "obj",
        }
    }

    /// Upper-case display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Stl => "STL",
            Self::Obj => "OBJ",
        }
    }
}

impl std::fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect the format of `path` or fail with [`IoError::UnknownFormat`].
///
/// # Errors
///
/// Returns [`IoError::UnknownFormat`] when the extension is missing or is
/// neither `.stl` nor `.obj`.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<MeshFormat> {
    let path = path.as_ref();
    MeshFormat::from_path(path).ok_or_else(|| IoError::UnknownFormat {
        extension: path
            .extension()
            .map_or_else(|| "(none)".to_string(), |e| e.to_string_lossy().into_owned()),
    })
}

/// Parse in-memory file contents in the given format.
///
/// STL yields [`SurfaceMesh::Soup`], OBJ yields [`SurfaceMesh::Indexed`].
///
/// # Errors
///
/// Returns the parser's error; see [`parse_stl`] and [`parse_obj`]. OBJ data
/// that is not UTF-8 fails with [`IoError::Utf8`].
pub fn parse_mesh(data: &[u8], format: MeshFormat) -> IoResult<SurfaceMesh> {
    match format {
        MeshFormat::Stl => parse_stl(data).map(SurfaceMesh::from),
        MeshFormat::Obj => parse_obj(std::str::from_utf8(data)?).map(SurfaceMesh::from),
    }
}

/// Read a whole file, mapping a missing file to [`IoError::FileNotFound`].
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Io`].
pub fn read_file<P: AsRef<Path>>(path: P) -> IoResult<Vec<u8>> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })
}

/// Load a mesh from a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file format cannot be determined from the extension
/// - The file cannot be read
/// - The file content is invalid for the detected format
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_mesh;
///
/// let mesh = load_mesh("model.stl").unwrap();
/// ```
pub fn load_mesh<P: AsRef<Path>>(path: P) -> IoResult<SurfaceMesh> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let data = read_file(path)?;

    let mesh = parse_mesh(&data, format)?;
    info!(
        path = %path.display(),
        %format,
        bytes = data.len(),
        "loaded mesh"
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path_stl() {
        assert_eq!(MeshFormat::from_path("model.stl"), Some(MeshFormat::Stl));
        assert_eq!(MeshFormat::from_path("model.STL"), Some(MeshFormat::Stl));
        assert_eq!(
            MeshFormat::from_path("/path/to/model.stl"),
            Some(MeshFormat::Stl)
        );
    }

    #[test]
    fn format_from_path_obj() {
        assert_eq!(MeshFormat::from_path("model.obj"), Some(MeshFormat::Obj));
        assert_eq!(MeshFormat::from_path("model.Obj"), Some(MeshFormat::Obj));
    }

    #[test]
    fn format_from_path_unknown() {
        assert_eq!(MeshFormat::from_path("model.ply"), None);
        assert_eq!(MeshFormat::from_path("model.3mf"), None);
        assert_eq!(MeshFormat::from_path("model"), None);
        assert_eq!(MeshFormat::from_path(""), None);
    }

    #[test]
    fn format_extension_and_name() {
        assert_eq!(MeshFormat::Stl.extension(), "stl");
        assert_eq!(MeshFormat::Obj.extension(), "obj");
        assert_eq!(MeshFormat::Obj.to_string(), "OBJ");
    }

    #[test]
    fn detect_format_reports_extension() {
        match detect_format("ring.3dm") {
            Err(IoError::UnknownFormat { extension }) => assert_eq!(extension, "3dm"),
            other => panic!("expected UnknownFormat, got {other:?}"),
        }
        match detect_format("README") {
            Err(IoError::UnknownFormat { extension }) => assert_eq!(extension, "(none)"),
            other => panic!("expected UnknownFormat, got {other:?}"),
        }
    }

    #[test]
    fn parse_mesh_picks_index_mode() {
        let obj = parse_mesh(b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n", MeshFormat::Obj);
        assert!(matches!(obj, Ok(SurfaceMesh::Indexed(_))));

        let stl = parse_mesh(
            b"solid t\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\nendfacet\nendsolid t\n",
            MeshFormat::Stl,
        );
        assert!(matches!(stl, Ok(SurfaceMesh::Soup(_))));
    }

    #[test]
    fn parse_mesh_rejects_non_utf8_obj() {
        let result = parse_mesh(&[b'v', b' ', 0xff, 0xfe], MeshFormat::Obj);
        assert!(matches!(result, Err(IoError::Utf8(_))));
    }
}
