//! The inspection pipeline: load, measure, analyze, assess.

use std::path::Path;

use mesh_integrity::{IntegrityReport, analyze};
use mesh_io::{MeshFormat, detect_format, parse_mesh, read_file};
use mesh_measure::{DimensionalMetrics, compute_dimensions};
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::advisory::{Finding, assess, summarize};
use crate::error::InspectResult;
use crate::format::{format_bytes, format_dimensions};
use crate::options::InspectOptions;

/// Everything learned about one mesh file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Inspection {
    /// File name, without directories.
    pub file_name: String,
    /// Size of the file in bytes.
    pub file_size: u64,
    /// Detected file format.
    pub format: MeshFormat,
    /// Bounding-box dimensions and element counts.
    pub metrics: DimensionalMetrics,
    /// Edge-usage analysis.
    pub integrity: IntegrityReport,
    /// Advisory findings; empty when the mesh looks healthy.
    pub findings: Vec<Finding>,
    /// Triangle limit the findings were assessed against.
    pub triangle_limit: usize,
}

impl Inspection {
    /// Whether no finding was raised.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.findings.is_empty()
    }

    /// One-line verdict, as shown after the details.
    #[must_use]
    pub fn summary(&self) -> String {
        summarize(&self.findings)
    }
}

impl std::fmt::Display for Inspection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "File: {}", self.file_name)?;
        writeln!(f, "  Size: {}", format_bytes(self.file_size))?;
        writeln!(f, "  Format: {}", self.format)?;
        writeln!(f, "  Triangles: {}", self.metrics.triangle_count)?;
        writeln!(f, "  Vertices: {}", self.metrics.vertex_count)?;
        writeln!(
            f,
            "  Dimensions (XYZ): {}",
            format_dimensions(self.metrics.extents())
        )?;
        writeln!(
            f,
            "  Triangle limit: {} (recommended maximum)",
            self.triangle_limit
        )?;
        writeln!(
            f,
            "  Manifold: {}",
            if self.integrity.manifold { "Yes" } else { "No" }
        )?;
        writeln!(f, "  Open edges: {}", self.integrity.boundary_edge_count)?;
        if self.integrity.non_manifold_edge_count > 0 {
            writeln!(
                f,
                "  Non-manifold edges: {}",
                self.integrity.non_manifold_edge_count
            )?;
        }
        writeln!(f, "  {}", self.summary())
    }
}

/// Inspect a mesh file on disk.
///
/// The extension is checked before the file is read, so an unsupported file
/// is rejected without touching it.
///
/// # Errors
///
/// Returns an [`InspectError`](crate::InspectError) if the format is
/// unsupported, the file cannot be read or parsed, or the mesh is malformed.
/// Advisory findings are not errors.
///
/// # Example
///
/// ```no_run
/// use mesh_inspect::{InspectOptions, inspect_path};
///
/// let inspection = inspect_path("ring.stl", &InspectOptions::default()).unwrap();
/// println!("{inspection}");
/// ```
pub fn inspect_path<P: AsRef<Path>>(
    path: P,
    options: &InspectOptions,
) -> InspectResult<Inspection> {
    let path = path.as_ref();
    detect_format(path)?;
    let data = read_file(path)?;

    inspect_bytes(&display_name(path), &data, options)
}

/// The label an inspection carries for `path`: its final component, or the
/// whole path when there is none.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Inspect file contents already in memory.
///
/// `file_name` is only used to pick the format and to label the result.
///
/// # Errors
///
/// See [`inspect_path`].
///
/// # Example
///
/// ```
/// use mesh_inspect::{Finding, InspectOptions, inspect_bytes};
///
/// let obj = b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
/// let inspection = inspect_bytes("tri.obj", obj, &InspectOptions::default()).unwrap();
///
/// assert_eq!(inspection.metrics.triangle_count, 1);
/// assert_eq!(inspection.findings, vec![Finding::OpenEdges(3)]);
/// ```
pub fn inspect_bytes(
    file_name: &str,
    data: &[u8],
    options: &InspectOptions,
) -> InspectResult<Inspection> {
    let format = detect_format(file_name)?;
    let mesh = parse_mesh(data, format)?;
    debug!(file = file_name, %format, "parsed");

    let metrics = compute_dimensions(&mesh)?;
    let integrity = analyze(&mesh)?;
    let findings = assess(&integrity, options);

    if findings.is_empty() {
        info!(
            file = file_name,
            triangles = integrity.triangle_count,
            "mesh looks healthy"
        );
    } else {
        warn!(file = file_name, issues = %summarize(&findings), "mesh has findings");
    }

    Ok(Inspection {
        file_name: file_name.to_string(),
        file_size: data.len() as u64,
        format,
        metrics,
        integrity,
        findings,
        triangle_limit: options.triangle_limit,
    })
}
