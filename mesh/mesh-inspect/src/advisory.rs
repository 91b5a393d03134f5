//! Advisory findings derived from an integrity report.
//!
//! The integrity analysis only counts edges. Whether a count is a problem,
//! and whether a mesh is too dense to be practical, is decided here.

use mesh_integrity::IntegrityReport;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::options::InspectOptions;

/// Message shown when nothing was found.
pub const HEALTHY_MESSAGE: &str = "Mesh looks healthy and within triangle limits.";

/// One issue worth telling the user about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Finding {
    /// The mesh has no triangles, so its manifold flag means nothing.
    NothingToCheck,
    /// Edges used by a single triangle.
    OpenEdges(usize),
    /// Edges shared by three or more triangles.
    NonManifoldEdges(usize),
    /// More triangles than the recommended limit.
    TriangleLimitExceeded {
        /// Triangles in the mesh.
        count: usize,
        /// The limit in effect.
        limit: usize,
    },
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NothingToCheck => write!(f, "no triangles to check"),
            Self::OpenEdges(n) => write!(f, "{n} open edge(s)"),
            Self::NonManifoldEdges(n) => write!(f, "{n} non-manifold edge(s)"),
            Self::TriangleLimitExceeded { count, limit } => write!(
                f,
                "Triangle count {count} exceeds recommended limit of {limit}"
            ),
        }
    }
}

/// Turn an integrity report into advisory findings.
///
/// An empty list means the mesh looks healthy: it has triangles, every edge
/// is shared by exactly two of them, and the triangle count is within
/// `options.triangle_limit`.
///
/// # Example
///
/// ```
/// use mesh_integrity::analyze;
/// use mesh_inspect::{Finding, InspectOptions, assess};
/// use mesh_types::unit_cube;
///
/// let report = analyze(&unit_cube()).unwrap();
/// assert!(assess(&report, &InspectOptions::default()).is_empty());
///
/// let tight = InspectOptions::default().with_triangle_limit(10);
/// assert_eq!(
///     assess(&report, &tight),
///     vec![Finding::TriangleLimitExceeded { count: 12, limit: 10 }]
/// );
/// ```
#[must_use]
pub fn assess(report: &IntegrityReport, options: &InspectOptions) -> Vec<Finding> {
    let mut findings = Vec::new();

    if report.is_vacuous() {
        findings.push(Finding::NothingToCheck);
    }
    if report.boundary_edge_count > 0 {
        findings.push(Finding::OpenEdges(report.boundary_edge_count));
    }
    if report.non_manifold_edge_count > 0 {
        findings.push(Finding::NonManifoldEdges(report.non_manifold_edge_count));
    }
    if report.triangle_count > options.triangle_limit {
        findings.push(Finding::TriangleLimitExceeded {
            count: report.triangle_count,
            limit: options.triangle_limit,
        });
    }

    findings
}

/// One-line verdict for a list of findings.
///
/// ```
/// use mesh_inspect::{Finding, summarize};
///
/// assert_eq!(summarize(&[]), "Mesh looks healthy and within triangle limits.");
/// assert_eq!(
///     summarize(&[Finding::OpenEdges(4), Finding::NonManifoldEdges(1)]),
///     "Potential issues: 4 open edge(s) • 1 non-manifold edge(s)"
/// );
/// ```
#[must_use]
pub fn summarize(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return HEALTHY_MESSAGE.to_string();
    }

    let issues: Vec<String> = findings.iter().map(ToString::to_string).collect();
    format!("Potential issues: {}", issues.join(" • "))
}
