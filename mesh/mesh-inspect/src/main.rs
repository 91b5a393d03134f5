//! `mesh-inspect`: dimensions and manifold checks for STL/OBJ files.
//!
//! ```text
//! mesh-inspect ring.stl band.obj
//! mesh-inspect --json --triangle-limit 100000 ring.stl
//! mesh-inspect --measure 0,0,0 18.2,0,0 ring.stl
//! ```
//!
//! Exits non-zero if any file fails to load or is malformed. Findings such
//! as open edges only fail the run with `--strict`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mesh_inspect::measure::{DistanceMeasurement, MeasurementPoints};
use mesh_inspect::types::Point3;
use mesh_inspect::{InspectOptions, Inspection, TRIANGLE_LIMIT, display_name, inspect_path};
use serde_json::json;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Inspect triangle meshes: dimensions, triangle counts and manifold checks.
#[derive(Parser)]
#[command(name = "mesh-inspect")]
#[command(about = "Inspect STL/OBJ meshes for dimensions and watertightness", long_about = None)]
#[command(version)]
struct Cli {
    /// Mesh files to inspect (.stl or .obj)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Recommended maximum triangle count
    #[arg(long, default_value_t = TRIANGLE_LIMIT)]
    triangle_limit: usize,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Measure the distance between two points, each given as X,Y,Z
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"], value_parser = parse_point)]
    measure: Option<Vec<Point3<f64>>>,

    /// Treat findings (open edges, triangle limit) as failures
    #[arg(long)]
    strict: bool,

    /// Log parsing and analysis details
    #[arg(short, long)]
    verbose: bool,
}

/// Parse `X,Y,Z` into a point.
fn parse_point(s: &str) -> Result<Point3<f64>, String> {
    let coords = s
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bad coordinate in {s:?}: {e}"))?;

    match coords.as_slice() {
        &[x, y, z] => Ok(Point3::new(x, y, z)),
        _ => Err(format!("expected X,Y,Z, got {} values", coords.len())),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Outcome for one file on the command line.
enum FileOutcome {
    Inspected(Inspection),
    Failed { file_name: String, message: String },
}

fn measurement(points: Option<&[Point3<f64>]>) -> Option<DistanceMeasurement> {
    let mut picked = MeasurementPoints::new();
    picked.extend(points?.iter().copied());
    picked.distance()
}

fn print_text(outcomes: &[FileOutcome], measured: Option<&DistanceMeasurement>) {
    for outcome in outcomes {
        match outcome {
            FileOutcome::Inspected(inspection) => println!("{inspection}"),
            FileOutcome::Failed { file_name, message } => {
                println!("File: {file_name}\n  Error: {message}\n");
            }
        }
    }

    if let Some(m) = measured {
        let mid = m.midpoint();
        println!("Measurement: {m}");
        println!("  Midpoint: {:.3}, {:.3}, {:.3}", mid.x, mid.y, mid.z);
    }
}

fn print_json(outcomes: &[FileOutcome], measured: Option<&DistanceMeasurement>) -> Result<()> {
    let files = outcomes
        .iter()
        .map(|outcome| match outcome {
            FileOutcome::Inspected(inspection) => {
                serde_json::to_value(inspection).context("serializing inspection")
            }
            FileOutcome::Failed { file_name, message } => Ok(json!({
                "file_name": file_name,
                "error": message,
            })),
        })
        .collect::<Result<Vec<_>>>()?;

    let output = json!({
        "files": files,
        "measurement": measured,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = InspectOptions::default().with_triangle_limit(cli.triangle_limit);
    debug!(?options, files = cli.files.len(), "starting inspection");

    let mut failed = false;
    let mut outcomes = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        match inspect_path(path, &options) {
            Ok(inspection) => {
                if cli.strict && !inspection.is_healthy() {
                    failed = true;
                }
                outcomes.push(FileOutcome::Inspected(inspection));
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "inspection failed");
                failed = true;
                outcomes.push(FileOutcome::Failed {
                    file_name: display_name(path),
                    message: e.to_string(),
                });
            }
        }
    }

    let measured = measurement(cli.measure.as_deref());
    if cli.json {
        print_json(&outcomes, measured.as_ref())?;
    } else {
        print_text(&outcomes, measured.as_ref());
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
