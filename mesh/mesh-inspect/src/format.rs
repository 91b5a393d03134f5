//! Human-readable number formatting.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a byte count with one decimal and a base-1024 unit.
///
/// Zero is written `0 B`. Sizes of a terabyte and above stay in GB.
///
/// # Example
///
/// ```
/// use mesh_inspect::format_bytes;
///
/// assert_eq!(format_bytes(0), "0 B");
/// assert_eq!(format_bytes(512), "512.0 B");
/// assert_eq!(format_bytes(1536), "1.5 KB");
/// assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
// Precision: display only, one decimal
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.1} {}", UNITS[unit])
}

/// Format X, Y, Z extents with two decimals, joined by ` × `.
///
/// ```
/// use mesh_inspect::format_dimensions;
///
/// assert_eq!(format_dimensions([18.2, 2.0, 6.126]), "18.20 × 2.00 × 6.13");
/// ```
#[must_use]
pub fn format_dimensions(extents: [f64; 3]) -> String {
    let [x, y, z] = extents;
    format!("{x:.2} × {y:.2} × {z:.2}")
}
