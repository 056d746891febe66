//! # Text Rendering
//!
//! Writes a float matrix as rows of `value, ` tokens. Every value, including
//! the last one in a row, is followed by `", "`; each row ends with `\n`.

use ndarray::Array2;
use std::io::{self, Write};

/// Separator written after every value
pub const SEPARATOR: &str = ", ";

/// How values are formatted and how many rows are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fixed number of fractional digits; `None` keeps the shortest float form
    pub precision: Option<usize>,
    /// Upper bound on printed rows; `None` prints every row
    pub max_rows: Option<usize>,
}

/// Formats a single value according to `precision`.
pub fn format_value(value: f32, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => float_to_string(value),
    }
}

/// Shortest round-trip form of an `f32` that always shows a fractional part.
///
/// Magnitudes in `[1e-3, 1e7)` print as plain decimals (`3.0`, `0.125`);
/// anything else uses `<mantissa>E<exponent>` (`1.0E-4`, `1.2345678E7`).
pub fn float_to_string(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

/// Writes `matrix` row by row and returns the number of rows written.
///
/// A matrix with no rows or no columns produces no output at all.
pub fn write_matrix<W: Write>(
    out: &mut W,
    matrix: &Array2<f32>,
    options: &RenderOptions,
) -> io::Result<usize> {
    if matrix.is_empty() {
        return Ok(0);
    }

    let limit = options.max_rows.unwrap_or(usize::MAX);
    let mut written = 0;
    for row in matrix.rows().into_iter().take(limit) {
        let mut line = String::new();
        for &value in row.iter() {
            line.push_str(&format_value(value, options.precision));
            line.push_str(SEPARATOR);
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
        written += 1;
    }
    Ok(written)
}
