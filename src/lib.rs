//! # nc2text
//!
//! Prints a two-dimensional NetCDF variable as comma-separated text, one line
//! per row. NetCDF decoding is left to the `netcdf` crate; this crate opens
//! the file, finds the variable, reads it as a dense `f32` matrix and writes
//! it out.
//!
//! ## Output Format
//!
//! Every value is followed by `", "`, including the last one in a row, and
//! every row ends with a newline. For a 2x2 variable holding
//! `[[1.0, 2.0], [3.0, 4.0]]` the output is:
//!
//! ```text
//! 1.0, 2.0,
//! 3.0, 4.0,
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nc2text::{run_print_job, input::PrintJob};
//!
//! // Prints variable "kx" from /tmp/sample.nc
//! let job = PrintJob::default();
//! let mut stdout = std::io::stdout().lock();
//! run_print_job(&job, &mut stdout)?;
//! # Ok::<(), nc2text::error::ReadError>(())
//! ```

pub mod cli;
pub mod dataset;
pub mod error;
pub mod info;
pub mod input;
pub mod log;
pub mod render;

#[cfg(test)]
mod cli_tests;

use crate::dataset::{DatasetReader, NcDataset};
use crate::error::{ReadError, ReadResult};
use crate::input::PrintJob;
use crate::log::show_variable_info;
use crate::render::{RenderOptions, write_matrix};
use std::io::Write;

/// Looks up `variable_name` in `dataset` and writes it to `out`.
///
/// The variable is read completely before the first byte is written, so a
/// missing variable, a shape mismatch, or a read failure produces no output.
/// Returns the number of rows written.
///
/// # Errors
///
/// - [`ReadError::VariableNotFound`] if the dataset has no such variable
/// - [`ReadError::Shape`] if the variable is not two-dimensional
/// - [`ReadError::Read`] if the stored data does not match its shape
/// - [`ReadError::Output`] if writing to `out` fails
pub fn print_variable<D: DatasetReader, W: Write>(
    dataset: &D,
    variable_name: &str,
    options: &RenderOptions,
    out: &mut W,
) -> ReadResult<usize> {
    let var = dataset
        .find_variable(variable_name)
        .ok_or_else(|| ReadError::VariableNotFound(variable_name.to_string()))?;
    show_variable_info(&var);

    let matrix = dataset.read_as_float_matrix(&var)?;
    let rows = write_matrix(out, &matrix, options)?;
    out.flush()?;
    Ok(rows)
}

/// Runs a whole print job: open, print, close.
///
/// The file handle is released on every path; on failure it is dropped
/// before the error is returned.
///
/// # Examples
///
/// ```rust,no_run
/// use nc2text::{run_print_job, input::PrintJob};
///
/// let job = PrintJob {
///     input: "weather.nc".to_string(),
///     ..PrintJob::default()
/// };
/// let mut buffer = Vec::new();
/// let rows = run_print_job(&job, &mut buffer)?;
/// println!("{} rows", rows);
/// # Ok::<(), nc2text::error::ReadError>(())
/// ```
pub fn run_print_job<W: Write>(job: &PrintJob, out: &mut W) -> ReadResult<usize> {
    let dataset = NcDataset::open(&job.input)?;
    let rows = print_variable(&dataset, &job.variable, &job.options, out)?;
    dataset.close()?;
    Ok(rows)
}
