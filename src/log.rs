use crate::dataset::VariableDescriptor;
use crate::input::PrintJob;
use log::{LevelFilter, debug, info};
use std::time::Duration;

/// Sets up `env_logger` on stderr. `RUST_LOG` still overrides the level.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

pub fn job_echo(job: &PrintJob) {
    info!("Input NetCDF: {}", job.input);
    info!("Variable: {}", job.variable);
    if let Some(precision) = job.options.precision {
        info!("Precision: {} digits", precision);
    }
    if let Some(max_rows) = job.options.max_rows {
        info!("Row limit: {}", max_rows);
    }
}

pub fn show_variable_info(var: &VariableDescriptor) {
    debug!("Variable '{}':", var.name);
    for dim in &var.dimensions {
        debug!("  {}: {}", dim.name, dim.length);
    }
}

pub fn show_farewell_with_timing(rows: usize, elapsed: Duration) {
    info!("Printed {} rows in {:.2?}", rows, elapsed);
}
