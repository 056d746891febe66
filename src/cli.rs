//! # CLI Module
//!
//! Command-line interface for nc2text:
//! - Argument parsing with clap
//! - Configuration file loading (JSON/YAML)
//! - Environment variable support with the NC2TEXT_ prefix
//! - Merging of arguments, environment, config file and defaults
//! - Subcommands for printing, inspecting and shell completions

use crate::input::{PrintConfig, PrintJob};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::debug;
use std::path::{Path, PathBuf};

/// Print a two-dimensional NetCDF variable as comma-separated text
#[derive(Parser, Debug)]
#[command(name = "nc2text")]
#[command(about = "Print a two-dimensional NetCDF variable as comma-separated text")]
#[command(version)]
#[command(long_about = "
nc2text reads one two-dimensional variable from a NetCDF file and prints it
row by row. Every value is followed by ', ' and every row ends with a newline.

Without a command it behaves like 'nc2text print': it prints variable 'kx'
from /tmp/sample.nc unless told otherwise.

EXAMPLES:
  # Print kx from /tmp/sample.nc
  nc2text

  # Print another variable from another file
  nc2text data.nc -n temperature

  # Two decimals, first row only
  nc2text data.nc --precision 2 --max-rows 1

  # Inspect a file
  nc2text info data.nc --format json

  # Generate completions
  nc2text completions bash > ~/.bash_completion.d/nc2text
")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress all logging except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file path (JSON or YAML)
    #[arg(short, long, global = true, env = "NC2TEXT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub print: PrintArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a variable as comma-separated rows (default)
    Print(PrintArgs),

    /// Show information about a NetCDF file
    #[command(long_about = "
Inspect a NetCDF file and display its dimensions and variables.

EXAMPLES:
  nc2text info data.nc
  nc2text info data.nc -n kx --format yaml
  nc2text info data.nc --detailed
")]
    Info {
        /// NetCDF file path
        file: String,

        /// Show global attributes as well
        #[arg(long)]
        detailed: bool,

        /// Show only this variable
        #[arg(short = 'n', long)]
        variable: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = InfoFormat::Human)]
        format: InfoFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Arguments of the print command
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct PrintArgs {
    /// Input NetCDF file [default: /tmp/sample.nc]
    #[arg(value_name = "FILE", env = "NC2TEXT_INPUT")]
    pub file: Option<String>,

    /// Variable to print [default: kx]
    #[arg(short = 'n', long, env = "NC2TEXT_VARIABLE")]
    pub variable: Option<String>,

    /// Print every value with this many fractional digits
    #[arg(long, env = "NC2TEXT_PRECISION")]
    pub precision: Option<usize>,

    /// Print at most this many rows
    #[arg(long, env = "NC2TEXT_MAX_ROWS")]
    pub max_rows: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoFormat {
    /// Human-readable output
    Human,
    /// JSON structured output
    Json,
    /// YAML structured output
    Yaml,
}

impl PrintArgs {
    fn as_config(&self) -> PrintConfig {
        PrintConfig {
            input: self.file.clone(),
            variable: self.variable.clone(),
            precision: self.precision,
            max_rows: self.max_rows,
        }
    }

    /// Builds the job to run.
    ///
    /// Priority: command line > environment (both already folded into
    /// `self` by clap) > config file > defaults.
    pub fn resolve(&self, config: Option<PrintConfig>) -> PrintJob {
        self.as_config()
            .or(config.unwrap_or_default())
            .into_job()
    }
}

/// Loads the configuration file if one was given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<PrintConfig>> {
    match path {
        Some(path) => {
            let config = PrintConfig::from_file(path)?;
            debug!("Loaded configuration from {}", path.display());
            Ok(Some(config))
        }
        None => Ok(None),
    }
}
