//! # Input Configuration Module
//!
//! Optional configuration for print jobs. A configuration file may set any of
//! the job's fields; whatever it leaves out falls back to the command line,
//! the environment, or the built-in defaults.
//!
//! ## Example
//!
//! ```rust
//! use nc2text::input::PrintConfig;
//!
//! let json = r#"
//! {
//!   "input": "/data/sample.nc",
//!   "variable": "kx",
//!   "precision": 2
//! }"#;
//! let config = PrintConfig::from_json(json)?;
//! assert_eq!(config.precision, Some(2));
//! assert!(config.max_rows.is_none());
//! # Ok::<(), nc2text::error::ReadError>(())
//! ```

use crate::error::{ReadError, ReadResult};
use crate::render::RenderOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File read when no input path is given anywhere
pub const DEFAULT_INPUT: &str = "/tmp/sample.nc";

/// Variable printed when no variable name is given anywhere
pub const DEFAULT_VARIABLE: &str = "kx";

/// Print job settings as they appear in a JSON or YAML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrintConfig {
    /// Path to the input NetCDF file
    pub input: Option<String>,
    /// Name of the two-dimensional variable to print
    pub variable: Option<String>,
    /// Fixed number of fractional digits per value
    pub precision: Option<usize>,
    /// Maximum number of rows to print
    pub max_rows: Option<usize>,
}

/// A fully resolved print job.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintJob {
    pub input: String,
    pub variable: String,
    pub options: RenderOptions,
}

impl Default for PrintJob {
    fn default() -> Self {
        PrintJob {
            input: DEFAULT_INPUT.to_string(),
            variable: DEFAULT_VARIABLE.to_string(),
            options: RenderOptions::default(),
        }
    }
}

impl PrintConfig {
    /// Loads a configuration file, picking YAML for `.yaml`/`.yml` and JSON
    /// for anything else.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ReadResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ReadError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Self::from_json(&content),
        }
    }

    pub fn from_json(json_str: &str) -> ReadResult<Self> {
        serde_json::from_str(json_str).map_err(|e| ReadError::Config(e.to_string()))
    }

    pub fn from_yaml(yaml_str: &str) -> ReadResult<Self> {
        serde_yaml::from_str(yaml_str).map_err(|e| ReadError::Config(e.to_string()))
    }

    /// Fills any field still unset on `self` from `fallback`.
    pub fn or(self, fallback: PrintConfig) -> PrintConfig {
        PrintConfig {
            input: self.input.or(fallback.input),
            variable: self.variable.or(fallback.variable),
            precision: self.precision.or(fallback.precision),
            max_rows: self.max_rows.or(fallback.max_rows),
        }
    }

    /// Resolves the remaining gaps with the built-in defaults.
    pub fn into_job(self) -> PrintJob {
        let defaults = PrintJob::default();
        PrintJob {
            input: self.input.unwrap_or(defaults.input),
            variable: self.variable.unwrap_or(defaults.variable),
            options: RenderOptions {
                precision: self.precision,
                max_rows: self.max_rows,
            },
        }
    }
}
