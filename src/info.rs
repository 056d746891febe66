//! # Dataset Inspection
//!
//! Summarises the dimensions and variables of a NetCDF file so a user can
//! find the variable to print. Output goes to any writer, as human-readable
//! text, JSON, or YAML.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionInfo {
    pub name: String,
    pub length: usize,
    pub is_unlimited: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableInfo {
    pub name: String,
    pub data_type: String,
    pub dimensions: Vec<String>,
    pub shape: Vec<usize>,
    pub attributes: BTreeMap<String, String>,
}

/// Everything `info` reports about one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub path: String,
    pub file_size: Option<u64>,
    pub dimensions: Vec<DimensionInfo>,
    pub variables: Vec<VariableInfo>,
    pub global_attributes: BTreeMap<String, String>,
}

/// Reads the structure of the file at `path`.
///
/// With `variable` set only that variable is listed; an unknown name is an
/// error rather than an empty listing. Global attributes are collected only
/// when `detailed` is true.
pub fn get_dataset_info(path: &str, variable: Option<&str>, detailed: bool) -> Result<DatasetInfo> {
    debug!("Inspecting NetCDF file: {}", path);
    let file =
        netcdf::open(path).with_context(|| format!("Failed to open NetCDF file: {}", path))?;

    let file_size = std::fs::metadata(path).ok().map(|metadata| metadata.len());

    let dimensions = file
        .dimensions()
        .map(|dim| DimensionInfo {
            name: dim.name().to_string(),
            length: dim.len(),
            is_unlimited: dim.is_unlimited(),
        })
        .collect();

    let mut variables = Vec::new();
    for var in file.variables() {
        if let Some(wanted) = variable
            && var.name() != wanted
        {
            continue;
        }

        let mut attributes = BTreeMap::new();
        for attr in var.attributes() {
            if let Ok(value) = attr.value() {
                attributes.insert(attr.name().to_string(), format!("{:?}", value));
            }
        }

        variables.push(VariableInfo {
            name: var.name().to_string(),
            data_type: format!("{:?}", var.vartype()),
            dimensions: var.dimensions().iter().map(|d| d.name().to_string()).collect(),
            shape: var.dimensions().iter().map(|d| d.len()).collect(),
            attributes,
        });
    }

    if let Some(wanted) = variable
        && variables.is_empty()
    {
        anyhow::bail!("Variable '{}' not found in NetCDF file", wanted);
    }

    let mut global_attributes = BTreeMap::new();
    if detailed {
        for attr in file.attributes() {
            if let Ok(value) = attr.value() {
                global_attributes.insert(attr.name().to_string(), format!("{:?}", value));
            }
        }
    }

    file.close().context("Failed to close NetCDF file")?;

    Ok(DatasetInfo {
        path: path.to_string(),
        file_size,
        dimensions,
        variables,
        global_attributes,
    })
}

pub fn write_info_human<W: Write>(out: &mut W, info: &DatasetInfo) -> Result<()> {
    writeln!(out, "NetCDF File Information:")?;
    writeln!(out, "  Path: {}", info.path)?;
    if let Some(size) = info.file_size {
        writeln!(out, "  File Size: {} bytes", size)?;
    }
    writeln!(out, "  Dimensions: {} total", info.dimensions.len())?;
    for dim in &info.dimensions {
        writeln!(
            out,
            "    {} ({}{})",
            dim.name,
            dim.length,
            if dim.is_unlimited { ", unlimited" } else { "" }
        )?;
    }
    writeln!(out, "  Variables: {} total", info.variables.len())?;
    for var in &info.variables {
        writeln!(
            out,
            "    {} ({}) - dimensions: [{}]",
            var.name,
            var.data_type,
            var.dimensions.join(", ")
        )?;
        for (name, value) in &var.attributes {
            writeln!(out, "      @{}: {}", name, value)?;
        }
    }
    if !info.global_attributes.is_empty() {
        writeln!(out, "  Global Attributes:")?;
        for (name, value) in &info.global_attributes {
            writeln!(out, "    @{}: {}", name, value)?;
        }
    }
    Ok(())
}

pub fn write_info_json<W: Write>(out: &mut W, info: &DatasetInfo) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, info)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_info_yaml<W: Write>(out: &mut W, info: &DatasetInfo) -> Result<()> {
    let yaml = serde_yaml::to_string(info).context("Failed to serialize NetCDF info to YAML")?;
    write!(out, "{}", yaml)?;
    Ok(())
}
