//! # Dataset Adapter
//!
//! A narrow seam between the reader-printer and the NetCDF binding. Callers
//! only ever see [`VariableDescriptor`]s and dense `Array2<f32>` buffers; the
//! `netcdf` crate types stay inside [`NcDataset`].
//!
//! ```rust,no_run
//! use nc2text::dataset::{DatasetReader, NcDataset};
//!
//! let dataset = NcDataset::open("/tmp/sample.nc")?;
//! let kx = dataset.find_variable("kx").expect("kx is present");
//! let matrix = dataset.read_as_float_matrix(&kx)?;
//! assert_eq!(matrix.dim(), (kx.dimension_lengths()[0], kx.dimension_lengths()[1]));
//! dataset.close()?;
//! # Ok::<(), nc2text::error::ReadError>(())
//! ```

use crate::error::{ReadError, ReadResult};
use log::debug;
use ndarray::Array2;
use std::path::Path;

/// A named axis of a variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionDescriptor {
    pub name: String,
    pub length: usize,
}

/// A variable's name and its dimensions in declared order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDescriptor {
    pub name: String,
    pub dimensions: Vec<DimensionDescriptor>,
}

impl VariableDescriptor {
    /// Dimension lengths in the order the file declares them.
    pub fn dimension_lengths(&self) -> Vec<usize> {
        self.dimensions.iter().map(|d| d.length).collect()
    }

    /// Returns `(rows, cols)` when the variable is two-dimensional.
    pub fn matrix_shape(&self) -> ReadResult<(usize, usize)> {
        match self.dimension_lengths().as_slice() {
            &[rows, cols] => Ok((rows, cols)),
            other => Err(ReadError::Shape {
                name: self.name.clone(),
                found: other.len(),
            }),
        }
    }
}

/// Read access to a dataset holding named float variables.
///
/// Opening is left to the implementor's constructor. `close` consumes the
/// reader so a closed handle cannot be used again; implementors must also
/// release their resources on drop so error paths stay clean.
pub trait DatasetReader {
    fn find_variable(&self, name: &str) -> Option<VariableDescriptor>;

    fn read_as_float_matrix(&self, variable: &VariableDescriptor) -> ReadResult<Array2<f32>>;

    fn close(self) -> ReadResult<()>
    where
        Self: Sized;
}

/// An open NetCDF file.
///
/// The underlying libnetcdf handle is released when this value is dropped,
/// so an early `?` return never leaks it.
pub struct NcDataset {
    path: String,
    file: netcdf::File,
}

impl NcDataset {
    pub fn open<P: AsRef<Path>>(path: P) -> ReadResult<Self> {
        let path = path.as_ref().to_string_lossy().to_string();
        debug!("Opening NetCDF file: {}", path);
        let file = netcdf::open(&path).map_err(|source| ReadError::Open {
            path: path.clone(),
            source,
        })?;
        Ok(NcDataset { path, file })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl DatasetReader for NcDataset {
    fn find_variable(&self, name: &str) -> Option<VariableDescriptor> {
        let var = self.file.variable(name)?;
        let dimensions = var
            .dimensions()
            .iter()
            .map(|dim| DimensionDescriptor {
                name: dim.name().to_string(),
                length: dim.len(),
            })
            .collect();
        Some(VariableDescriptor {
            name: var.name().to_string(),
            dimensions,
        })
    }

    fn read_as_float_matrix(&self, variable: &VariableDescriptor) -> ReadResult<Array2<f32>> {
        let (rows, cols) = variable.matrix_shape()?;
        if rows == 0 || cols == 0 {
            return Ok(Array2::zeros((rows, cols)));
        }

        let var = self
            .file
            .variable(&variable.name)
            .ok_or_else(|| ReadError::VariableNotFound(variable.name.clone()))?;
        let values: Vec<f32> = var
            .get_values(..)
            .map_err(|e| ReadError::read(&variable.name, e))?;
        debug!(
            "Read {} values from '{}' ({} x {})",
            values.len(),
            variable.name,
            rows,
            cols
        );

        if values.len() != rows * cols {
            return Err(ReadError::read(
                &variable.name,
                format!(
                    "expected {} values for shape {}x{}, got {}",
                    rows * cols,
                    rows,
                    cols,
                    values.len()
                ),
            ));
        }
        Array2::from_shape_vec((rows, cols), values).map_err(|e| ReadError::read(&variable.name, e))
    }

    fn close(self) -> ReadResult<()> {
        debug!("Closing NetCDF file: {}", self.path);
        let path = self.path;
        self.file
            .close()
            .map_err(|source| ReadError::Close { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, lengths: &[usize]) -> VariableDescriptor {
        VariableDescriptor {
            name: name.to_string(),
            dimensions: lengths
                .iter()
                .enumerate()
                .map(|(i, &length)| DimensionDescriptor {
                    name: format!("d{}", i),
                    length,
                })
                .collect(),
        }
    }

    #[test]
    fn test_dimension_lengths_keep_declared_order() {
        let var = descriptor("kx", &[3, 5]);
        assert_eq!(var.dimension_lengths(), vec![3, 5]);
        assert_eq!(var.matrix_shape().unwrap(), (3, 5));
    }

    #[test]
    fn test_matrix_shape_rejects_other_ranks() {
        for lengths in [&[][..], &[4][..], &[2, 3, 4][..]] {
            let var = descriptor("kx", lengths);
            match var.matrix_shape() {
                Err(ReadError::Shape { name, found }) => {
                    assert_eq!(name, "kx");
                    assert_eq!(found, lengths.len());
                }
                other => panic!("Expected shape error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_open_missing_file() {
        let result = NcDataset::open("/nonexistent/dir/missing.nc");
        match result {
            Err(ReadError::Open { path, .. }) => assert_eq!(path, "/nonexistent/dir/missing.nc"),
            Err(other) => panic!("Expected open error, got {:?}", other),
            Ok(_) => panic!("Opening a missing file should fail"),
        }
    }
}
