//! CSV Data Loader Module
//! Reads label/value rows from a CSV file using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("CSV has no columns")]
    NoColumns,
    #[error("CSV has no numeric column to use as values")]
    NoNumericColumn,
}

/// Rows ready for [`crate::data::DataPointStore::import`].
#[derive(Debug, Clone, Default)]
pub struct ImportedRows {
    pub label_column: String,
    pub value_column: String,
    pub rows: Vec<(String, String)>,
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { file_path: None }
    }

    /// Load a CSV file and pick label and value columns.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<ImportedRows, LoaderError> {
        self.file_path = Some(file_path.to_path_buf());

        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        debug!(
            path = %file_path.display(),
            rows = df.height(),
            columns = df.width(),
            "csv loaded"
        );
        let rows = Self::extract_rows(&df)?;
        info!(
            label_column = %rows.label_column,
            value_column = %rows.value_column,
            rows = rows.rows.len(),
            "csv rows extracted"
        );
        Ok(rows)
    }

    /// First text column becomes labels, first numeric column becomes values.
    /// Falls back to the first column for labels when no text column exists.
    pub fn extract_rows(df: &DataFrame) -> Result<ImportedRows, LoaderError> {
        let columns = df.get_columns();
        if columns.is_empty() {
            return Err(LoaderError::NoColumns);
        }

        let value_col = columns
            .iter()
            .find(|col| Self::is_numeric(col.dtype()))
            .ok_or(LoaderError::NoNumericColumn)?;
        let label_col = columns
            .iter()
            .find(|col| matches!(col.dtype(), DataType::String))
            .unwrap_or(&columns[0]);

        let labels = label_col.cast(&DataType::String)?;
        let labels = labels.str()?;
        let values = value_col.cast(&DataType::Float64)?;
        let values = values.f64()?;

        let rows = labels
            .into_iter()
            .zip(values.into_iter())
            .map(|(label, value)| {
                (
                    label.unwrap_or_default().to_string(),
                    value.map(|v| v.to_string()).unwrap_or_default(),
                )
            })
            .collect();

        Ok(ImportedRows {
            label_column: label_col.name().to_string(),
            value_column: value_col.name().to_string(),
            rows,
        })
    }

    fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float32
                | DataType::Float64
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        )
    }

    /// Path of the last file handed to [`DataLoader::load_csv`].
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
