//! CSV Data Loader Module
//! Reads the raw catalog file with Polars and hands it to the cleaner.

use crate::data::columns;
use crate::data::{CatalogTable, DataProcessor, ProcessorError};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Failed to clean data: {0}")]
    Clean(#[from] ProcessorError),
}

/// Loads the raw catalog file. Every column is read as text so that the
/// cleaner decides how each field is coerced.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file using Polars, without schema inference.
    pub fn load_csv(file_path: &Path) -> Result<DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::NotFound(file_path.to_path_buf()));
        }

        // A zero-row inference window reads every column as String.
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(0))
            .with_has_header(true)
            .finish()?
            .collect()?;

        Self::check_required_columns(&df)?;
        Ok(df)
    }

    /// Load the raw file and run the cleaning pipeline over it.
    pub fn load_catalog(file_path: &Path) -> Result<CatalogTable, LoaderError> {
        let raw = Self::load_csv(file_path)?;
        let cleaned = DataProcessor::clean(&raw)?;

        tracing::info!(
            path = %file_path.display(),
            raw_rows = raw.height(),
            retained_rows = cleaned.height(),
            dropped_rows = raw.height() - cleaned.height(),
            "Loaded product catalog"
        );

        Ok(CatalogTable::new(cleaned))
    }

    fn check_required_columns(df: &DataFrame) -> Result<(), LoaderError> {
        for name in columns::REQUIRED {
            if df.column(name).is_err() {
                return Err(LoaderError::MissingColumn(name.to_string()));
            }
        }
        Ok(())
    }
}
