//! Cleaned Catalog Table
//! Read-only wrapper around the cleaned DataFrame.

use polars::prelude::*;

/// The cleaned product catalog, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct CatalogTable {
    df: DataFrame,
}

impl CatalogTable {
    pub fn new(df: DataFrame) -> Self {
        Self { df }
    }

    /// Get a reference to the underlying DataFrame.
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Number of retained rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }
}
