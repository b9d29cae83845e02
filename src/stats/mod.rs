//! Stats module - Aggregations over the cleaned catalog

mod calculator;
mod insight;

pub use calculator::{ColumnInfo, ColumnStats, MissingValues, StatsCalculator, StatsError};
pub use insight::{pearson, DiscountInsight, Relationship};

use crate::config::AnalyzerConfig;
use crate::data::CatalogTable;
use indexmap::IndexMap;
use polars::prelude::DataFrame;

/// Every view served by the analysis endpoint, computed from one table.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub preview: DataFrame,
    pub info: String,
    pub missing: MissingValues,
    pub describe: Vec<ColumnStats>,
    pub top_categories: IndexMap<String, u32>,
    pub avg_rating_categories: IndexMap<String, f64>,
    pub insight: DiscountInsight,
}

impl Analysis {
    /// Run all aggregations. Any failure aborts the whole analysis.
    pub fn compute(table: &CatalogTable, config: &AnalyzerConfig) -> Result<Self, StatsError> {
        let describe = StatsCalculator::describe(table)?;
        let top_categories = StatsCalculator::top_categories(table, config.top_categories)?;
        let avg_rating_categories =
            StatsCalculator::average_rating_by_category(table, &top_categories)?;

        Ok(Self {
            preview: StatsCalculator::preview(table, config.preview_rows),
            info: StatsCalculator::schema_summary(table),
            missing: StatsCalculator::missing_values(table),
            describe,
            top_categories,
            avg_rating_categories,
            insight: DiscountInsight::compute(table, &config.thresholds)?,
        })
    }
}
