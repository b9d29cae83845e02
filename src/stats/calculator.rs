//! Statistics Calculator Module
//! Handles descriptive statistics and category aggregations over the catalog.

use crate::data::{columns, CatalogTable};
use indexmap::IndexMap;
use polars::prelude::*;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Cannot compute statistics: the cleaned table has no rows")]
    EmptyTable,
}

/// Descriptive statistics for a single numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub column_name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl Default for ColumnStats {
    fn default() -> Self {
        Self {
            column_name: String::new(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            p50: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Per-column entry of the schema summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: String,
    pub non_null: usize,
}

/// Missing-value report. Columns without gaps are left out.
#[derive(Debug, Clone, PartialEq)]
pub enum MissingValues {
    NoneMissing,
    Columns(Vec<(String, usize)>),
}

/// Handles statistical calculations with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    pub fn compute_descriptive_stats(values: &[f64]) -> ColumnStats {
        let n = values.len();
        if n == 0 {
            return ColumnStats::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = values.iter().sum::<f64>() / n as f64;

        // Sample standard deviation is undefined for a single observation.
        let std = if n > 1 {
            (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        ColumnStats {
            column_name: String::new(),
            count: n,
            mean,
            std,
            min: sorted[0],
            p25: Self::percentile(&sorted, 25.0),
            p50: Self::percentile(&sorted, 50.0),
            p75: Self::percentile(&sorted, 75.0),
            max: sorted[n - 1],
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Round to two decimals, ties to even (`4.125` becomes `4.12`).
    pub fn round_to_cents(value: f64) -> f64 {
        (value * 100.0).round_ties_even() / 100.0
    }

    /// Get list of numeric column names, in table order.
    pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
        df.get_columns()
            .iter()
            .filter(|col| {
                matches!(
                    col.dtype(),
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
            })
            .map(|col| col.name().to_string())
            .collect()
    }

    /// Non-null values of a numeric column as f64.
    pub fn column_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, StatsError> {
        let values = df.column(column)?.cast(&DataType::Float64)?;
        Ok(values.f64()?.into_iter().flatten().collect())
    }

    /// First `n` rows, all columns.
    pub fn preview(table: &CatalogTable, n: usize) -> DataFrame {
        table.dataframe().head(Some(n))
    }

    /// Name, dtype and non-null count for each column.
    pub fn column_info(table: &CatalogTable) -> Vec<ColumnInfo> {
        let df = table.dataframe();
        df.get_columns()
            .iter()
            .map(|col| ColumnInfo {
                name: col.name().to_string(),
                dtype: col.dtype().to_string(),
                non_null: df.height() - col.null_count(),
            })
            .collect()
    }

    /// Multi-line schema summary: entry count, one line per column, dtype
    /// tally and estimated in-memory size.
    pub fn schema_summary(table: &CatalogTable) -> String {
        let df = table.dataframe();
        let infos = Self::column_info(table);
        let name_width = infos
            .iter()
            .map(|info| info.name.len())
            .max()
            .unwrap_or(0)
            .max("Column".len());

        let mut out = String::new();
        out.push_str("<CatalogTable>\n");
        if df.height() == 0 {
            out.push_str("0 entries\n");
        } else {
            out.push_str(&format!(
                "{} entries, 0 to {}\n",
                df.height(),
                df.height() - 1
            ));
        }
        out.push_str(&format!("Data columns (total {} columns):\n", infos.len()));
        out.push_str(&format!(
            " {:<3} {:<name_width$}  {:<14}  {}\n",
            "#", "Column", "Non-Null Count", "Dtype"
        ));
        out.push_str(&format!(
            " {:<3} {:<name_width$}  {:<14}  {}\n",
            "---",
            "------",
            "--------------",
            "-----"
        ));
        for (i, info) in infos.iter().enumerate() {
            out.push_str(&format!(
                " {:<3} {:<name_width$}  {:<14}  {}\n",
                i,
                info.name,
                format!("{} non-null", info.non_null),
                info.dtype
            ));
        }

        let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
        for info in &infos {
            *tally.entry(info.dtype.as_str()).or_insert(0) += 1;
        }
        let dtypes: Vec<String> = tally
            .iter()
            .map(|(dtype, count)| format!("{dtype}({count})"))
            .collect();
        out.push_str(&format!("dtypes: {}\n", dtypes.join(", ")));
        out.push_str(&format!(
            "memory usage: {:.1} KB\n",
            df.estimated_size() as f64 / 1024.0
        ));
        out
    }

    /// Count missing entries per column, reporting only columns with gaps.
    pub fn missing_values(table: &CatalogTable) -> MissingValues {
        let missing: Vec<(String, usize)> = table
            .dataframe()
            .get_columns()
            .iter()
            .filter(|col| col.null_count() > 0)
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect();

        if missing.is_empty() {
            MissingValues::NoneMissing
        } else {
            MissingValues::Columns(missing)
        }
    }

    /// Descriptive statistics for every numeric column, computed in parallel.
    pub fn describe(table: &CatalogTable) -> Result<Vec<ColumnStats>, StatsError> {
        if table.is_empty() {
            return Err(StatsError::EmptyTable);
        }
        let df = table.dataframe();
        let numeric = Self::numeric_columns(df);

        // Use rayon for parallel computation
        numeric
            .par_iter()
            .map(|name| -> Result<ColumnStats, StatsError> {
                let values = Self::column_values(df, name)?;
                let mut stats = Self::compute_descriptive_stats(&values);
                stats.column_name = name.clone();
                Ok(stats)
            })
            .collect()
    }

    /// The `n` most frequent main categories with their row counts.
    ///
    /// Ordered by descending count; equal counts keep the order in which the
    /// categories first appear in the table.
    pub fn top_categories(
        table: &CatalogTable,
        n: usize,
    ) -> Result<IndexMap<String, u32>, StatsError> {
        let main = table.dataframe().column(columns::MAIN_CATEGORY)?.str()?;

        let mut counts: IndexMap<String, u32> = IndexMap::new();
        for category in main.into_iter().flatten() {
            *counts.entry(category.to_string()).or_insert(0) += 1;
        }

        let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
        // Stable sort keeps first-encountered order among ties.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);

        Ok(ranked.into_iter().collect())
    }

    /// Mean rating per category for the given categories, rounded to two
    /// decimals and sorted by descending mean.
    pub fn average_rating_by_category(
        table: &CatalogTable,
        categories: &IndexMap<String, u32>,
    ) -> Result<IndexMap<String, f64>, StatsError> {
        let df = table.dataframe();
        let main = df.column(columns::MAIN_CATEGORY)?.str()?;
        let rating = df.column(columns::RATING)?.f64()?;
        let wanted: HashSet<&str> = categories.keys().map(String::as_str).collect();

        let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
        for (category, value) in main.into_iter().zip(rating.into_iter()) {
            if let (Some(category), Some(value)) = (category, value) {
                if wanted.contains(category) {
                    let entry = sums.entry(category).or_insert((0.0, 0));
                    entry.0 += value;
                    entry.1 += 1;
                }
            }
        }

        let mut means: Vec<(String, f64)> = sums
            .into_iter()
            .map(|(category, (sum, count))| {
                let mean = sum / count as f64;
                (category.to_string(), Self::round_to_cents(mean))
            })
            .collect();
        // Alphabetical first so equal means come out in a fixed order.
        means.sort_by(|a, b| a.0.cmp(&b.0));
        means.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(means.into_iter().collect())
    }
}
