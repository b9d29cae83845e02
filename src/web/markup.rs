//! HTML Table Markup
//! Renders tabular views as embeddable `<table>` fragments.

use crate::stats::{ColumnStats, MissingValues};
use html_escape::encode_text;
use polars::prelude::*;

/// Classes for the wide preview table.
pub const PREVIEW_CLASSES: &str = "table-auto w-full text-left whitespace-no-wrap";

/// Classes for the compact summary tables.
pub const SUMMARY_CLASSES: &str = "table-auto w-full";

/// Shown instead of a table when no column has missing values.
pub const NO_MISSING_VALUES: &str = "<p>No missing values found. Great!</p>";

const DESCRIBE_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

pub struct TableMarkup;

impl TableMarkup {
    /// Render a header row and body rows. Cell text is escaped here.
    pub fn render(classes: &str, header: &[String], rows: &[Vec<String>]) -> String {
        let mut html = format!("<table border=\"0\" class=\"dataframe {classes}\">\n");
        html.push_str("  <thead>\n    <tr>\n");
        for name in header {
            html.push_str(&format!("      <th>{}</th>\n", encode_text(name)));
        }
        html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
        for row in rows {
            html.push_str("    <tr>\n");
            for cell in row {
                html.push_str(&format!("      <td>{}</td>\n", encode_text(cell)));
            }
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n</table>");
        html
    }

    /// All columns and rows of a frame, without an index column.
    pub fn from_dataframe(df: &DataFrame, classes: &str) -> String {
        let header: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let rows: Vec<Vec<String>> = (0..df.height())
            .map(|i| {
                df.get_columns()
                    .iter()
                    .map(|col| {
                        col.get(i)
                            .map(|value| Self::cell_text(&value))
                            .unwrap_or_else(|_| "NaN".to_string())
                    })
                    .collect()
            })
            .collect();

        Self::render(classes, &header, &rows)
    }

    /// Missing-value counts as a one-column table, or the fixed message.
    pub fn missing(missing: &MissingValues) -> String {
        match missing {
            MissingValues::NoneMissing => NO_MISSING_VALUES.to_string(),
            MissingValues::Columns(counts) => {
                let header = vec![String::new(), "missing_count".to_string()];
                let rows: Vec<Vec<String>> = counts
                    .iter()
                    .map(|(name, count)| vec![name.clone(), count.to_string()])
                    .collect();
                Self::render(SUMMARY_CLASSES, &header, &rows)
            }
        }
    }

    /// Descriptive statistics with one row per statistic and one column per
    /// numeric column.
    pub fn describe(stats: &[ColumnStats]) -> String {
        let mut header = vec![String::new()];
        header.extend(stats.iter().map(|s| s.column_name.clone()));

        let rows: Vec<Vec<String>> = DESCRIBE_ROWS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let mut row = vec![label.to_string()];
                row.extend(stats.iter().map(|s| {
                    let value = match i {
                        0 => s.count as f64,
                        1 => s.mean,
                        2 => s.std,
                        3 => s.min,
                        4 => s.p25,
                        5 => s.p50,
                        6 => s.p75,
                        _ => s.max,
                    };
                    Self::format_float(value)
                }));
                row
            })
            .collect();

        Self::render(SUMMARY_CLASSES, &header, &rows)
    }

    fn format_float(value: f64) -> String {
        if value.is_nan() {
            "NaN".to_string()
        } else {
            format!("{value:.6}")
        }
    }

    /// Plain positional notation with at least one decimal place.
    fn format_cell_float(value: f64) -> String {
        let text = value.to_string();
        if !value.is_finite() || text.contains('.') {
            text
        } else {
            format!("{text}.0")
        }
    }

    fn cell_text(value: &AnyValue) -> String {
        match value {
            AnyValue::Null => "NaN".to_string(),
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            AnyValue::Float64(v) => Self::format_cell_float(*v),
            AnyValue::Float32(v) => Self::format_cell_float(f64::from(*v)),
            other => other.to_string().trim_matches('"').to_string(),
        }
    }
}
