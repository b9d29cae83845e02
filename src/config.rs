//! Runtime Configuration
//! Settings shared by the loader, the aggregations and the web server.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Correlation above this is reported as a weak positive relationship.
pub const DEFAULT_POSITIVE_THRESHOLD: f64 = 0.10;

/// Correlation below this is reported as a weak negative relationship.
pub const DEFAULT_NEGATIVE_THRESHOLD: f64 = -0.10;

/// Number of rows shown in the preview table.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Number of main categories kept in the popularity ranking.
pub const DEFAULT_TOP_CATEGORIES: usize = 10;

/// Bounds used to classify the discount/rating correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightThresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            positive: DEFAULT_POSITIVE_THRESHOLD,
            negative: DEFAULT_NEGATIVE_THRESHOLD,
        }
    }
}

/// Process-wide settings, built once in `main`.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub preview_rows: usize,
    pub top_categories: usize,
    pub thresholds: InsightThresholds,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/amazon.csv"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            top_categories: DEFAULT_TOP_CATEGORIES,
            thresholds: InsightThresholds::default(),
        }
    }
}
