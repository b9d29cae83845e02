//! Catalog Insights - Product Catalog Cleaning & Summary Statistics
//!
//! Loads a product-catalog CSV once, coerces its text fields into typed
//! columns, and serves summary views of the cleaned table over HTTP.

pub mod config;
pub mod data;
pub mod stats;
pub mod web;

pub use config::{AnalyzerConfig, InsightThresholds};
pub use data::{CatalogTable, DataLoader, LoaderError};
pub use stats::{Analysis, StatsError};
pub use web::{analyzer_router, AppState};
