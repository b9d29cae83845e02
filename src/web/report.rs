//! JSON payload of the analysis endpoint.

use indexmap::IndexMap;
use serde::Serialize;

use crate::stats::Analysis;
use crate::web::markup::{TableMarkup, PREVIEW_CLASSES};

/// Response body of `GET /api/analyze`. Map fields keep insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub head: String,
    pub info: String,
    pub missing: String,
    pub describe: String,
    pub top_categories: IndexMap<String, u32>,
    pub avg_rating_categories: IndexMap<String, f64>,
    pub discount_rating_insight: String,
}

impl From<&Analysis> for AnalysisReport {
    fn from(analysis: &Analysis) -> Self {
        Self {
            head: TableMarkup::from_dataframe(&analysis.preview, PREVIEW_CLASSES),
            info: analysis.info.clone(),
            missing: TableMarkup::missing(&analysis.missing),
            describe: TableMarkup::describe(&analysis.describe),
            top_categories: analysis.top_categories.clone(),
            avg_rating_categories: analysis.avg_rating_categories.clone(),
            discount_rating_insight: analysis.insight.render(),
        }
    }
}
