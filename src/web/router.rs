//! Catalog insights router setup.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, Uri};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::config::AnalyzerConfig;
use crate::data::CatalogTable;
use crate::stats::Analysis;
use crate::web::error::ApiError;
use crate::web::report::AnalysisReport;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../static/script.js");

/// Read-only state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<CatalogTable>,
    pub config: Arc<AnalyzerConfig>,
}

impl AppState {
    pub fn new(table: CatalogTable, config: AnalyzerConfig) -> Self {
        Self {
            table: Arc::new(table),
            config: Arc::new(config),
        }
    }
}

/// Creates the router: landing page, its script, and the analysis endpoint.
pub fn analyzer_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/api/analyze", get(analyze))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

async fn analyze(State(state): State<AppState>) -> Result<Json<AnalysisReport>, ApiError> {
    tracing::debug!(rows = state.table.height(), "Running catalog analysis");

    // Polars and rayon work runs on the blocking pool, off the async workers.
    let report = tokio::task::spawn_blocking(move || {
        Analysis::compute(&state.table, &state.config)
            .map(|analysis| AnalysisReport::from(&analysis))
    })
    .await
    .map_err(ApiError::from)
    .and_then(|result| result.map_err(ApiError::from))
    .inspect_err(|e| tracing::error!(error = %e, "Catalog analysis failed"))?;

    Ok(Json(report))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}
