//! Web module - HTTP surface

mod error;
mod markup;
mod report;
mod router;

pub use error::{ApiError, ErrorResponse};
pub use markup::{TableMarkup, NO_MISSING_VALUES};
pub use report::AnalysisReport;
pub use router::{analyzer_router, AppState};
