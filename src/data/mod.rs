//! Data module - CSV loading and cleaning

mod loader;
mod processor;
mod table;

pub use loader::{DataLoader, LoaderError};
pub use processor::{DataProcessor, ProcessorError};
pub use table::CatalogTable;

/// Column names of the product catalog file.
pub mod columns {
    pub const PRODUCT_ID: &str = "product_id";
    pub const CATEGORY: &str = "category";
    pub const DISCOUNTED_PRICE: &str = "discounted_price";
    pub const ACTUAL_PRICE: &str = "actual_price";
    pub const DISCOUNT_PERCENTAGE: &str = "discount_percentage";
    pub const RATING: &str = "rating";
    pub const RATING_COUNT: &str = "rating_count";

    /// Derived during cleaning, appended as the last column.
    pub const MAIN_CATEGORY: &str = "main_category";

    /// Columns the source file must provide.
    pub const REQUIRED: [&str; 7] = [
        PRODUCT_ID,
        CATEGORY,
        DISCOUNTED_PRICE,
        ACTUAL_PRICE,
        DISCOUNT_PERCENTAGE,
        RATING,
        RATING_COUNT,
    ];
}
