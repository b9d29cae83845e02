//! Data Processor Module
//! Coerces the raw text columns of the catalog into typed values.
//!
//! Individual malformed fields become nulls; only rows without a usable
//! rating or rating count are removed.

use crate::data::columns;
use polars::prelude::*;
use thiserror::Error;

/// Currency prefixes stripped from price fields. The second entry is the
/// rupee sign as it appears when UTF-8 bytes were decoded as Windows-1252.
const CURRENCY_SYMBOLS: [&str; 2] = ["₹", "â‚¹"];

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Parse a currency string such as `₹1,234` into `1234.0`.
    pub fn parse_price(raw: &str) -> Option<f64> {
        let mut text = raw.to_string();
        for symbol in CURRENCY_SYMBOLS {
            text = text.replace(symbol, "");
        }
        Self::parse_number(&text.replace(',', ""))
    }

    /// Coerce a rating to a number. Anything non-numeric is treated as missing.
    pub fn parse_rating(raw: &str) -> Option<f64> {
        Self::parse_number(raw)
    }

    /// Parse a comma-grouped count such as `24,269`.
    pub fn parse_count(raw: &str) -> Option<f64> {
        Self::parse_number(&raw.replace(',', ""))
    }

    /// Parse `25%` into the fractional rate `0.25`.
    pub fn parse_discount(raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
        Self::parse_number(number).map(|pct| pct / 100.0)
    }

    /// First segment of a pipe-delimited category path.
    pub fn main_category(path: &str) -> &str {
        path.split('|').next().unwrap_or(path)
    }

    fn parse_number(text: &str) -> Option<f64> {
        text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
    }

    /// Run the full cleaning pipeline over a raw, all-text DataFrame.
    ///
    /// Cleaned columns keep their original position; `main_category` is
    /// appended at the end.
    pub fn clean(raw: &DataFrame) -> Result<DataFrame, ProcessorError> {
        let mut df = raw.clone();

        Self::coerce_column(&mut df, columns::DISCOUNTED_PRICE, Self::parse_price)?;
        Self::coerce_column(&mut df, columns::ACTUAL_PRICE, Self::parse_price)?;
        Self::coerce_column(&mut df, columns::RATING, Self::parse_rating)?;
        Self::coerce_column(&mut df, columns::RATING_COUNT, Self::parse_count)?;
        Self::coerce_column(&mut df, columns::DISCOUNT_PERCENTAGE, Self::parse_discount)?;

        let main_category: StringChunked = df
            .column(columns::CATEGORY)?
            .str()?
            .into_iter()
            .map(|path| path.map(Self::main_category))
            .collect();
        df.with_column(
            main_category
                .with_name(columns::MAIN_CATEGORY.into())
                .into_series(),
        )?;

        let keep: BooleanChunked = {
            let rating = df.column(columns::RATING)?.f64()?;
            let rating_count = df.column(columns::RATING_COUNT)?.f64()?;
            rating
                .into_iter()
                .zip(rating_count.into_iter())
                .map(|(r, c)| r.is_some() && c.is_some())
                .collect()
        };

        Ok(df.filter(&keep)?)
    }

    /// Replace a text column in place with its parsed Float64 version.
    fn coerce_column(
        df: &mut DataFrame,
        name: &str,
        parse: fn(&str) -> Option<f64>,
    ) -> Result<(), ProcessorError> {
        let parsed: Float64Chunked = df
            .column(name)?
            .str()?
            .into_iter()
            .map(|value| value.and_then(parse))
            .collect();
        df.with_column(parsed.with_name(name.into()).into_series())?;
        Ok(())
    }
}
