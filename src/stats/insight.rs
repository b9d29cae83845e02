//! Discount/Rating Insight
//! Pearson correlation between discount rate and rating, rendered as a sentence.

use crate::config::InsightThresholds;
use crate::data::{columns, CatalogTable};
use crate::stats::StatsError;
use statrs::statistics::Statistics;

/// Direction of the discount/rating relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    WeakPositive,
    WeakNegative,
    NotSignificant,
}

impl Relationship {
    pub fn classify(correlation: f64, thresholds: &InsightThresholds) -> Self {
        if correlation > thresholds.positive {
            Relationship::WeakPositive
        } else if correlation < thresholds.negative {
            Relationship::WeakNegative
        } else {
            Relationship::NotSignificant
        }
    }

    fn explanation(self) -> &'static str {
        match self {
            Relationship::WeakPositive => {
                "This suggests a weak positive relationship: slightly higher discounts may be associated with slightly higher ratings."
            }
            Relationship::WeakNegative => {
                "This suggests a weak negative relationship: higher discounts might be associated with slightly lower ratings."
            }
            Relationship::NotSignificant => {
                "This suggests there is no significant linear relationship between discounts and customer ratings."
            }
        }
    }
}

/// Outcome of the discount/rating correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscountInsight {
    Correlated {
        correlation: f64,
        relationship: Relationship,
    },
    /// Fewer than two complete pairs, or one side has no variance.
    InsufficientData { pairs: usize },
}

impl DiscountInsight {
    /// Correlate discount rate with rating over rows where both are present.
    pub fn compute(
        table: &CatalogTable,
        thresholds: &InsightThresholds,
    ) -> Result<Self, StatsError> {
        let df = table.dataframe();
        let discount = df.column(columns::DISCOUNT_PERCENTAGE)?.f64()?;
        let rating = df.column(columns::RATING)?.f64()?;

        let (xs, ys): (Vec<f64>, Vec<f64>) = discount
            .into_iter()
            .zip(rating.into_iter())
            .filter_map(|(d, r)| Some((d?, r?)))
            .unzip();

        Ok(match pearson(&xs, &ys) {
            Some(correlation) => DiscountInsight::Correlated {
                correlation,
                relationship: Relationship::classify(correlation, thresholds),
            },
            None => DiscountInsight::InsufficientData { pairs: xs.len() },
        })
    }

    /// Human-readable sentence for the client.
    pub fn render(&self) -> String {
        match self {
            DiscountInsight::Correlated {
                correlation,
                relationship,
            } => format!(
                "The correlation between discount percentage and rating is {:.2}. {}",
                correlation,
                relationship.explanation()
            ),
            DiscountInsight::InsufficientData { pairs } => format!(
                "Insufficient data to correlate discount percentage and rating: only {pairs} usable row(s) with varying values."
            ),
        }
    }
}

/// Pearson correlation coefficient, or `None` when it is undefined.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let covariance = xs.iter().covariance(ys.iter());
    let spread = xs.iter().std_dev() * ys.iter().std_dev();
    let r = covariance / spread;
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}
