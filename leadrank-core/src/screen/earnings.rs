//! Earnings-acceleration filter over ranked symbols.
//!
//! Year-over-year quarterly EPS growth must clear a floor on each of the two
//! most recent quarters *and* be accelerating — the recent quarter strictly
//! above the prior one. Positive growth alone is not enough.

use std::cmp::Ordering;

use crate::registry::{EarningsGrowth, StockRecord};

/// Keeps symbols passing the acceleration test, ordered by combined growth
/// descending.
#[derive(Debug, Clone, Copy)]
pub struct EarningsGrowthFilter {
    pub min_recent_growth: f64,
    pub min_prior_growth: f64,
}

impl EarningsGrowthFilter {
    pub fn new(min_recent_growth: f64, min_prior_growth: f64) -> Self {
        Self {
            min_recent_growth,
            min_prior_growth,
        }
    }

    fn accelerating(&self, growth: &EarningsGrowth) -> bool {
        growth.recent > self.min_recent_growth
            && growth.prior > self.min_prior_growth
            && growth.recent > growth.prior
    }

    /// Records lacking a full six-quarter history, or with a zero year-ago
    /// quarter, are excluded (not errors).
    pub fn filter<'a>(
        &self,
        records: impl IntoIterator<Item = &'a StockRecord>,
    ) -> Vec<&'a StockRecord> {
        let mut passing: Vec<(&StockRecord, f64)> = records
            .into_iter()
            .filter_map(|record| record.earnings_growth().map(|g| (record, g)))
            .filter(|(_, growth)| self.accelerating(growth))
            .map(|(record, growth)| (record, growth.combined()))
            .collect();
        passing.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        passing.into_iter().map(|(record, _)| record).collect()
    }
}
