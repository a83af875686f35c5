//! Feed-facing event types: price samples, earnings filings, order fills.
//!
//! These are the inputs the host delivers; the engine never fetches data
//! itself. Per-symbol observations must arrive in non-decreasing timestamp
//! order — the windows and averages are order-sensitive and nothing here
//! re-sorts or buffers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Symbol;

/// One periodic price sample for a tracked (or candidate) symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub symbol: Symbol,
    pub at: DateTime<Utc>,
    pub price: f64,
    /// Host-side admission verdict: the symbol currently clears the price and
    /// liquidity thresholds (see `registry::AdmissionCriteria`). A `false`
    /// here evicts the symbol from tracking.
    pub liquid_and_priced: bool,
}

/// One quarterly earnings filing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsObservation {
    pub symbol: Symbol,
    /// Fiscal filing date; repeated deliveries for the same date are
    /// deduplicated per symbol.
    pub filing_date: NaiveDate,
    pub quarterly_eps: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillSide {
    Buy,
    Sell,
}

/// A fill notification from the host's execution layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub symbol: Symbol,
    pub side: FillSide,
    pub price: f64,
    pub at: DateTime<Utc>,
}
