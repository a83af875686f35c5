//! Symbol registry: admission, eviction, and per-symbol streaming updates.
//!
//! Ownership is explicit — the host owns one `StockRegistry` and feeds it
//! observations; ranking passes read it as a consistent snapshot. Records
//! iterate in symbol order, so repeated passes over an unchanged registry
//! (and tie-breaks downstream) are deterministic.

pub mod record;

pub use record::{EarningsGrowth, StockRecord, EPS_QUARTERS};

use std::collections::{BTreeMap, BTreeSet};

use crate::config::StrategyParams;
use crate::domain::{EarningsObservation, PriceObservation, Symbol};

/// The "interesting" test a host applies to raw feed data before setting
/// `PriceObservation::liquid_and_priced`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdmissionCriteria {
    pub min_share_price: f64,
    pub min_dollar_volume: f64,
}

impl AdmissionCriteria {
    pub fn from_params(params: &StrategyParams) -> Self {
        Self {
            min_share_price: params.min_share_price,
            min_dollar_volume: params.min_dollar_volume,
        }
    }

    /// Priced and liquid enough to track.
    pub fn admits(&self, price: f64, dollar_volume: f64) -> bool {
        price > self.min_share_price && dollar_volume > self.min_dollar_volume
    }
}

/// All tracked symbols and their streaming state.
#[derive(Debug)]
pub struct StockRegistry {
    params: StrategyParams,
    records: BTreeMap<Symbol, StockRecord>,
    /// Symbols that failed the admission test after being observed. Their
    /// state was discarded and they stay retired — stale history is never
    /// resurrected.
    retired: BTreeSet<Symbol>,
}

impl StockRegistry {
    pub fn new(params: StrategyParams) -> Self {
        Self {
            params,
            records: BTreeMap::new(),
            retired: BTreeSet::new(),
        }
    }

    pub fn params(&self) -> &StrategyParams {
        &self.params
    }

    /// Apply one price observation: admit new symbols, update tracked ones,
    /// evict symbols whose observation arrives flagged unqualified.
    pub fn observe_price(&mut self, obs: &PriceObservation) {
        if self.retired.contains(&obs.symbol) {
            return;
        }
        if !obs.liquid_and_priced {
            if self.records.remove(&obs.symbol).is_some() {
                tracing::debug!(symbol = %obs.symbol, "evicted from tracking");
            }
            self.retired.insert(obs.symbol.clone());
            return;
        }
        let record = self
            .records
            .entry(obs.symbol.clone())
            .or_insert_with(|| StockRecord::new(obs.symbol.clone(), &self.params));
        record.record_price(obs.at, obs.price);
    }

    /// Apply one earnings filing. Filings for untracked symbols are ignored.
    pub fn observe_earnings(&mut self, obs: &EarningsObservation) {
        if let Some(record) = self.records.get_mut(&obs.symbol) {
            record.record_earnings(obs.filing_date, obs.quarterly_eps);
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&StockRecord> {
        self.records.get(symbol)
    }

    pub fn is_retired(&self, symbol: &str) -> bool {
        self.retired.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tracked records in symbol order.
    pub fn records(&self) -> impl Iterator<Item = &StockRecord> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::test_time;

    fn obs(symbol: &str, day: i64, price: f64, qualified: bool) -> PriceObservation {
        PriceObservation {
            symbol: symbol.into(),
            at: test_time(day),
            price,
            liquid_and_priced: qualified,
        }
    }

    #[test]
    fn first_qualified_observation_admits() {
        let mut registry = StockRegistry::new(StrategyParams::default());
        registry.observe_price(&obs("AAPL", 0, 180.0, true));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("AAPL").unwrap().latest_price(), Some(180.0));
    }

    #[test]
    fn unqualified_observation_evicts_and_retires() {
        let mut registry = StockRegistry::new(StrategyParams::default());
        registry.observe_price(&obs("AAPL", 0, 180.0, true));
        registry.observe_price(&obs("AAPL", 1, 8.0, false));

        assert!(registry.get("AAPL").is_none());
        assert!(registry.is_retired("AAPL"));
    }

    #[test]
    fn retired_symbols_are_never_resurrected() {
        let mut registry = StockRegistry::new(StrategyParams::default());
        registry.observe_price(&obs("AAPL", 0, 180.0, true));
        registry.observe_price(&obs("AAPL", 1, 8.0, false));
        registry.observe_price(&obs("AAPL", 2, 200.0, true));

        assert!(registry.get("AAPL").is_none());
        assert!(registry.is_retired("AAPL"));
    }

    #[test]
    fn earnings_for_untracked_symbols_are_ignored() {
        let mut registry = StockRegistry::new(StrategyParams::default());
        registry.observe_earnings(&EarningsObservation {
            symbol: "GHOST".into(),
            filing_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            quarterly_eps: 1.0,
        });
        assert!(registry.is_empty());
    }

    #[test]
    fn records_iterate_in_symbol_order() {
        let mut registry = StockRegistry::new(StrategyParams::default());
        for symbol in ["MSFT", "AAPL", "NVDA"] {
            registry.observe_price(&obs(symbol, 0, 100.0, true));
        }
        let symbols: Vec<&str> = registry.records().map(|r| r.symbol()).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "NVDA"]);
    }

    #[test]
    fn admission_criteria_thresholds() {
        let criteria = AdmissionCriteria::from_params(&StrategyParams::default());
        assert!(criteria.admits(10.01, 50_000_001.0));
        assert!(!criteria.admits(10.0, 50_000_001.0));
        assert!(!criteria.admits(10.01, 50_000_000.0));
    }
}
