//! Benchmark market gate — the "good market" precondition for the buy pass.

use chrono::{DateTime, Utc};

use crate::config::StrategyParams;
use crate::indicators::{MovingAverage, Sma};

/// Tracks a benchmark index against its own long moving average.
///
/// The buy pass runs only while the latest benchmark price sits above that
/// average; until the average is warm the gate stays closed. Hosts may use
/// this helper or supply their own verdict.
#[derive(Debug, Clone)]
pub struct MarketGate {
    sma: Sma,
    last_price: Option<f64>,
}

impl MarketGate {
    pub fn new(period: usize) -> Self {
        Self {
            sma: Sma::new(period),
            last_price: None,
        }
    }

    pub fn from_params(params: &StrategyParams) -> Self {
        Self::new(params.benchmark_sma_period)
    }

    /// Feed one benchmark price sample.
    pub fn observe(&mut self, at: DateTime<Utc>, price: f64) {
        self.sma.update(at, price);
        self.last_price = Some(price);
    }

    /// True once the average is warm and the benchmark trades above it.
    pub fn is_favorable(&self) -> bool {
        match self.last_price {
            Some(price) => self.sma.is_ready() && price > self.sma.value(),
            None => false,
        }
    }
}
