//! Per-symbol tracked state: price history, earnings history, momentum signal.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::StrategyParams;
use crate::domain::Symbol;
use crate::signal::{DualAverageMomentum, TrendState};
use crate::window::RollingWindow;

/// Quarters of EPS history retained per symbol: two recent quarters plus
/// their year-ago counterparts at indices 4 and 5.
pub const EPS_QUARTERS: usize = 6;

/// Year-over-year quarterly EPS growth for the two most recent quarters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarningsGrowth {
    /// Newest quarter vs. the same quarter one year prior.
    pub recent: f64,
    /// The quarter before it vs. its year-ago counterpart.
    pub prior: f64,
}

impl EarningsGrowth {
    /// Ordering score for the growth filter.
    pub fn combined(&self) -> f64 {
        self.recent + self.prior
    }
}

/// One symbol's streaming state. Created when the symbol is admitted to
/// tracking; discarded wholesale on eviction.
#[derive(Debug, Clone)]
pub struct StockRecord {
    symbol: Symbol,
    price_history: RollingWindow<f64>,
    earnings_history: RollingWindow<f64>,
    last_report_date: Option<NaiveDate>,
    momentum: DualAverageMomentum,
}

impl StockRecord {
    pub fn new(symbol: Symbol, params: &StrategyParams) -> Self {
        Self {
            symbol,
            price_history: RollingWindow::new(params.lookback_bars),
            earnings_history: RollingWindow::new(EPS_QUARTERS),
            last_report_date: None,
            momentum: DualAverageMomentum::new(&params.momentum()),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Apply one price sample to the history and the momentum signal.
    pub fn record_price(&mut self, at: DateTime<Utc>, price: f64) -> TrendState {
        self.price_history.push(price);
        self.momentum.update(at, price)
    }

    /// Most recent price sample, if any.
    pub fn latest_price(&self) -> Option<f64> {
        self.price_history.newest().copied()
    }

    /// Return over the full trailing window: newest vs. oldest retained
    /// price. None until the window is full, or when the oldest retained
    /// price is zero.
    pub fn trailing_return(&self) -> Option<f64> {
        if !self.price_history.is_full() {
            return None;
        }
        let newest = *self.price_history.newest()?;
        let oldest = *self.price_history.oldest()?;
        if oldest == 0.0 {
            return None;
        }
        Some((newest - oldest) / oldest)
    }

    /// Append a quarterly EPS figure, deduplicated by filing date: a repeat
    /// of the last seen filing date is ignored. Returns whether the figure
    /// was recorded.
    pub fn record_earnings(&mut self, filing_date: NaiveDate, quarterly_eps: f64) -> bool {
        if self.last_report_date == Some(filing_date) {
            return false;
        }
        self.earnings_history.push(quarterly_eps);
        self.last_report_date = Some(filing_date);
        true
    }

    /// Year-over-year growth for the two most recent quarters. None without
    /// a full six-quarter history or when either year-ago quarter is zero.
    pub fn earnings_growth(&self) -> Option<EarningsGrowth> {
        if !self.earnings_history.is_full() {
            return None;
        }
        let eps = |i: usize| self.earnings_history.get(i).copied();
        let newest = eps(0)?;
        let prior = eps(1)?;
        let newest_base = eps(4)?;
        let prior_base = eps(5)?;
        if newest_base == 0.0 || prior_base == 0.0 {
            return None;
        }
        Some(EarningsGrowth {
            recent: (newest - newest_base) / newest_base.abs(),
            prior: (prior - prior_base) / prior_base.abs(),
        })
    }

    pub fn momentum(&self) -> &DualAverageMomentum {
        &self.momentum
    }

    pub fn price_history(&self) -> &RollingWindow<f64> {
        &self.price_history
    }

    pub fn earnings_history(&self) -> &RollingWindow<f64> {
        &self.earnings_history
    }
}
