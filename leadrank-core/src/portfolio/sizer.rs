//! Equal-weight position sizing.

use crate::config::StrategyParams;

/// Sizes new positions at a fixed dollar target: initial capital divided by
/// the maximum position count. Every selected symbol gets the same
/// allocation regardless of rank.
#[derive(Debug, Clone, Copy)]
pub struct PositionSizer {
    target_position_size: f64,
}

impl PositionSizer {
    pub fn new(target_position_size: f64) -> Self {
        assert!(
            target_position_size > 0.0,
            "target position size must be positive"
        );
        Self {
            target_position_size,
        }
    }

    pub fn from_params(params: &StrategyParams) -> Self {
        Self::new(params.target_position_size())
    }

    pub fn target_position_size(&self) -> f64 {
        self.target_position_size
    }

    /// How many new positions the available cash funds this cycle. Zero means
    /// no buys are attempted — reported, not an error.
    pub fn budgeted_positions(&self, available_cash: f64) -> u32 {
        if available_cash <= 0.0 {
            return 0;
        }
        (available_cash / self.target_position_size) as u32
    }

    /// Fraction of the current total portfolio value allocated to one new
    /// position. Zero when the portfolio value is not positive.
    pub fn allocation_fraction(&self, total_portfolio_value: f64) -> f64 {
        if total_portfolio_value <= 0.0 {
            return 0.0;
        }
        self.target_position_size / total_portfolio_value
    }
}
