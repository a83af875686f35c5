//! Strategy parameter block — serializable, validated, host-tunable.
//!
//! Defaults mirror the reference configuration: 50-bar leader lookback,
//! 21/50 momentum averages with a (2, 5) uptrend-age window, 0.20/0.05
//! earnings-growth floors, 15 equal-weight positions on 100k capital.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signal::MomentumParams;

/// Errors from parameter validation or config parsing.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("invalid parameters: {0}")]
    Invalid(String),

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Everything the engine's components are tuned by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Trailing bars retained per symbol and used for leader ranking.
    pub lookback_bars: usize,
    /// Leaders retained by the ranking stage before the earnings filter.
    pub leaders_to_scan: usize,
    pub fast_period: usize,
    pub slow_period: usize,
    /// Exclusive lower bound on uptrend age for buying.
    pub min_uptrend_age: u32,
    /// Exclusive upper bound on uptrend age for buying.
    pub max_uptrend_age: u32,
    /// Year-over-year growth floor for the most recent quarter.
    pub min_recent_quarter_growth: f64,
    /// Year-over-year growth floor for the quarter before it.
    pub min_prior_quarter_growth: f64,
    pub max_positions: u32,
    pub initial_capital: f64,
    /// Period of the benchmark moving average behind the market gate.
    pub benchmark_sma_period: usize,
    /// Admission floor: minimum share price.
    pub min_share_price: f64,
    /// Admission floor: minimum daily dollar volume.
    pub min_dollar_volume: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            lookback_bars: 50,
            leaders_to_scan: 1000,
            fast_period: 21,
            slow_period: 50,
            min_uptrend_age: 2,
            max_uptrend_age: 5,
            min_recent_quarter_growth: 0.20,
            min_prior_quarter_growth: 0.05,
            max_positions: 15,
            initial_capital: 100_000.0,
            benchmark_sma_period: 100,
            min_share_price: 10.0,
            min_dollar_volume: 50_000_000.0,
        }
    }
}

impl StrategyParams {
    /// The momentum-signal slice of the parameter block.
    pub fn momentum(&self) -> MomentumParams {
        MomentumParams {
            fast_period: self.fast_period,
            slow_period: self.slow_period,
            min_uptrend_age: self.min_uptrend_age,
            max_uptrend_age: self.max_uptrend_age,
        }
    }

    /// Fixed dollar target per position: initial capital split across the
    /// maximum position count.
    pub fn target_position_size(&self) -> f64 {
        self.initial_capital / self.max_positions as f64
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.lookback_bars == 0 {
            return Err(ParamsError::Invalid("lookback_bars must be >= 1".into()));
        }
        if self.leaders_to_scan == 0 {
            return Err(ParamsError::Invalid("leaders_to_scan must be >= 1".into()));
        }
        if self.fast_period == 0 || self.slow_period == 0 {
            return Err(ParamsError::Invalid(
                "moving-average periods must be >= 1".into(),
            ));
        }
        if self.fast_period >= self.slow_period {
            return Err(ParamsError::Invalid(format!(
                "fast_period ({}) must be below slow_period ({})",
                self.fast_period, self.slow_period
            )));
        }
        if self.min_uptrend_age >= self.max_uptrend_age {
            return Err(ParamsError::Invalid(format!(
                "min_uptrend_age ({}) must be below max_uptrend_age ({})",
                self.min_uptrend_age, self.max_uptrend_age
            )));
        }
        if self.max_positions == 0 {
            return Err(ParamsError::Invalid("max_positions must be >= 1".into()));
        }
        if self.initial_capital <= 0.0 {
            return Err(ParamsError::Invalid(
                "initial_capital must be positive".into(),
            ));
        }
        if self.benchmark_sma_period == 0 {
            return Err(ParamsError::Invalid(
                "benchmark_sma_period must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML parameter block. Absent keys keep their
    /// defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ParamsError> {
        let params: Self = toml::from_str(input)?;
        params.validate()?;
        Ok(params)
    }
}
