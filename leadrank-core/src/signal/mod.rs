//! Dual-moving-average momentum state machine.
//!
//! Composes a fast and a slow moving average over the same price stream and
//! derives, per bar, (a) a trend classification against the averages' own
//! previous values and (b) the number of bars since the fast average most
//! recently crossed above the slow one. Buy eligibility is a window over that
//! age: recently crossed, not yet stale, and currently strengthening.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicators::{MovingAverage, Sma};

/// Per-bar trend classification.
///
/// `NotReady` is a distinct state, never conflated with `Falling`: an
/// indicator that is still warming up has no opinion, and in particular does
/// not signal an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendState {
    /// One of the averages has not yet seen a full window.
    NotReady,
    /// Both averages rose on this bar.
    BothRising,
    /// The fast average rose while the slow average held or fell.
    FastOnlyRising,
    /// The fast average held or fell.
    Falling,
}

/// Parameters for the momentum signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentumParams {
    pub fast_period: usize,
    pub slow_period: usize,
    /// Exclusive lower bound on `bars_since_cross_above_slow` for buying.
    pub min_uptrend_age: u32,
    /// Exclusive upper bound on `bars_since_cross_above_slow` for buying.
    pub max_uptrend_age: u32,
}

impl Default for MomentumParams {
    fn default() -> Self {
        Self {
            fast_period: 21,
            slow_period: 50,
            min_uptrend_age: 2,
            max_uptrend_age: 5,
        }
    }
}

/// The momentum state machine over two moving averages.
#[derive(Debug, Clone)]
pub struct DualAverageMomentum<M: MovingAverage = Sma> {
    fast: M,
    slow: M,
    min_uptrend_age: u32,
    max_uptrend_age: u32,
    bars_since_cross_above_slow: u32,
    last_state: TrendState,
}

impl DualAverageMomentum<Sma> {
    pub fn new(params: &MomentumParams) -> Self {
        Self::with_averages(
            Sma::new(params.fast_period),
            Sma::new(params.slow_period),
            params,
        )
    }
}

impl<M: MovingAverage> DualAverageMomentum<M> {
    /// Build the signal over caller-supplied averages. The averages only need
    /// to satisfy the `MovingAverage` seam; how the mean is computed is not
    /// this type's concern.
    pub fn with_averages(fast: M, slow: M, params: &MomentumParams) -> Self {
        Self {
            fast,
            slow,
            min_uptrend_age: params.min_uptrend_age,
            max_uptrend_age: params.max_uptrend_age,
            bars_since_cross_above_slow: 0,
            last_state: TrendState::NotReady,
        }
    }

    /// Apply one price sample and classify the bar.
    ///
    /// While either average is warming up, both are fed and `NotReady` comes
    /// back with no crossover bookkeeping. Once warm, the cross-age counter is
    /// maintained against the fast/slow relation and the classification is
    /// made against each average's own previous value.
    pub fn update(&mut self, at: DateTime<Utc>, price: f64) -> TrendState {
        if !self.fast.is_ready() || !self.slow.is_ready() {
            self.fast.update(at, price);
            self.slow.update(at, price);
            self.last_state = TrendState::NotReady;
            return self.last_state;
        }

        let prev_fast = self.fast.value();
        let prev_slow = self.slow.value();
        self.fast.update(at, price);
        self.slow.update(at, price);
        let fast = self.fast.value();
        let slow = self.slow.value();

        if fast > slow {
            if prev_fast <= prev_slow {
                // Fresh cross above.
                self.bars_since_cross_above_slow = 1;
            } else {
                self.bars_since_cross_above_slow += 1;
            }
        } else {
            self.bars_since_cross_above_slow = 0;
        }

        self.last_state = if fast > prev_fast {
            if slow > prev_slow {
                TrendState::BothRising
            } else {
                TrendState::FastOnlyRising
            }
        } else {
            TrendState::Falling
        };
        self.last_state
    }

    pub fn last_state(&self) -> TrendState {
        self.last_state
    }

    /// Bars since the fast average most recently moved above the slow one.
    /// Zero whenever fast is at or below slow.
    pub fn bars_since_cross_above_slow(&self) -> u32 {
        self.bars_since_cross_above_slow
    }

    /// Recently crossed up, not yet stale, and currently strengthening.
    ///
    /// The age window is exclusive on both ends: a cross that is too young is
    /// unconfirmed, one that is too old is exhausted.
    pub fn is_buy_eligible(&self) -> bool {
        self.min_uptrend_age < self.bars_since_cross_above_slow
            && self.bars_since_cross_above_slow < self.max_uptrend_age
            && self.last_state == TrendState::BothRising
    }

    /// Momentum deterioration: the fast average failed to rise on the latest
    /// bar. Warm-up is not deterioration.
    pub fn is_exit_signal(&self) -> bool {
        self.last_state == TrendState::Falling
    }
}
