//! Simple Moving Average (SMA), streaming form.
//!
//! Rolling mean over the last `period` observations, maintained incrementally
//! with a running sum. Ready once the window is full.

use chrono::{DateTime, Utc};

use crate::indicators::MovingAverage;
use crate::window::RollingWindow;

#[derive(Debug, Clone)]
pub struct Sma {
    window: RollingWindow<f64>,
    sum: f64,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            window: RollingWindow::new(period),
            sum: 0.0,
        }
    }
}

impl MovingAverage for Sma {
    fn update(&mut self, _at: DateTime<Utc>, value: f64) {
        self.sum += value;
        if let Some(evicted) = self.window.push(value) {
            self.sum -= evicted;
        }
        // A NaN sample poisons the running sum; rebuild it from the window so
        // the mean recovers once the bad sample is evicted.
        if !self.sum.is_finite() {
            self.sum = self.window.iter().sum();
        }
    }

    fn value(&self) -> f64 {
        if self.window.is_empty() {
            f64::NAN
        } else {
            self.sum / self.window.len() as f64
        }
    }

    fn is_ready(&self) -> bool {
        self.window.is_full()
    }

    fn period(&self) -> usize {
        self.window.capacity()
    }
}
