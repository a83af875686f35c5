//! Streaming indicator primitives.
//!
//! Indicators here consume one observation at a time and expose a current
//! value plus a readiness flag. The momentum signal composes two of them
//! through the narrow `MovingAverage` seam, so any conforming implementation
//! (library or hand-rolled) can back it.

pub mod sma;

pub use sma::Sma;

use chrono::{DateTime, Utc};

/// A fixed-window average over a scalar stream.
pub trait MovingAverage {
    /// Feed one observation.
    fn update(&mut self, at: DateTime<Utc>, value: f64);

    /// Mean over the retained samples. NaN before the first observation.
    fn value(&self) -> f64;

    /// True once the window holds a full period of samples.
    fn is_ready(&self) -> bool;

    fn period(&self) -> usize;
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Timestamp helper for tests: a fixed base instant plus `days`.
#[cfg(test)]
pub fn test_time(days: i64) -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.with_ymd_and_hms(2024, 1, 2, 21, 0, 0).unwrap() + chrono::Duration::days(days)
}
