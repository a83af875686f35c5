//! TradeReport — one entry/exit round trip, or a still-open entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Symbol;

/// A round-trip trade: entry on a buy fill, closed by a sell fill.
///
/// Exit fields and the percentage P&L stay unset while the position is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeReport {
    pub symbol: Symbol,
    pub entry_time: DateTime<Utc>,
    pub entry_price: f64,
    pub exit_time: Option<DateTime<Utc>>,
    pub exit_price: Option<f64>,
    /// `(exit - entry) / entry * 100`, computed at close.
    pub percentage_pnl: Option<f64>,
}

impl TradeReport {
    /// Open a new report from an entry fill.
    pub fn open(symbol: Symbol, entry_time: DateTime<Utc>, entry_price: f64) -> Self {
        Self {
            symbol,
            entry_time,
            entry_price,
            exit_time: None,
            exit_price: None,
            percentage_pnl: None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.exit_time.is_some()
    }

    /// Close the report with an exit fill and compute the percentage P&L.
    /// A zero entry price yields 0.0 rather than dividing by it.
    pub(crate) fn close(&mut self, exit_time: DateTime<Utc>, exit_price: f64) {
        self.exit_time = Some(exit_time);
        self.exit_price = Some(exit_price);
        let pnl = if self.entry_price == 0.0 {
            0.0
        } else {
            (exit_price - self.entry_price) / self.entry_price * 100.0
        };
        self.percentage_pnl = Some(pnl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn when(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 21, 0, 0).unwrap()
    }

    #[test]
    fn open_report_has_no_exit() {
        let report = TradeReport::open("AAPL".into(), when(1), 100.0);
        assert!(!report.is_closed());
        assert_eq!(report.exit_price, None);
        assert_eq!(report.percentage_pnl, None);
    }

    #[test]
    fn close_computes_percentage_pnl() {
        let mut report = TradeReport::open("AAPL".into(), when(1), 100.0);
        report.close(when(5), 110.0);
        assert!(report.is_closed());
        assert_eq!(report.exit_price, Some(110.0));
        assert_eq!(report.percentage_pnl, Some(10.0));
    }

    #[test]
    fn losing_trade_has_negative_pnl() {
        let mut report = TradeReport::open("AAPL".into(), when(1), 200.0);
        report.close(when(9), 150.0);
        assert_eq!(report.percentage_pnl, Some(-25.0));
    }

    #[test]
    fn zero_entry_price_is_guarded() {
        let mut report = TradeReport::open("JUNK".into(), when(1), 0.0);
        report.close(when(2), 5.0);
        assert_eq!(report.percentage_pnl, Some(0.0));
    }

    #[test]
    fn serialization_roundtrip() {
        let mut report = TradeReport::open("MSFT".into(), when(1), 321.5);
        report.close(when(8), 350.0);
        let json = serde_json::to_string(&report).unwrap();
        let deser: TradeReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deser);
    }
}
