//! Trade ledger — pairs fills into entry/exit reports and computes P&L.
//!
//! Single-lot model: at most one open report per symbol, enforced
//! structurally by keeping the open report in a per-symbol slot rather than
//! a list. Violations indicate an upstream accounting bug and are surfaced
//! to the caller; they never abort processing of other symbols.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{Fill, FillSide, Symbol, TradeReport};

/// Fill-pairing precondition violations.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    /// A buy fill arrived for a symbol that already has an open position.
    #[error("buy fill for {symbol} at {at}: position already open")]
    PositionAlreadyOpen { symbol: Symbol, at: DateTime<Utc> },

    /// A sell fill arrived for a symbol with no open position.
    #[error("sell fill for {symbol} at {at}: no open position")]
    NoOpenPosition { symbol: Symbol, at: DateTime<Utc> },
}

/// Entry/exit pairing state for every symbol traded during the run.
#[derive(Debug, Default)]
pub struct TradeLedger {
    open: BTreeMap<Symbol, TradeReport>,
    closed: Vec<TradeReport>,
}

impl TradeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fill. Buy fills open a report; sell fills close the open
    /// one and compute its percentage P&L. On error the ledger is unchanged.
    pub fn record_fill(&mut self, fill: &Fill) -> Result<(), LedgerError> {
        match fill.side {
            FillSide::Buy => {
                if self.open.contains_key(&fill.symbol) {
                    return Err(LedgerError::PositionAlreadyOpen {
                        symbol: fill.symbol.clone(),
                        at: fill.at,
                    });
                }
                self.open.insert(
                    fill.symbol.clone(),
                    TradeReport::open(fill.symbol.clone(), fill.at, fill.price),
                );
            }
            FillSide::Sell => {
                let Some(mut report) = self.open.remove(&fill.symbol) else {
                    return Err(LedgerError::NoOpenPosition {
                        symbol: fill.symbol.clone(),
                        at: fill.at,
                    });
                };
                report.close(fill.at, fill.price);
                self.closed.push(report);
            }
        }
        Ok(())
    }

    /// The still-open report for a symbol, if any.
    pub fn open_position(&self, symbol: &str) -> Option<&TradeReport> {
        self.open.get(symbol)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Closed round trips in close order.
    pub fn closed(&self) -> &[TradeReport] {
        &self.closed
    }

    /// All reports — closed and still open — by entry time, newest first.
    pub fn reports(&self) -> Vec<TradeReport> {
        let mut all: Vec<TradeReport> = self
            .closed
            .iter()
            .cloned()
            .chain(self.open.values().cloned())
            .collect();
        all.sort_by_key(|report| std::cmp::Reverse(report.entry_time));
        all
    }
}
