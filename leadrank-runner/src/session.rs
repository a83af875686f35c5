//! TradingSession — drives the engine through simulated trading days.
//!
//! The session owns the host-side concerns the core externalizes: cash and
//! position accounting, scheduling of the liquidation pass before the
//! selection pass, fill generation at the last observed price, and the trade
//! ledger. Per-symbol ledger errors are logged and skipped; they never abort
//! a pass.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};

use leadrank_core::config::{ParamsError, StrategyParams};
use leadrank_core::domain::{Fill, FillSide, Symbol};
use leadrank_core::ledger::TradeLedger;
use leadrank_core::market::MarketGate;
use leadrank_core::portfolio::{LiquidationPolicy, PositionSizer};
use leadrank_core::registry::StockRegistry;
use leadrank_core::screen::SelectionPipeline;

use crate::feed::MarketDay;

/// End-of-run snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub days_run: u32,
    pub cash: f64,
    pub total_value: f64,
    pub open_positions: usize,
    pub closed_trades: usize,
}

pub struct TradingSession {
    registry: StockRegistry,
    gate: MarketGate,
    pipeline: SelectionPipeline,
    sizer: PositionSizer,
    liquidation: LiquidationPolicy,
    ledger: TradeLedger,
    cash: f64,
    /// Open positions: symbol → share quantity. Symbol order keeps the pass
    /// order deterministic.
    positions: BTreeMap<Symbol, f64>,
    /// Last observed price per symbol, tracked or not, for valuation and
    /// fill pricing.
    last_prices: BTreeMap<Symbol, f64>,
    days_run: u32,
}

impl TradingSession {
    pub fn new(params: StrategyParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            gate: MarketGate::from_params(&params),
            pipeline: SelectionPipeline::from_params(&params),
            sizer: PositionSizer::from_params(&params),
            liquidation: LiquidationPolicy,
            ledger: TradeLedger::new(),
            cash: params.initial_capital,
            positions: BTreeMap::new(),
            last_prices: BTreeMap::new(),
            days_run: 0,
            registry: StockRegistry::new(params),
        })
    }

    /// Ingest one day of observations, then run the liquidation pass and the
    /// selection pass, mirroring the daily schedule of the live system.
    pub fn run_day(&mut self, day: &MarketDay) {
        self.gate.observe(day.at, day.benchmark_price);
        for obs in &day.prices {
            self.last_prices.insert(obs.symbol.clone(), obs.price);
            self.registry.observe_price(obs);
        }
        for filing in &day.earnings {
            self.registry.observe_earnings(filing);
        }

        self.run_liquidation_pass(day.at);
        self.run_selection_pass(day.at);
        self.days_run += 1;
    }

    /// Exit every held position whose momentum signal has deteriorated.
    pub fn run_liquidation_pass(&mut self, at: DateTime<Utc>) {
        let exits = self
            .liquidation
            .symbols_to_liquidate(&self.registry, self.positions.keys());
        for symbol in exits {
            let Some(price) = self.last_prices.get(&symbol).copied() else {
                continue;
            };
            let Some(quantity) = self.positions.remove(&symbol) else {
                continue;
            };
            self.cash += quantity * price;
            self.record_fill(&symbol, FillSide::Sell, price, at);
            tracing::info!(symbol = %symbol, price, "liquidated");
        }
    }

    /// Buy the pipeline's picks, gated on a favorable market and available
    /// cash.
    pub fn run_selection_pass(&mut self, at: DateTime<Utc>) {
        if !self.gate.is_favorable() {
            tracing::debug!("market unfavorable, skipping buy pass");
            return;
        }
        let budget = self.sizer.budgeted_positions(self.cash);
        if budget == 0 {
            tracing::debug!(cash = self.cash, "cash below target position size");
            return;
        }

        let held: HashSet<Symbol> = self.positions.keys().cloned().collect();
        let buys = self
            .pipeline
            .select_buys(&self.registry, budget as usize, &held);

        let fraction = self.sizer.allocation_fraction(self.total_value());
        let dollars = fraction * self.total_value();
        for symbol in buys {
            let Some(price) = self.last_prices.get(&symbol).copied() else {
                continue;
            };
            let quantity = dollars / price;
            self.cash -= quantity * price;
            self.positions.insert(symbol.clone(), quantity);
            self.record_fill(&symbol, FillSide::Buy, price, at);
            tracing::info!(symbol = %symbol, price, quantity, "entered");
        }
    }

    fn record_fill(&mut self, symbol: &str, side: FillSide, price: f64, at: DateTime<Utc>) {
        let fill = Fill {
            symbol: symbol.to_string(),
            side,
            price,
            at,
        };
        if let Err(err) = self.ledger.record_fill(&fill) {
            tracing::warn!(%err, "ledger rejected fill");
        }
    }

    /// Cash plus the marked value of every open position.
    pub fn total_value(&self) -> f64 {
        let positions: f64 = self
            .positions
            .iter()
            .map(|(symbol, quantity)| {
                quantity * self.last_prices.get(symbol).copied().unwrap_or(0.0)
            })
            .sum();
        self.cash + positions
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn positions(&self) -> &BTreeMap<Symbol, f64> {
        &self.positions
    }

    pub fn ledger(&self) -> &TradeLedger {
        &self.ledger
    }

    pub fn registry(&self) -> &StockRegistry {
        &self.registry
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            days_run: self.days_run,
            cash: self.cash,
            total_value: self.total_value(),
            open_positions: self.positions.len(),
            closed_trades: self.ledger.closed().len(),
        }
    }
}
