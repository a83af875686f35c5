//! LeadRank Core — streaming signal computation and ranking/selection engine.
//!
//! Ranks a tracked equity universe each trading cycle and decides which
//! symbols to buy and which held positions to liquidate:
//! - Rolling windows and a streaming moving-average seam
//! - Dual-moving-average momentum state machine per symbol
//! - Leader ranking over trailing returns
//! - Earnings-acceleration (CANSLIM-style) filter
//! - Filter → rank → select pipeline, equal-weight sizing, liquidation policy
//! - Trade ledger pairing fills into reports
//!
//! The crate is a library: the host owns scheduling, order placement, and
//! cash accounting, and feeds prices, filings, and fills as discrete,
//! per-symbol-ordered calls. See `leadrank-runner` for a reference host.

pub mod config;
pub mod domain;
pub mod indicators;
pub mod ledger;
pub mod market;
pub mod portfolio;
pub mod registry;
pub mod screen;
pub mod signal;
pub mod window;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: types a host may share across threads are
    /// Send + Sync. The engine itself is single-threaded, but a concurrent
    /// host wrapping the registry in its own exclusive-access discipline
    /// must not be blocked by the type system.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<domain::PriceObservation>();
        require_sync::<domain::PriceObservation>();
        require_send::<domain::EarningsObservation>();
        require_sync::<domain::EarningsObservation>();
        require_send::<domain::Fill>();
        require_sync::<domain::Fill>();
        require_send::<domain::TradeReport>();
        require_sync::<domain::TradeReport>();

        // Engine state
        require_send::<registry::StockRegistry>();
        require_sync::<registry::StockRegistry>();
        require_send::<registry::StockRecord>();
        require_sync::<registry::StockRecord>();
        require_send::<ledger::TradeLedger>();
        require_sync::<ledger::TradeLedger>();
        require_send::<market::MarketGate>();
        require_sync::<market::MarketGate>();

        // Components
        require_send::<signal::DualAverageMomentum>();
        require_sync::<signal::DualAverageMomentum>();
        require_send::<screen::SelectionPipeline>();
        require_sync::<screen::SelectionPipeline>();
        require_send::<portfolio::PositionSizer>();
        require_sync::<portfolio::PositionSizer>();
        require_send::<portfolio::LiquidationPolicy>();
        require_sync::<portfolio::LiquidationPolicy>();

        // Config
        require_send::<config::StrategyParams>();
        require_sync::<config::StrategyParams>();
    }
}
