//! Momentum-deterioration liquidation policy.

use crate::domain::Symbol;
use crate::registry::StockRegistry;

/// Flags held symbols whose momentum signal has flipped negative.
///
/// Evaluated once per liquidation pass, independently of the buy pass; a
/// symbol bought earlier in the same cycle is flagged like any other if its
/// signal deteriorates. A held symbol that is no longer tracked, or whose
/// averages are still warming up, is left alone — missing data is not
/// deterioration.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidationPolicy;

impl LiquidationPolicy {
    /// The subset of `held` to exit fully, in the order `held` was supplied.
    pub fn symbols_to_liquidate<'a>(
        &self,
        registry: &StockRegistry,
        held: impl IntoIterator<Item = &'a Symbol>,
    ) -> Vec<Symbol> {
        held.into_iter()
            .filter(|symbol| {
                registry
                    .get(symbol)
                    .is_some_and(|record| record.momentum().is_exit_signal())
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StrategyParams;
    use crate::domain::PriceObservation;
    use crate::indicators::test_time;

    fn params() -> StrategyParams {
        StrategyParams {
            lookback_bars: 10,
            fast_period: 3,
            slow_period: 5,
            ..Default::default()
        }
    }

    fn feed(registry: &mut StockRegistry, symbol: &str, prices: &[f64]) {
        for (i, &price) in prices.iter().enumerate() {
            registry.observe_price(&PriceObservation {
                symbol: symbol.into(),
                at: test_time(i as i64),
                price,
                liquid_and_priced: true,
            });
        }
    }

    #[test]
    fn flags_only_deteriorated_holdings() {
        let mut registry = StockRegistry::new(params());
        // UP keeps rising; DOWN rolls over on its last bar.
        feed(&mut registry, "UP", &[100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0]);
        feed(&mut registry, "DOWN", &[100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 80.0]);

        let held = vec![Symbol::from("UP"), Symbol::from("DOWN")];
        let exits = LiquidationPolicy.symbols_to_liquidate(&registry, &held);
        assert_eq!(exits, vec![Symbol::from("DOWN")]);
    }

    #[test]
    fn warming_up_holdings_are_left_alone() {
        let mut registry = StockRegistry::new(params());
        // Prices falling, but the averages never warm up: no exit flag.
        feed(&mut registry, "NEW", &[100.0, 90.0, 80.0]);

        let held = vec![Symbol::from("NEW")];
        let exits = LiquidationPolicy.symbols_to_liquidate(&registry, &held);
        assert!(exits.is_empty());
    }

    #[test]
    fn untracked_holdings_are_left_alone() {
        let registry = StockRegistry::new(params());
        let held = vec![Symbol::from("GONE")];
        let exits = LiquidationPolicy.symbols_to_liquidate(&registry, &held);
        assert!(exits.is_empty());
    }

    #[test]
    fn unheld_symbols_are_never_flagged() {
        let mut registry = StockRegistry::new(params());
        feed(&mut registry, "DOWN", &[100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 80.0]);

        let exits = LiquidationPolicy.symbols_to_liquidate(&registry, &[]);
        assert!(exits.is_empty());
    }
}
