//! Buy-list selection: leaders → earnings growth → momentum eligibility.

use std::collections::HashSet;

use crate::config::StrategyParams;
use crate::domain::Symbol;
use crate::registry::StockRegistry;

use super::{EarningsGrowthFilter, LeaderRanker};

/// Composes the ranking and filter stages into the final buy list.
///
/// Stage order matters: the earnings stage re-orders by growth score, and
/// that order — not the return ranking — is what survives to the final cut.
/// Nothing re-sorts after it.
#[derive(Debug, Clone, Copy)]
pub struct SelectionPipeline {
    ranker: LeaderRanker,
    earnings: EarningsGrowthFilter,
}

impl SelectionPipeline {
    pub fn from_params(params: &StrategyParams) -> Self {
        Self {
            ranker: LeaderRanker::new(params.leaders_to_scan),
            earnings: EarningsGrowthFilter::new(
                params.min_recent_quarter_growth,
                params.min_prior_quarter_growth,
            ),
        }
    }

    /// Produce at most `max_count` symbols to buy, excluding those already
    /// held. An empty result means nothing qualified this cycle — that is a
    /// normal outcome, not an error.
    pub fn select_buys(
        &self,
        registry: &StockRegistry,
        max_count: usize,
        already_held: &HashSet<Symbol>,
    ) -> Vec<Symbol> {
        let leaders = self.ranker.leaders(registry.records());
        let leader_count = leaders.len();

        let buys: Vec<Symbol> = self
            .earnings
            .filter(leaders)
            .into_iter()
            .filter(|record| !already_held.contains(record.symbol()))
            .filter(|record| record.momentum().is_buy_eligible())
            .take(max_count)
            .map(|record| record.symbol().to_string())
            .collect();

        tracing::debug!(
            tracked = registry.len(),
            leaders = leader_count,
            selected = buys.len(),
            "selection pass"
        );
        buys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EarningsObservation, PriceObservation};
    use crate::indicators::test_time;
    use chrono::NaiveDate;

    /// Small windows, and an age window wide enough that any sustained
    /// uptrend stays buy-eligible; age-window edges are covered by the
    /// signal's own tests.
    fn params() -> StrategyParams {
        StrategyParams {
            lookback_bars: 10,
            fast_period: 3,
            slow_period: 5,
            min_uptrend_age: 0,
            max_uptrend_age: 1000,
            ..Default::default()
        }
    }

    fn feed_prices(registry: &mut StockRegistry, symbol: &str, prices: &[f64]) {
        for (i, &price) in prices.iter().enumerate() {
            registry.observe_price(&PriceObservation {
                symbol: symbol.into(),
                at: test_time(i as i64),
                price,
                liquid_and_priced: true,
            });
        }
    }

    fn feed_eps(registry: &mut StockRegistry, symbol: &str, eps_newest_first: &[f64]) {
        for (i, value) in eps_newest_first.iter().rev().enumerate() {
            registry.observe_earnings(&EarningsObservation {
                symbol: symbol.into(),
                filing_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
                    + chrono::Duration::days(91 * i as i64),
                quarterly_eps: *value,
            });
        }
    }

    fn rising(start: f64, step: f64, n: usize) -> Vec<f64> {
        (0..n).map(|i| start + step * i as f64).collect()
    }

    const GOOD_EPS: [f64; 6] = [2.5, 2.2, 1.0, 1.0, 2.0, 2.0];
    const BAD_EPS: [f64; 6] = [2.1, 2.2, 1.0, 1.0, 2.0, 2.0];

    /// GROW and LEAD trend up with full histories; GROW has accelerating
    /// earnings, LEAD does not, FLAT never trends.
    fn populated_registry() -> StockRegistry {
        let mut registry = StockRegistry::new(params());
        feed_prices(&mut registry, "GROW", &rising(100.0, 1.0, 12));
        feed_prices(&mut registry, "LEAD", &rising(100.0, 2.0, 12));
        feed_prices(&mut registry, "FLAT", &vec![100.0; 12]);
        feed_eps(&mut registry, "GROW", &GOOD_EPS);
        feed_eps(&mut registry, "LEAD", &BAD_EPS);
        feed_eps(&mut registry, "FLAT", &GOOD_EPS);
        registry
    }

    #[test]
    fn selects_only_fully_qualified_symbols() {
        let registry = populated_registry();
        let pipeline = SelectionPipeline::from_params(registry.params());

        // LEAD outranks GROW on return but fails the earnings stage; FLAT
        // passes earnings but has no momentum.
        let buys = pipeline.select_buys(&registry, 10, &HashSet::new());
        assert_eq!(buys, vec!["GROW".to_string()]);
    }

    #[test]
    fn never_returns_held_symbols() {
        let registry = populated_registry();
        let pipeline = SelectionPipeline::from_params(registry.params());

        let held: HashSet<Symbol> = [String::from("GROW")].into();
        let buys = pipeline.select_buys(&registry, 10, &held);
        assert!(buys.is_empty());
    }

    #[test]
    fn respects_max_count() {
        let mut registry = StockRegistry::new(params());
        for symbol in ["AAA", "BBB", "CCC"] {
            feed_prices(&mut registry, symbol, &rising(100.0, 1.0, 12));
            feed_eps(&mut registry, symbol, &GOOD_EPS);
        }
        let pipeline = SelectionPipeline::from_params(registry.params());

        let buys = pipeline.select_buys(&registry, 2, &HashSet::new());
        assert_eq!(buys.len(), 2);
    }

    #[test]
    fn idempotent_on_unchanged_snapshot() {
        let registry = populated_registry();
        let pipeline = SelectionPipeline::from_params(registry.params());

        let held = HashSet::new();
        let first = pipeline.select_buys(&registry, 10, &held);
        let second = pipeline.select_buys(&registry, 10, &held);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_registry_selects_nothing() {
        let registry = StockRegistry::new(params());
        let pipeline = SelectionPipeline::from_params(registry.params());
        assert!(pipeline
            .select_buys(&registry, 10, &HashSet::new())
            .is_empty());
    }

    #[test]
    fn final_order_is_growth_order_not_return_order() {
        let mut registry = StockRegistry::new(params());
        // HARE has the better return, TORT the better earnings growth.
        feed_prices(&mut registry, "HARE", &rising(100.0, 3.0, 12));
        feed_prices(&mut registry, "TORT", &rising(100.0, 1.0, 12));
        feed_eps(&mut registry, "HARE", &GOOD_EPS);
        feed_eps(&mut registry, "TORT", &[3.0, 2.6, 1.0, 1.0, 2.0, 2.0]);

        let pipeline = SelectionPipeline::from_params(registry.params());
        let buys = pipeline.select_buys(&registry, 10, &HashSet::new());
        assert_eq!(buys, vec!["TORT".to_string(), "HARE".to_string()]);
    }
}
