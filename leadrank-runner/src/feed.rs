//! Deterministic synthetic market feed.
//!
//! Generates a universe of random-walk symbols plus a benchmark series, with
//! quarterly EPS streams of varying growth profiles. Seeded, so a given seed
//! always replays the same market — sessions and tests stay reproducible.

use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use leadrank_core::domain::{EarningsObservation, PriceObservation, Symbol};
use leadrank_core::registry::AdmissionCriteria;

/// Trading days between quarterly filings.
const FILING_INTERVAL_DAYS: u32 = 63;

/// One simulated trading day's worth of host-side inputs.
#[derive(Debug, Clone)]
pub struct MarketDay {
    pub day_index: u32,
    pub at: DateTime<Utc>,
    pub benchmark_price: f64,
    pub prices: Vec<PriceObservation>,
    pub earnings: Vec<EarningsObservation>,
}

#[derive(Debug, Clone)]
struct SymbolState {
    symbol: Symbol,
    price: f64,
    drift: f64,
    volatility: f64,
    dollar_volume: f64,
    eps: f64,
    /// Quarterly EPS growth rate; accelerators step it up each quarter.
    eps_growth: f64,
    eps_growth_step: f64,
    next_filing_day: u32,
}

/// Seeded random-walk universe generator.
#[derive(Debug)]
pub struct SyntheticFeed {
    rng: StdRng,
    admission: AdmissionCriteria,
    symbols: Vec<SymbolState>,
    benchmark_price: f64,
    day: u32,
    base: DateTime<Utc>,
}

impl SyntheticFeed {
    pub fn new(seed: u64, symbol_count: usize, admission: AdmissionCriteria) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let symbols = (0..symbol_count)
            .map(|i| {
                // Stagger filings so earnings don't all land on one day.
                let next_filing_day = (i as u32 % FILING_INTERVAL_DAYS) + 1;
                SymbolState {
                    symbol: format!("SYM{i:04}"),
                    price: rng.gen_range(5.0..150.0),
                    drift: rng.gen_range(-0.002..0.004),
                    volatility: rng.gen_range(0.005..0.03),
                    dollar_volume: rng.gen_range(10_000_000.0..500_000_000.0),
                    eps: rng.gen_range(0.5..3.0),
                    eps_growth: rng.gen_range(-0.05..0.15),
                    eps_growth_step: if rng.gen_bool(0.3) {
                        rng.gen_range(0.005..0.03)
                    } else {
                        0.0
                    },
                    next_filing_day,
                }
            })
            .collect();

        Self {
            rng,
            admission,
            symbols,
            benchmark_price: 400.0,
            day: 0,
            base: Utc.with_ymd_and_hms(2024, 1, 2, 21, 0, 0).unwrap(),
        }
    }

    /// Advance the simulation by one trading day.
    pub fn next_day(&mut self) -> MarketDay {
        self.day += 1;
        let at = self.base + chrono::Duration::days(self.day as i64);

        self.benchmark_price *= 1.0 + 0.0004 + 0.008 * self.rng.gen_range(-1.0..1.0);

        let mut prices = Vec::with_capacity(self.symbols.len());
        let mut earnings = Vec::new();

        for state in &mut self.symbols {
            let shock = self.rng.gen_range(-1.0..1.0);
            state.price *= 1.0 + state.drift + state.volatility * shock;
            state.price = state.price.max(0.01);
            state.dollar_volume *= 1.0 + 0.05 * self.rng.gen_range(-1.0..1.0);

            prices.push(PriceObservation {
                symbol: state.symbol.clone(),
                at,
                price: state.price,
                liquid_and_priced: self.admission.admits(state.price, state.dollar_volume),
            });

            if self.day == state.next_filing_day {
                state.eps *= 1.0 + state.eps_growth;
                state.eps_growth += state.eps_growth_step;
                state.next_filing_day += FILING_INTERVAL_DAYS;
                earnings.push(EarningsObservation {
                    symbol: state.symbol.clone(),
                    filing_date: at.date_naive(),
                    quarterly_eps: state.eps,
                });
            }
        }

        MarketDay {
            day_index: self.day,
            at,
            benchmark_price: self.benchmark_price,
            prices,
            earnings,
        }
    }
}
