//! LeadRank Runner — the reference host for the core engine.
//!
//! Owns everything the core treats as an external collaborator: the data
//! feed (synthetic, seeded), the daily liquidation and selection passes,
//! naive cash accounting, fill generation, and report export.

pub mod feed;
pub mod logging;
pub mod report;
pub mod session;

pub use feed::{MarketDay, SyntheticFeed};
pub use report::{summarize, write_reports_csv, write_summary_json, ReportStats};
pub use session::{SessionSummary, TradingSession};
