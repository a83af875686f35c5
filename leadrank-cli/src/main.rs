//! LeadRank CLI — run a simulated screening session and export the trades.
//!
//! Commands:
//! - `run` — drive a seeded synthetic market through the engine and write
//!   the trade-report CSV
//! - `params` — print the effective strategy parameters as TOML

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use leadrank_core::config::StrategyParams;
use leadrank_core::registry::AdmissionCriteria;
use leadrank_runner::{
    summarize, write_reports_csv, write_summary_json, SyntheticFeed, TradingSession,
};

#[derive(Parser)]
#[command(
    name = "leadrank",
    about = "LeadRank CLI — momentum/earnings screening engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulated session over a seeded synthetic market.
    Run {
        /// Path to a TOML strategy config. Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Feed seed: the same seed replays the same market.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Trading days to simulate.
        #[arg(long, default_value_t = 500)]
        days: u32,

        /// Universe size.
        #[arg(long, default_value_t = 200)]
        symbols: usize,

        /// Output CSV for the trade reports.
        #[arg(long, default_value = "reports/trades.csv")]
        out: PathBuf,
    },
    /// Print the effective strategy parameters as TOML.
    Params {
        /// Path to a TOML strategy config. Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_params(config: Option<&PathBuf>) -> Result<StrategyParams> {
    match config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            StrategyParams::from_toml_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(StrategyParams::default()),
    }
}

fn main() -> Result<()> {
    leadrank_runner::logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            seed,
            days,
            symbols,
            out,
        } => {
            let params = load_params(config.as_ref())?;
            let admission = AdmissionCriteria::from_params(&params);
            let mut feed = SyntheticFeed::new(seed, symbols, admission);
            let mut session = TradingSession::new(params)?;

            for _ in 0..days {
                let day = feed.next_day();
                session.run_day(&day);
            }

            let reports = session.ledger().reports();
            write_reports_csv(&out, &reports)?;

            let stats = summarize(&reports);
            write_summary_json(&out.with_file_name("summary.json"), &stats)?;
            let summary = session.summary();
            println!("Session: {days} days, seed {seed}, {symbols} symbols");
            println!(
                "Trades: {} closed ({} winners), {} still open, avg P&L {:.2}%",
                stats.closed,
                stats.winners,
                summary.open_positions,
                stats.average_pnl
            );
            println!(
                "Equity: {:.2} cash + positions = {:.2} total",
                summary.cash, summary.total_value
            );
            println!("Report written to {}", out.display());
        }
        Commands::Params { config } => {
            let params = load_params(config.as_ref())?;
            let rendered = toml::to_string_pretty(&params).context("rendering parameters")?;
            print!("{rendered}");
        }
    }

    Ok(())
}
