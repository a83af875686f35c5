//! Trade-report export and summary statistics.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use leadrank_core::domain::TradeReport;

/// Aggregate statistics over a report list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportStats {
    pub total: usize,
    pub closed: usize,
    pub winners: usize,
    /// Mean percentage P&L over closed trades; 0.0 with none closed.
    pub average_pnl: f64,
}

pub fn summarize(reports: &[TradeReport]) -> ReportStats {
    let closed: Vec<&TradeReport> = reports.iter().filter(|r| r.is_closed()).collect();
    let winners = closed
        .iter()
        .filter(|r| r.percentage_pnl.unwrap_or(0.0) > 0.0)
        .count();
    let average_pnl = if closed.is_empty() {
        0.0
    } else {
        closed
            .iter()
            .filter_map(|r| r.percentage_pnl)
            .sum::<f64>()
            / closed.len() as f64
    };
    ReportStats {
        total: reports.len(),
        closed: closed.len(),
        winners,
        average_pnl,
    }
}

/// Write the report list as CSV. Open trades serialize with empty exit
/// columns.
pub fn write_reports_csv(path: &Path, reports: &[TradeReport]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("opening report file {}", path.display()))?;
    for report in reports {
        writer.serialize(report)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the aggregate statistics as a JSON artifact next to the CSV.
pub fn write_summary_json(path: &Path, stats: &ReportStats) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(stats)?;
    std::fs::write(path, json)
        .with_context(|| format!("writing summary {}", path.display()))?;
    Ok(())
}
