//! Leader ranking — trailing-return ordering over tracked symbols.

use std::cmp::Ordering;

use crate::registry::StockRecord;

/// Ranks symbols by trailing-window return, descending, and keeps the top
/// `count` (a fixed cutoff, not a percentile).
///
/// Only records with a full price history participate; the rest are excluded
/// rather than ranked with a default. Exact ties keep their input order.
#[derive(Debug, Clone, Copy)]
pub struct LeaderRanker {
    pub count: usize,
}

impl LeaderRanker {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Full descending ordering with the computed returns attached.
    pub fn rank<'a>(
        &self,
        records: impl IntoIterator<Item = &'a StockRecord>,
    ) -> Vec<(&'a StockRecord, f64)> {
        let mut ranked: Vec<(&StockRecord, f64)> = records
            .into_iter()
            .filter_map(|record| record.trailing_return().map(|ret| (record, ret)))
            .collect();
        // Stable sort keeps the caller's ordering for exact ties.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }

    /// The top `count` records by trailing return.
    pub fn leaders<'a>(
        &self,
        records: impl IntoIterator<Item = &'a StockRecord>,
    ) -> Vec<&'a StockRecord> {
        let mut ranked = self.rank(records);
        ranked.truncate(self.count);
        ranked.into_iter().map(|(record, _)| record).collect()
    }
}
