//! Pair filter over a [`VolumeReport`].

use serde::Serialize;

use crate::volume::VolumeReport;

/// Volume and trade count shown for the current filter selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairTotals {
    pub volume: f64,
    pub trades: u64,
}

/// Totals for `pair`, or for every pair when `pair` is `None` or empty.
///
/// Totals are always recomputed from the per-pair maps. A pair absent from the
/// report yields zeros.
pub fn apply_filter(report: &VolumeReport, pair: Option<&str>) -> PairTotals {
    match pair.filter(|p| !p.is_empty()) {
        None => PairTotals {
            volume: report.volume_by_pair.values().sum(),
            trades: report.trades_by_pair.values().sum(),
        },
        Some(p) => PairTotals {
            volume: report.volume_by_pair.get(p).copied().unwrap_or(0.0),
            trades: report.trades_by_pair.get(p).copied().unwrap_or(0),
        },
    }
}
