//! Trade volume aggregation.
//!
//! Turns a flat list of fills into a [`VolumeReport`]: total notional traded,
//! trade count, and the same two figures broken down per pair.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Fill;

/// Pair key for fills that carry no `coin`.
pub const UNKNOWN_PAIR: &str = "Unknown";

/// Aggregated volume figures for one wallet.
///
/// Invariants: `total_volume` is the sum of `volume_by_pair` values and
/// `trades_count` is the sum of `trades_by_pair` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeReport {
    pub total_volume: f64,
    pub trades_count: u64,
    pub volume_by_pair: BTreeMap<String, f64>,
    pub trades_by_pair: BTreeMap<String, u64>,
}

impl VolumeReport {
    /// No fills were seen.
    pub fn is_empty(&self) -> bool {
        self.trades_count == 0
    }

    /// Pairs in alphabetical order.
    pub fn pairs(&self) -> Vec<&str> {
        self.volume_by_pair.keys().map(String::as_str).collect()
    }

    /// `(pair, volume, trades)` rows, largest volume first.
    pub fn pairs_by_volume(&self) -> Vec<(&str, f64, u64)> {
        let mut rows: Vec<(&str, f64, u64)> = self
            .volume_by_pair
            .iter()
            .map(|(pair, &volume)| {
                let trades = self.trades_by_pair.get(pair).copied().unwrap_or(0);
                (pair.as_str(), volume, trades)
            })
            .collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1));
        rows
    }
}

/// Aggregate `fills` into a [`VolumeReport`] in a single pass.
pub fn aggregate(fills: &[Fill]) -> VolumeReport {
    let mut volume_by_pair: BTreeMap<String, f64> = BTreeMap::new();
    let mut trades_by_pair: BTreeMap<String, u64> = BTreeMap::new();

    for fill in fills {
        let pair = fill.pair();
        *volume_by_pair.entry(pair.to_string()).or_insert(0.0) += fill.volume();
        *trades_by_pair.entry(pair.to_string()).or_insert(0) += 1;
    }

    VolumeReport {
        total_volume: volume_by_pair.values().sum(),
        trades_count: fills.len() as u64,
        volume_by_pair,
        trades_by_pair,
    }
}
