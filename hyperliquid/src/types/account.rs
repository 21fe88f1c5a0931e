use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de;
use super::fill::parse_decimal_or_zero;

/// Point-in-time account state returned by `clearinghouseState`.
///
/// Only the fields the dashboard reads are modelled, and each of them is
/// optional. Accessors fall back to `"0"` / empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshot {
    #[serde(default, deserialize_with = "de::object_lenient", skip_serializing_if = "Option::is_none")]
    pub margin_summary: Option<MarginSummary>,
    #[serde(default, deserialize_with = "de::object_lenient", skip_serializing_if = "Option::is_none")]
    pub cross_margin_summary: Option<CrossMarginSummary>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub withdrawable: Option<String>,
    #[serde(default, deserialize_with = "de::vec_lenient", skip_serializing_if = "Option::is_none")]
    pub asset_positions: Option<Vec<AssetPosition>>,
    #[serde(default, deserialize_with = "de::u64_lenient", skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,
    /// `marginSummary` or `assetPositions` was set in the raw body, whatever
    /// its shape.
    #[serde(skip)]
    pub reported: bool,
}

/// Margin totals; the gateway uses the same shape for `marginSummary` and
/// `crossMarginSummary`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginSummary {
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub account_value: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub total_ntl_pos: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub total_raw_usd: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub total_margin_used: Option<String>,
}

pub type CrossMarginSummary = MarginSummary;

impl MarginSummary {
    pub fn total_raw_usd(&self) -> f64 {
        parse_decimal_or_zero(self.total_raw_usd.as_deref())
    }

    pub fn total_ntl_pos(&self) -> f64 {
        parse_decimal_or_zero(self.total_ntl_pos.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPosition {
    #[serde(default, deserialize_with = "de::object_lenient", skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, rename = "type", deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    /// Signed size; negative is short.
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub szi: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub entry_px: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub position_value: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub unrealized_pnl: Option<String>,
}

impl AccountSnapshot {
    /// Decode a raw `clearinghouseState` body. `null` and non-object bodies
    /// decode to an empty snapshot, which reports no data.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                let reported = ["marginSummary", "assetPositions"]
                    .iter()
                    .any(|key| map.get(*key).is_some_and(is_set));
                let mut snap: Self =
                    serde_json::from_value(Value::Object(map)).unwrap_or_default();
                snap.reported = reported;
                snap
            }
            _ => Self::default(),
        }
    }

    /// An address with neither a margin summary nor a positions list has never
    /// been active on the exchange. Only presence counts, not shape.
    pub fn has_data(&self) -> bool {
        self.reported || self.margin_summary.is_some() || self.asset_positions.is_some()
    }

    pub fn account_value(&self) -> &str {
        non_empty_or_zero(
            self.margin_summary
                .as_ref()
                .and_then(|m| m.account_value.as_deref()),
        )
    }

    pub fn withdrawable(&self) -> &str {
        non_empty_or_zero(self.withdrawable.as_deref())
    }

    pub fn cross_margin(&self) -> Option<&CrossMarginSummary> {
        self.cross_margin_summary.as_ref()
    }

    pub fn positions(&self) -> &[AssetPosition] {
        self.asset_positions.as_deref().unwrap_or(&[])
    }
}

impl AssetPosition {
    pub fn coin(&self) -> &str {
        self.position
            .as_ref()
            .and_then(|p| p.coin.as_deref())
            .filter(|c| !c.is_empty())
            .unwrap_or("N/A")
    }

    pub fn szi(&self) -> &str {
        non_empty_or_zero(self.position.as_ref().and_then(|p| p.szi.as_deref()))
    }

    pub fn unrealized_pnl(&self) -> f64 {
        parse_decimal_or_zero(
            self.position
                .as_ref()
                .and_then(|p| p.unrealized_pnl.as_deref()),
        )
    }
}

/// Set in the loose sense: not null, false, zero or an empty string.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn non_empty_or_zero(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "0",
    }
}
