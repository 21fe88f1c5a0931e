use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::de;
use crate::volume::UNKNOWN_PAIR;

/// One executed trade from `userFills`.
///
/// Every field is optional; numeric fields are kept as the gateway's decimal
/// strings and parsed on demand with [`parse_decimal_or_zero`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub px: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub sz: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(default, deserialize_with = "de::u64_lenient", skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub closed_pnl: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(default, deserialize_with = "de::u64_lenient", skip_serializing_if = "Option::is_none")]
    pub oid: Option<u64>,
    #[serde(default, deserialize_with = "de::string_or_number", skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl Fill {
    /// Pair key used for grouping; a missing or empty `coin` is [`UNKNOWN_PAIR`].
    pub fn pair(&self) -> &str {
        match self.coin.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => UNKNOWN_PAIR,
        }
    }

    pub fn price(&self) -> f64 {
        parse_decimal_or_zero(self.px.as_deref())
    }

    /// Signed size.
    pub fn size(&self) -> f64 {
        parse_decimal_or_zero(self.sz.as_deref())
    }

    /// Notional traded: `price * |size|`.
    pub fn volume(&self) -> f64 {
        self.price() * self.size().abs()
    }
}

/// Parse a decimal string, reading absent, malformed or non-finite input as 0.
pub fn parse_decimal_or_zero(value: Option<&str>) -> f64 {
    value
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Decode a `userFills` response body.
///
/// The gateway answers with an array of fills, but an error object or any
/// other non-array value is read as "no fills". Array elements that are not
/// objects become empty fills so they still count as trades.
pub fn fills_from_value(value: Value) -> Vec<Fill> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap_or_default())
            .collect(),
        other => {
            debug!(kind = json_kind(&other), "userFills response is not an array");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
