use std::io::Write;

use hyperliquid::{apply_filter, parse_decimal_or_zero};
use serde::Serialize;

use crate::lookup::LookupData;

/// Print a lookup result for `pair` (all pairs when `None`) as text or JSON.
pub fn write_report<W: Write>(
    data: &LookupData,
    pair: Option<&str>,
    json_mode: bool,
    writer: &mut W,
) -> std::io::Result<()> {
    let pair = pair.filter(|p| !p.is_empty());
    let totals = apply_filter(&data.report, pair);

    if json_mode {
        let out = JsonReport {
            address: data.address.as_str(),
            pair_filter: pair,
            total_volume: totals.volume,
            trades_count: totals.trades,
            account_value: data.account.account_value(),
            withdrawable: data.account.withdrawable(),
            fills_unavailable: data.fills_unavailable,
            volume_by_pair: &data.report.volume_by_pair,
            trades_by_pair: &data.report.trades_by_pair,
            positions: data
                .account
                .positions()
                .iter()
                .map(|p| JsonPosition {
                    coin: p.coin(),
                    szi: p.szi(),
                    unrealized_pnl: p.unrealized_pnl(),
                })
                .collect(),
        };
        serde_json::to_writer(&mut *writer, &out)?;
        writeln!(writer)?;
        return writer.flush();
    }

    let label = |base: &str| match pair {
        Some(p) => format!("{base} {p}"),
        None => base.to_string(),
    };

    writeln!(writer, "{:<16}{}", "address", data.address.short())?;
    writeln!(
        writer,
        "{:<16}{}",
        "account value",
        format_usd_str(data.account.account_value())
    )?;
    writeln!(
        writer,
        "{:<16}{}",
        "withdrawable",
        format_usd_str(data.account.withdrawable())
    )?;
    if let Some(cross) = data.account.cross_margin() {
        writeln!(writer, "{:<16}{}", "total raw usd", format_usd(cross.total_raw_usd()))?;
        writeln!(writer, "{:<16}{}", "total ntl pos", format_usd(cross.total_ntl_pos()))?;
    }
    writeln!(writer, "{:<16}{}", label("volume"), format_usd(totals.volume))?;
    writeln!(writer, "{:<16}{}", label("trades"), format_count(totals.trades))?;
    if data.fills_unavailable {
        writeln!(writer, "note: trade history unavailable, volume shown as zero")?;
    }

    // Per-pair breakdown only when not filtered: pair \t trades \t volume
    if pair.is_none() && !data.report.is_empty() {
        let mut buf = String::new();
        writeln!(writer)?;
        writeln!(writer, "pair\ttrades\tvolume")?;
        for (name, volume, trades) in data.report.pairs_by_volume() {
            buf.clear();
            buf.push_str(name);
            buf.push('\t');
            buf.push_str(&trades.to_string());
            buf.push('\t');
            format_f64(&mut buf, volume);
            writeln!(writer, "{buf}")?;
        }
    }

    let positions = data.account.positions();
    if !positions.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "coin\tsize\tunrealized_pnl")?;
        for p in positions {
            writeln!(writer, "{}\t{}\t{:.2}", p.coin(), p.szi(), p.unrealized_pnl())?;
        }
    }

    writer.flush()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    address: &'a str,
    pair_filter: Option<&'a str>,
    total_volume: f64,
    trades_count: u64,
    account_value: &'a str,
    withdrawable: &'a str,
    fills_unavailable: bool,
    volume_by_pair: &'a std::collections::BTreeMap<String, f64>,
    trades_by_pair: &'a std::collections::BTreeMap<String, u64>,
    positions: Vec<JsonPosition<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonPosition<'a> {
    coin: &'a str,
    szi: &'a str,
    unrealized_pnl: f64,
}

/// Dollar amount with thousands separators and two decimals: `$81,500.00`.
pub fn format_usd(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// [`format_usd`] for a gateway decimal string.
pub fn format_usd_str(value: &str) -> String {
    format_usd(parse_decimal_or_zero(Some(value)))
}

/// Integer with thousands separators: `12,345`.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fast f64 formatting via `ryu`.
fn format_f64(buf: &mut String, val: f64) {
    let mut b = ryu::Buffer::new();
    buf.push_str(b.format(val));
}
