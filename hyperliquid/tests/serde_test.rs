//! Integration tests decoding realistic gateway payloads.
//!
//! Fixtures mirror what `POST /info` returns for `clearinghouseState` and
//! `userFills`, including the fields this crate only carries along.

use hyperliquid::types::*;
use hyperliquid::{aggregate, InfoRequest, WalletAddress};

// ---------------------------------------------------------------------------
// clearinghouseState
// ---------------------------------------------------------------------------

#[test]
fn test_clearinghouse_state_fixture() {
    let json = r#"{
        "marginSummary": {
            "accountValue": "13109.482328",
            "totalNtlPos": "30466.30824",
            "totalRawUsd": "-17356.825912",
            "totalMarginUsed": "2911.524128"
        },
        "crossMarginSummary": {
            "accountValue": "13109.482328",
            "totalNtlPos": "30466.30824",
            "totalRawUsd": "-17356.825912",
            "totalMarginUsed": "2911.524128"
        },
        "crossMaintenanceMarginUsed": "728.881032",
        "withdrawable": "10197.958200",
        "assetPositions": [
            {
                "type": "oneWay",
                "position": {
                    "coin": "BTC",
                    "szi": "0.31",
                    "leverage": {"type": "cross", "value": 10},
                    "entryPx": "96012.3",
                    "positionValue": "30466.30824",
                    "unrealizedPnl": "702.993",
                    "returnOnEquity": "0.2362",
                    "liquidationPx": null,
                    "marginUsed": "3046.630824",
                    "maxLeverage": 40,
                    "cumFunding": {"allTime": "-12.3", "sinceOpen": "-1.2", "sinceChange": "0.0"}
                }
            },
            {
                "type": "oneWay",
                "position": {
                    "coin": "ETH",
                    "szi": "-4.5",
                    "entryPx": "3400.1",
                    "positionValue": "15100.0",
                    "unrealizedPnl": "-220.45"
                }
            }
        ],
        "time": 1733968369395
    }"#;

    let snap: AccountSnapshot = serde_json::from_str(json).unwrap();
    assert!(snap.has_data());
    assert_eq!(snap.account_value(), "13109.482328");
    assert_eq!(snap.withdrawable(), "10197.958200");
    assert_eq!(snap.time, Some(1733968369395));

    let cross = snap.cross_margin().unwrap();
    assert!((cross.total_raw_usd() - -17356.825912).abs() < 1e-9);
    assert!((cross.total_ntl_pos() - 30466.30824).abs() < 1e-9);

    let positions = snap.positions();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0].coin(), "BTC");
    assert_eq!(positions[0].szi(), "0.31");
    assert!((positions[0].unrealized_pnl() - 702.993).abs() < 1e-9);
    assert_eq!(positions[1].coin(), "ETH");
    assert!(positions[1].unrealized_pnl() < 0.0);

    // Re-serialization keeps the camelCase wire names.
    let value = serde_json::to_value(&snap).unwrap();
    assert_eq!(value["marginSummary"]["accountValue"], "13109.482328");
    assert_eq!(value["assetPositions"][1]["position"]["szi"], "-4.5");
}

#[test]
fn test_clearinghouse_state_inactive_address() {
    // An address that never traded still gets a summary with zeros.
    let json = r#"{
        "marginSummary": {"accountValue": "0.0", "totalNtlPos": "0.0", "totalRawUsd": "0.0", "totalMarginUsed": "0.0"},
        "crossMarginSummary": {"accountValue": "0.0", "totalNtlPos": "0.0", "totalRawUsd": "0.0", "totalMarginUsed": "0.0"},
        "crossMaintenanceMarginUsed": "0.0",
        "withdrawable": "0.0",
        "assetPositions": [],
        "time": 1733968369395
    }"#;

    let snap: AccountSnapshot = serde_json::from_str(json).unwrap();
    assert!(snap.has_data());
    assert!(snap.positions().is_empty());
    assert_eq!(snap.account_value(), "0.0");
}

// ---------------------------------------------------------------------------
// userFills
// ---------------------------------------------------------------------------

#[test]
fn test_user_fills_fixture() {
    let json = r#"[
        {
            "closedPnl": "0.0",
            "coin": "AVAX",
            "crossed": false,
            "dir": "Open Long",
            "hash": "0xa166e3fa63c25663024b03f2e0da011a00307e4017465df020210d78c0e5ed02",
            "oid": 90542681,
            "px": "18.435",
            "side": "B",
            "startPosition": "26.86",
            "sz": "93.53",
            "time": 1681222254710,
            "fee": "0.01",
            "feeToken": "USDC",
            "tid": 118906512037719
        },
        {
            "closedPnl": "12.5",
            "coin": "AVAX",
            "crossed": true,
            "dir": "Close Long",
            "hash": "0xb266e3fa63c25663024b03f2e0da011a00307e4017465df020210d78c0e5ed03",
            "oid": 90542699,
            "px": "18.6",
            "side": "A",
            "startPosition": "120.39",
            "sz": "40.0",
            "time": 1681222299710,
            "fee": "0.02"
        },
        {
            "coin": "@107",
            "px": "25.1",
            "sz": "2",
            "side": "B",
            "time": 1681222300000
        }
    ]"#;

    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    let fills = fills_from_value(value);
    assert_eq!(fills.len(), 3);

    assert_eq!(fills[0].pair(), "AVAX");
    assert_eq!(fills[0].side.as_deref(), Some("B"));
    assert_eq!(fills[0].oid, Some(90542681));
    assert_eq!(fills[0].time, Some(1681222254710));
    assert_eq!(fills[0].dir.as_deref(), Some("Open Long"));
    assert_eq!(fills[1].side.as_deref(), Some("A"));
    assert_eq!(fills[1].closed_pnl.as_deref(), Some("12.5"));
    assert_eq!(fills[2].pair(), "@107");

    let report = aggregate(&fills);
    let avax = 18.435 * 93.53 + 18.6 * 40.0;
    assert!((report.volume_by_pair["AVAX"] - avax).abs() < 1e-9);
    assert!((report.volume_by_pair["@107"] - 50.2).abs() < 1e-9);
    assert_eq!(report.trades_by_pair["AVAX"], 2);
    assert_eq!(report.trades_count, 3);
}

#[test]
fn test_user_fills_error_object() {
    let value = serde_json::json!({"error": "Failed to deserialize the JSON body"});
    let fills = fills_from_value(value);
    let report = aggregate(&fills);
    assert_eq!(report.total_volume, 0.0);
    assert_eq!(report.trades_count, 0);
}

// ---------------------------------------------------------------------------
// Request body
// ---------------------------------------------------------------------------

#[test]
fn test_info_request_wire_shape() {
    let addr = WalletAddress::parse("0x0123456789abcdef0123456789abcdef01234567").unwrap();
    let req = InfoRequest::user_fills(&addr);
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "type": "userFills",
            "user": "0x0123456789abcdef0123456789abcdef01234567"
        })
    );

    let back: InfoRequest = serde_json::from_value(value).unwrap();
    assert_eq!(back.kind, InfoKind::UserFills.as_str());
}
