//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes returned by Kraken's REST API.

#![allow(dead_code)]

use kraken_rest::{ClientConfig, Credentials, KrakenRestClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";

/// The exchange's documented example private key
pub const TEST_PRIVATE_KEY: &str =
    "kQH5HW/8p1uGOVjbgWA7FunAmGO8lsSUXNsu3eow76sz84Q18fWxnyRzBHCd3pd5nE9qa99HAZtuZuj6F1huXg==";

pub const OPEN_ORDERS_TRAILING_LIMIT: &str = include_str!("../fixtures/open_orders_trailing_limit.json");
pub const OPEN_ORDERS_LIMIT: &str = include_str!("../fixtures/open_orders_limit.json");

pub const TIME_RESPONSE: &str = r#"{
    "error": [],
    "result": {"unixtime": 1688669448, "rfc1123": "Thu, 06 Jul 23 18:50:48 +0000"}
}"#;

pub const ASSETS_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "XXBT": {"aclass": "currency", "altname": "XBT", "decimals": 10, "display_decimals": 5, "status": "enabled"},
        "ZEUR": {"aclass": "currency", "altname": "EUR", "decimals": 4, "display_decimals": 2, "status": "enabled"}
    }
}"#;

pub const ASSET_PAIRS_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "XXBTZEUR": {
            "altname": "XBTEUR",
            "wsname": "XBT/EUR",
            "aclass_base": "currency",
            "base": "XXBT",
            "aclass_quote": "currency",
            "quote": "ZEUR",
            "lot": "unit",
            "cost_decimals": 5,
            "pair_decimals": 1,
            "lot_decimals": 8,
            "lot_multiplier": 1,
            "leverage_buy": [2, 3, 4, 5],
            "leverage_sell": [2, 3, 4, 5],
            "fees": [[0, 0.26], [50000, 0.24]],
            "fees_maker": [[0, 0.16], [50000, 0.14]],
            "fee_volume_currency": "ZUSD",
            "margin_call": 80,
            "margin_stop": 40,
            "ordermin": "0.0001",
            "costmin": "0.5",
            "status": "online"
        }
    }
}"#;

pub const TICKER_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "XXBTZEUR": {
            "a": ["27840.10000", "1", "1.000"],
            "b": ["27840.00000", "3", "3.000"],
            "c": ["27840.10000", "0.00105000"],
            "v": ["612.45432152", "1499.20431000"],
            "p": ["27712.48917", "27640.85614"],
            "t": [8621, 21530],
            "l": ["27402.30000", "27300.00000"],
            "h": ["27905.00000", "27905.00000"],
            "o": "27560.20000"
        },
        "XXBTZGBP": {
            "a": ["23880.30000", "1", "1.000"],
            "b": ["23876.50000", "1", "1.000"],
            "c": ["23880.30000", "0.00210000"],
            "v": ["31.12040000", "80.12345678"],
            "p": ["23770.10211", "23700.56120"],
            "t": [912, 2310],
            "l": ["23600.00000", "23500.10000"],
            "h": ["23905.40000", "23905.40000"],
            "o": "23650.00000"
        }
    }
}"#;

pub const TRADES_RESPONSE: &str = r#"{
    "error": [],
    "result": {
        "XXBTZEUR": [
            ["2255.00000", "0.10000000", 1495777604.4402, "b", "l", "", 1],
            ["2254.90000", "0.50000000", 1495777605.1337, "s", "m", "", 2],
            ["2255.10000", "0.02500000", 1495777606.9001, "b", "m", "", 3]
        ],
        "last": "1495777606900100000"
    }
}"#;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client without credentials pointed at the mock server
pub fn public_client(server: &MockServer) -> KrakenRestClient {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_user_agent("kraken-rest test mode");
    KrakenRestClient::with_config(config).expect("client should build")
}

/// Client with test credentials pointed at the mock server
pub fn private_client(server: &MockServer) -> KrakenRestClient {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_user_agent("kraken-rest test mode")
        .with_credentials(test_credentials());
    KrakenRestClient::with_config(config).expect("client should build")
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_PRIVATE_KEY).expect("test key is valid base64")
}
