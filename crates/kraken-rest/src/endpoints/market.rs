//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use super::build_params;
use crate::client::KrakenRestClient;
use crate::error::{RestError, RestResult};
use crate::types::{u64_from_str_or_number, AssetPairInfo, OrderbookData, TickerInfo, TradeInfo};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a KrakenRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a KrakenRestClient) -> Self {
        Self { client }
    }

    /// Get server time
    #[instrument(skip(self))]
    pub async fn get_server_time(&self) -> RestResult<ServerTime> {
        debug!("Fetching server time");
        self.client.query_public("Time", &Default::default()).await
    }

    /// Get system status
    #[instrument(skip(self))]
    pub async fn get_system_status(&self) -> RestResult<SystemStatus> {
        debug!("Fetching system status");
        self.client.query_public("SystemStatus", &Default::default()).await
    }

    /// Get asset info
    ///
    /// # Arguments
    /// * `assets` - Optional list of assets to get info for (e.g., ["XBT", "ETH"])
    #[instrument(skip(self))]
    pub async fn get_assets(&self, assets: Option<&[&str]>) -> RestResult<HashMap<String, AssetInfo>> {
        let params = build_params([("asset", assets.map(|a| a.join(",")))]);
        debug!("Fetching asset info");
        self.client.query_public("Assets", &params).await
    }

    /// Get tradable asset pairs
    ///
    /// # Arguments
    /// * `pairs` - Optional list of pairs to get info for (e.g., ["XXBTZEUR", "XETHZUSD"])
    #[instrument(skip(self))]
    pub async fn get_asset_pairs(
        &self,
        pairs: Option<&[&str]>,
    ) -> RestResult<HashMap<String, AssetPairInfo>> {
        let params = build_params([("pair", pairs.map(|p| p.join(",")))]);
        debug!("Fetching asset pairs");
        self.client.query_public("AssetPairs", &params).await
    }

    /// Get ticker information for one or more pairs
    ///
    /// # Arguments
    /// * `pairs` - Trading pairs (e.g., ["XXBTZEUR", "XXBTZGBP"])
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, pairs: &[&str]) -> RestResult<HashMap<String, TickerInfo>> {
        if pairs.is_empty() {
            return Err(RestError::InvalidParameter("At least one pair is required".to_string()));
        }

        let params = build_params([("pair", Some(pairs.join(",")))]);
        debug!("Fetching tickers for {} pairs", pairs.len());
        self.client.query_public("Ticker", &params).await
    }

    /// Get orderbook depth
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "XXBTZEUR")
    /// * `count` - Maximum number of asks/bids (1-500)
    #[instrument(skip(self))]
    pub async fn get_orderbook(
        &self,
        pair: &str,
        count: Option<u16>,
    ) -> RestResult<HashMap<String, OrderbookData>> {
        let params = build_params([
            ("pair", Some(pair.to_string())),
            ("count", count.map(|c| c.min(500).to_string())),
        ]);
        debug!("Fetching orderbook for {}", pair);
        self.client.query_public("Depth", &params).await
    }

    /// Get recent trades
    ///
    /// # Arguments
    /// * `pair` - Trading pair (e.g., "XXBTZEUR")
    /// * `since` - Return trades after this trade ID / nanosecond timestamp
    #[instrument(skip(self))]
    pub async fn get_recent_trades(&self, pair: &str, since: Option<u64>) -> RestResult<TradesResult> {
        let params = build_params([
            ("pair", Some(pair.to_string())),
            ("since", since.map(|s| s.to_string())),
        ]);
        debug!("Fetching recent trades for {}", pair);

        let raw: RawTradesResult = self.client.query_public("Trades", &params).await?;
        TradesResult::from_raw(raw)
    }

    /// Get recent spread data
    ///
    /// # Arguments
    /// * `pair` - Trading pair
    /// * `since` - Return spreads since this timestamp (optional)
    #[instrument(skip(self))]
    pub async fn get_recent_spreads(
        &self,
        pair: &str,
        since: Option<u64>,
    ) -> RestResult<RecentSpreadsResult> {
        let params = build_params([
            ("pair", Some(pair.to_string())),
            ("since", since.map(|s| s.to_string())),
        ]);
        debug!("Fetching recent spreads for {}", pair);
        self.client.query_public("Spread", &params).await
    }

    /// Get OHLC data
    ///
    /// # Arguments
    /// * `pair` - Trading pair
    /// * `interval` - Time frame interval in minutes (1, 5, 15, 30, 60, 240, 1440, 10080, 21600)
    /// * `since` - Return candles since this timestamp (optional)
    #[instrument(skip(self))]
    pub async fn get_ohlc(
        &self,
        pair: &str,
        interval: Option<u32>,
        since: Option<u64>,
    ) -> RestResult<OhlcResult> {
        let params = build_params([
            ("pair", Some(pair.to_string())),
            ("interval", interval.map(|i| i.to_string())),
            ("since", since.map(|s| s.to_string())),
        ]);
        debug!("Fetching OHLC for {}", pair);
        self.client.query_public("OHLC", &params).await
    }
}

// Response types specific to market endpoints

/// Server time response
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTime {
    /// Unix timestamp
    pub unixtime: i64,
    /// RFC 1123 time string
    pub rfc1123: String,
}

/// System status response
#[derive(Debug, Clone, Deserialize)]
pub struct SystemStatus {
    /// System status (online, maintenance, cancel_only, post_only)
    pub status: String,
    /// Timestamp
    pub timestamp: String,
}

/// Asset information
#[derive(Debug, Clone, Deserialize)]
pub struct AssetInfo {
    /// Asset class
    pub aclass: String,
    /// Alternate name
    pub altname: String,
    /// Decimals
    pub decimals: u32,
    /// Display decimals
    pub display_decimals: u32,
}

#[derive(Debug, Deserialize)]
struct RawTradesResult {
    #[serde(deserialize_with = "u64_from_str_or_number")]
    last: u64,
    #[serde(flatten)]
    pairs: HashMap<String, Vec<Vec<serde_json::Value>>>,
}

/// Recent trades result
#[derive(Debug, Clone)]
pub struct TradesResult {
    /// Pagination cursor for the next `since`
    pub last: u64,
    /// Trades in the order returned by the exchange
    pub trades: Vec<TradeInfo>,
}

impl TradesResult {
    fn from_raw(raw: RawTradesResult) -> RestResult<Self> {
        // Only one pair is ever requested, but its key may be the canonical name
        let trades = raw
            .pairs
            .values()
            .flatten()
            .map(|row| TradeInfo::from_row(row))
            .collect::<RestResult<Vec<_>>>()?;

        Ok(Self {
            last: raw.last,
            trades,
        })
    }
}

/// Recent spreads result
#[derive(Debug, Clone, Deserialize)]
pub struct RecentSpreadsResult {
    /// Last timestamp for pagination
    pub last: Option<u64>,
    /// Spread data (pair -> array of [time, bid, ask])
    #[serde(flatten)]
    pub spreads: HashMap<String, Vec<Vec<serde_json::Value>>>,
}

/// OHLC result
#[derive(Debug, Clone, Deserialize)]
pub struct OhlcResult {
    /// Last timestamp for pagination
    pub last: Option<u64>,
    /// Candle data (pair -> array of [time, open, high, low, close, vwap, volume, count])
    #[serde(flatten)]
    pub ohlc: HashMap<String, Vec<Vec<serde_json::Value>>>,
}
