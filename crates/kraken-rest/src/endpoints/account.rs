//! Private account endpoints
//!
//! These endpoints require authentication.

use super::build_params;
use crate::client::KrakenRestClient;
use crate::error::{RestError, RestResult};
use crate::types::{BalanceInfo, Order};
use kraken_auth::Params;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a KrakenRestClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a KrakenRestClient) -> Self {
        Self { client }
    }

    /// Get account balance
    #[instrument(skip(self))]
    pub async fn get_balance(&self) -> RestResult<BalanceInfo> {
        self.client.query_private("Balance", &Params::new()).await
    }

    /// Get trade balance (margin info)
    ///
    /// # Arguments
    /// * `asset` - Base asset for calculations (default: "ZUSD")
    #[instrument(skip(self))]
    pub async fn get_trade_balance(&self, asset: Option<&str>) -> RestResult<TradeBalance> {
        let params = build_params([("asset", asset.map(str::to_string))]);
        self.client.query_private("TradeBalance", &params).await
    }

    /// Get open orders
    ///
    /// # Arguments
    /// * `args` - Optional filters, e.g. `trades=true`, `userref=42`
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self, args: &Params) -> RestResult<OpenOrdersResult> {
        debug!("Fetching open orders");
        self.client.query_private("OpenOrders", args).await
    }

    /// Get closed orders
    ///
    /// # Arguments
    /// * `args` - Optional filters: `trades`, `userref`, `start`, `end`, `ofs`, `closetime`
    #[instrument(skip(self))]
    pub async fn get_closed_orders(&self, args: &Params) -> RestResult<ClosedOrdersResult> {
        debug!("Fetching closed orders");
        self.client.query_private("ClosedOrders", args).await
    }

    /// Query orders by transaction ID
    ///
    /// # Arguments
    /// * `txids` - Transaction IDs to look up (at most 50)
    /// * `args` - Optional filters: `trades`, `userref`
    #[instrument(skip(self))]
    pub async fn query_orders(
        &self,
        txids: &[&str],
        args: &Params,
    ) -> RestResult<HashMap<String, Order>> {
        let params = with_ids(args, "txid", txids)?;
        self.client.query_private("QueryOrders", &params).await
    }

    /// Get trade history
    ///
    /// # Arguments
    /// * `args` - Optional filters: `type`, `trades`, `start`, `end`, `ofs`
    #[instrument(skip(self))]
    pub async fn get_trades_history(&self, args: &Params) -> RestResult<TradesHistoryResult> {
        self.client.query_private("TradesHistory", args).await
    }

    /// Query specific trades
    ///
    /// # Arguments
    /// * `txids` - Trade transaction IDs
    #[instrument(skip(self))]
    pub async fn query_trades(&self, txids: &[&str]) -> RestResult<HashMap<String, TradeHistoryEntry>> {
        let params = with_ids(&Params::new(), "txid", txids)?;
        self.client.query_private("QueryTrades", &params).await
    }

    /// Get open positions
    ///
    /// # Arguments
    /// * `args` - Optional filters: `txid`, `docalcs`, `consolidation`
    #[instrument(skip(self))]
    pub async fn get_open_positions(&self, args: &Params) -> RestResult<HashMap<String, OpenPosition>> {
        self.client.query_private("OpenPositions", args).await
    }

    /// Get ledgers
    ///
    /// # Arguments
    /// * `args` - Optional filters: `asset`, `aclass`, `type`, `start`, `end`, `ofs`
    #[instrument(skip(self))]
    pub async fn get_ledgers(&self, args: &Params) -> RestResult<LedgersResult> {
        self.client.query_private("Ledgers", args).await
    }

    /// Query specific ledger entries
    ///
    /// # Arguments
    /// * `ids` - Ledger IDs (at most 20)
    #[instrument(skip(self))]
    pub async fn query_ledgers(&self, ids: &[&str]) -> RestResult<HashMap<String, LedgerEntry>> {
        let params = with_ids(&Params::new(), "id", ids)?;
        self.client.query_private("QueryLedgers", &params).await
    }

    /// Get trade volume
    ///
    /// # Arguments
    /// * `pairs` - Trading pairs to include fee info for
    #[instrument(skip(self))]
    pub async fn get_trade_volume(&self, pairs: Option<&[&str]>) -> RestResult<TradeVolume> {
        let params = build_params([("pair", pairs.map(|p| p.join(",")))]);
        self.client.query_private("TradeVolume", &params).await
    }
}

/// Copy `args` and add a comma-joined, non-empty id list under `key`
fn with_ids(args: &Params, key: &str, ids: &[&str]) -> RestResult<Params> {
    if ids.is_empty() {
        return Err(RestError::InvalidParameter(format!("Empty {} list", key)));
    }

    let mut params = args.clone();
    params.insert(key.to_string(), ids.join(","));
    Ok(params)
}

// Response types specific to account endpoints

/// Trade balance (margin info)
#[derive(Debug, Clone, Deserialize)]
pub struct TradeBalance {
    /// Equivalent balance (base currency)
    pub eb: String,
    /// Trade balance
    pub tb: String,
    /// Margin amount of open positions
    pub m: Option<String>,
    /// Unrealized P&L of open positions
    pub n: Option<String>,
    /// Cost basis of open positions
    pub c: Option<String>,
    /// Current floating valuation
    pub v: Option<String>,
    /// Equity
    pub e: Option<String>,
    /// Free margin
    pub mf: Option<String>,
    /// Margin level
    pub ml: Option<String>,
}

/// Open orders result
#[derive(Debug, Clone, Deserialize)]
pub struct OpenOrdersResult {
    /// Open orders keyed by transaction ID
    pub open: HashMap<String, Order>,
}

/// Closed orders result
#[derive(Debug, Clone, Deserialize)]
pub struct ClosedOrdersResult {
    /// Closed orders keyed by transaction ID
    pub closed: HashMap<String, Order>,
    /// Count of total results
    pub count: u32,
}

/// Trades history result
#[derive(Debug, Clone, Deserialize)]
pub struct TradesHistoryResult {
    /// Trades keyed by transaction ID
    pub trades: HashMap<String, TradeHistoryEntry>,
    /// Count of total results
    pub count: u32,
}

/// Trade history entry
#[derive(Debug, Clone, Deserialize)]
pub struct TradeHistoryEntry {
    /// Order transaction ID
    pub ordertxid: String,
    /// Pair
    pub pair: String,
    /// Time of trade
    pub time: f64,
    /// Type (buy/sell)
    #[serde(rename = "type")]
    pub side: String,
    /// Order type (market/limit)
    pub ordertype: String,
    /// Price
    pub price: String,
    /// Cost
    pub cost: String,
    /// Fee
    pub fee: String,
    /// Volume
    pub vol: String,
    /// Margin
    pub margin: Option<String>,
    /// Miscellaneous
    #[serde(default)]
    pub misc: String,
}

/// Open position
#[derive(Debug, Clone, Deserialize)]
pub struct OpenPosition {
    /// Order transaction ID
    pub ordertxid: String,
    /// Position status
    pub posstatus: String,
    /// Pair
    pub pair: String,
    /// Time of position
    pub time: f64,
    /// Type (buy/sell)
    #[serde(rename = "type")]
    pub side: String,
    /// Order type
    pub ordertype: String,
    /// Cost
    pub cost: String,
    /// Fee
    pub fee: String,
    /// Volume
    pub vol: String,
    /// Closed volume
    pub vol_closed: String,
    /// Margin
    pub margin: String,
    /// Current value
    pub value: Option<String>,
    /// Unrealized P&L
    pub net: Option<String>,
    /// Terms
    pub terms: Option<String>,
    /// Roll over time
    pub rollovertm: Option<String>,
    /// Miscellaneous
    #[serde(default)]
    pub misc: String,
    /// Order flags
    #[serde(default)]
    pub oflags: String,
}

/// Ledgers result
#[derive(Debug, Clone, Deserialize)]
pub struct LedgersResult {
    /// Ledger entries keyed by ID
    pub ledger: HashMap<String, LedgerEntry>,
    /// Count of total results
    pub count: u32,
}

/// Ledger entry
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerEntry {
    /// Reference ID
    pub refid: String,
    /// Time
    pub time: f64,
    /// Type
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Sub-type
    pub subtype: Option<String>,
    /// Asset class
    pub aclass: String,
    /// Asset
    pub asset: String,
    /// Amount
    pub amount: String,
    /// Fee
    pub fee: String,
    /// Balance after
    pub balance: String,
}

/// Trade volume info
#[derive(Debug, Clone, Deserialize)]
pub struct TradeVolume {
    /// Currency for volume
    pub currency: String,
    /// Current 30-day volume
    pub volume: String,
    /// Fee tier info per pair
    pub fees: Option<HashMap<String, FeeInfo>>,
    /// Maker fee tier info per pair
    pub fees_maker: Option<HashMap<String, FeeInfo>>,
}

/// Fee tier info
#[derive(Debug, Clone, Deserialize)]
pub struct FeeInfo {
    /// Current fee
    pub fee: String,
    /// Minimum fee
    pub minfee: String,
    /// Maximum fee
    pub maxfee: String,
    /// Next tier volume
    pub nextvolume: Option<String>,
    /// Next tier fee
    pub nextfee: Option<String>,
    /// Tier volume
    pub tiervolume: Option<String>,
}
