//! Types for Kraken REST API requests and responses

use crate::error::{RestError, RestResult};
use kraken_auth::Params;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

// ============================================================================
// API Response Wrapper
// ============================================================================

/// Standard Kraken API response wrapper
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Error messages (empty if successful)
    #[serde(default)]
    pub error: Vec<String>,
    /// Result data (present if successful)
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }

    /// Get the result, returning an error if the API returned errors
    ///
    /// A missing (or `null`) result on an error-free envelope is a `Parse` error.
    pub fn into_result(self) -> RestResult<T> {
        if !self.error.is_empty() {
            return Err(RestError::from_api_errors(self.error));
        }
        self.result
            .ok_or_else(|| RestError::Parse("No result in response".to_string()))
    }
}

/// Accepts `"123"` as well as `123`
pub(crate) fn u64_from_str_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Number(u64),
        Text(String),
    }

    match Lenient::deserialize(deserializer)? {
        Lenient::Number(n) => Ok(n),
        Lenient::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Ticker information for a trading pair
#[derive(Debug, Clone, Deserialize)]
pub struct TickerInfo {
    /// Ask [price, whole lot volume, lot volume]
    pub a: Vec<String>,
    /// Bid [price, whole lot volume, lot volume]
    pub b: Vec<String>,
    /// Last trade closed [price, lot volume]
    pub c: Vec<String>,
    /// Volume [today, last 24 hours]
    pub v: Vec<String>,
    /// Volume weighted average price [today, last 24 hours]
    pub p: Vec<String>,
    /// Number of trades [today, last 24 hours]
    pub t: Vec<u64>,
    /// Low [today, last 24 hours]
    pub l: Vec<String>,
    /// High [today, last 24 hours]
    pub h: Vec<String>,
    /// Today's opening price
    pub o: String,
}

impl TickerInfo {
    /// Get the current ask price
    pub fn ask_price(&self) -> Option<Decimal> {
        self.a.first().and_then(|s| s.parse().ok())
    }

    /// Get the current bid price
    pub fn bid_price(&self) -> Option<Decimal> {
        self.b.first().and_then(|s| s.parse().ok())
    }

    /// Get the last trade price
    pub fn last_price(&self) -> Option<Decimal> {
        self.c.first().and_then(|s| s.parse().ok())
    }

    /// Get today's opening price
    pub fn opening_price(&self) -> Option<Decimal> {
        self.o.parse().ok()
    }

    /// Get the mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        let ask = self.ask_price()?;
        let bid = self.bid_price()?;
        Some((ask + bid) / Decimal::TWO)
    }

    /// Get spread in basis points
    pub fn spread_bps(&self) -> Option<Decimal> {
        let ask = self.ask_price()?;
        let bid = self.bid_price()?;
        let mid = self.mid_price()?;
        if mid.is_zero() {
            return None;
        }
        Some((ask - bid) / mid * Decimal::from(10000))
    }
}

/// Asset pair information
#[derive(Debug, Clone, Deserialize)]
pub struct AssetPairInfo {
    /// Alternate pair name
    pub altname: String,
    /// WebSocket pair name
    pub wsname: Option<String>,
    /// Asset class of base
    pub aclass_base: String,
    /// Base asset
    pub base: String,
    /// Asset class of quote
    pub aclass_quote: String,
    /// Quote asset
    pub quote: String,
    /// Volume lot size
    #[serde(default)]
    pub lot: Option<String>,
    /// Pair decimals
    pub pair_decimals: u32,
    /// Lot decimals
    pub lot_decimals: u32,
    /// Lot multiplier
    pub lot_multiplier: u32,
    /// Leverage amounts available when buying
    #[serde(default)]
    pub leverage_buy: Vec<u32>,
    /// Leverage amounts available when selling
    #[serde(default)]
    pub leverage_sell: Vec<u32>,
    /// Fee schedule array [volume, percent fee]
    #[serde(default)]
    pub fees: Vec<Vec<serde_json::Value>>,
    /// Maker fee schedule
    pub fees_maker: Option<Vec<Vec<serde_json::Value>>>,
    /// Volume discount currency
    pub fee_volume_currency: Option<String>,
    /// Minimum order size
    pub ordermin: Option<String>,
    /// Cost minimum
    pub costmin: Option<String>,
    /// Margin call level
    pub margin_call: Option<u32>,
    /// Margin stop level
    pub margin_stop: Option<u32>,
}

impl AssetPairInfo {
    /// Minimum order volume, if the pair declares one
    pub fn min_order(&self) -> Option<Decimal> {
        self.ordermin.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Trade side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => f.pad("buy"),
            Self::Sell => f.pad("sell"),
        }
    }
}

/// How a public trade was executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeKind {
    /// Market order fill
    Market,
    /// Limit order fill
    Limit,
}

/// A single public trade
#[derive(Debug, Clone, PartialEq)]
pub struct TradeInfo {
    /// Price
    pub price: Decimal,
    /// Volume
    pub volume: Decimal,
    /// Time (Unix timestamp with decimal)
    pub time: f64,
    /// Buy/sell indicator
    pub side: OrderSide,
    /// Market/limit indicator
    pub kind: TradeKind,
    /// Miscellaneous
    pub misc: String,
    /// Trade ID, present on newer responses
    pub trade_id: Option<u64>,
}

impl TradeInfo {
    /// Decode one row `[price, volume, time, "b"|"s", "m"|"l", misc, trade_id?]`
    pub fn from_row(row: &[serde_json::Value]) -> RestResult<Self> {
        let field = |idx: usize| {
            row.get(idx)
                .ok_or_else(|| RestError::Parse(format!("Trade row has no field {}", idx)))
        };
        let text = |idx: usize| {
            field(idx).and_then(|v| {
                v.as_str()
                    .ok_or_else(|| RestError::Parse(format!("Trade field {} is not a string", idx)))
            })
        };
        let decimal = |idx: usize| {
            text(idx).and_then(|s| {
                s.parse::<Decimal>()
                    .map_err(|e| RestError::Parse(format!("Trade field {}: {}", idx, e)))
            })
        };

        let time = field(2)?
            .as_f64()
            .ok_or_else(|| RestError::Parse("Trade time is not a number".to_string()))?;

        let side = match text(3)? {
            "b" => OrderSide::Buy,
            "s" => OrderSide::Sell,
            other => return Err(RestError::Parse(format!("Unknown trade side '{}'", other))),
        };

        let kind = match text(4)? {
            "m" => TradeKind::Market,
            "l" => TradeKind::Limit,
            other => return Err(RestError::Parse(format!("Unknown trade type '{}'", other))),
        };

        Ok(Self {
            price: decimal(0)?,
            volume: decimal(1)?,
            time,
            side,
            kind,
            misc: row
                .get(5)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            trade_id: row.get(6).and_then(|v| v.as_u64()),
        })
    }

    /// Whether the taker was buying
    pub fn is_buy(&self) -> bool {
        self.side == OrderSide::Buy
    }

    /// Whether the taker used a market order
    pub fn is_market(&self) -> bool {
        self.kind == TradeKind::Market
    }
}

/// One price level of an orderbook snapshot
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(Decimal, Decimal, u64)")]
pub struct BookLevel {
    /// Price
    pub price: Decimal,
    /// Volume
    pub volume: Decimal,
    /// Last update time
    pub timestamp: u64,
}

impl From<(Decimal, Decimal, u64)> for BookLevel {
    fn from((price, volume, timestamp): (Decimal, Decimal, u64)) -> Self {
        Self {
            price,
            volume,
            timestamp,
        }
    }
}

/// Orderbook snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct OrderbookData {
    /// Ask levels, best first
    pub asks: Vec<BookLevel>,
    /// Bid levels, best first
    pub bids: Vec<BookLevel>,
}

impl OrderbookData {
    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|level| level.price)
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|level| level.price)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

// ============================================================================
// Account Types
// ============================================================================

/// Account balance information
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceInfo(pub HashMap<String, String>);

impl BalanceInfo {
    /// Get balance for a specific asset
    pub fn get(&self, asset: &str) -> Option<Decimal> {
        self.0.get(asset).and_then(|s| s.parse().ok())
    }

    /// Get all non-zero balances
    pub fn non_zero(&self) -> HashMap<String, Decimal> {
        self.iter()
            .filter(|(_, balance)| !balance.is_zero())
            .map(|(k, balance)| (k.clone(), balance))
            .collect()
    }

    /// Iterate over all balances
    pub fn iter(&self) -> impl Iterator<Item = (&String, Decimal)> {
        self.0.iter().filter_map(|(k, v)| {
            let balance: Decimal = v.parse().ok()?;
            Some((k, balance))
        })
    }
}

/// Order information, shared by open, closed and queried orders
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Referral order transaction ID that created this order
    pub refid: Option<String>,
    /// User reference ID
    pub userref: Option<i64>,
    /// Order status
    pub status: String,
    /// Open timestamp
    pub opentm: f64,
    /// Start timestamp
    pub starttm: Option<f64>,
    /// Expire timestamp
    pub expiretm: Option<f64>,
    /// Close timestamp (closed orders only)
    pub closetm: Option<f64>,
    /// Order description
    pub descr: OrderDescription,
    /// Volume
    pub vol: String,
    /// Executed volume
    pub vol_exec: String,
    /// Cost
    pub cost: String,
    /// Fee
    pub fee: String,
    /// Average price
    pub price: String,
    /// Stop price (if applicable)
    pub stopprice: Option<String>,
    /// Limit price (if applicable)
    pub limitprice: Option<String>,
    /// Miscellaneous
    #[serde(default)]
    pub misc: String,
    /// Order flags
    #[serde(default)]
    pub oflags: String,
    /// Reason the order was closed
    pub reason: Option<String>,
    /// Related trade IDs (when requested with `trades=true`)
    pub trades: Option<Vec<String>>,
}

impl Order {
    /// Executed volume as a decimal
    pub fn executed_volume(&self) -> Option<Decimal> {
        self.vol_exec.parse().ok()
    }

    /// Total volume as a decimal
    pub fn volume(&self) -> Option<Decimal> {
        self.vol.parse().ok()
    }
}

/// Order description
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDescription {
    /// Asset pair
    pub pair: String,
    /// Type (buy/sell)
    #[serde(rename = "type")]
    pub side: String,
    /// Order type
    pub ordertype: String,
    /// Primary price, may be relative (e.g. "-5.0000%")
    pub price: String,
    /// Secondary price
    pub price2: String,
    /// Leverage
    pub leverage: String,
    /// Order description
    pub order: String,
    /// Close order description
    #[serde(default)]
    pub close: Option<String>,
}

// ============================================================================
// Trading Types
// ============================================================================

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    /// Market order
    Market,
    /// Limit order
    Limit,
    /// Stop loss
    StopLoss,
    /// Take profit
    TakeProfit,
    /// Stop loss limit
    StopLossLimit,
    /// Take profit limit
    TakeProfitLimit,
    /// Trailing stop
    TrailingStop,
    /// Trailing stop limit
    TrailingStopLimit,
    /// Settle position
    SettlePosition,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::StopLoss => "stop-loss",
            Self::TakeProfit => "take-profit",
            Self::StopLossLimit => "stop-loss-limit",
            Self::TakeProfitLimit => "take-profit-limit",
            Self::TrailingStop => "trailing-stop",
            Self::TrailingStopLimit => "trailing-stop-limit",
            Self::SettlePosition => "settle-position",
        };
        f.pad(s)
    }
}

/// Time in force for orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInForce {
    /// Good till cancelled
    GoodTillCancelled,
    /// Immediate or cancel
    ImmediateOrCancel,
    /// Good till date
    GoodTillDate,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoodTillCancelled => f.pad("GTC"),
            Self::ImmediateOrCancel => f.pad("IOC"),
            Self::GoodTillDate => f.pad("GTD"),
        }
    }
}

/// Order flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFlag {
    /// Post-only order (maker only)
    PostOnly,
    /// Fee in base currency
    FeeInBase,
    /// Fee in quote currency
    FeeInQuote,
    /// Disable market price protection
    NoMarketPriceProtection,
    /// Order volume in quote currency
    VolumeInQuote,
}

impl OrderFlag {
    /// Get the API string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostOnly => "post",
            Self::FeeInBase => "fcib",
            Self::FeeInQuote => "fciq",
            Self::NoMarketPriceProtection => "nompp",
            Self::VolumeInQuote => "viqc",
        }
    }
}

/// Request to place an order
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Trading pair
    pub pair: String,
    /// Order side
    pub side: OrderSide,
    /// Order type
    pub order_type: OrderType,
    /// Order volume
    pub volume: Decimal,
    /// Price (for limit orders)
    pub price: Option<Decimal>,
    /// Secondary price (for stop-loss-limit, take-profit-limit)
    pub price2: Option<Decimal>,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Leverage (for margin)
    pub leverage: Option<String>,
    /// Order flags
    pub flags: Vec<OrderFlag>,
    /// User reference ID
    pub userref: Option<i32>,
    /// Validate only (don't submit)
    pub validate: bool,
    /// Any other AddOrder parameters, passed through verbatim
    pub extra: Params,
}

impl OrderRequest {
    /// Create an order with only the required fields set
    pub fn new(
        pair: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        volume: Decimal,
    ) -> Self {
        Self {
            pair: pair.into(),
            side,
            order_type,
            volume,
            price: None,
            price2: None,
            time_in_force: None,
            leverage: None,
            flags: Vec::new(),
            userref: None,
            validate: false,
            extra: Params::new(),
        }
    }

    /// Create a market order
    pub fn market(pair: impl Into<String>, side: OrderSide, volume: Decimal) -> Self {
        Self::new(pair, side, OrderType::Market, volume)
    }

    /// Create a limit order
    pub fn limit(pair: impl Into<String>, side: OrderSide, volume: Decimal, price: Decimal) -> Self {
        let mut order = Self::new(pair, side, OrderType::Limit, volume);
        order.price = Some(price);
        order
    }

    /// Create a stop loss order
    pub fn stop_loss(
        pair: impl Into<String>,
        side: OrderSide,
        volume: Decimal,
        stop_price: Decimal,
    ) -> Self {
        let mut order = Self::new(pair, side, OrderType::StopLoss, volume);
        order.price = Some(stop_price);
        order
    }

    /// Set the secondary price
    pub fn with_price2(mut self, price2: Decimal) -> Self {
        self.price2 = Some(price2);
        self
    }

    /// Set time in force
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Add an order flag
    pub fn with_flag(mut self, flag: OrderFlag) -> Self {
        self.flags.push(flag);
        self
    }

    /// Set as post-only (maker only)
    pub fn post_only(self) -> Self {
        self.with_flag(OrderFlag::PostOnly)
    }

    /// Set leverage for margin trading
    pub fn with_leverage(mut self, leverage: impl Into<String>) -> Self {
        self.leverage = Some(leverage.into());
        self
    }

    /// Set user reference ID
    pub fn with_userref(mut self, userref: i32) -> Self {
        self.userref = Some(userref);
        self
    }

    /// Set as validate-only (don't actually submit)
    pub fn validate_only(mut self) -> Self {
        self.validate = true;
        self
    }

    /// Pass an extra AddOrder parameter, e.g. `("expiretm", "+60")`
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Build the AddOrder form parameters
    ///
    /// Typed fields win over entries of the same name in `extra`.
    pub fn to_params(&self) -> Params {
        let mut params = self.extra.clone();

        params.insert("pair".to_string(), self.pair.clone());
        params.insert("type".to_string(), self.side.to_string());
        params.insert("ordertype".to_string(), self.order_type.to_string());
        params.insert("volume".to_string(), self.volume.to_string());

        if let Some(price) = &self.price {
            params.insert("price".to_string(), price.to_string());
        }
        if let Some(price2) = &self.price2 {
            params.insert("price2".to_string(), price2.to_string());
        }
        if let Some(tif) = &self.time_in_force {
            params.insert("timeinforce".to_string(), tif.to_string());
        }
        if let Some(leverage) = &self.leverage {
            params.insert("leverage".to_string(), leverage.clone());
        }
        if !self.flags.is_empty() {
            let flags: Vec<&str> = self.flags.iter().map(|f| f.as_str()).collect();
            params.insert("oflags".to_string(), flags.join(","));
        }
        if let Some(userref) = self.userref {
            params.insert("userref".to_string(), userref.to_string());
        }
        if self.validate {
            params.insert("validate".to_string(), "true".to_string());
        }

        params
    }
}

/// Response from placing an order
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    /// Order description
    pub descr: OrderResponseDescription,
    /// Transaction IDs (absent when only validating)
    pub txid: Option<Vec<String>>,
}

/// Order response description
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponseDescription {
    /// Order description
    pub order: String,
    /// Close order description (if applicable)
    pub close: Option<String>,
}

/// Cancel order result
#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrderResult {
    /// Number of orders cancelled
    pub count: u32,
    /// Whether cancel is pending
    pub pending: Option<bool>,
}
