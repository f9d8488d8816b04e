//! Known API method names and their visibility

/// Methods served under `/{version}/public/`
pub const PUBLIC_METHODS: &[&str] = &[
    "Time",
    "SystemStatus",
    "Assets",
    "AssetPairs",
    "Ticker",
    "Depth",
    "Trades",
    "Spread",
    "OHLC",
];

/// Methods served under `/{version}/private/`
pub const PRIVATE_METHODS: &[&str] = &[
    "Balance",
    "TradeBalance",
    "OpenOrders",
    "ClosedOrders",
    "QueryOrders",
    "TradesHistory",
    "QueryTrades",
    "OpenPositions",
    "Ledgers",
    "QueryLedgers",
    "TradeVolume",
    "AddOrder",
    "CancelOrder",
    "DepositMethods",
    "DepositAddresses",
    "DepositStatus",
    "WithdrawInfo",
    "Withdraw",
    "WithdrawStatus",
    "WithdrawCancel",
];

/// Whether a method needs a signed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// No authentication
    Public,
    /// Signed with API-Key and API-Sign headers
    Private,
}

impl MethodKind {
    /// Classify a method name, `None` if it is not a known method
    pub fn of(method: &str) -> Option<Self> {
        if PUBLIC_METHODS.contains(&method) {
            Some(Self::Public)
        } else if PRIVATE_METHODS.contains(&method) {
            Some(Self::Private)
        } else {
            None
        }
    }

    /// URL path segment for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}
