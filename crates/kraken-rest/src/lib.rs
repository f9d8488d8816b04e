//! REST API client for Kraken cryptocurrency exchange
//!
//! This crate provides a REST client for Kraken's public market data and
//! private account, trading and funding endpoints.
//!
//! # Features
//!
//! - **Market Data**: Server time, assets, asset pairs, ticker, recent trades, orderbook, OHLC
//! - **Account**: Balances, open/closed orders, trade history, ledgers
//! - **Trading**: Place and cancel orders
//! - **Funding**: Deposit/withdraw operations
//! - **Generic dispatch**: [`KrakenRestClient::query`] calls any known method by name
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Requests are signed with
//! HMAC-SHA512 by the `kraken-auth` crate.
//!
//! # Example
//!
//! ```no_run
//! use kraken_rest::{pairs, KrakenRestClient, Credentials, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = KrakenRestClient::new()?;
//!     let ticker = client.get_ticker(&[pairs::XXBTZEUR]).await?;
//!     println!("BTC/EUR: {:?}", ticker);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = KrakenRestClient::with_credentials(creds)?;
//!     let orders = auth_client.get_open_orders(&Params::new()).await?;
//!     println!("Open orders: {}", orders.open.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod methods;
pub mod pairs;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, KrakenRestClient};
pub use error::{ErrorCategory, RestError, RestResult};
pub use kraken_auth::{Credentials, Params};
pub use methods::MethodKind;

// Re-export endpoint-specific types
pub use endpoints::account::{ClosedOrdersResult, OpenOrdersResult};
pub use endpoints::market::{AssetInfo, ServerTime, TradesResult};
pub use types::{
    // Market data
    AssetPairInfo, BookLevel, OrderbookData, TickerInfo, TradeInfo, TradeKind,
    // Account
    BalanceInfo, Order, OrderDescription,
    // Trading
    CancelOrderResult, OrderFlag, OrderRequest, OrderResponse, OrderSide, OrderType, TimeInForce,
    // Responses
    ApiResponse,
};
