//! Main REST client implementation
//!
//! Every call goes through one dispatcher: public methods are sent as
//! `GET {base}/{version}/public/{Method}?{params}`, private methods as a
//! signed `POST {base}/{version}/private/{Method}` with a form body. Both
//! return the same JSON envelope.

use crate::endpoints::account::OpenOrdersResult;
use crate::endpoints::market::{AssetInfo, ServerTime, TradesResult};
use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::methods::MethodKind;
use crate::types::{
    ApiResponse, AssetPairInfo, BalanceInfo, CancelOrderResult, OrderRequest, OrderResponse,
    TickerInfo,
};
use kraken_auth::{Credentials, Params, RequestSigner};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://api.kraken.com";

/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "0";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("kraken-rest/", env!("CARGO_PKG_VERSION"));

/// Kraken REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use kraken_rest::{KrakenRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = KrakenRestClient::new()?;
///     let ticker = client.get_ticker(&["XXBTZEUR"]).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = KrakenRestClient::with_credentials(creds)?;
///     let balance = auth_client.get_balance().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct KrakenRestClient {
    http_client: Client,
    base_url: String,
    api_version: String,
    credentials: Option<Credentials>,
}

impl KrakenRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        info!(
            base_url = %base_url,
            api_version = %config.api_version,
            authenticated = config.credentials.is_some(),
            "Created Kraken REST client"
        );

        Ok(Self {
            http_client,
            base_url,
            api_version: config.api_version,
            credentials: config.credentials,
        })
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Generic dispatch
    // ========================================================================

    /// Call any known API method and return its raw `result` payload
    ///
    /// # Arguments
    /// * `method` - Method name as used in the URL (e.g. "Time", "OpenOrders")
    /// * `params` - Request parameters
    ///
    /// # Errors
    /// `UnsupportedMethod` if `method` is not a known public or private method.
    pub async fn query(&self, method: &str, params: &Params) -> RestResult<serde_json::Value> {
        self.query_as(method, params).await
    }

    /// Call any known API method and decode its `result` into `T`
    pub async fn query_as<T: DeserializeOwned>(&self, method: &str, params: &Params) -> RestResult<T> {
        match MethodKind::of(method) {
            Some(MethodKind::Public) => self.query_public(method, params).await,
            Some(MethodKind::Private) => self.query_private(method, params).await,
            None => Err(RestError::UnsupportedMethod(method.to_string())),
        }
    }

    /// Send an unauthenticated request
    #[instrument(skip(self, params))]
    pub(crate) async fn query_public<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &Params,
    ) -> RestResult<T> {
        let url = format!("{}{}", self.base_url, self.method_path(MethodKind::Public, method));
        debug!(params = params.len(), "Sending public request");

        let response = self.http_client.get(&url).query(params).send().await?;
        Self::decode(method, response).await
    }

    /// Send a signed request
    #[instrument(skip(self, params))]
    pub(crate) async fn query_private<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &Params,
    ) -> RestResult<T> {
        let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        let path = self.method_path(MethodKind::Private, method);

        let signer = RequestSigner::new(credentials, path.as_str());
        let signed = signer.sign(params)?;
        let url = format!("{}{}", self.base_url, path);

        debug!(nonce = signer.nonce(), "Sending private request");

        let response = self
            .http_client
            .post(&url)
            .header("API-Key", signed.api_key)
            .header("API-Sign", signed.signature)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(signed.post_data)
            .send()
            .await?;

        Self::decode(method, response).await
    }

    fn method_path(&self, kind: MethodKind, method: &str) -> String {
        format!("/{}/{}/{}", self.api_version, kind.as_str(), method)
    }

    /// Unwrap the JSON envelope of a response
    async fn decode<T: DeserializeOwned>(method: &str, response: reqwest::Response) -> RestResult<T> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.bytes().await?;

        let status_error = || RestError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        };

        if !content_type.starts_with("application/json") {
            if !status.is_success() {
                return Err(status_error());
            }
            return Err(RestError::UnexpectedContentType(content_type));
        }

        let envelope: ApiResponse<serde_json::Value> = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(status_error()),
            Err(e) => return Err(e.into()),
        };

        if !envelope.is_success() {
            warn!(method, errors = ?envelope.error, "Kraken returned errors");
        } else if !status.is_success() && envelope.result.is_none() {
            return Err(status_error());
        }

        Ok(serde_json::from_value(envelope.into_result()?)?)
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get server time
    pub async fn get_server_time(&self) -> RestResult<ServerTime> {
        self.market().get_server_time().await
    }

    /// Get info for all assets
    pub async fn get_assets(&self) -> RestResult<HashMap<String, AssetInfo>> {
        self.market().get_assets(None).await
    }

    /// Get info for all tradable asset pairs
    pub async fn get_asset_pairs(&self) -> RestResult<HashMap<String, AssetPairInfo>> {
        self.market().get_asset_pairs(None).await
    }

    /// Get ticker information for one or more trading pairs
    ///
    /// # Arguments
    /// * `pairs` - Trading pairs (e.g., ["XXBTZEUR", "XXBTZGBP"])
    pub async fn get_ticker(&self, pairs: &[&str]) -> RestResult<HashMap<String, TickerInfo>> {
        self.market().get_ticker(pairs).await
    }

    /// Get recent trades for a pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair
    /// * `since` - Cursor from a previous call's `last`
    pub async fn get_recent_trades(&self, pair: &str, since: Option<u64>) -> RestResult<TradesResult> {
        self.market().get_recent_trades(pair, since).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        self.require_credentials()?;
        Ok(AccountEndpoints::new(self))
    }

    /// Get account balance
    pub async fn get_balance(&self) -> RestResult<BalanceInfo> {
        self.account()?.get_balance().await
    }

    /// Get open orders
    pub async fn get_open_orders(&self, args: &Params) -> RestResult<OpenOrdersResult> {
        self.account()?.get_open_orders(args).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(TradingEndpoints::new(self))
    }

    /// Place a new order
    pub async fn add_order(&self, order: &OrderRequest) -> RestResult<OrderResponse> {
        self.trading()?.add_order(order).await
    }

    /// Cancel an order by transaction ID
    pub async fn cancel_order(&self, txid: &str) -> RestResult<CancelOrderResult> {
        self.trading()?.cancel_order(txid).await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        self.require_credentials()?;
        Ok(FundingEndpoints::new(self))
    }

    fn require_credentials(&self) -> RestResult<&Credentials> {
        self.credentials.as_ref().ok_or(RestError::AuthRequired)
    }
}

impl std::fmt::Debug for KrakenRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KrakenRestClient")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Scheme and host, without the version segment
    pub base_url: String,
    /// API version path segment
    pub api_version: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the base URL (e.g. a test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API version segment
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
