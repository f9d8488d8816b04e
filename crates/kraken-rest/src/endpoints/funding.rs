//! Funding endpoints for deposits and withdrawals
//!
//! These endpoints require authentication.

use super::build_params;
use crate::client::KrakenRestClient;
use crate::error::RestResult;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Funding endpoints for deposits and withdrawals
pub struct FundingEndpoints<'a> {
    client: &'a KrakenRestClient,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(client: &'a KrakenRestClient) -> Self {
        Self { client }
    }

    /// Get deposit methods for an asset
    ///
    /// # Arguments
    /// * `asset` - Asset to get deposit methods for (e.g., "XBT", "ETH")
    #[instrument(skip(self))]
    pub async fn get_deposit_methods(&self, asset: &str) -> RestResult<Vec<DepositMethod>> {
        let params = build_params([("asset", Some(asset.to_string()))]);
        debug!("Getting deposit methods for {}", asset);
        self.client.query_private("DepositMethods", &params).await
    }

    /// Get deposit addresses
    ///
    /// # Arguments
    /// * `asset` - Asset to get addresses for
    /// * `method` - Deposit method name
    /// * `new` - Generate new address
    #[instrument(skip(self))]
    pub async fn get_deposit_addresses(
        &self,
        asset: &str,
        method: &str,
        new: bool,
    ) -> RestResult<Vec<DepositAddress>> {
        let params = build_params([
            ("asset", Some(asset.to_string())),
            ("method", Some(method.to_string())),
            ("new", new.then(|| "true".to_string())),
        ]);
        debug!("Getting deposit addresses for {} via {}", asset, method);
        self.client.query_private("DepositAddresses", &params).await
    }

    /// Get status of recent deposits
    ///
    /// # Arguments
    /// * `asset` - Asset being deposited
    /// * `method` - Filter by method (optional)
    #[instrument(skip(self))]
    pub async fn get_deposit_status(
        &self,
        asset: &str,
        method: Option<&str>,
    ) -> RestResult<Vec<TransferStatus>> {
        let params = build_params([
            ("asset", Some(asset.to_string())),
            ("method", method.map(str::to_string)),
        ]);
        self.client.query_private("DepositStatus", &params).await
    }

    /// Get withdrawal fee and limit information
    ///
    /// # Arguments
    /// * `asset` - Asset being withdrawn
    /// * `key` - Withdrawal key name, as set up on the account
    /// * `amount` - Amount to withdraw
    #[instrument(skip(self))]
    pub async fn get_withdraw_info(
        &self,
        asset: &str,
        key: &str,
        amount: Decimal,
    ) -> RestResult<WithdrawInfo> {
        let params = build_params([
            ("asset", Some(asset.to_string())),
            ("key", Some(key.to_string())),
            ("amount", Some(amount.to_string())),
        ]);
        self.client.query_private("WithdrawInfo", &params).await
    }

    /// Withdraw funds to a pre-configured withdrawal key
    ///
    /// # Returns
    /// Reference ID of the withdrawal
    #[instrument(skip(self))]
    pub async fn withdraw(&self, asset: &str, key: &str, amount: Decimal) -> RestResult<WithdrawResult> {
        let params = build_params([
            ("asset", Some(asset.to_string())),
            ("key", Some(key.to_string())),
            ("amount", Some(amount.to_string())),
        ]);
        debug!("Withdrawing {} {} to {}", amount, asset, key);
        self.client.query_private("Withdraw", &params).await
    }

    /// Get status of recent withdrawals
    #[instrument(skip(self))]
    pub async fn get_withdraw_status(
        &self,
        asset: &str,
        method: Option<&str>,
    ) -> RestResult<Vec<TransferStatus>> {
        let params = build_params([
            ("asset", Some(asset.to_string())),
            ("method", method.map(str::to_string)),
        ]);
        self.client.query_private("WithdrawStatus", &params).await
    }

    /// Cancel a pending withdrawal
    ///
    /// # Returns
    /// Whether the cancellation was accepted
    #[instrument(skip(self))]
    pub async fn cancel_withdraw(&self, asset: &str, refid: &str) -> RestResult<bool> {
        let params = build_params([
            ("asset", Some(asset.to_string())),
            ("refid", Some(refid.to_string())),
        ]);
        debug!("Cancelling withdrawal {}", refid);
        self.client.query_private("WithdrawCancel", &params).await
    }
}

// Response types specific to funding endpoints

/// Deposit method
#[derive(Debug, Clone, Deserialize)]
pub struct DepositMethod {
    /// Method name
    pub method: String,
    /// Limit (`false` when unlimited)
    pub limit: serde_json::Value,
    /// Fee
    pub fee: Option<String>,
    /// Address setup fee
    #[serde(rename = "address-setup-fee")]
    pub address_setup_fee: Option<String>,
    /// Whether new addresses can be generated
    #[serde(rename = "gen-address")]
    pub gen_address: Option<bool>,
}

/// Deposit address
#[derive(Debug, Clone, Deserialize)]
pub struct DepositAddress {
    /// Address
    pub address: String,
    /// Expiry time
    pub expiretm: serde_json::Value,
    /// New address generated
    pub new: Option<bool>,
}

/// Withdrawal info
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawInfo {
    /// Withdrawal method
    pub method: String,
    /// Limit
    pub limit: String,
    /// Net amount that will be sent, after fees
    pub amount: String,
    /// Fee
    pub fee: String,
}

/// Withdrawal result
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawResult {
    /// Reference ID
    pub refid: String,
}

/// Status of a deposit or withdrawal
#[derive(Debug, Clone, Deserialize)]
pub struct TransferStatus {
    /// Method name
    pub method: String,
    /// Asset class
    pub aclass: String,
    /// Asset
    pub asset: String,
    /// Reference ID
    pub refid: String,
    /// Method transaction ID
    pub txid: String,
    /// Method transaction information
    pub info: String,
    /// Amount
    pub amount: String,
    /// Fee
    pub fee: Option<String>,
    /// Unix timestamp of the request
    pub time: i64,
    /// Status (Initial, Pending, Settled, Success, Failure)
    pub status: String,
    /// Additional status properties
    #[serde(rename = "status-prop")]
    pub status_prop: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deposit_method_parsing() {
        let methods: Vec<DepositMethod> = serde_json::from_value(json!([
            {"method": "Bitcoin", "limit": false, "fee": "0.0000000000", "gen-address": true}
        ]))
        .unwrap();

        assert_eq!(methods[0].method, "Bitcoin");
        assert_eq!(methods[0].limit, json!(false));
        assert_eq!(methods[0].gen_address, Some(true));
    }

    #[test]
    fn test_transfer_status_parsing() {
        let status: Vec<TransferStatus> = serde_json::from_value(json!([{
            "method": "Bitcoin",
            "aclass": "currency",
            "asset": "XXBT",
            "refid": "AGBSO6T-UFMTTQ-I7KGS6",
            "txid": "6544b41b607d8b2512baf801755a3a87b6890eacdb451be8a94059fb11f0a8d9",
            "info": "2Myd4eaAW96ojk38A2uDK4FbioCayvkEgVq",
            "amount": "0.78125000",
            "fee": "0.0000000000",
            "time": 1688014586,
            "status": "Pending",
            "status-prop": "onhold"
        }]))
        .unwrap();

        assert_eq!(status[0].status, "Pending");
        assert_eq!(status[0].status_prop.as_deref(), Some("onhold"));
    }
}
