//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use super::build_params;
use crate::client::KrakenRestClient;
use crate::error::{RestError, RestResult};
use crate::types::{CancelOrderResult, OrderRequest, OrderResponse};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a KrakenRestClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a KrakenRestClient) -> Self {
        Self { client }
    }

    /// Add a new order
    ///
    /// # Arguments
    /// * `order` - Order request with all parameters
    ///
    /// # Returns
    /// Order response with transaction ID(s)
    #[instrument(skip(self, order), fields(pair = %order.pair, side = ?order.side, order_type = ?order.order_type))]
    pub async fn add_order(&self, order: &OrderRequest) -> RestResult<OrderResponse> {
        if order.volume <= Decimal::ZERO {
            return Err(RestError::InvalidParameter(format!(
                "Order volume must be positive, got {}",
                order.volume
            )));
        }

        debug!(
            "Placing {} {} order for {} {}",
            order.side, order.order_type, order.volume, order.pair
        );

        self.client.query_private("AddOrder", &order.to_params()).await
    }

    /// Cancel an order
    ///
    /// # Arguments
    /// * `txid` - Transaction ID (or user reference) of the order to cancel
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, txid: &str) -> RestResult<CancelOrderResult> {
        let params = build_params([("txid", Some(txid.to_string()))]);
        debug!("Cancelling order {}", txid);
        self.client.query_private("CancelOrder", &params).await
    }
}
