//! Signed endpoint tests against a mock server

mod common;

use common::*;
use kraken_rest::{OrderRequest, OrderSide, Params, RestError};
use rust_decimal_macros::dec;
use tokio_test::assert_ok;
use wiremock::matchers::{body_string_contains, header, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

fn json_body(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

async fn mount_open_orders(server: &wiremock::MockServer, fixture: &str) {
    Mock::given(method("POST"))
        .and(path("/0/private/OpenOrders"))
        .and(header("API-Key", TEST_API_KEY))
        .and(header_exists("API-Sign"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("nonce="))
        .respond_with(json_body(fixture))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_open_orders_trailing_stop_limit() {
    let server = setup_mock_server().await;
    mount_open_orders(&server, OPEN_ORDERS_TRAILING_LIMIT).await;

    let client = private_client(&server);
    let result = assert_ok!(client.get_open_orders(&Params::new()).await);

    let order = &result.open["OHHGPP-NNI55-B4POPF"];
    assert_eq!(order.opentm, 1498459388.1265);
    assert_eq!(order.descr.ordertype, "trailing-stop-limit");
    assert_eq!(order.descr.price, "-5.0000%");
    assert_eq!(order.descr.price2, "-0.10000");
    assert_eq!(order.descr.side, "sell");
    assert!(order.refid.is_none());
}

#[tokio::test]
async fn test_open_orders_limit() {
    let server = setup_mock_server().await;
    mount_open_orders(&server, OPEN_ORDERS_LIMIT).await;

    let client = private_client(&server);
    let result = assert_ok!(client.get_open_orders(&Params::new()).await);

    let order = &result.open["OXVBVJ-EJOZJ-UP5E23"];
    assert_eq!(order.opentm, 1498464661.5428);
    assert_eq!(order.descr.pair, "ETHEUR");
    assert_eq!(order.descr.price, "320.00000");
    assert_eq!(order.descr.price2, "0");
    assert_eq!(order.executed_volume(), Some(dec!(0.25)));
    assert_eq!(order.volume(), Some(dec!(1)));
}

#[tokio::test]
async fn test_generic_query_private_method() {
    let server = setup_mock_server().await;
    mount_open_orders(&server, OPEN_ORDERS_LIMIT).await;

    let client = private_client(&server);
    let mut params = Params::new();
    params.insert("trades".to_string(), "true".to_string());
    let result = assert_ok!(client.query("OpenOrders", &params).await);

    assert!(result["open"].is_object());
}

#[tokio::test]
async fn test_signature_matches_body() {
    let server = setup_mock_server().await;
    mount_open_orders(&server, OPEN_ORDERS_LIMIT).await;

    let client = private_client(&server);
    let mut params = Params::new();
    params.insert("trades".to_string(), "true".to_string());
    assert_ok!(client.get_open_orders(&params).await);

    let requests = server.received_requests().await.expect("recording is enabled");
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    let body = String::from_utf8(request.body.clone()).expect("form body is utf-8");
    assert!(body.starts_with("nonce="));
    assert!(body.ends_with("&trades=true"));

    let nonce = body
        .split('&')
        .find_map(|pair| pair.strip_prefix("nonce="))
        .expect("body carries a nonce");
    let sent = request
        .headers
        .get("API-Sign")
        .and_then(|v| v.to_str().ok())
        .expect("API-Sign header");

    let expected = test_credentials().sign("/0/private/OpenOrders", nonce, &body);
    assert_eq!(sent, expected);
}

#[tokio::test]
async fn test_nonces_increase_across_requests() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/private/OpenOrders"))
        .respond_with(json_body(OPEN_ORDERS_LIMIT))
        .expect(2)
        .mount(&server)
        .await;

    let client = private_client(&server);
    assert_ok!(client.get_open_orders(&Params::new()).await);
    assert_ok!(client.get_open_orders(&Params::new()).await);

    let requests = server.received_requests().await.expect("recording is enabled");
    let nonces: Vec<u64> = requests
        .iter()
        .map(|r| {
            let body = String::from_utf8_lossy(&r.body);
            body.trim_start_matches("nonce=").parse().expect("numeric nonce")
        })
        .collect();

    assert!(nonces[1] > nonces[0]);
}

#[tokio::test]
async fn test_private_call_without_credentials() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(json_body(OPEN_ORDERS_LIMIT))
        .expect(0)
        .mount(&server)
        .await;

    let client = public_client(&server);

    let typed = client.get_open_orders(&Params::new()).await;
    assert!(matches!(typed, Err(RestError::AuthRequired)));

    let generic = client.query("Balance", &Params::new()).await;
    assert!(matches!(generic, Err(RestError::AuthRequired)));
}

#[tokio::test]
async fn test_invalid_key_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/private/Balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": ["EAPI:Invalid key"]
        })))
        .mount(&server)
        .await;

    let client = private_client(&server);
    let err = client.get_balance().await.unwrap_err();

    assert!(err.is_auth_error());
    assert!(!err.is_rate_limited());
}

#[tokio::test]
async fn test_balance() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/private/Balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": [],
            "result": {"ZEUR": "504.8610", "XXBT": "1.0112443900", "XETH": "0.0000000000"}
        })))
        .mount(&server)
        .await;

    let client = private_client(&server);
    let balance = assert_ok!(client.get_balance().await);

    assert_eq!(balance.get("XXBT"), Some(dec!(1.01124439)));
    assert_eq!(balance.non_zero().len(), 2);
}

#[tokio::test]
async fn test_add_limit_order() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/private/AddOrder"))
        .and(body_string_contains("ordertype=limit"))
        .and(body_string_contains("pair=XXBTZEUR"))
        .and(body_string_contains("price=37500"))
        .and(body_string_contains("type=buy"))
        .and(body_string_contains("volume=1.25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": [],
            "result": {
                "descr": {"order": "buy 1.25000000 XBTEUR @ limit 37500.0"},
                "txid": ["OUF4EM-FRGI2-MQMWZD"]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = private_client(&server);
    let order = OrderRequest::limit("XXBTZEUR", OrderSide::Buy, dec!(1.25), dec!(37500));
    let response = assert_ok!(client.add_order(&order).await);

    assert_eq!(response.txid, Some(vec!["OUF4EM-FRGI2-MQMWZD".to_string()]));
    assert!(response.descr.order.contains("limit"));
}

#[tokio::test]
async fn test_add_order_rejects_zero_volume() {
    let server = setup_mock_server().await;
    let client = private_client(&server);

    let order = OrderRequest::market("XXBTZEUR", OrderSide::Sell, dec!(0));
    let result = client.add_order(&order).await;

    assert!(matches!(result, Err(RestError::InvalidParameter(_))));
}

#[tokio::test]
async fn test_cancel_order() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/private/CancelOrder"))
        .and(body_string_contains("txid=OUF4EM-FRGI2-MQMWZD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": [],
            "result": {"count": 1}
        })))
        .mount(&server)
        .await;

    let client = private_client(&server);
    let result = assert_ok!(client.cancel_order("OUF4EM-FRGI2-MQMWZD").await);

    assert_eq!(result.count, 1);
    assert!(result.pending.is_none());
}

#[tokio::test]
async fn test_withdraw_cancel() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/private/WithdrawCancel"))
        .and(body_string_contains("refid=AGBSO6T-UFMTTQ-I7KGS6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": [],
            "result": true
        })))
        .mount(&server)
        .await;

    let client = private_client(&server);
    let funding = assert_ok!(client.funding());
    let cancelled = assert_ok!(funding.cancel_withdraw("XXBT", "AGBSO6T-UFMTTQ-I7KGS6").await);

    assert!(cancelled);
}
