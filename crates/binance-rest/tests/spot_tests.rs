//! Integration tests for spot, wallet and margin endpoints, plus response
//! handling shared by every group.

mod common;

use binance_rest::{
    MarginOrderOptions, NewOrderOptions, OrderIdOptions, OrderType, RestError, Side,
    TradeHistoryOptions, TransportError, WithdrawOptions, API_KEY_HEADER,
};
use common::*;
use rust_decimal_macros::dec;
use wiremock::matchers::{body_string, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// =============================================================================
// Spot Trading
// =============================================================================

#[tokio::test]
async fn test_spot_limit_order() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/order"))
        .and(body_string_contains("symbol=BTCUSDT&side=BUY&type=LIMIT"))
        .and(body_string_contains("quantity=0.5"))
        .and(body_string_contains("price=42000"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"symbol": "BTCUSDT", "orderId": 28, "status": "NEW"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let options = NewOrderOptions::limit(dec!(0.5), dec!(42000));
    let result = client
        .trade()
        .new_order("btcusdt", Side::Buy, OrderType::Limit, &options)
        .await
        .unwrap();
    assert_eq!(result["orderId"], 28);

    assert_valid_signature(&raw_params(&only_request(&server).await));
}

#[tokio::test]
async fn test_spot_test_order_empty_response() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/order/test"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let result = client
        .trade()
        .test_new_order("ethbtc", "sell", "market", &NewOrderOptions::market(dec!(1)))
        .await
        .unwrap();
    assert!(result.as_object().is_some_and(|o| o.is_empty()));
}

#[tokio::test]
async fn test_spot_get_order_by_client_id() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/order"))
        .and(query_param("symbol", "LTCBTC"))
        .and(query_param("origClientOrderId", "myOrder1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"orderId": 1, "status": "FILLED"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let result = client
        .trade()
        .get_order("ltcbtc", &OrderIdOptions::by_client_order_id("myOrder1"))
        .await
        .unwrap();
    assert_eq!(result["status"], "FILLED");
}

#[tokio::test]
async fn test_spot_my_trades_history_filters() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/myTrades"))
        .and(query_param("symbol", "BNBUSDT"))
        .and(query_param("fromId", "100"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let options = TradeHistoryOptions {
        from_id: Some(100),
        limit: Some(50),
        ..Default::default()
    };
    client.trade().my_trades("bnbusdt", &options).await.unwrap();
}

#[tokio::test]
async fn test_spot_open_orders_all_symbols() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/openOrders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    client.trade().open_orders(None).await.unwrap();

    let raw = raw_params(&only_request(&server).await);
    assert!(raw.starts_with("timestamp="));
    assert!(!raw.contains("symbol="));
}

// =============================================================================
// Spot User Data Stream
// =============================================================================

#[tokio::test]
async fn test_spot_renew_listen_key() {
    let server = setup_mock_server().await;

    Mock::given(method("PUT"))
        .and(path("/api/v3/userDataStream"))
        .and(header(API_KEY_HEADER, API_KEY))
        .and(body_string("listenKey=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = key_only_client(&server);
    client.user_stream().renew_listen_key("abc123").await.unwrap();
}

#[tokio::test]
async fn test_listen_key_is_not_upper_cased() {
    let server = setup_mock_server().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v3/userDataStream"))
        .and(query_param("listenKey", "mixedCaseKey"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = key_only_client(&server);
    client.user_stream().close_listen_key("mixedCaseKey").await.unwrap();
}

// =============================================================================
// Wallet
// =============================================================================

#[tokio::test]
async fn test_system_status_is_public() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/sapi/v1/system/status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": 0, "msg": "normal"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let result = client.wallet().system_status().await.unwrap();
    assert_eq!(result["msg"], "normal");

    let request = only_request(&server).await;
    assert!(request.headers.get(API_KEY_HEADER).is_none());
}

#[tokio::test]
async fn test_public_call_sends_configured_key_without_signature() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/sapi/v1/system/status"))
        .and(header(API_KEY_HEADER, API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    client.wallet().system_status().await.unwrap();

    let request = only_request(&server).await;
    assert!(request.url.query().is_none());
}

#[tokio::test]
async fn test_withdraw_keeps_address_case() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/sapi/v1/capital/withdraw/apply"))
        .and(body_string_contains(
            "coin=USDT&address=0xAbCdEf0123456789&amount=25.5&network=BSC",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "7213fea8e94b4a5593d507237e5a555b"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let options = WithdrawOptions {
        network: Some("BSC".to_string()),
        ..Default::default()
    };
    let result = client
        .wallet()
        .withdraw("usdt", "0xAbCdEf0123456789", dec!(25.5), &options)
        .await
        .unwrap();
    assert_eq!(result["id"], "7213fea8e94b4a5593d507237e5a555b");
}

#[tokio::test]
async fn test_withdraw_requires_address() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let err = client
        .wallet()
        .withdraw("USDT", "", dec!(1), &WithdrawOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::MissingParameter(ref name) if name == "address"));
}

// =============================================================================
// Margin
// =============================================================================

#[tokio::test]
async fn test_margin_borrow() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/sapi/v1/margin/loan"))
        .and(body_string_contains("asset=BTC&amount=0.01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"tranId": 100000001})))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let result = client.margin().borrow("btc", dec!(0.01)).await.unwrap();
    assert_eq!(result["tranId"], 100000001);
}

#[tokio::test]
async fn test_margin_order_flattens_options() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/sapi/v1/margin/order"))
        .and(body_string_contains("symbol=BTCUSDT&side=SELL&type=MARKET"))
        .and(body_string_contains("isIsolated=TRUE"))
        .and(body_string_contains("sideEffectType=AUTO_REPAY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"orderId": 9})))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_client(&server);
    let options = MarginOrderOptions::new(NewOrderOptions::market(dec!(0.1)))
        .isolated()
        .with_side_effect("auto_repay");
    client
        .margin()
        .new_order("btcusdt", "sell", "market", &options)
        .await
        .unwrap();
}

// =============================================================================
// Response Handling
// =============================================================================

#[tokio::test]
async fn test_empty_success_body_is_empty_object() {
    let server = setup_mock_server().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v3/userDataStream"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = key_only_client(&server);
    let result = client.user_stream().close_listen_key("k").await.unwrap();
    assert_eq!(result, serde_json::json!({}));
}

#[tokio::test]
async fn test_unstructured_error_is_transport() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/time"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let err = client.server_time().await.unwrap_err();
    match err {
        RestError::Transport(TransportError::Status { status, body }) => {
            assert_eq!(status, 502);
            assert!(body.contains("Bad Gateway"));
        }
        other => panic!("Expected Transport status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_success_is_parse_error() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/time"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let err = client.server_time().await.unwrap_err();
    assert!(matches!(err, RestError::Parse(_)));
}

#[tokio::test]
async fn test_rate_limit_error_is_retryable() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"code":-1003,"msg":"Too many requests."}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = public_client(&server);
    let err = client.ping().await.unwrap_err();
    assert!(err.is_rate_limited());
    assert!(err.is_retryable());
    assert_eq!(err.http_status(), Some(429));
}

#[tokio::test]
async fn test_connection_failure_is_transport() {
    // Nothing listens on the discard port
    let config = binance_rest::ClientConfig::new()
        .with_base_url("http://127.0.0.1:9")
        .with_timeout(5);
    let client = binance_rest::BinanceRestClient::with_config(config).unwrap();

    let err = client.ping().await.unwrap_err();
    assert!(matches!(err, RestError::Transport(TransportError::Http(_))));
}
