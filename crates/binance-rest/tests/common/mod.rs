//! Common test utilities and fixtures for integration tests
//!
//! Every client here points both hosts at one wiremock server.

#![allow(dead_code)]

use binance_rest::{BinanceRestClient, ClientConfig, Credentials};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use wiremock::{MockServer, Request};

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";

/// Error body Binance returns for an unknown symbol
pub const INVALID_SYMBOL_BODY: &str = r#"{"code":-1121,"msg":"Invalid symbol."}"#;

/// Sample futures order acknowledgement
pub const FUTURES_ORDER_RESPONSE: &str = r#"{
    "orderId": 22542179,
    "symbol": "BTCUSDT",
    "status": "NEW",
    "clientOrderId": "testOrder",
    "price": "30000",
    "origQty": "0.001",
    "side": "BUY",
    "type": "LIMIT",
    "timeInForce": "GTC",
    "positionSide": "BOTH",
    "reduceOnly": false,
    "updateTime": 1566818724722
}"#;

/// Sample position risk entry
pub const POSITION_RISK_RESPONSE: &str = r#"[{
    "symbol": "BTCUSDT",
    "positionAmt": "0.010",
    "entryPrice": "29500.0",
    "markPrice": "30010.5",
    "unRealizedProfit": "5.105",
    "liquidationPrice": "0",
    "leverage": "10",
    "marginType": "cross",
    "positionSide": "BOTH"
}]"#;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_base_url(server.uri())
        .with_futures_base_url(server.uri())
}

/// Client with key and secret
pub fn signed_client(server: &MockServer) -> BinanceRestClient {
    let creds = Credentials::new(API_KEY, API_SECRET).unwrap();
    BinanceRestClient::with_config(config_for(server).with_credentials(creds)).unwrap()
}

/// Client with key and secret and a default receive window
pub fn signed_client_with_window(server: &MockServer, recv_window: u64) -> BinanceRestClient {
    let creds = Credentials::new(API_KEY, API_SECRET).unwrap();
    let config = config_for(server)
        .with_credentials(creds)
        .with_recv_window(recv_window);
    BinanceRestClient::with_config(config).unwrap()
}

/// Client with an API key but no secret
pub fn key_only_client(server: &MockServer) -> BinanceRestClient {
    let creds = Credentials::api_key_only(API_KEY).unwrap();
    BinanceRestClient::with_config(config_for(server).with_credentials(creds)).unwrap()
}

/// Client without credentials
pub fn public_client(server: &MockServer) -> BinanceRestClient {
    BinanceRestClient::with_config(config_for(server)).unwrap()
}

/// The encoded parameters of a captured request, from the query or the body
pub fn raw_params(request: &Request) -> String {
    match request.url.query() {
        Some(query) => query.to_string(),
        None => String::from_utf8(request.body.clone()).unwrap(),
    }
}

/// Decode `a=1&b=2` into ordered pairs
pub fn decode(raw: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(raw).unwrap()
}

/// HMAC-SHA256 of `payload` under the test secret, computed independently
pub fn expected_signature(payload: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(API_SECRET.as_bytes()).unwrap();
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Assert the last parameter is a valid signature over everything before it
pub fn assert_valid_signature(raw: &str) {
    let (payload, signature) = raw
        .rsplit_once("&signature=")
        .unwrap_or_else(|| panic!("no signature in {raw}"));

    assert!(!payload.contains("signature="), "signed string includes signature");
    assert!(payload.contains("timestamp="), "signed string lacks timestamp");
    assert_eq!(signature, expected_signature(payload));
}

/// The single request the server received
pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}
