//! Shared helpers for the integration tests.

#![allow(dead_code)]

use bybit_connector::{Bybit, ExchangeConfig, ReqwestRest};
use hmac::{Hmac, Mac};
use serde_json::{json, Value};
use sha2::Sha256;
use std::collections::BTreeMap;
use std::env;
use wiremock::{MockServer, Request};

pub const API_KEY: &str = "test-api-key";
pub const SECRET_KEY: &str = "test-secret-key";

pub async fn setup_mock_server() -> MockServer {
    MockServer::builder().start().await
}

/// Signed client talking to the mock server
pub fn signed_client(server: &MockServer) -> Bybit<ReqwestRest> {
    let config = ExchangeConfig::new(API_KEY.to_string(), SECRET_KEY.to_string())
        .base_url(server.uri());
    Bybit::new(&config).expect("client should build")
}

/// Client without credentials talking to the mock server
pub fn public_client(server: &MockServer) -> Bybit<ReqwestRest> {
    Bybit::new(&ExchangeConfig::read_only().base_url(server.uri())).expect("client should build")
}

/// Successful envelope around `result`
pub fn ok(result: Value) -> Value {
    json!({
        "ret_code": 0,
        "ret_msg": "OK",
        "ext_code": "",
        "ext_info": "",
        "result": result,
        "time_now": "1577444332.192859",
        "rate_limit_status": 99,
        "rate_limit_reset_ms": 1_580_885_703_683_i64,
        "rate_limit": 100
    })
}

/// Query string of a recorded request as a sorted map
pub fn query_map(request: &Request) -> BTreeMap<String, String> {
    request.url.query_pairs().into_owned().collect()
}

/// Urlencoded body of a recorded request as a sorted map
pub fn form_map(request: &Request) -> BTreeMap<String, String> {
    serde_urlencoded::from_bytes::<Vec<(String, String)>>(&request.body)
        .expect("body should be urlencoded")
        .into_iter()
        .collect()
}

/// JSON body of a recorded request, values rendered the way they are signed
pub fn json_map(request: &Request) -> BTreeMap<String, String> {
    let body: Value = serde_json::from_slice(&request.body).expect("body should be JSON");
    body.as_object()
        .expect("body should be an object")
        .iter()
        .map(|(k, v)| {
            let rendered = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), rendered)
        })
        .collect()
}

/// Recompute `sign` over every other parameter and compare
pub fn assert_signed(params: &BTreeMap<String, String>) {
    assert_eq!(params.get("api_key").map(String::as_str), Some(API_KEY));
    assert!(params.contains_key("timestamp"));

    let payload = params
        .iter()
        .filter(|(k, _)| k.as_str() != "sign")
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    let mut mac = Hmac::<Sha256>::new_from_slice(SECRET_KEY.as_bytes()).unwrap();
    mac.update(payload.as_bytes());
    let expected = hex::encode(mac.finalize().into_bytes());

    assert_eq!(params.get("sign"), Some(&expected), "signature over {}", payload);
}

/// Live tests against testnet only run when asked to
pub fn should_run_live_tests() -> bool {
    env::var("RUN_LIVE_TESTS").unwrap_or_default() == "true"
}
