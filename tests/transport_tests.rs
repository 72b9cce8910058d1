//! Requests as they reach the wire: paths, parameter placement, signatures,
//! envelope handling.

mod common;

use bybit_connector::core::kernel::RestClient;
use bybit_connector::core::params::Params;
use bybit_connector::products::inverse_perpetual::{PlaceActiveOrder, QueryOrder};
use bybit_connector::products::spot::{PlaceOrder, SpotOrderType, SpotSide, SpotTimeInForce};
use bybit_connector::products::spot;
use bybit_connector::{BybitError, OrderType, Side, TimeInForce};
use common::{
    assert_signed, form_map, json_map, ok, public_client, query_map, setup_mock_server,
    signed_client,
};
use rust_decimal_macros::dec;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_public_get_is_unsigned() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/public/time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let time = assert_ok!(signed_client(&server).inverse_perpetual().server_time().await);
    assert_eq!(time.timestamp(), 1_577_444_332);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_private_get_signs_query() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/private/order"))
        .and(query_param("symbol", "BTCUSD"))
        .and(query_param("order_id", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!(null))))
        .expect(1)
        .mount(&server)
        .await;

    let orders = assert_ok!(
        signed_client(&server)
            .inverse_perpetual()
            .query_order(QueryOrder::new("BTCUSD").with_order_id("abc"))
            .await
    );
    assert!(orders.is_empty());

    let requests = server.received_requests().await.unwrap();
    let query = query_map(&requests[0]);
    assert_signed(&query);
    assert_eq!(query.len(), 5);
}

#[tokio::test]
async fn test_private_post_signs_json_body() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/private/order/create"))
        .and(body_string_contains("\"qty\":\"1\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "user_id": 1,
            "order_id": "335fd977-e5a5-4781-b6d0-c772d5bfb95b",
            "symbol": "BTCUSD",
            "side": "Buy",
            "order_type": "Limit",
            "price": 8800,
            "qty": 1,
            "time_in_force": "GoodTillCancel",
            "order_status": "Created",
            "last_exec_time": 0,
            "last_exec_price": 0,
            "leaves_qty": 1,
            "cum_exec_qty": 0,
            "cum_exec_value": 0,
            "cum_exec_fee": 0,
            "reject_reason": "",
            "order_link_id": "",
            "created_at": "2019-11-30T11:03:43.452Z",
            "updated_at": "2019-11-30T11:03:43.455Z"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let order = PlaceActiveOrder::new(
        Side::Buy,
        "BTCUSD",
        OrderType::Limit,
        dec!(1),
        TimeInForce::GoodTillCancel,
    )
    .with_price(dec!(8800.5));
    let created = assert_ok!(
        signed_client(&server)
            .inverse_perpetual()
            .place_active_order(order)
            .await
    );
    assert_eq!(created.order_id, "335fd977-e5a5-4781-b6d0-c772d5bfb95b");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().is_none());
    let body = json_map(&requests[0]);
    assert_eq!(body.get("price").map(String::as_str), Some("8800.5"));
    assert_eq!(body.get("side").map(String::as_str), Some("Buy"));
    assert!(!body.contains_key("reduce_only"));
    assert_signed(&body);
}

#[tokio::test]
async fn test_spot_order_is_a_signed_form() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/spot/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "accountId": "1",
            "symbol": "ETHUSDT",
            "symbolName": "ETHUSDT",
            "orderLinkId": "162073788655749",
            "orderId": "889208273689997824",
            "transactTime": "1620737886573",
            "price": "20000",
            "origQty": "10",
            "executedQty": "0",
            "status": "NEW",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "side": "BUY"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let order = PlaceOrder::new("ETHUSDT", SpotSide::Buy, SpotOrderType::Limit, dec!(10))
        .with_price(dec!(20000))
        .with_time_in_force(SpotTimeInForce::GoodTillCancel);
    let ack = assert_ok!(signed_client(&server).spot().place_order(order).await);
    assert_eq!(ack.order_type, SpotOrderType::Limit);

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/x-www-form-urlencoded"));

    let form = form_map(&requests[0]);
    assert_eq!(form.get("timeInForce").map(String::as_str), Some("GTC"));
    assert_eq!(form.get("type").map(String::as_str), Some("LIMIT"));
    assert_eq!(form.get("qty").map(String::as_str), Some("10"));
    assert_signed(&form);
}

#[tokio::test]
async fn test_spot_cancel_is_a_signed_delete() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/spot/v1/order"))
        .and(query_param("orderId", "889826641228952064"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "accountId": "10054",
            "symbol": "ETHUSDT",
            "orderLinkId": "162081160171552",
            "orderId": "889826641228952064",
            "transactTime": "1620811601728",
            "price": "20000",
            "origQty": "10",
            "executedQty": "0",
            "status": "CANCELED",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "side": "BUY"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let ack = assert_ok!(
        signed_client(&server)
            .spot()
            .cancel_order(spot::CancelOrder {
                order_id: Some("889826641228952064".to_string()),
                order_link_id: None,
            })
            .await
    );
    assert_eq!(ack.status, spot::SpotOrderStatus::Canceled);

    let requests = server.received_requests().await.unwrap();
    assert_signed(&query_map(&requests[0]));
}

#[tokio::test]
async fn test_recv_window_is_signed() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/private/wallet/balance"))
        .and(query_param("recv_window", "10000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({}))))
        .expect(1)
        .mount(&server)
        .await;

    let config = bybit_connector::ExchangeConfig::new(
        common::API_KEY.to_string(),
        common::SECRET_KEY.to_string(),
    )
    .base_url(server.uri())
    .with_recv_window(10000);
    let client = assert_ok!(bybit_connector::Bybit::new(&config));
    let balances = assert_ok!(client.inverse_perpetual().wallet_balance(None).await);
    assert!(balances.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_signed(&query_map(&requests[0]));
}

#[tokio::test]
async fn test_non_zero_ret_code_is_an_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/private/order/cancelAll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ret_code": 10001,
            "ret_msg": "invalid symbol",
            "ext_code": "",
            "result": null,
            "time_now": "1577444332.192859"
        })))
        .mount(&server)
        .await;

    let err = signed_client(&server)
        .inverse_perpetual()
        .cancel_all_orders("NOPE")
        .await
        .unwrap_err();
    assert_eq!(err.api_code(), Some(10001));
    assert!(err.is_transport());
    assert!(err.to_string().contains("invalid symbol"));
}

#[tokio::test]
async fn test_http_failure_is_an_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/public/announcement"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = public_client(&server)
        .inverse_perpetual()
        .announcement()
        .await
        .unwrap_err();
    assert!(matches!(err, BybitError::ApiError { code: 503, .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_an_http_error() {
    let server = setup_mock_server().await;
    let client = public_client(&server);
    drop(server);

    let err = client.inverse_perpetual().server_time().await.unwrap_err();
    assert!(matches!(err, BybitError::HttpError(_)));
    assert!(err.is_transport());
    assert_eq!(err.api_code(), None);
}

#[tokio::test]
async fn test_private_call_without_credentials() {
    let server = setup_mock_server().await;

    let err = public_client(&server)
        .usdt_perpetual()
        .my_position(None)
        .await
        .unwrap_err();
    assert!(matches!(err, BybitError::AuthError(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_raw_transport_returns_envelope() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/public/time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({}))))
        .mount(&server)
        .await;

    let client = public_client(&server);
    let envelope = assert_ok!(
        client
            .rest()
            .get_json::<serde_json::Value>("/v2/public/time", &Params::new(), false)
            .await
    );
    assert_eq!(envelope.ret_code, 0);
    assert_eq!(envelope.rate_limit, Some(100));
    assert_eq!(envelope.time_now.as_deref(), Some("1577444332.192859"));
}
