//! Active orders (`order/*`).

use super::types::{ActiveOrder, CancelledOrder, Order, OrderListResult};
use super::InversePerpetual;
use crate::core::dispatch::{expect_one, Access, ResponseShape};
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use crate::core::types::{Direction, OrderStatus, OrderType, Side, TimeInForce, TriggerPrice};
use crate::core::wire::decimal_str;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceActiveOrder {
    pub side: Side,
    pub symbol: String,
    pub order_type: OrderType,
    #[serde(serialize_with = "decimal_str::serialize")]
    pub qty: Decimal,
    pub time_in_force: TimeInForce,
    /// Required for limit orders
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "decimal_str::option::serialize"
    )]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_on_trigger: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "decimal_str::option::serialize"
    )]
    pub take_profit: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "decimal_str::option::serialize"
    )]
    pub stop_loss: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_trigger_by: Option<TriggerPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_trigger_by: Option<TriggerPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<bool>,
}

impl PlaceActiveOrder {
    pub fn new(
        side: Side,
        symbol: impl Into<String>,
        order_type: OrderType,
        qty: Decimal,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            side,
            symbol: symbol.into(),
            order_type,
            qty,
            time_in_force,
            price: None,
            close_on_trigger: None,
            order_link_id: None,
            take_profit: None,
            stop_loss: None,
            tp_trigger_by: None,
            sl_trigger_by: None,
            reduce_only: None,
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_order_link_id(mut self, order_link_id: impl Into<String>) -> Self {
        self.order_link_id = Some(order_link_id.into());
        self
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<ActiveOrder, BybitError> {
        client
            .dispatcher()
            .post(Access::Private, "order/create", self)
            .await
    }
}

/// Paged order list, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderList {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl OrderList {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<OrderListResult, BybitError> {
        client
            .dispatcher()
            .get(Access::Private, "order/list", self)
            .await
    }
}

/// Cancel one order by `order_id` or `order_link_id`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CancelOrder {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
}

impl CancelOrder {
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<ActiveOrder, BybitError> {
        client
            .dispatcher()
            .post(Access::Private, "order/cancel", self)
            .await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CancelAllOrders {
    pub symbol: String,
}

impl CancelAllOrders {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<Vec<CancelledOrder>, BybitError> {
        client
            .dispatcher()
            .post(Access::Private, "order/cancelAll", self)
            .await
    }
}

/// Amend an open order. Only the fields that are set are changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplaceOrder {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
    #[serde(rename = "p_r_qty", skip_serializing_if = "Option::is_none")]
    pub qty: Option<u64>,
    #[serde(rename = "p_r_price", skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "decimal_str::option::serialize"
    )]
    pub take_profit: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "decimal_str::option::serialize"
    )]
    pub stop_loss: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_trigger_by: Option<TriggerPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_trigger_by: Option<TriggerPrice>,
}

#[derive(Debug, Deserialize)]
struct Replaced {
    order_id: String,
}

impl ReplaceOrder {
    /// Returns the id of the amended order
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<String, BybitError> {
        client
            .dispatcher()
            .post::<_, Replaced>(Access::Private, "order/replace", self)
            .await
            .map(|r| r.order_id)
    }
}

/// Real-time active order query.
///
/// With `order_id` or `order_link_id` set the answer is a single order;
/// with only `symbol` it is up to 500 open orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryOrder {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
}

impl QueryOrder {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn with_order_link_id(mut self, order_link_id: impl Into<String>) -> Self {
        self.order_link_id = Some(order_link_id.into());
        self
    }

    pub fn only_symbol(&self) -> bool {
        self.order_id.is_none() && self.order_link_id.is_none()
    }

    pub fn shape(&self) -> ResponseShape {
        ResponseShape::for_narrowed(!self.only_symbol())
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<Vec<Order>, BybitError> {
        client
            .dispatcher()
            .get_shaped(Access::Private, "order", self, self.shape())
            .await
    }
}

impl<R: RestClient> InversePerpetual<R> {
    pub async fn place_active_order(&self, v: PlaceActiveOrder) -> Result<ActiveOrder, BybitError> {
        v.execute(self).await
    }

    pub async fn order_list(&self, v: OrderList) -> Result<OrderListResult, BybitError> {
        v.execute(self).await
    }

    pub async fn cancel_order(&self, v: CancelOrder) -> Result<ActiveOrder, BybitError> {
        v.execute(self).await
    }

    pub async fn cancel_all_orders(&self, symbol: &str) -> Result<Vec<CancelledOrder>, BybitError> {
        CancelAllOrders::new(symbol).execute(self).await
    }

    pub async fn replace_order(&self, v: ReplaceOrder) -> Result<String, BybitError> {
        v.execute(self).await
    }

    pub async fn query_order(&self, v: QueryOrder) -> Result<Vec<Order>, BybitError> {
        v.execute(self).await
    }

    pub async fn query_order_by_id(&self, symbol: &str, order_id: &str) -> Result<Order, BybitError> {
        expect_one(QueryOrder::new(symbol).with_order_id(order_id).execute(self).await?)
    }

    pub async fn query_order_by_link_id(
        &self,
        symbol: &str,
        order_link_id: &str,
    ) -> Result<Order, BybitError> {
        expect_one(
            QueryOrder::new(symbol)
                .with_order_link_id(order_link_id)
                .execute(self)
                .await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::mock::MockRest;
    use crate::core::params::Params;
    use crate::core::types::{CancelType, CreateType, PositionIdx};
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn client(mock: &MockRest) -> InversePerpetual<MockRest> {
        InversePerpetual::new(Arc::new(mock.clone()))
    }

    fn order_json(order_id: &str) -> Value {
        json!({
            "user_id": 106958,
            "position_idx": 0,
            "symbol": "BTCUSD",
            "side": "Buy",
            "order_type": "Limit",
            "price": "8083",
            "qty": 10,
            "time_in_force": "PostOnly",
            "order_status": "New",
            "ext_fields": {"o_req_num": -68948112492_i64, "xreq_type": "x_create"},
            "last_exec_time": "1596304897.847944",
            "leaves_qty": 10,
            "leaves_value": "0.00123716",
            "cum_exec_qty": 0,
            "cum_exec_value": null,
            "cum_exec_fee": null,
            "reject_reason": "EC_NoError",
            "cancel_type": "UNKNOWN",
            "order_link_id": "",
            "created_at": "2020-08-01T18:00:26Z",
            "updated_at": "2020-08-01T18:01:37Z",
            "order_id": order_id
        })
    }

    #[test]
    fn test_only_symbol_predicate() {
        assert!(QueryOrder::new("BTCUSD").only_symbol());
        assert!(!QueryOrder::new("BTCUSD").with_order_id("abc").only_symbol());
        assert!(!QueryOrder::new("BTCUSD").with_order_link_id("x").only_symbol());
        assert!(!QueryOrder::new("BTCUSD")
            .with_order_id("abc")
            .with_order_link_id("x")
            .only_symbol());
        assert_eq!(QueryOrder::new("BTCUSD").shape(), ResponseShape::Collection);
        assert_eq!(
            QueryOrder::new("BTCUSD").with_order_id("abc").shape(),
            ResponseShape::Single
        );
    }

    #[test]
    fn test_absent_options_are_not_encoded() {
        let params = Params::from_request(&QueryOrder::new("BTCUSD").with_order_id("abc")).unwrap();
        assert_eq!(params.to_sign_payload(), "order_id=abc&symbol=BTCUSD");

        let order = PlaceActiveOrder::new(
            Side::Buy,
            "BTCUSD",
            OrderType::Limit,
            dec!(1),
            TimeInForce::GoodTillCancel,
        )
        .with_price(dec!(8800.5));
        let params = Params::from_request(&order).unwrap();
        assert_eq!(
            params.to_sign_payload(),
            "order_type=Limit&price=8800.5&qty=1&side=Buy&symbol=BTCUSD&time_in_force=GoodTillCancel"
        );
        assert!(!params.contains("reduce_only"));
        assert!(!params.contains("order_link_id"));
    }

    #[test]
    fn test_order_prices_are_sent_exactly() {
        let tiny = PlaceActiveOrder::new(
            Side::Sell,
            "BTCUSD",
            OrderType::Limit,
            dec!(1),
            TimeInForce::GoodTillCancel,
        )
        .with_price(dec!(0.00000001));
        let params = Params::from_request(&tiny).unwrap();
        assert_eq!(params.get("price"), Some(&json!("0.00000001")));
        assert!(params.to_sign_payload().contains("&price=0.00000001&"));

        let precise = PlaceActiveOrder::new(
            Side::Buy,
            "BTCUSD",
            OrderType::Limit,
            dec!(3),
            TimeInForce::GoodTillCancel,
        )
        .with_price(dec!(12345.123456789012345678));
        let params = Params::from_request(&precise).unwrap();
        assert_eq!(
            params.to_query_string().unwrap(),
            "order_type=Limit&price=12345.123456789012345678&qty=3&side=Buy\
             &symbol=BTCUSD&time_in_force=GoodTillCancel"
        );
    }

    #[test]
    fn test_unknown_status_filter_is_sent_unchanged() {
        let list = OrderList {
            order_status: Some(OrderStatus::from("BrandNewStatus")),
            ..OrderList::new("BTCUSD")
        };
        let params = Params::from_request(&list).unwrap();
        assert_eq!(params.to_sign_payload(), "order_status=BrandNewStatus&symbol=BTCUSD");
    }

    #[test]
    fn test_cancel_all_matches_manual_descriptor() {
        let convenience = Params::from_request(&CancelAllOrders::new("ETHUSD")).unwrap();
        let manual = Params::from_request(&CancelAllOrders {
            symbol: "ETHUSD".to_string(),
        })
        .unwrap();
        assert_eq!(convenience, manual);
        assert_eq!(convenience.to_sign_payload(), "symbol=ETHUSD");
    }

    #[tokio::test]
    async fn test_query_order_by_id_wraps_single_record() {
        let mock = MockRest::new();
        mock.respond(order_json("abc"));

        let orders = client(&mock)
            .query_order(QueryOrder::new("BTCUSD").with_order_id("abc"))
            .await
            .unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order.order_id, "abc");
        assert_eq!(orders[0].order.price, dec!(8083));
        assert!(orders[0].order.cum_exec_value.is_none());
        assert_eq!(orders[0].position_idx, PositionIdx::ONE_WAY);
        assert_eq!(
            orders[0].cancel_type,
            Some(CancelType::Unknown("UNKNOWN".to_string()))
        );
        assert_eq!(
            orders[0].ext_fields.as_ref().map(|e| e.xreq_type.as_str()),
            Some("x_create")
        );

        let call = mock.last_call();
        assert_eq!(call.method, "GET");
        assert_eq!(call.endpoint, "/v2/private/order");
        assert!(call.authenticated);
        assert_eq!(call.params.to_sign_payload(), "order_id=abc&symbol=BTCUSD");
    }

    #[tokio::test]
    async fn test_query_order_by_id_unwraps() {
        let mock = MockRest::new();
        mock.respond(order_json("abc"));

        let order = client(&mock).query_order_by_id("BTCUSD", "abc").await.unwrap();
        assert_eq!(order.order.order_id, "abc");
    }

    #[tokio::test]
    async fn test_query_order_by_id_without_match() {
        let mock = MockRest::new();
        mock.respond(Value::Null);

        let err = client(&mock)
            .query_order_by_link_id("BTCUSD", "missing")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BybitError::UnexpectedCardinality {
                expected: 1,
                actual: 0
            }
        ));
    }

    #[tokio::test]
    async fn test_query_order_only_symbol_lists() {
        let mock = MockRest::new();
        mock.respond(json!([order_json("a"), order_json("b")]));

        let orders = client(&mock)
            .query_order(QueryOrder::new("BTCUSD"))
            .await
            .unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(mock.last_call().params.to_sign_payload(), "symbol=BTCUSD");
    }

    #[tokio::test]
    async fn test_order_list_null_page() {
        let mock = MockRest::new();
        mock.respond(json!({"data": null, "cursor": ""}));

        let page = client(&mock)
            .order_list(OrderList {
                order_status: Some(OrderStatus::New),
                limit: Some(0),
                ..OrderList::new("BTCUSD")
            })
            .await
            .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(
            mock.last_call().params.to_sign_payload(),
            "limit=0&order_status=New&symbol=BTCUSD"
        );
    }

    #[tokio::test]
    async fn test_cancel_all_orders() {
        let mock = MockRest::new();
        mock.respond(json!([{
            "clOrdID": "89a38056-80f1-45b2-89d3-4d8e3a203a79",
            "user_id": 1,
            "symbol": "ETHUSD",
            "side": "Buy",
            "order_type": "Limit",
            "price": "7693.5",
            "qty": 1,
            "time_in_force": "GoodTillCancel",
            "create_type": "CreateByUser",
            "cancel_type": "CancelByUser",
            "order_status": "",
            "leaves_qty": 1,
            "leaves_value": "0.00013",
            "created_at": "2019-12-18T03:48:00.225Z",
            "updated_at": "2019-12-18T03:48:00.225Z",
            "cross_status": "PendingCancel",
            "cross_seq": 1266213331,
            "order_link_id": "my-order"
        }]));

        let cancelled = client(&mock).cancel_all_orders("ETHUSD").await.unwrap();
        assert_eq!(cancelled[0].order_id, "89a38056-80f1-45b2-89d3-4d8e3a203a79");
        assert_eq!(cancelled[0].order_link_id.as_deref(), Some("my-order"));
        assert_eq!(cancelled[0].create_type, CreateType::CreateByUser);
        assert_eq!(cancelled[0].order_status, OrderStatus::Unknown(String::new()));
        assert_eq!(cancelled[0].cross_status, OrderStatus::PendingCancel);

        let call = mock.last_call();
        assert_eq!(call.method, "POST");
        assert_eq!(call.endpoint, "/v2/private/order/cancelAll");
        assert_eq!(call.params.to_sign_payload(), "symbol=ETHUSD");
    }

    #[tokio::test]
    async fn test_place_and_replace() {
        let mock = MockRest::new();
        mock.respond(json!({
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
        }))
        .respond(json!({"order_id": "335fd977-e5a5-4781-b6d0-c772d5bfb95b"}));

        let perpetual = client(&mock);
        let created = perpetual
            .place_active_order(
                PlaceActiveOrder::new(
                    Side::Buy,
                    "BTCUSD",
                    OrderType::Limit,
                    dec!(1),
                    TimeInForce::GoodTillCancel,
                )
                .with_price(dec!(8800))
                .with_order_link_id("link-1"),
            )
            .await
            .unwrap();
        assert_eq!(created.order_status, OrderStatus::Created);
        assert_eq!(created.last_exec_price, Some(dec!(0)));
        assert_eq!(mock.last_call().endpoint, "/v2/private/order/create");

        let replaced = perpetual
            .replace_order(ReplaceOrder {
                symbol: "BTCUSD".to_string(),
                order_id: Some(created.order_id.clone()),
                price: Some(dec!(8900.5)),
                ..ReplaceOrder::default()
            })
            .await
            .unwrap();
        assert_eq!(replaced, created.order_id);

        let params = mock.last_call().params;
        assert_eq!(params.get("p_r_price"), Some(&json!("8900.5")));
        assert!(!params.contains("p_r_qty"));
        assert!(!params.contains("price"));
    }
}
