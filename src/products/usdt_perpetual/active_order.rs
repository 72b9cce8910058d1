use super::types::LinearOrder;
use super::UsdtPerpetual;
use crate::core::dispatch::{expect_one, Access, ResponseShape};
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use crate::core::types::{OrderType, PositionIdx, Side, TimeInForce, TriggerPrice};
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
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "decimal_str::option::serialize"
    )]
    pub price: Option<Decimal>,
    pub time_in_force: TimeInForce,
    pub reduce_only: bool,
    pub close_on_trigger: bool,
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
    /// Required in hedge mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_idx: Option<PositionIdx>,
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
            price: None,
            time_in_force,
            reduce_only: false,
            close_on_trigger: false,
            order_link_id: None,
            take_profit: None,
            stop_loss: None,
            tp_trigger_by: None,
            sl_trigger_by: None,
            position_idx: None,
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn reduce_only(mut self) -> Self {
        self.reduce_only = true;
        self
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &UsdtPerpetual<R>,
    ) -> Result<LinearOrder, BybitError> {
        client
            .dispatcher()
            .post(Access::Private, "order/create", self)
            .await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CancelOrder {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Cancelled {
    order_id: String,
}

impl CancelOrder {
    /// Returns the id of the cancelled order
    pub async fn execute<R: RestClient>(
        &self,
        client: &UsdtPerpetual<R>,
    ) -> Result<String, BybitError> {
        client
            .dispatcher()
            .post::<_, Cancelled>(Access::Private, "order/cancel", self)
            .await
            .map(|c| c.order_id)
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

    /// Returns the ids of the cancelled orders
    pub async fn execute<R: RestClient>(
        &self,
        client: &UsdtPerpetual<R>,
    ) -> Result<Vec<String>, BybitError> {
        client
            .dispatcher()
            .post::<_, Option<Vec<String>>>(Access::Private, "order/cancel-all", self)
            .await
            .map(Option::unwrap_or_default)
    }
}

/// Real-time order query (`order/search`).
///
/// Single order when narrowed by `order_id` or `order_link_id`, otherwise
/// every open order of the symbol.
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
        client: &UsdtPerpetual<R>,
    ) -> Result<Vec<LinearOrder>, BybitError> {
        client
            .dispatcher()
            .get_shaped(Access::Private, "order/search", self, self.shape())
            .await
    }
}

impl<R: RestClient> UsdtPerpetual<R> {
    pub async fn place_active_order(&self, v: PlaceActiveOrder) -> Result<LinearOrder, BybitError> {
        v.execute(self).await
    }

    pub async fn cancel_order(&self, v: CancelOrder) -> Result<String, BybitError> {
        v.execute(self).await
    }

    pub async fn cancel_all_orders(&self, symbol: &str) -> Result<Vec<String>, BybitError> {
        CancelAllOrders::new(symbol).execute(self).await
    }

    pub async fn query_order(&self, v: QueryOrder) -> Result<Vec<LinearOrder>, BybitError> {
        v.execute(self).await
    }

    pub async fn query_order_by_id(
        &self,
        symbol: &str,
        order_id: &str,
    ) -> Result<LinearOrder, BybitError> {
        expect_one(QueryOrder::new(symbol).with_order_id(order_id).execute(self).await?)
    }
}
