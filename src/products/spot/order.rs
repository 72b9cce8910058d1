//! Spot orders (`v1/order`, `v1/open-orders`). All signed.

use super::types::{SpotOrder, SpotOrderAck, SpotOrderType, SpotSide, SpotTimeInForce};
use super::Spot;
use crate::core::dispatch::Access;
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    pub symbol: String,
    /// Base quantity; quote amount for market buys
    pub qty: Decimal,
    pub side: SpotSide,
    #[serde(rename = "type")]
    pub order_type: SpotOrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<SpotTimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
}

impl PlaceOrder {
    pub fn new(
        symbol: impl Into<String>,
        side: SpotSide,
        order_type: SpotOrderType,
        qty: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            qty,
            side,
            order_type,
            time_in_force: None,
            price: None,
            order_link_id: None,
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_time_in_force(mut self, time_in_force: SpotTimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    pub fn with_order_link_id(mut self, order_link_id: impl Into<String>) -> Self {
        self.order_link_id = Some(order_link_id.into());
        self
    }

    pub async fn execute<R: RestClient>(&self, client: &Spot<R>) -> Result<SpotOrderAck, BybitError> {
        client
            .dispatcher()
            .post_form(Access::Private, "v1/order", self)
            .await
    }
}

/// Order lookup by `orderId` or `orderLinkId`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
}

impl QueryOrder {
    pub fn by_id(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            order_link_id: None,
        }
    }

    pub fn by_link_id(order_link_id: impl Into<String>) -> Self {
        Self {
            order_id: None,
            order_link_id: Some(order_link_id.into()),
        }
    }

    pub async fn execute<R: RestClient>(&self, client: &Spot<R>) -> Result<SpotOrder, BybitError> {
        client
            .dispatcher()
            .get(Access::Private, "v1/order", self)
            .await
    }
}

/// Cancel by `orderId` or `orderLinkId`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
}

impl CancelOrder {
    pub async fn execute<R: RestClient>(&self, client: &Spot<R>) -> Result<SpotOrderAck, BybitError> {
        client
            .dispatcher()
            .delete(Access::Private, "v1/order", self)
            .await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrders {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Only orders with a smaller id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// At most 500
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl OpenOrders {
    pub async fn execute<R: RestClient>(&self, client: &Spot<R>) -> Result<Vec<SpotOrder>, BybitError> {
        client
            .dispatcher()
            .get::<_, Option<Vec<SpotOrder>>>(Access::Private, "v1/open-orders", self)
            .await
            .map(Option::unwrap_or_default)
    }
}

impl<R: RestClient> Spot<R> {
    pub async fn place_order(&self, v: PlaceOrder) -> Result<SpotOrderAck, BybitError> {
        v.execute(self).await
    }

    pub async fn query_order(&self, v: QueryOrder) -> Result<SpotOrder, BybitError> {
        v.execute(self).await
    }

    pub async fn cancel_order(&self, v: CancelOrder) -> Result<SpotOrderAck, BybitError> {
        v.execute(self).await
    }

    pub async fn open_orders(&self, v: OpenOrders) -> Result<Vec<SpotOrder>, BybitError> {
        v.execute(self).await
    }
}
