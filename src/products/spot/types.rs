//! Spot v1 records. Field names are camelCase on the wire.

use crate::core::wire::{epoch_millis, int_or_str, wire_enum};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum SpotSide {
        Buy => "BUY",
        Sell => "SELL",
    }
}

wire_enum! {
    pub enum SpotOrderType {
        Limit => "LIMIT",
        Market => "MARKET",
        LimitMaker => "LIMIT_MAKER",
    }
}

wire_enum! {
    pub enum SpotTimeInForce {
        GoodTillCancel => "GTC",
        FillOrKill => "FOK",
        ImmediateOrCancel => "IOC",
    }
}

wire_enum! {
    pub enum SpotOrderStatus {
        New => "NEW",
        PartiallyFilled => "PARTIALLY_FILLED",
        Filled => "FILLED",
        Canceled => "CANCELED",
        PendingCancel => "PENDING_CANCEL",
        PendingNew => "PENDING_NEW",
        Rejected => "REJECTED",
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpotServerTime {
    #[serde(rename = "serverTime", deserialize_with = "epoch_millis::deserialize")]
    pub server_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotSymbol {
    pub name: String,
    pub alias: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub base_precision: Decimal,
    pub quote_precision: Decimal,
    pub min_trade_quantity: Decimal,
    pub min_trade_amount: Decimal,
    pub max_trade_quantity: Decimal,
    pub max_trade_amount: Decimal,
    pub min_price_precision: Decimal,
    #[serde(default)]
    pub category: i64,
}

/// `[price, quantity]`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DepthLevel(pub Decimal, pub Decimal);

impl DepthLevel {
    pub fn price(&self) -> Decimal {
        self.0
    }

    pub fn qty(&self) -> Decimal {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpotOrderBook {
    #[serde(deserialize_with = "epoch_millis::deserialize")]
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub bids: Vec<DepthLevel>,
    #[serde(default)]
    pub asks: Vec<DepthLevel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotTrade {
    pub price: Decimal,
    #[serde(deserialize_with = "epoch_millis::deserialize")]
    pub time: DateTime<Utc>,
    pub qty: Decimal,
    pub is_buyer_maker: bool,
}

/// Acknowledgement of a placed or cancelled order
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotOrderAck {
    #[serde(deserialize_with = "int_or_str::deserialize")]
    pub account_id: i64,
    pub symbol: String,
    #[serde(default)]
    pub symbol_name: String,
    #[serde(default)]
    pub order_link_id: String,
    pub order_id: String,
    #[serde(deserialize_with = "epoch_millis::deserialize")]
    pub transact_time: DateTime<Utc>,
    pub price: Decimal,
    pub orig_qty: Decimal,
    pub executed_qty: Decimal,
    pub status: SpotOrderStatus,
    pub time_in_force: SpotTimeInForce,
    #[serde(rename = "type")]
    pub order_type: SpotOrderType,
    pub side: SpotSide,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotOrder {
    #[serde(deserialize_with = "int_or_str::deserialize")]
    pub account_id: i64,
    #[serde(default, deserialize_with = "int_or_str::deserialize")]
    pub exchange_id: i64,
    pub symbol: String,
    #[serde(default)]
    pub symbol_name: String,
    #[serde(default)]
    pub order_link_id: String,
    pub order_id: String,
    pub price: Decimal,
    pub orig_qty: Decimal,
    pub executed_qty: Decimal,
    /// Upstream spelling
    #[serde(rename = "cummulativeQuoteQty")]
    pub cumulative_quote_qty: Decimal,
    pub avg_price: Decimal,
    pub status: SpotOrderStatus,
    pub time_in_force: SpotTimeInForce,
    #[serde(rename = "type")]
    pub order_type: SpotOrderType,
    pub side: SpotSide,
    #[serde(default)]
    pub stop_price: Decimal,
    #[serde(default)]
    pub iceberg_qty: Decimal,
    #[serde(deserialize_with = "epoch_millis::deserialize")]
    pub time: DateTime<Utc>,
    #[serde(deserialize_with = "epoch_millis::deserialize")]
    pub update_time: DateTime<Utc>,
    pub is_working: bool,
    #[serde(default)]
    pub locked: Decimal,
}
