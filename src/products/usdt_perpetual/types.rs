use crate::core::types::{
    KlineInterval, OrderStatus, OrderType, PositionIdx, Side, TimeInForce, TpSlMode, TriggerPrice,
};
use crate::core::wire::{opt_decimal, Validated};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KlineItem {
    #[serde(default)]
    pub id: i64,
    pub symbol: String,
    pub period: KlineInterval,
    pub interval: KlineInterval,
    pub start_at: i64,
    pub open_time: i64,
    pub volume: Decimal,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub turnover: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MarkKlineItem {
    #[serde(default)]
    pub id: i64,
    pub symbol: String,
    #[serde(rename = "period")]
    pub interval: KlineInterval,
    #[serde(rename = "start_at")]
    pub open_time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

/// Index and premium index klines
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IndexKlineItem {
    pub symbol: String,
    #[serde(rename = "period")]
    pub interval: KlineInterval,
    pub open_time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PublicTrade {
    pub id: String,
    pub symbol: String,
    pub price: Decimal,
    pub qty: Decimal,
    pub side: Side,
    pub time: DateTime<Utc>,
    #[serde(rename = "trade_time_ms")]
    pub trade_time: i64,
    #[serde(default)]
    pub is_block_trade: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LastFundingRate {
    pub symbol: String,
    pub funding_rate: Decimal,
    #[serde(rename = "funding_rate_timestamp")]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinearOrder {
    pub order_id: String,
    pub user_id: i64,
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Decimal,
    pub qty: Decimal,
    pub time_in_force: TimeInForce,
    pub order_status: OrderStatus,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub last_exec_price: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub cum_exec_qty: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub cum_exec_value: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub cum_exec_fee: Option<Decimal>,
    #[serde(default)]
    pub reduce_only: bool,
    #[serde(default)]
    pub close_on_trigger: bool,
    #[serde(default)]
    pub order_link_id: String,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub take_profit: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub stop_loss: Option<Decimal>,
    #[serde(default)]
    pub tp_trigger_by: Option<TriggerPrice>,
    #[serde(default)]
    pub sl_trigger_by: Option<TriggerPrice>,
    #[serde(default)]
    pub position_idx: PositionIdx,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinearPosition {
    pub user_id: i64,
    pub symbol: String,
    pub side: Side,
    pub size: Decimal,
    pub position_value: Decimal,
    pub entry_price: Decimal,
    pub liq_price: Decimal,
    pub bust_price: Decimal,
    pub leverage: Decimal,
    #[serde(default)]
    pub auto_add_margin: i64,
    pub is_isolated: bool,
    pub position_margin: Decimal,
    #[serde(default)]
    pub occ_closing_fee: Decimal,
    #[serde(default)]
    pub realised_pnl: Decimal,
    #[serde(default)]
    pub cum_realised_pnl: Decimal,
    #[serde(default)]
    pub free_qty: Decimal,
    #[serde(default)]
    pub tp_sl_mode: Option<TpSlMode>,
    #[serde(default)]
    pub unrealised_pnl: Decimal,
    #[serde(default)]
    pub deleverage_indicator: i64,
    #[serde(default)]
    pub risk_id: i64,
    #[serde(default)]
    pub stop_loss: Decimal,
    #[serde(default)]
    pub take_profit: Decimal,
    #[serde(default)]
    pub trailing_stop: Decimal,
    #[serde(default)]
    pub position_idx: PositionIdx,
    #[serde(default)]
    pub mode: String,
}

/// Position plus its validity flag. Bare payloads count as valid.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "Validated<LinearPosition>")]
pub struct LinearPositionItem {
    pub data: LinearPosition,
    pub is_valid: bool,
}

impl From<Validated<LinearPosition>> for LinearPositionItem {
    fn from(payload: Validated<LinearPosition>) -> Self {
        let (data, is_valid) = payload.into_parts();
        Self { data, is_valid }
    }
}
