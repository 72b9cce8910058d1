use crate::core::types::{
    CancelType, CreateType, ExecType, KlineInterval, OrderStatus, OrderType, PositionIdx, Side,
    TickDirection, TimeInForce, TpSlMode, TriggerPrice,
};
use crate::core::wire::{null_default, opt_decimal, Validated};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Market data

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub link: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

/// One level of the L2 book
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OrderBookEntry {
    pub symbol: String,
    pub price: Decimal,
    pub size: Decimal,
    pub side: Side,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct KlineItem {
    pub symbol: String,
    pub interval: KlineInterval,
    pub open_time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    pub turnover: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ticker {
    pub symbol: String,
    pub bid_price: Decimal,
    pub ask_price: Decimal,
    pub last_price: Decimal,
    pub last_tick_direction: TickDirection,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub prev_price_24h: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub price_24h_pcnt: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub high_price_24h: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub low_price_24h: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub prev_price_1h: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub price_1h_pcnt: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub mark_price: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub index_price: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub open_interest: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub open_value: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub total_turnover: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub turnover_24h: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub total_volume: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub volume_24h: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub funding_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub predicted_funding_rate: Option<Decimal>,
    #[serde(default)]
    pub next_funding_time: String,
    #[serde(default)]
    pub countdown_hour: i64,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub delivery_fee_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub predicted_delivery_price: Option<Decimal>,
    #[serde(default)]
    pub delivery_time: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PublicTrade {
    pub id: i64,
    pub symbol: String,
    pub price: Decimal,
    pub qty: Decimal,
    pub side: Side,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LeverageFilter {
    pub min_leverage: Decimal,
    pub max_leverage: Decimal,
    pub leverage_step: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PriceFilter {
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub tick_size: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LotSizeFilter {
    pub max_trading_qty: Decimal,
    pub min_trading_qty: Decimal,
    pub qty_step: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SymbolInfo {
    pub name: String,
    #[serde(default)]
    pub alias: String,
    pub status: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub price_scale: u32,
    pub taker_fee: Decimal,
    pub maker_fee: Decimal,
    pub leverage_filter: LeverageFilter,
    pub price_filter: PriceFilter,
    pub lot_size_filter: LotSizeFilter,
}

// Active orders

/// Order as returned by create and cancel
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActiveOrder {
    pub user_id: i64,
    pub order_id: String,
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Decimal,
    pub qty: Decimal,
    pub time_in_force: TimeInForce,
    pub order_status: OrderStatus,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub last_exec_time: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub last_exec_price: Option<Decimal>,
    pub leaves_qty: Decimal,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub cum_exec_qty: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub cum_exec_value: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub cum_exec_fee: Option<Decimal>,
    #[serde(default)]
    pub reject_reason: String,
    #[serde(default)]
    pub order_link_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub take_profit: Option<Decimal>,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub stop_loss: Option<Decimal>,
    #[serde(default)]
    pub tp_trigger_by: Option<TriggerPrice>,
    #[serde(default)]
    pub sl_trigger_by: Option<TriggerPrice>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OrderExtFields {
    #[serde(default)]
    pub o_req_num: i64,
    #[serde(default)]
    pub xreq_type: String,
}

/// Order as returned by the list and real-time queries
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Order {
    #[serde(flatten)]
    pub order: ActiveOrder,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub leaves_value: Option<Decimal>,
    #[serde(default)]
    pub position_idx: PositionIdx,
    #[serde(default)]
    pub cancel_type: Option<CancelType>,
    #[serde(default)]
    pub ext_fields: Option<OrderExtFields>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OrderListResult {
    #[serde(default, deserialize_with = "null_default")]
    pub data: Vec<Order>,
    #[serde(default)]
    pub cursor: String,
}

/// Entry of the cancel-all answer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CancelledOrder {
    #[serde(rename = "clOrdID")]
    pub order_id: String,
    pub user_id: i64,
    pub symbol: String,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Decimal,
    pub qty: Decimal,
    pub time_in_force: TimeInForce,
    pub create_type: CreateType,
    pub cancel_type: CancelType,
    pub order_status: OrderStatus,
    pub leaves_qty: Decimal,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub leaves_value: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub cross_status: OrderStatus,
    pub cross_seq: i64,
    #[serde(default)]
    pub order_link_id: Option<String>,
}

// Positions

/// Fields shared by every position payload
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PositionBase {
    pub id: i64,
    pub user_id: i64,
    pub risk_id: i64,
    pub symbol: String,
    pub side: Side,
    pub size: Decimal,
    pub position_value: Decimal,
    pub entry_price: Decimal,
    pub is_isolated: bool,
    pub auto_add_margin: i64,
    pub leverage: Decimal,
    #[serde(default)]
    pub effective_leverage: Decimal,
    pub position_margin: Decimal,
    pub liq_price: Decimal,
    pub bust_price: Decimal,
    pub occ_closing_fee: Decimal,
    pub occ_funding_fee: Decimal,
    pub take_profit: Decimal,
    pub stop_loss: Decimal,
    pub trailing_stop: Decimal,
    pub position_status: String,
    pub deleverage_indicator: i64,
    #[serde(default)]
    pub oc_calc_data: String,
    pub order_margin: Decimal,
    pub wallet_balance: Decimal,
    pub realised_pnl: Decimal,
    pub cum_realised_pnl: Decimal,
    pub cross_seq: i64,
    pub position_seq: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PositionData {
    #[serde(flatten)]
    pub base: PositionBase,
    #[serde(default)]
    pub position_idx: PositionIdx,
    #[serde(default)]
    pub mode: i64,
    #[serde(default)]
    pub unrealised_pnl: Decimal,
    #[serde(default)]
    pub tp_sl_mode: Option<TpSlMode>,
}

/// Position plus its validity flag. Bare payloads count as valid.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "Validated<PositionData>")]
pub struct PositionItem {
    pub data: PositionData,
    pub is_valid: bool,
}

impl From<Validated<PositionData>> for PositionItem {
    fn from(payload: Validated<PositionData>) -> Self {
        let (data, is_valid) = payload.into_parts();
        Self { data, is_valid }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TradingStopExt {
    #[serde(default)]
    pub trailing_active: String,
    #[serde(default)]
    pub sl_trigger_by: String,
    #[serde(default)]
    pub tp_trigger_by: String,
    #[serde(default)]
    pub v: i64,
    #[serde(default)]
    pub mm: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradingStop {
    #[serde(flatten)]
    pub base: PositionBase,
    #[serde(default)]
    pub cum_commission: Decimal,
    #[serde(default)]
    pub ext_fields: TradingStopExt,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeRecord {
    pub closed_size: Decimal,
    pub cross_seq: i64,
    pub exec_fee: Decimal,
    pub exec_id: String,
    pub exec_price: Decimal,
    pub exec_qty: Decimal,
    pub exec_time: Decimal,
    pub exec_type: ExecType,
    pub exec_value: Decimal,
    pub fee_rate: Decimal,
    #[serde(rename = "last_liquidity_ind")]
    pub last_liquidity: String,
    pub leaves_qty: Decimal,
    pub nth_fill: i64,
    pub order_id: String,
    #[serde(default)]
    pub order_link_id: String,
    pub order_price: Decimal,
    pub order_qty: Decimal,
    pub order_type: OrderType,
    pub side: Side,
    pub symbol: String,
    pub user_id: i64,
    #[serde(rename = "trade_time_ms")]
    pub trade_time: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TradeRecords {
    #[serde(default)]
    pub order_id: String,
    #[serde(rename = "trade_list", default, deserialize_with = "null_default")]
    pub trades: Vec<TradeRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClosedPnl {
    pub id: i64,
    pub user_id: i64,
    pub symbol: String,
    pub order_id: String,
    pub side: Side,
    pub qty: Decimal,
    pub order_price: Decimal,
    pub order_type: OrderType,
    pub exec_type: ExecType,
    pub closed_size: Decimal,
    pub cum_entry_value: Decimal,
    pub avg_entry_price: Decimal,
    pub cum_exit_value: Decimal,
    pub avg_exit_price: Decimal,
    pub closed_pnl: Decimal,
    pub fill_count: i64,
    pub leverage: Decimal,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClosedPnlPage {
    pub current_page: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub data: Vec<ClosedPnl>,
}

// Wallet

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Balance {
    pub equity: Decimal,
    pub available_balance: Decimal,
    pub used_margin: Decimal,
    pub order_margin: Decimal,
    pub position_margin: Decimal,
    pub occ_closing_fee: Decimal,
    pub occ_funding_fee: Decimal,
    pub wallet_balance: Decimal,
    pub realised_pnl: Decimal,
    pub unrealised_pnl: Decimal,
    pub cum_realised_pnl: Decimal,
    pub given_cash: Decimal,
    pub service_cash: Decimal,
}
