//! Positions, leverage, trade history and closed PnL.

use super::types::{ClosedPnlPage, PositionItem, TradeRecords, TradingStop};
use super::InversePerpetual;
use crate::core::dispatch::{expect_one, Access, ResponseShape};
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use crate::core::types::{ExecType, SortOrder, TpSlMode, TriggerPrice};
use crate::core::wire::decimal_str;
use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Position query; one symbol when `symbol` is set, every position otherwise
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetPosition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl GetPosition {
    pub fn is_bare(&self) -> bool {
        self.symbol.is_none()
    }

    pub fn shape(&self) -> ResponseShape {
        ResponseShape::for_narrowed(!self.is_bare())
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<Vec<PositionItem>, BybitError> {
        client
            .dispatcher()
            .get_shaped(Access::Private, "position/list", self, self.shape())
            .await
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeMargin {
    pub symbol: String,
    /// Positive to add margin, negative to remove it
    pub margin: Decimal,
}

impl ChangeMargin {
    /// Returns the new position margin
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<Decimal, BybitError> {
        client
            .dispatcher()
            .post(Access::Private, "position/change-position-margin", self)
            .await
    }
}

/// Take-profit, stop-loss and trailing stop on an open position.
/// A value of zero cancels the corresponding stop.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SetTradingStop {
    pub symbol: String,
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
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "decimal_str::option::serialize"
    )]
    pub trailing_stop: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_trigger_by: Option<TriggerPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_trigger_by: Option<TriggerPrice>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "decimal_str::option::serialize"
    )]
    pub new_trailing_active: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "decimal_str::option::serialize"
    )]
    pub sl_size: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "decimal_str::option::serialize"
    )]
    pub tp_size: Option<Decimal>,
}

impl SetTradingStop {
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<TradingStop, BybitError> {
        client
            .dispatcher()
            .post(Access::Private, "position/trading-stop", self)
            .await
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetLeverage {
    pub symbol: String,
    #[serde(serialize_with = "decimal_str::serialize")]
    pub leverage: Decimal,
    /// Only change leverage, keep cross/isolated as is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leverage_only: Option<bool>,
}

impl SetLeverage {
    /// Returns the leverage now in effect
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<Decimal, BybitError> {
        client
            .dispatcher()
            .post(Access::Private, "position/leverage/save", self)
            .await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TpSlModeSwitch {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_sl_mode: Option<TpSlMode>,
}

#[derive(Debug, Deserialize)]
struct TpSlModeSwitched {
    tp_sl_mode: TpSlMode,
}

impl TpSlModeSwitch {
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<TpSlMode, BybitError> {
        client
            .dispatcher()
            .post::<_, TpSlModeSwitched>(Access::Private, "tpsl/switch-mode", self)
            .await
            .map(|r| r.tp_sl_mode)
    }
}

/// Cross/isolated switch. Leverage must be given when going isolated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginSwitch {
    pub symbol: String,
    pub is_isolated: bool,
    #[serde(serialize_with = "decimal_str::serialize")]
    pub buy_leverage: Decimal,
    #[serde(serialize_with = "decimal_str::serialize")]
    pub sell_leverage: Decimal,
}

impl MarginSwitch {
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<(), BybitError> {
        client
            .dispatcher()
            .post::<_, IgnoredAny>(Access::Private, "position/switch-isolated", self)
            .await
            .map(|_| ())
    }
}

/// User trade history, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetTradeRecords {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl GetTradeRecords {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<TradeRecords, BybitError> {
        client
            .dispatcher()
            .get(Access::Private, "execution/list", self)
            .await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClosedProfitLoss {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec_type: Option<ExecType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ClosedProfitLoss {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<ClosedPnlPage, BybitError> {
        client
            .dispatcher()
            .get(Access::Private, "trade/closed-pnl/list", self)
            .await
    }
}

impl<R: RestClient> InversePerpetual<R> {
    pub async fn get_position(&self, symbol: Option<&str>) -> Result<Vec<PositionItem>, BybitError> {
        GetPosition {
            symbol: symbol.map(str::to_string),
        }
        .execute(self)
        .await
    }

    pub async fn get_one_position(&self, symbol: &str) -> Result<PositionItem, BybitError> {
        expect_one(self.get_position(Some(symbol)).await?)
    }

    pub async fn get_all_positions(&self) -> Result<Vec<PositionItem>, BybitError> {
        GetPosition::default().execute(self).await
    }

    pub async fn change_margin(&self, v: ChangeMargin) -> Result<Decimal, BybitError> {
        v.execute(self).await
    }

    pub async fn set_trading_stop(&self, v: SetTradingStop) -> Result<TradingStop, BybitError> {
        v.execute(self).await
    }

    pub async fn set_leverage(&self, v: SetLeverage) -> Result<Decimal, BybitError> {
        v.execute(self).await
    }

    pub async fn tp_sl_mode_switch(&self, v: TpSlModeSwitch) -> Result<TpSlMode, BybitError> {
        v.execute(self).await
    }

    pub async fn margin_switch(&self, v: MarginSwitch) -> Result<(), BybitError> {
        v.execute(self).await
    }

    pub async fn get_trade_records(&self, v: GetTradeRecords) -> Result<TradeRecords, BybitError> {
        v.execute(self).await
    }

    pub async fn closed_profit_loss(&self, v: ClosedProfitLoss) -> Result<ClosedPnlPage, BybitError> {
        v.execute(self).await
    }
}
