//! Market data. Endpoints shared with inverse perpetual are delegated.

use super::types::{IndexKlineItem, KlineItem, LastFundingRate, MarkKlineItem, PublicTrade};
use super::UsdtPerpetual;
use crate::core::dispatch::Access;
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use crate::core::types::KlineInterval;
use crate::products::inverse_perpetual::{Announcement, OrderBookEntry, SymbolInfo, Ticker};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kline query. The same descriptor drives the last, mark, index and premium
/// index price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryKline {
    pub symbol: String,
    pub interval: KlineInterval,
    /// Start, in seconds
    pub from: i64,
    /// At most 200
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl QueryKline {
    pub fn new(symbol: impl Into<String>, interval: KlineInterval, from: i64) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            from,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &UsdtPerpetual<R>,
    ) -> Result<Vec<KlineItem>, BybitError> {
        client.dispatcher().get(Access::Public, "kline", self).await
    }

    pub async fn execute_mark<R: RestClient>(
        &self,
        client: &UsdtPerpetual<R>,
    ) -> Result<Vec<MarkKlineItem>, BybitError> {
        client
            .dispatcher()
            .get(Access::Public, "mark-price-kline", self)
            .await
    }

    pub async fn execute_index<R: RestClient>(
        &self,
        client: &UsdtPerpetual<R>,
    ) -> Result<Vec<IndexKlineItem>, BybitError> {
        client
            .dispatcher()
            .get(Access::Public, "index-price-kline", self)
            .await
    }

    pub async fn execute_premium<R: RestClient>(
        &self,
        client: &UsdtPerpetual<R>,
    ) -> Result<Vec<IndexKlineItem>, BybitError> {
        client
            .dispatcher()
            .get(Access::Public, "premium-index-kline", self)
            .await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PublicTradingRecords {
    pub symbol: String,
    /// At most 1000, 500 by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PublicTradingRecords {
    pub async fn execute<R: RestClient>(
        &self,
        client: &UsdtPerpetual<R>,
    ) -> Result<Vec<PublicTrade>, BybitError> {
        client
            .dispatcher()
            .get(Access::Public, "recent-trading-records", self)
            .await
    }
}

/// Funding rate of the last 8-hour settlement
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetLastFundingRate {
    pub symbol: String,
}

impl GetLastFundingRate {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &UsdtPerpetual<R>,
    ) -> Result<LastFundingRate, BybitError> {
        client
            .dispatcher()
            .get(Access::Public, "funding/prev-funding-rate", self)
            .await
    }
}

impl<R: RestClient> UsdtPerpetual<R> {
    pub async fn server_time(&self) -> Result<DateTime<Utc>, BybitError> {
        self.iperpetual().server_time().await
    }

    pub async fn announcement(&self) -> Result<Vec<Announcement>, BybitError> {
        self.iperpetual().announcement().await
    }

    pub async fn query_symbol(&self) -> Result<Vec<SymbolInfo>, BybitError> {
        self.iperpetual().query_symbol().await
    }

    pub async fn order_book(&self, symbol: &str) -> Result<Vec<OrderBookEntry>, BybitError> {
        self.iperpetual().order_book(symbol).await
    }

    pub async fn latest_information(
        &self,
        symbol: Option<&str>,
    ) -> Result<Vec<Ticker>, BybitError> {
        self.iperpetual().latest_information(symbol).await
    }

    pub async fn query_kline(&self, v: QueryKline) -> Result<Vec<KlineItem>, BybitError> {
        v.execute(self).await
    }

    pub async fn public_trading_records(
        &self,
        v: PublicTradingRecords,
    ) -> Result<Vec<PublicTrade>, BybitError> {
        v.execute(self).await
    }

    pub async fn get_last_funding_rate(&self, symbol: &str) -> Result<LastFundingRate, BybitError> {
        GetLastFundingRate::new(symbol).execute(self).await
    }

    pub async fn query_mark_kline(&self, v: QueryKline) -> Result<Vec<MarkKlineItem>, BybitError> {
        v.execute_mark(self).await
    }

    pub async fn query_index_kline(&self, v: QueryKline) -> Result<Vec<IndexKlineItem>, BybitError> {
        v.execute_index(self).await
    }

    pub async fn query_premium_kline(
        &self,
        v: QueryKline,
    ) -> Result<Vec<IndexKlineItem>, BybitError> {
        v.execute_premium(self).await
    }
}
