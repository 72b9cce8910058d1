//! Market data endpoints. None of them are signed.

use super::types::{Announcement, KlineItem, OrderBookEntry, PublicTrade, SymbolInfo, Ticker};
use super::InversePerpetual;
use crate::core::dispatch::Access;
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use crate::core::types::KlineInterval;
use crate::core::wire::epoch_seconds;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Server clock, read from the envelope's `time_now`
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ServerTime;

impl ServerTime {
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<DateTime<Utc>, BybitError> {
        let envelope = client
            .dispatcher()
            .get_envelope::<_, serde::de::IgnoredAny>(Access::Public, "time", self)
            .await?;

        let time_now = envelope.time_now.ok_or_else(|| {
            BybitError::DeserializationError("Response carries no time_now".to_string())
        })?;
        epoch_seconds::deserialize(Value::String(time_now))
            .map_err(|e| BybitError::DeserializationError(format!("Invalid time_now: {}", e)))
    }
}

/// Announcements of the last 30 days, newest first
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Announcements;

impl Announcements {
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<Vec<Announcement>, BybitError> {
        client
            .dispatcher()
            .get(Access::Public, "announcement", self)
            .await
    }
}

/// L2 order book, 25 levels per side
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderBook {
    pub symbol: String,
}

impl OrderBook {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<Vec<OrderBookEntry>, BybitError> {
        client
            .dispatcher()
            .get(Access::Public, "orderBook/L2", self)
            .await
    }
}

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
        client: &InversePerpetual<R>,
    ) -> Result<Vec<KlineItem>, BybitError> {
        client
            .dispatcher()
            .get(Access::Public, "kline/list", self)
            .await
    }
}

/// 24h ticker; every symbol when `symbol` is absent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatestInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl LatestInformation {
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<Vec<Ticker>, BybitError> {
        client.dispatcher().get(Access::Public, "tickers", self).await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PublicTradingRecords {
    pub symbol: String,
    /// Fetch from this trade id onwards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    /// At most 1000
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PublicTradingRecords {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<Vec<PublicTrade>, BybitError> {
        client
            .dispatcher()
            .get(Access::Public, "trading-records", self)
            .await
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct QuerySymbol;

impl QuerySymbol {
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<Vec<SymbolInfo>, BybitError> {
        client.dispatcher().get(Access::Public, "symbols", self).await
    }
}

impl<R: RestClient> InversePerpetual<R> {
    pub async fn server_time(&self) -> Result<DateTime<Utc>, BybitError> {
        ServerTime.execute(self).await
    }

    pub async fn announcement(&self) -> Result<Vec<Announcement>, BybitError> {
        Announcements.execute(self).await
    }

    pub async fn order_book(&self, symbol: &str) -> Result<Vec<OrderBookEntry>, BybitError> {
        OrderBook::new(symbol).execute(self).await
    }

    pub async fn query_kline(&self, v: QueryKline) -> Result<Vec<KlineItem>, BybitError> {
        v.execute(self).await
    }

    pub async fn latest_information(
        &self,
        symbol: Option<&str>,
    ) -> Result<Vec<Ticker>, BybitError> {
        LatestInformation {
            symbol: symbol.map(str::to_string),
        }
        .execute(self)
        .await
    }

    pub async fn public_trading_records(
        &self,
        v: PublicTradingRecords,
    ) -> Result<Vec<PublicTrade>, BybitError> {
        v.execute(self).await
    }

    pub async fn query_symbol(&self) -> Result<Vec<SymbolInfo>, BybitError> {
        QuerySymbol.execute(self).await
    }
}
