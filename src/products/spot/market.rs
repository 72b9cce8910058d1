use super::types::{SpotOrderBook, SpotServerTime, SpotSymbol, SpotTrade};
use super::Spot;
use crate::core::dispatch::Access;
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ServerTime;

impl ServerTime {
    pub async fn execute<R: RestClient>(
        &self,
        client: &Spot<R>,
    ) -> Result<DateTime<Utc>, BybitError> {
        client
            .dispatcher()
            .get::<_, SpotServerTime>(Access::Public, "v1/time", self)
            .await
            .map(|t| t.server_time)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct QuerySymbol;

impl QuerySymbol {
    pub async fn execute<R: RestClient>(
        &self,
        client: &Spot<R>,
    ) -> Result<Vec<SpotSymbol>, BybitError> {
        client
            .dispatcher()
            .get(Access::Public, "v1/symbols", self)
            .await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderBook {
    pub symbol: String,
    /// Levels per side, 100 by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl OrderBook {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
        }
    }

    pub async fn execute<R: RestClient>(&self, client: &Spot<R>) -> Result<SpotOrderBook, BybitError> {
        client
            .dispatcher()
            .get(Access::Public, "quote/v1/depth", self)
            .await
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PublicTrades {
    pub symbol: String,
    /// At most 60
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PublicTrades {
    pub async fn execute<R: RestClient>(&self, client: &Spot<R>) -> Result<Vec<SpotTrade>, BybitError> {
        client
            .dispatcher()
            .get::<_, Option<Vec<SpotTrade>>>(Access::Public, "quote/v1/trades", self)
            .await
            .map(Option::unwrap_or_default)
    }
}

impl<R: RestClient> Spot<R> {
    pub async fn server_time(&self) -> Result<DateTime<Utc>, BybitError> {
        ServerTime.execute(self).await
    }

    pub async fn query_symbol(&self) -> Result<Vec<SpotSymbol>, BybitError> {
        QuerySymbol.execute(self).await
    }

    pub async fn order_book(&self, v: OrderBook) -> Result<SpotOrderBook, BybitError> {
        v.execute(self).await
    }

    pub async fn public_trades(&self, v: PublicTrades) -> Result<Vec<SpotTrade>, BybitError> {
        v.execute(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::mock::MockRest;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_server_time_in_millis() {
        let mock = MockRest::new();
        mock.respond(json!({"serverTime": 1625799317787_i64}));

        let time = Spot::new(Arc::new(mock.clone())).server_time().await.unwrap();
        assert_eq!(time.timestamp_millis(), 1_625_799_317_787);
        assert_eq!(mock.last_call().endpoint, "/spot/v1/time");
        assert!(!mock.last_call().authenticated);
    }

    #[tokio::test]
    async fn test_symbols_are_camel_case() {
        let mock = MockRest::new();
        mock.respond(json!([{
            "name": "BTCUSDT",
            "alias": "BTCUSDT",
            "baseCurrency": "BTC",
            "quoteCurrency": "USDT",
            "basePrecision": "0.000001",
            "quotePrecision": "0.01",
            "minTradeQuantity": "0.0001",
            "minTradeAmount": "10",
            "minPricePrecision": "0.01",
            "maxTradeQuantity": "2",
            "maxTradeAmount": "200",
            "category": 1
        }]));

        let symbols = Spot::new(Arc::new(mock.clone())).query_symbol().await.unwrap();
        assert_eq!(symbols[0].base_currency, "BTC");
        assert_eq!(symbols[0].min_trade_quantity, dec!(0.0001));
        assert_eq!(symbols[0].category, 1);
        assert_eq!(mock.last_call().endpoint, "/spot/v1/symbols");
    }

    #[tokio::test]
    async fn test_depth_levels_are_pairs() {
        let mock = MockRest::new();
        mock.respond(json!({
            "time": 1620886105740_i64,
            "bids": [["50005.12", "403.0416"]],
            "asks": [["50006.34", "0.2297"], ["50006.35", "1"]]
        }))
        .respond(json!([{
            "price": "50005.12",
            "time": 1620822657672_i64,
            "qty": "0.0001",
            "isBuyerMaker": true
        }]));

        let spot = Spot::new(Arc::new(mock.clone()));
        let book = spot
            .order_book(OrderBook {
                limit: Some(2),
                ..OrderBook::new("BTCUSDT")
            })
            .await
            .unwrap();
        assert_eq!(book.bids[0].price(), dec!(50005.12));
        assert_eq!(book.asks[1].qty(), dec!(1));
        assert_eq!(mock.last_call().endpoint, "/spot/quote/v1/depth");
        assert_eq!(mock.last_call().params.to_sign_payload(), "limit=2&symbol=BTCUSDT");

        let trades = spot
            .public_trades(PublicTrades {
                symbol: "BTCUSDT".to_string(),
                limit: None,
            })
            .await
            .unwrap();
        assert!(trades[0].is_buyer_maker);
        assert_eq!(trades[0].qty, dec!(0.0001));
        assert_eq!(mock.last_call().endpoint, "/spot/quote/v1/trades");
    }
}
