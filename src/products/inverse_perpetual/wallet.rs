use super::types::Balance;
use super::InversePerpetual;
use crate::core::dispatch::{Access, ProductLine};
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use serde::Serialize;
use std::collections::HashMap;

/// Wallet balances keyed by coin. Every coin when `coin` is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WalletBalance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
}

impl WalletBalance {
    pub async fn execute<R: RestClient>(
        &self,
        client: &InversePerpetual<R>,
    ) -> Result<HashMap<String, Balance>, BybitError> {
        // the wallet lives under /v2/private for inverse futures too
        client
            .dispatcher()
            .with_line(ProductLine::InversePerpetual)
            .get(Access::Private, "wallet/balance", self)
            .await
    }
}

impl<R: RestClient> InversePerpetual<R> {
    pub async fn wallet_balance(
        &self,
        coin: Option<&str>,
    ) -> Result<HashMap<String, Balance>, BybitError> {
        WalletBalance {
            coin: coin.map(str::to_string),
        }
        .execute(self)
        .await
    }
}
