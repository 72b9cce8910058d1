//! Root client: one transport shared by every product line.

use crate::core::config::ExchangeConfig;
use crate::core::errors::BybitError;
use crate::core::kernel::{HmacSigner, ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
use crate::products::{Account, InverseFutures, InversePerpetual, Spot, UsdtPerpetual};
use std::sync::Arc;
use tracing::debug;

const EXCHANGE_NAME: &str = "bybit";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub struct Bybit<R> {
    rest: Arc<R>,
}

impl<R> Clone for Bybit<R> {
    fn clone(&self) -> Self {
        Self {
            rest: Arc::clone(&self.rest),
        }
    }
}

impl<R: std::fmt::Debug> std::fmt::Debug for Bybit<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bybit").field("rest", &self.rest).finish()
    }
}

impl Bybit<ReqwestRest> {
    /// HTTP client for `config`. Requests are signed only when credentials are set.
    pub fn new(config: &ExchangeConfig) -> Result<Self, BybitError> {
        let rest_config = RestClientConfig::new(config.resolved_base_url(), EXCHANGE_NAME.to_string())
            .with_timeout(DEFAULT_TIMEOUT_SECONDS)
            .with_proxy(config.proxy.clone())
            .with_recv_window(config.recv_window);

        let mut builder = RestClientBuilder::new(rest_config);
        if config.has_credentials() {
            builder = builder.with_signer(Arc::new(HmacSigner::new(
                config.api_key().to_string(),
                config.secret_key().to_string(),
            )));
        } else {
            debug!("no credentials configured, private endpoints will be rejected");
        }

        Ok(Self::with_rest(builder.build()?))
    }
}

impl<R: RestClient> Bybit<R> {
    /// Client over any transport
    pub fn with_rest(rest: R) -> Self {
        Self {
            rest: Arc::new(rest),
        }
    }

    pub fn rest(&self) -> &R {
        &self.rest
    }

    pub fn inverse_perpetual(&self) -> InversePerpetual<R> {
        InversePerpetual::new(Arc::clone(&self.rest))
    }

    pub fn inverse_futures(&self) -> InverseFutures<R> {
        InverseFutures::new(Arc::clone(&self.rest))
    }

    pub fn usdt_perpetual(&self) -> UsdtPerpetual<R> {
        UsdtPerpetual::new(Arc::clone(&self.rest))
    }

    pub fn spot(&self) -> Spot<R> {
        Spot::new(Arc::clone(&self.rest))
    }

    pub fn account(&self) -> Account<R> {
        Account::new(Arc::clone(&self.rest))
    }
}
