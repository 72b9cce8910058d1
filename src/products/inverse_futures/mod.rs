//! Inverse futures contracts.
//!
//! Same endpoints, descriptors and records as inverse perpetual; only the
//! private prefix differs (`/futures/private`). Everything runs through
//! [`InverseFutures::iperpetual`].

use crate::core::dispatch::{Dispatcher, ProductLine};
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use crate::products::inverse_perpetual::{Announcement, InversePerpetual};
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct InverseFutures<R> {
    dispatcher: Dispatcher<R>,
}

impl<R> Clone for InverseFutures<R> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<R> std::fmt::Debug for InverseFutures<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InverseFutures")
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

impl<R: RestClient> InverseFutures<R> {
    pub fn new(rest: Arc<R>) -> Self {
        Self {
            dispatcher: Dispatcher::new(rest, ProductLine::InverseFutures),
        }
    }

    /// Inverse perpetual operations routed to the futures paths
    pub fn iperpetual(&self) -> InversePerpetual<R> {
        InversePerpetual::from_dispatcher(self.dispatcher.clone())
    }

    pub async fn server_time(&self) -> Result<DateTime<Utc>, BybitError> {
        self.iperpetual().server_time().await
    }

    pub async fn announcement(&self) -> Result<Vec<Announcement>, BybitError> {
        self.iperpetual().announcement().await
    }
}
