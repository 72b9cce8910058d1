//! USDT perpetual contracts (`/public/linear`, `/private/linear`).
//!
//! Endpoints the exchange serves identically for both perpetual lines
//! (symbols, order book, tickers, server time, announcements) go through
//! [`UsdtPerpetual::iperpetual`].

pub mod active_order;
pub mod market;
pub mod position;
pub mod types;

pub use active_order::{CancelAllOrders, CancelOrder, PlaceActiveOrder, QueryOrder};
pub use market::{GetLastFundingRate, PublicTradingRecords, QueryKline};
pub use position::MyPosition;
pub use types::*;

use crate::core::dispatch::{Dispatcher, ProductLine};
use crate::core::kernel::RestClient;
use crate::products::inverse_perpetual::InversePerpetual;
use std::sync::Arc;

pub struct UsdtPerpetual<R> {
    dispatcher: Dispatcher<R>,
}

impl<R> Clone for UsdtPerpetual<R> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<R> std::fmt::Debug for UsdtPerpetual<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsdtPerpetual")
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

impl<R: RestClient> UsdtPerpetual<R> {
    pub fn new(rest: Arc<R>) -> Self {
        Self {
            dispatcher: Dispatcher::new(rest, ProductLine::UsdtPerpetual),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<R> {
        &self.dispatcher
    }

    /// Inverse perpetual client over the same transport, for the shared endpoints
    pub fn iperpetual(&self) -> InversePerpetual<R> {
        InversePerpetual::from_dispatcher(self.dispatcher.with_line(ProductLine::InversePerpetual))
    }
}
