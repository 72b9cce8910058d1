//! Spot v1 (`/spot/v1`, `/spot/quote/v1`).
//!
//! Private calls are signed like the derivatives ones; orders go out as
//! form bodies.

pub mod market;
pub mod order;
pub mod types;

pub use market::{OrderBook, PublicTrades, QuerySymbol, ServerTime};
pub use order::{CancelOrder, OpenOrders, PlaceOrder, QueryOrder};
pub use types::*;

use crate::core::dispatch::{Dispatcher, ProductLine};
use crate::core::kernel::RestClient;
use std::sync::Arc;

pub struct Spot<R> {
    dispatcher: Dispatcher<R>,
}

impl<R> Clone for Spot<R> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<R> std::fmt::Debug for Spot<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spot")
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

impl<R: RestClient> Spot<R> {
    pub fn new(rest: Arc<R>) -> Self {
        Self {
            dispatcher: Dispatcher::new(rest, ProductLine::Spot),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<R> {
        &self.dispatcher
    }
}
