//! Inverse perpetual contracts (`/v2/public`, `/v2/private`).
//!
//! The inverse futures line reuses everything here through
//! [`InverseFutures::iperpetual`](crate::products::InverseFutures::iperpetual).

pub mod active_order;
pub mod market;
pub mod position;
pub mod types;
pub mod wallet;

pub use active_order::{
    CancelAllOrders, CancelOrder, OrderList, PlaceActiveOrder, QueryOrder, ReplaceOrder,
};
pub use market::{
    Announcements, LatestInformation, OrderBook, PublicTradingRecords, QueryKline, QuerySymbol,
    ServerTime,
};
pub use position::{
    ChangeMargin, ClosedProfitLoss, GetPosition, GetTradeRecords, MarginSwitch, SetLeverage,
    SetTradingStop, TpSlModeSwitch,
};
pub use types::*;
pub use wallet::WalletBalance;

use crate::core::dispatch::{Dispatcher, ProductLine};
use crate::core::kernel::RestClient;
use std::sync::Arc;

/// Inverse perpetual client
pub struct InversePerpetual<R> {
    dispatcher: Dispatcher<R>,
}

impl<R> Clone for InversePerpetual<R> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<R> std::fmt::Debug for InversePerpetual<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InversePerpetual")
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

impl<R: RestClient> InversePerpetual<R> {
    pub fn new(rest: Arc<R>) -> Self {
        Self::from_dispatcher(Dispatcher::new(rest, ProductLine::InversePerpetual))
    }

    /// Run the inverse perpetual operations over another line's path prefixes
    pub fn from_dispatcher(dispatcher: Dispatcher<R>) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher<R> {
        &self.dispatcher
    }
}
