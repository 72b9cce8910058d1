pub mod client;
pub mod core;
pub mod products;

pub use client::Bybit;
pub use crate::core::{
    config::ExchangeConfig,
    dispatch::{Access, ProductLine, ResponseShape},
    errors::BybitError,
    kernel::{ReqwestRest, RestClient},
    types::*,
};
pub use products::{Account, InverseFutures, InversePerpetual, Spot, UsdtPerpetual};
