//! Product-line clients.
//!
//! Each line is a cheap handle over the shared transport. Operations are
//! request descriptors with an `execute` method; the client methods are thin
//! delegations to them.

pub mod account;
pub mod inverse_futures;
pub mod inverse_perpetual;
pub mod spot;
pub mod usdt_perpetual;

pub use account::Account;
pub use inverse_futures::InverseFutures;
pub use inverse_perpetual::InversePerpetual;
pub use spot::Spot;
pub use usdt_perpetual::UsdtPerpetual;
