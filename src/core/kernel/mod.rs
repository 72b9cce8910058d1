/// Transport kernel
///
/// Everything needed to put a signed request on the wire and get a decoded
/// envelope back. Knows nothing about product lines or endpoints.
///
/// - `RestClient`: the transport seam; `ReqwestRest` is the HTTP implementation
/// - `Signer` / `HmacSigner`: parameter signing
/// - `Envelope`: the `{ret_code, ret_msg, result, ...}` wrapper every response uses
///
/// ```rust,no_run
/// use bybit_connector::core::kernel::*;
/// use bybit_connector::core::params::Params;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let rest_config = RestClientConfig::new("https://api.bybit.com".to_string(), "bybit".to_string());
/// let signer = Arc::new(HmacSigner::new("api_key".to_string(), "secret_key".to_string()));
/// let rest = RestClientBuilder::new(rest_config)
///     .with_signer(signer)
///     .build()?;
///
/// let time: Envelope<serde_json::Value> = rest.get_json("/v2/public/time", &Params::new(), false).await?;
/// println!("{:?}", time.time_now);
/// # Ok(())
/// # }
/// ```
pub mod envelope;
#[cfg(test)]
pub mod mock;
pub mod rest;
pub mod signer;

pub use envelope::Envelope;
pub use rest::{ReqwestRest, RestClient, RestClientBuilder, RestClientConfig};
pub use signer::{HmacSigner, SignatureResult, Signer};
