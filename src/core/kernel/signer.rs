use crate::core::errors::BybitError;
use crate::core::params::Params;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Result type for signing operations: the parameter set to put on the wire
pub type SignatureResult = Result<Params, BybitError>;

/// Signer trait for request authentication
///
/// A signer receives the request parameters and returns the complete set to
/// send, credentials and signature included. Parameters are signed, not
/// headers, so the same output works for query strings, JSON bodies and forms.
pub trait Signer: Send + Sync {
    /// Sign a parameter set
    ///
    /// # Arguments
    /// * `params` - Request parameters, `recv_window` already applied
    /// * `timestamp` - Request timestamp in milliseconds
    fn sign_request(&self, params: &Params, timestamp: u64) -> SignatureResult;
}

/// HMAC-SHA256 signer for the key/secret scheme
///
/// Adds `api_key` and `timestamp`, then signs the key-sorted `k=v&k=v`
/// rendering of every parameter and appends it as `sign`.
pub struct HmacSigner {
    api_key: String,
    secret_key: String,
}

impl HmacSigner {
    /// Create a new HMAC signer
    ///
    /// # Arguments
    /// * `api_key` - API key from the exchange
    /// * `secret_key` - Secret key for signing
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key,
        }
    }

    fn sign_payload(&self, payload: &str) -> Result<String, BybitError> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| BybitError::AuthError(format!("Invalid secret key: {}", e)))?;

        mac.update(payload.as_bytes());
        let result = mac.finalize();

        Ok(hex::encode(result.into_bytes()))
    }
}

impl Signer for HmacSigner {
    fn sign_request(&self, params: &Params, timestamp: u64) -> SignatureResult {
        let mut signed = params.clone();
        signed.insert("api_key", self.api_key.clone());
        signed.insert("timestamp", timestamp);

        let signature = self.sign_payload(&signed.to_sign_payload())?;
        signed.insert("sign", signature);

        Ok(signed)
    }
}

impl std::fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSigner")
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_covers_sorted_params() {
        let signer = HmacSigner::new("key".to_string(), "secret".to_string());
        let mut params = Params::new();
        params.insert("symbol", "BTCUSD");
        params.insert("leverage", 5);

        let signed = signer.sign_request(&params, 1_542_434_791_000).unwrap();

        let mut mac = Hmac::<Sha256>::new_from_slice(b"secret").unwrap();
        mac.update(b"api_key=key&leverage=5&symbol=BTCUSD&timestamp=1542434791000");
        let expected = hex::encode(mac.finalize().into_bytes());

        assert_eq!(signed.get("sign").and_then(|v| v.as_str()), Some(expected.as_str()));
        assert_eq!(signed.get("api_key").and_then(|v| v.as_str()), Some("key"));
        assert_eq!(signed.len(), 5);
    }

    #[test]
    fn test_input_is_left_untouched() {
        let signer = HmacSigner::new("key".to_string(), "secret".to_string());
        let params = Params::new();
        let signed = signer.sign_request(&params, 1).unwrap();
        assert!(params.is_empty());
        assert!(signed.contains("sign"));
    }

    #[test]
    fn test_debug_hides_credentials() {
        let signer = HmacSigner::new("key".to_string(), "secret".to_string());
        let rendered = format!("{:?}", signer);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
