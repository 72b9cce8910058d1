use crate::core::errors::BybitError;
use crate::core::kernel::envelope::Envelope;
use crate::core::kernel::signer::Signer;
use crate::core::params::Params;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{instrument, trace};

/// REST client trait for making HTTP requests
///
/// Every method takes the endpoint path (leading slash included), the
/// request parameters and whether the request must be signed, and returns the
/// decoded response envelope. A non-zero `ret_code` is an error, never an
/// envelope.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// GET with parameters in the query string
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError>;

    /// POST with parameters in a JSON body
    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError>;

    /// POST with parameters in a `application/x-www-form-urlencoded` body
    async fn post_form<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError>;

    /// DELETE with parameters in the query string
    async fn delete_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError>;
}

#[async_trait]
impl<R: RestClient> RestClient for Arc<R> {
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        (**self).get_json(endpoint, params, authenticated).await
    }

    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        (**self).post_json(endpoint, params, authenticated).await
    }

    async fn post_form<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        (**self).post_form(endpoint, params, authenticated).await
    }

    async fn delete_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        (**self).delete_json(endpoint, params, authenticated).await
    }
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Exchange name for logging and tracing
    pub exchange_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
    /// HTTP(S) proxy every request goes through
    pub proxy: Option<String>,
    /// `recv_window` added to signed requests, in milliseconds
    pub recv_window: Option<u64>,
}

impl RestClientConfig {
    /// Create a new configuration
    ///
    /// # Arguments
    /// * `base_url` - Base URL for the API
    /// * `exchange_name` - Name of the exchange
    pub fn new(base_url: String, exchange_name: String) -> Self {
        Self {
            base_url,
            exchange_name,
            timeout_seconds: 30,
            user_agent: concat!("bybit-connector/", env!("CARGO_PKG_VERSION")).to_string(),
            proxy: None,
            recv_window: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_recv_window(mut self, recv_window: Option<u64>) -> Self {
        self.recv_window = recv_window;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl RestClientBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            signer: None,
        }
    }

    /// Set the signer for authenticated requests
    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, BybitError> {
        let mut builder = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent);

        if let Some(proxy) = &self.config.proxy {
            let proxy = reqwest::Proxy::all(proxy).map_err(|e| {
                BybitError::ConfigurationError(format!("Invalid proxy '{}': {}", proxy, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            BybitError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            signer: self.signer,
        })
    }
}

/// Where the parameters of a request travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Payload {
    Query,
    Json,
    Form,
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    /// Create a new `ReqwestRest` with default settings
    ///
    /// # Arguments
    /// * `base_url` - Base URL for the API
    /// * `exchange_name` - Name of the exchange for logging
    /// * `signer` - Optional signer for authenticated requests
    pub fn new(
        base_url: String,
        exchange_name: String,
        signer: Option<Arc<dyn Signer>>,
    ) -> Result<Self, BybitError> {
        let config = RestClientConfig::new(base_url, exchange_name);
        let mut builder = RestClientBuilder::new(config);
        if let Some(signer) = signer {
            builder = builder.with_signer(signer);
        }
        builder.build()
    }

    pub fn config(&self) -> &RestClientConfig {
        &self.config
    }

    /// Current time in milliseconds
    fn get_timestamp() -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
    }

    /// Build the full URL for an endpoint
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }

    /// Add credentials and signature when the request is authenticated
    fn prepare_params(&self, params: &Params, authenticated: bool) -> Result<Params, BybitError> {
        if !authenticated {
            return Ok(params.clone());
        }

        let signer = self.signer.as_ref().ok_or_else(|| {
            BybitError::AuthError("Authentication required but no signer provided".to_string())
        })?;

        let mut params = params.clone();
        if let Some(recv_window) = self.config.recv_window {
            params.insert("recv_window", recv_window);
        }
        signer.sign_request(&params, Self::get_timestamp())
    }

    /// Handle the response and decode the envelope
    #[instrument(skip(self, response), fields(exchange = %self.config.exchange_name, status = %response.status()))]
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<Envelope<T>, BybitError> {
        let status = response.status();
        let response_text = response.text().await?;

        trace!("Response body: {}", response_text);

        if !status.is_success() {
            return Err(BybitError::ApiError {
                code: i64::from(status.as_u16()),
                message: response_text,
            });
        }

        Envelope::parse(&response_text)?.into_typed()
    }

    /// Make a request with the given parameters
    #[instrument(skip(self, params), fields(exchange = %self.config.exchange_name, method = %method, endpoint = %endpoint, param_count = params.len()))]
    async fn make_request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: &Params,
        payload: Payload,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        let url = self.build_url(endpoint);
        let params = self.prepare_params(params, authenticated)?;

        let mut request = self.client.request(method, &url);
        request = match payload {
            Payload::Query if params.is_empty() => request,
            Payload::Query => request.query(&params.pairs()),
            Payload::Json => request.json(&params.as_json()),
            Payload::Form => request.form(&params.pairs()),
        };

        let response = request.send().await?;
        self.handle_response(response).await
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        self.make_request(Method::GET, endpoint, params, Payload::Query, authenticated)
            .await
    }

    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        self.make_request(Method::POST, endpoint, params, Payload::Json, authenticated)
            .await
    }

    async fn post_form<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        self.make_request(Method::POST, endpoint, params, Payload::Form, authenticated)
            .await
    }

    async fn delete_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        self.make_request(Method::DELETE, endpoint, params, Payload::Query, authenticated)
            .await
    }
}
