//! Recording transport for unit tests.

use crate::core::errors::BybitError;
use crate::core::kernel::envelope::Envelope;
use crate::core::kernel::rest::RestClient;
use crate::core::params::Params;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub endpoint: String,
    pub params: Params,
    pub authenticated: bool,
}

/// Answers each call with the next queued envelope and records what was asked.
/// Clones share the same queue and log.
#[derive(Debug, Clone, Default)]
pub struct MockRest {
    responses: Arc<Mutex<VecDeque<Value>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockRest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful envelope around `result`
    pub fn respond(&self, result: Value) -> &Self {
        self.respond_envelope(json!({
            "ret_code": 0,
            "ret_msg": "OK",
            "ext_code": "",
            "ext_info": "",
            "result": result,
            "time_now": "1577444332.192859",
        }))
    }

    /// Queue a raw envelope
    pub fn respond_envelope(&self, envelope: Value) -> &Self {
        self.responses.lock().unwrap().push_back(envelope);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no call recorded")
    }

    fn answer<T: DeserializeOwned>(
        &self,
        method: &'static str,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            endpoint: endpoint.to_string(),
            params: params.clone(),
            authenticated,
        });

        let envelope = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no response queued for {} {}", method, endpoint));

        Envelope::parse(&envelope.to_string())?.into_typed()
    }
}

#[async_trait]
impl RestClient for MockRest {
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        self.answer("GET", endpoint, params, authenticated)
    }

    async fn post_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        self.answer("POST", endpoint, params, authenticated)
    }

    async fn post_form<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        self.answer("POST_FORM", endpoint, params, authenticated)
    }

    async fn delete_json<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        params: &Params,
        authenticated: bool,
    ) -> Result<Envelope<T>, BybitError> {
        self.answer("DELETE", endpoint, params, authenticated)
    }
}
