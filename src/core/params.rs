//! Request parameter encoding.
//!
//! A descriptor is serialized into a JSON object whose keys are the wire names
//! declared on its fields. Optional fields are `Option<T>` annotated with
//! `skip_serializing_if = "Option::is_none"`, so an absent option never reaches
//! the wire. Pairs come out sorted by key, which is also the order the
//! signature is computed over.

use crate::core::errors::BybitError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered parameter set for one request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Encode a descriptor. Unit-like descriptors (`()` or empty structs) give an empty set.
    pub fn from_request<P: Serialize + ?Sized>(request: &P) -> Result<Self, BybitError> {
        let value = serde_json::to_value(request).map_err(|e| {
            BybitError::SerializationError(format!("Failed to encode request: {}", e))
        })?;

        match value {
            Value::Object(map) => Ok(Self(
                map.into_iter().filter(|(_, v)| !v.is_null()).collect(),
            )),
            Value::Null => Ok(Self::new()),
            other => Err(BybitError::SerializationError(format!(
                "Request must encode to an object, got {}",
                other
            ))),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(wire name, value)` pairs in key order, values rendered as plain strings
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), render(v)))
            .collect();
        // serde_json may be built with `preserve_order`
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    /// Unescaped `k=v&k=v` string, the input to request signing
    pub fn to_sign_payload(&self) -> String {
        self.pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Percent-encoded query string
    pub fn to_query_string(&self) -> Result<String, BybitError> {
        serde_urlencoded::to_string(self.pairs()).map_err(|e| {
            BybitError::SerializationError(format!("Failed to encode query string: {}", e))
        })
    }

    /// JSON body, values keep their JSON types
    pub fn as_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        symbol: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reduce_only: Option<bool>,
    }

    #[test]
    fn test_absent_options_are_omitted() {
        let params = Params::from_request(&Sample {
            symbol: "BTCUSD".to_string(),
            limit: None,
            reduce_only: None,
        })
        .unwrap();

        assert_eq!(params.len(), 1);
        assert!(!params.contains("limit"));
        assert_eq!(params.to_sign_payload(), "symbol=BTCUSD");
    }

    #[test]
    fn test_present_zero_is_kept() {
        let params = Params::from_request(&Sample {
            symbol: "BTCUSD".to_string(),
            limit: Some(0),
            reduce_only: Some(false),
        })
        .unwrap();

        assert_eq!(
            params.pairs(),
            vec![
                ("limit".to_string(), "0".to_string()),
                ("reduce_only".to_string(), "false".to_string()),
                ("symbol".to_string(), "BTCUSD".to_string()),
            ]
        );
    }

    #[test]
    fn test_unit_request_is_empty() {
        assert!(Params::from_request(&()).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(matches!(
            Params::from_request(&42),
            Err(BybitError::SerializationError(_))
        ));
    }

    #[test]
    fn test_query_string_is_escaped() {
        let mut params = Params::new();
        params.insert("order_link_id", "a b&c");
        assert_eq!(params.to_query_string().unwrap(), "order_link_id=a+b%26c");
        assert_eq!(params.to_sign_payload(), "order_link_id=a b&c");
    }
}
