use crate::core::errors::BybitError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Standard response envelope with a typed `result`
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub ret_code: i64,
    pub ret_msg: String,
    pub ext_code: Option<String>,
    pub ext_info: Option<Value>,
    pub result: T,
    /// Server clock, seconds with a fractional part
    pub time_now: Option<String>,
    pub rate_limit_status: Option<i64>,
    pub rate_limit_reset_ms: Option<i64>,
    pub rate_limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(alias = "retCode")]
    ret_code: i64,
    #[serde(alias = "retMsg", default)]
    ret_msg: String,
    #[serde(default)]
    ext_code: Option<String>,
    #[serde(default)]
    ext_info: Option<Value>,
    #[serde(default)]
    result: Value,
    #[serde(default, deserialize_with = "clock")]
    time_now: Option<String>,
    #[serde(default)]
    rate_limit_status: Option<i64>,
    #[serde(default)]
    rate_limit_reset_ms: Option<i64>,
    #[serde(default)]
    rate_limit: Option<i64>,
}

/// `time_now` comes as a string on most lines and as a bare number on some
fn clock<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected a timestamp, got {}",
            other
        ))),
    }
}

impl Envelope<Value> {
    /// Parse a response body without interpreting `result`
    pub fn parse(body: &str) -> Result<Self, BybitError> {
        let raw: RawEnvelope = serde_json::from_str(body).map_err(|e| {
            BybitError::DeserializationError(format!("Failed to parse response envelope: {}", e))
        })?;

        Ok(Self {
            ret_code: raw.ret_code,
            ret_msg: raw.ret_msg,
            ext_code: raw.ext_code,
            ext_info: raw.ext_info,
            result: raw.result,
            time_now: raw.time_now,
            rate_limit_status: raw.rate_limit_status,
            rate_limit_reset_ms: raw.rate_limit_reset_ms,
            rate_limit: raw.rate_limit,
        })
    }

    /// Reject a non-zero `ret_code`, then decode `result` into `T`
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<Envelope<T>, BybitError> {
        if self.ret_code != 0 {
            debug!(ret_code = self.ret_code, ret_msg = %self.ret_msg, "request rejected");
            return Err(BybitError::ApiError {
                code: self.ret_code,
                message: self.ret_msg,
            });
        }

        let result = serde_json::from_value(self.result).map_err(|e| {
            BybitError::DeserializationError(format!("Failed to decode result: {}", e))
        })?;

        Ok(Envelope {
            ret_code: self.ret_code,
            ret_msg: self.ret_msg,
            ext_code: self.ext_code,
            ext_info: self.ext_info,
            result,
            time_now: self.time_now,
            rate_limit_status: self.rate_limit_status,
            rate_limit_reset_ms: self.rate_limit_reset_ms,
            rate_limit: self.rate_limit,
        })
    }
}
