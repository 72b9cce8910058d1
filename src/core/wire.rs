//! Wire-format helpers shared by every product line.

/// Declares an open, string-backed enumeration.
///
/// Known tokens map to named variants; anything else is kept in `Unknown(String)`
/// and written back out unchanged, so a token added upstream never breaks
/// decoding or re-encoding.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// Token this client has no variant for, carried verbatim.
            Unknown(String),
        }

        impl $name {
            /// Wire token
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(token) => token.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                match token {
                    $($wire => Self::$variant,)+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self::from(token.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(token))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                $crate::core::wire::token(deserializer).map(Self::from)
            }
        }
    };
}

pub(crate) use wire_enum;

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

/// Reads a token that upstream may send either as a string or as a bare number
/// (kline intervals are the usual offender).
pub fn token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TokenVisitor;

    impl Visitor<'_> for TokenVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or integer token")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(TokenVisitor)
}

/// Integers that upstream sends as either `123` or `"123"`.
pub mod int_or_str {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntVisitor;

        impl Visitor<'_> for IntVisitor {
            type Value = i64;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or a string holding one")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
                Ok(v)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
                i64::try_from(v).map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
                v.trim().parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(IntVisitor)
    }
}

/// Timestamps such as `"1577444332.192859"`: seconds with a fractional part,
/// as a string or a number.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = <Decimal as Deserialize>::deserialize(deserializer)?;
        let out_of_range =
            || <D::Error as serde::de::Error>::custom(format!("invalid timestamp: {}", seconds));
        let secs = seconds.trunc().to_i64().ok_or_else(out_of_range)?;
        let nanos = ((seconds - seconds.trunc()) * Decimal::from(1_000_000_000))
            .trunc()
            .to_u32()
            .ok_or_else(out_of_range)?;
        DateTime::<Utc>::from_timestamp(secs, nanos).ok_or_else(out_of_range)
    }
}

/// Millisecond timestamps, as a number or a numeric string (spot API).
pub mod epoch_millis {
    use chrono::{DateTime, Utc};
    use serde::Deserializer;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = super::int_or_str::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            <D::Error as serde::de::Error>::custom(format!("invalid timestamp: {}", millis))
        })
    }
}

/// Treats `null` like a missing field. Lists come back as `null` when empty.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Position payloads arrive either wrapped as `{"data": .., "is_valid": ..}`
/// (list queries) or bare (queries narrowed to one symbol).
#[derive(Debug)]
pub enum Validated<T> {
    Wrapped { data: T, is_valid: bool },
    Bare(T),
}

impl<'de, T: serde::de::DeserializeOwned> serde::Deserialize<'de> for Validated<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        use serde::Deserialize;

        let mut value = serde_json::Value::deserialize(deserializer)?;
        let wrapped = value.as_object_mut().and_then(|object| {
            let data = object.remove("data")?;
            Some((data, object.remove("is_valid")))
        });

        match wrapped {
            Some((data, is_valid)) => {
                let is_valid = match is_valid {
                    None | Some(serde_json::Value::Null) => true,
                    Some(flag) => serde_json::from_value(flag).map_err(D::Error::custom)?,
                };
                let data = serde_json::from_value(data).map_err(D::Error::custom)?;
                Ok(Self::Wrapped { data, is_valid })
            }
            None => serde_json::from_value(value)
                .map(Self::Bare)
                .map_err(D::Error::custom),
        }
    }
}

impl<T> Validated<T> {
    pub fn into_parts(self) -> (T, bool) {
        match self {
            Self::Wrapped { data, is_valid } => (data, is_valid),
            Self::Bare(data) => (data, true),
        }
    }
}

/// Request decimals as plain strings with trailing zeros dropped, so the
/// value sent and signed is exactly the one given.
pub mod decimal_str {
    use rust_decimal::Decimal;
    use serde::Serializer;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.normalize().to_string())
    }

    pub mod option {
        use rust_decimal::Decimal;
        use serde::Serializer;

        pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}

/// Decimals where upstream uses `""` or `null` for "not set".
pub mod opt_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => Decimal::from_str(s.trim())
                .map(Some)
                .map_err(serde::de::Error::custom),
            Value::Number(n) => Decimal::from_str(&n.to_string())
                .or_else(|_| Decimal::from_scientific(&n.to_string()))
                .map(Some)
                .map_err(serde::de::Error::custom),
            other => Err(serde::de::Error::custom(format!(
                "expected a decimal, got {}",
                other
            ))),
        }
    }
}
