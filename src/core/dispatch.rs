//! Binding of descriptors to transport calls.
//!
//! A [`Dispatcher`] knows which product line it serves and turns an endpoint
//! suffix plus an [`Access`] flag into the full path, encodes the descriptor
//! and hands both to the transport. It never retries and never logs; failures
//! come back exactly as the transport reported them.

use crate::core::errors::BybitError;
use crate::core::kernel::{Envelope, RestClient};
use crate::core::params::Params;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Public,
    Private,
}

impl Access {
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Private)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Public => "public",
            Self::Private => "private",
        })
    }
}

/// Product line a request belongs to; decides the path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductLine {
    InversePerpetual,
    InverseFutures,
    UsdtPerpetual,
    Spot,
    AccountAsset,
}

impl ProductLine {
    /// Full request path for an endpoint suffix
    pub fn path(self, access: Access, endpoint: &str) -> String {
        match (self, access) {
            (Self::InversePerpetual | Self::InverseFutures, Access::Public) => {
                format!("/v2/public/{}", endpoint)
            }
            (Self::InversePerpetual, Access::Private) => format!("/v2/private/{}", endpoint),
            (Self::InverseFutures, Access::Private) => format!("/futures/private/{}", endpoint),
            (Self::UsdtPerpetual, Access::Public) => format!("/public/linear/{}", endpoint),
            (Self::UsdtPerpetual, Access::Private) => format!("/private/linear/{}", endpoint),
            (Self::Spot, _) => format!("/spot/{}", endpoint),
            (Self::AccountAsset, access) => format!("/asset/v1/{}/{}", access, endpoint),
        }
    }
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InversePerpetual => "inverse_perpetual",
            Self::InverseFutures => "inverse_futures",
            Self::UsdtPerpetual => "usdt_perpetual",
            Self::Spot => "spot",
            Self::AccountAsset => "account_asset",
        })
    }
}

/// Which JSON shape a polymorphic endpoint answers with.
///
/// Decided from the request before it is sent, never by sniffing the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `result` is one record (or `null` when nothing matched)
    Single,
    /// `result` is an array of records
    Collection,
}

impl ResponseShape {
    /// `Single` when the request was narrowed to one record
    pub const fn for_narrowed(narrowed: bool) -> Self {
        if narrowed {
            Self::Single
        } else {
            Self::Collection
        }
    }
}

/// Unwrap a narrowed lookup that must produce exactly one record
pub fn expect_one<T>(mut records: Vec<T>) -> Result<T, BybitError> {
    match records.len() {
        1 => records.pop().ok_or(BybitError::UnexpectedCardinality {
            expected: 1,
            actual: 0,
        }),
        actual => Err(BybitError::UnexpectedCardinality {
            expected: 1,
            actual,
        }),
    }
}

/// Shared transport handle bound to one product line
pub struct Dispatcher<R> {
    rest: Arc<R>,
    line: ProductLine,
}

impl<R> Clone for Dispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            rest: Arc::clone(&self.rest),
            line: self.line,
        }
    }
}

impl<R> fmt::Debug for Dispatcher<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("line", &self.line)
            .finish_non_exhaustive()
    }
}

impl<R: RestClient> Dispatcher<R> {
    pub fn new(rest: Arc<R>, line: ProductLine) -> Self {
        Self { rest, line }
    }

    pub fn line(&self) -> ProductLine {
        self.line
    }

    pub fn rest(&self) -> &Arc<R> {
        &self.rest
    }

    /// Same transport, different path prefixes
    pub fn with_line(&self, line: ProductLine) -> Self {
        Self {
            rest: Arc::clone(&self.rest),
            line,
        }
    }

    pub async fn get_envelope<P, T>(
        &self,
        access: Access,
        endpoint: &str,
        request: &P,
    ) -> Result<Envelope<T>, BybitError>
    where
        P: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        let params = Params::from_request(request)?;
        self.rest
            .get_json(&self.line.path(access, endpoint), &params, access.is_signed())
            .await
    }

    pub async fn get<P, T>(&self, access: Access, endpoint: &str, request: &P) -> Result<T, BybitError>
    where
        P: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        self.get_envelope(access, endpoint, request)
            .await
            .map(|envelope| envelope.result)
    }

    pub async fn post<P, T>(&self, access: Access, endpoint: &str, request: &P) -> Result<T, BybitError>
    where
        P: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        let params = Params::from_request(request)?;
        self.rest
            .post_json(&self.line.path(access, endpoint), &params, access.is_signed())
            .await
            .map(|envelope| envelope.result)
    }

    pub async fn post_form<P, T>(
        &self,
        access: Access,
        endpoint: &str,
        request: &P,
    ) -> Result<T, BybitError>
    where
        P: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        let params = Params::from_request(request)?;
        self.rest
            .post_form(&self.line.path(access, endpoint), &params, access.is_signed())
            .await
            .map(|envelope| envelope.result)
    }

    pub async fn delete<P, T>(
        &self,
        access: Access,
        endpoint: &str,
        request: &P,
    ) -> Result<T, BybitError>
    where
        P: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        let params = Params::from_request(request)?;
        self.rest
            .delete_json(&self.line.path(access, endpoint), &params, access.is_signed())
            .await
            .map(|envelope| envelope.result)
    }

    /// GET a polymorphic endpoint and normalize the answer to a list
    pub async fn get_shaped<P, T>(
        &self,
        access: Access,
        endpoint: &str,
        request: &P,
        shape: ResponseShape,
    ) -> Result<Vec<T>, BybitError>
    where
        P: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        match shape {
            ResponseShape::Single => self
                .get::<P, Option<T>>(access, endpoint, request)
                .await
                .map(|record| record.into_iter().collect()),
            ResponseShape::Collection => self
                .get::<P, Option<Vec<T>>>(access, endpoint, request)
                .await
                .map(Option::unwrap_or_default),
        }
    }
}
