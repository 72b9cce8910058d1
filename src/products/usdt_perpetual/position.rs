use super::types::LinearPositionItem;
use super::UsdtPerpetual;
use crate::core::dispatch::Access;
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use serde::Serialize;

/// Positions of one symbol (both sides in hedge mode) or of every symbol.
///
/// Unlike the inverse lines the answer is always an array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MyPosition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl MyPosition {
    pub async fn execute<R: RestClient>(
        &self,
        client: &UsdtPerpetual<R>,
    ) -> Result<Vec<LinearPositionItem>, BybitError> {
        client
            .dispatcher()
            .get::<_, Option<Vec<LinearPositionItem>>>(Access::Private, "position/list", self)
            .await
            .map(Option::unwrap_or_default)
    }
}

impl<R: RestClient> UsdtPerpetual<R> {
    pub async fn my_position(
        &self,
        symbol: Option<&str>,
    ) -> Result<Vec<LinearPositionItem>, BybitError> {
        MyPosition {
            symbol: symbol.map(str::to_string),
        }
        .execute(self)
        .await
    }
}
