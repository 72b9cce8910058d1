//! Internal and sub member transfers.
//!
//! Every transfer carries a client-chosen `transfer_id`. The constructors
//! fill it with a fresh UUID v4; resending the same descriptor is therefore
//! idempotent upstream.

use super::types::{
    AccountType, ListPage, PageDirection, SubMemberTransferRecord, SubTransferType,
    TransferRecord, TransferStatus,
};
use super::Account;
use crate::core::dispatch::Access;
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct Created {
    transfer_id: String,
}

/// Move funds between two account types of the same user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateInternalTransfer {
    pub transfer_id: String,
    pub coin: String,
    pub amount: Decimal,
    pub from_account_type: AccountType,
    pub to_account_type: AccountType,
}

impl CreateInternalTransfer {
    pub fn new(
        coin: impl Into<String>,
        amount: Decimal,
        from_account_type: AccountType,
        to_account_type: AccountType,
    ) -> Self {
        Self {
            transfer_id: Uuid::new_v4().to_string(),
            coin: coin.into(),
            amount,
            from_account_type,
            to_account_type,
        }
    }

    /// Returns the transfer id
    pub async fn execute<R: RestClient>(&self, client: &Account<R>) -> Result<String, BybitError> {
        client
            .dispatcher()
            .post::<_, Created>(Access::Private, "transfer", self)
            .await
            .map(|c| c.transfer_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryTransferList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransferStatus>,
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<PageDirection>,
    /// At most 50
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl QueryTransferList {
    pub async fn execute<R: RestClient>(
        &self,
        client: &Account<R>,
    ) -> Result<ListPage<TransferRecord>, BybitError> {
        client
            .dispatcher()
            .get(Access::Private, "transfer/list", self)
            .await
    }
}

/// Transfer between the master account and one of its sub members
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSubMemberTransfer {
    pub transfer_id: String,
    pub coin: String,
    pub amount: Decimal,
    pub sub_user_id: String,
    #[serde(rename = "type")]
    pub transfer_type: SubTransferType,
}

impl CreateSubMemberTransfer {
    pub fn new(
        coin: impl Into<String>,
        amount: Decimal,
        sub_user_id: impl Into<String>,
        transfer_type: SubTransferType,
    ) -> Self {
        Self {
            transfer_id: Uuid::new_v4().to_string(),
            coin: coin.into(),
            amount,
            sub_user_id: sub_user_id.into(),
            transfer_type,
        }
    }

    /// Returns the transfer id
    pub async fn execute<R: RestClient>(&self, client: &Account<R>) -> Result<String, BybitError> {
        client
            .dispatcher()
            .post::<_, Created>(Access::Private, "sub-member/transfer", self)
            .await
            .map(|c| c.transfer_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuerySubMemberTransferList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransferStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<PageDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl QuerySubMemberTransferList {
    pub async fn execute<R: RestClient>(
        &self,
        client: &Account<R>,
    ) -> Result<ListPage<SubMemberTransferRecord>, BybitError> {
        client
            .dispatcher()
            .get(Access::Private, "sub-member/transfer/list", self)
            .await
    }
}

impl<R: RestClient> Account<R> {
    pub async fn create_internal_transfer(
        &self,
        v: CreateInternalTransfer,
    ) -> Result<String, BybitError> {
        v.execute(self).await
    }

    pub async fn query_transfer_list(
        &self,
        v: QueryTransferList,
    ) -> Result<ListPage<TransferRecord>, BybitError> {
        v.execute(self).await
    }

    pub async fn create_sub_member_transfer(
        &self,
        v: CreateSubMemberTransfer,
    ) -> Result<String, BybitError> {
        v.execute(self).await
    }

    pub async fn query_sub_member_transfer_list(
        &self,
        v: QuerySubMemberTransferList,
    ) -> Result<ListPage<SubMemberTransferRecord>, BybitError> {
        v.execute(self).await
    }
}
