use super::types::{DepositRecord, PageDirection, RowsPage, SubMemberIds, WithdrawRecord};
use super::Account;
use crate::core::dispatch::Access;
use crate::core::errors::BybitError;
use crate::core::kernel::RestClient;
use serde::Serialize;

/// Sub member uids of the master account
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct QuerySubMemberList;

impl QuerySubMemberList {
    pub async fn execute<R: RestClient>(&self, client: &Account<R>) -> Result<SubMemberIds, BybitError> {
        client
            .dispatcher()
            .get(Access::Private, "sub-member/member-ids", self)
            .await
    }
}

/// Deposit history. Without a time range the last 30 days are returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryDepositRecords {
    /// Seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<PageDirection>,
    /// At most 50
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl QueryDepositRecords {
    pub async fn execute<R: RestClient>(
        &self,
        client: &Account<R>,
    ) -> Result<RowsPage<DepositRecord>, BybitError> {
        client
            .dispatcher()
            .get(Access::Private, "deposit/record/query", self)
            .await
    }
}

/// Withdrawal history. Same paging as deposits.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryWithdrawRecords {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<PageDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl QueryWithdrawRecords {
    pub async fn execute<R: RestClient>(
        &self,
        client: &Account<R>,
    ) -> Result<RowsPage<WithdrawRecord>, BybitError> {
        client
            .dispatcher()
            .get(Access::Private, "withdraw/record/query", self)
            .await
    }
}

impl<R: RestClient> Account<R> {
    pub async fn query_sub_member_list(&self) -> Result<SubMemberIds, BybitError> {
        QuerySubMemberList.execute(self).await
    }

    pub async fn query_deposit_records(
        &self,
        v: QueryDepositRecords,
    ) -> Result<RowsPage<DepositRecord>, BybitError> {
        v.execute(self).await
    }

    pub async fn query_withdraw_records(
        &self,
        v: QueryWithdrawRecords,
    ) -> Result<RowsPage<WithdrawRecord>, BybitError> {
        v.execute(self).await
    }
}
