use crate::core::wire::{epoch_seconds, null_default, opt_decimal, wire_enum};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum AccountType {
        Contract => "CONTRACT",
        Spot => "SPOT",
        Investment => "INVESTMENT",
        Options => "OPTION",
        Unified => "UNIFIED",
    }
}

wire_enum! {
    pub enum TransferStatus {
        Success => "SUCCESS",
        Pending => "PENDING",
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Direction of a master/sub account transfer, seen from the sub account
    pub enum SubTransferType {
        In => "IN",
        Out => "OUT",
    }
}

wire_enum! {
    /// Cursor direction; capitalised here, unlike the derivatives lists
    pub enum PageDirection {
        Prev => "Prev",
        Next => "Next",
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransferRecord {
    pub transfer_id: String,
    pub coin: String,
    pub amount: Decimal,
    pub from_account_type: AccountType,
    pub to_account_type: AccountType,
    #[serde(deserialize_with = "epoch_seconds::deserialize")]
    pub timestamp: DateTime<Utc>,
    pub status: TransferStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubMemberTransferRecord {
    pub transfer_id: String,
    pub coin: String,
    pub amount: Decimal,
    pub user_id: String,
    pub sub_member_id: String,
    #[serde(deserialize_with = "epoch_seconds::deserialize")]
    pub timestamp: DateTime<Utc>,
    pub status: TransferStatus,
    #[serde(rename = "type")]
    pub transfer_type: SubTransferType,
}

/// Cursor page of `list` entries
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListPage<T> {
    #[serde(default, deserialize_with = "null_default")]
    pub list: Vec<T>,
    #[serde(default)]
    pub cursor: String,
}

/// Cursor page of `rows` entries
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RowsPage<T> {
    #[serde(default, deserialize_with = "null_default")]
    pub rows: Vec<T>,
    #[serde(default)]
    pub cursor: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SubMemberIds {
    #[serde(default, deserialize_with = "null_default")]
    pub sub_member_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub transferable_sub_member_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DepositRecord {
    pub coin: String,
    pub chain: String,
    pub amount: Decimal,
    pub tx_id: String,
    /// 0 unknown, 1 to be confirmed, 2 processing, 3 success, 4 failed
    pub status: i32,
    pub to_address: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default, deserialize_with = "opt_decimal::deserialize")]
    pub deposit_fee: Option<Decimal>,
    #[serde(deserialize_with = "epoch_seconds::deserialize")]
    pub success_at: DateTime<Utc>,
    #[serde(default)]
    pub confirmations: String,
    #[serde(default)]
    pub tx_index: String,
    #[serde(default)]
    pub block_hash: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WithdrawRecord {
    pub coin: String,
    pub chain: String,
    pub amount: Decimal,
    pub tx_id: String,
    /// `SecurityCheck`, `Pending`, `success`, `CancelByUser`, `Reject`, `Fail`, `BlockchainConfirmed`
    pub status: String,
    pub to_address: String,
    #[serde(default)]
    pub tag: String,
    pub withdraw_fee: Decimal,
    #[serde(deserialize_with = "epoch_seconds::deserialize")]
    pub create_time: DateTime<Utc>,
    #[serde(deserialize_with = "epoch_seconds::deserialize")]
    pub update_time: DateTime<Utc>,
    #[serde(default)]
    pub withdraw_id: String,
}
