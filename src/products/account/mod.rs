//! Account asset API (`/asset/v1/{public,private}`): transfers between
//! account types and sub members, deposit and withdrawal history.

pub mod records;
pub mod transfer;
pub mod types;

pub use records::{QueryDepositRecords, QuerySubMemberList, QueryWithdrawRecords};
pub use transfer::{
    CreateInternalTransfer, CreateSubMemberTransfer, QuerySubMemberTransferList, QueryTransferList,
};
pub use types::*;

use crate::core::dispatch::{Dispatcher, ProductLine};
use crate::core::kernel::RestClient;
use std::sync::Arc;

pub struct Account<R> {
    dispatcher: Dispatcher<R>,
}

impl<R> Clone for Account<R> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<R> std::fmt::Debug for Account<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("dispatcher", &self.dispatcher)
            .finish()
    }
}

impl<R: RestClient> Account<R> {
    pub fn new(rest: Arc<R>) -> Self {
        Self {
            dispatcher: Dispatcher::new(rest, ProductLine::AccountAsset),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<R> {
        &self.dispatcher
    }
}
