//! Bank accounts gateway

use super::{fetch, send_validated};
use crate::client::{encode_segment, Transport};
use crate::types::{
    BankAccount, BankAccountList, BankAccountListQuery, CreateBankAccountData, ListQuery,
    UpdateBankAccountData,
};
use crate::Result;
use http::Method;
use std::sync::Arc;

/// Operations on `/users/{user}/bank-accounts`
#[derive(Clone)]
pub struct BankAccountsGateway {
    transport: Arc<dyn Transport>,
}

fn collection(user_token: &str) -> String {
    format!("users/{}/bank-accounts", encode_segment(user_token))
}

fn item(user_token: &str, bank_account_token: &str) -> String {
    format!(
        "{}/{}",
        collection(user_token),
        encode_segment(bank_account_token)
    )
}

impl BankAccountsGateway {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Validate and create a bank account for `user_token`
    pub async fn create_bank_account(
        &self,
        user_token: &str,
        data: &CreateBankAccountData,
    ) -> Result<BankAccount> {
        let path = collection(user_token);
        send_validated(self.transport.as_ref(), Method::POST, &path, data).await
    }

    pub async fn retrieve_bank_account(
        &self,
        user_token: &str,
        bank_account_token: &str,
    ) -> Result<BankAccount> {
        let path = item(user_token, bank_account_token);
        fetch(self.transport.as_ref(), Method::GET, &path, None, String::new()).await
    }

    /// Validate and apply a partial update
    pub async fn update_bank_account(
        &self,
        user_token: &str,
        bank_account_token: &str,
        data: &UpdateBankAccountData,
    ) -> Result<BankAccount> {
        let path = item(user_token, bank_account_token);
        send_validated(self.transport.as_ref(), Method::PUT, &path, data).await
    }

    pub async fn list_bank_accounts(
        &self,
        user_token: &str,
        query: &BankAccountListQuery,
    ) -> Result<BankAccountList> {
        let path = collection(user_token);
        let pairs = query.to_query();
        fetch(
            self.transport.as_ref(),
            Method::GET,
            &path,
            Some(&pairs),
            String::new(),
        )
        .await
    }
}
