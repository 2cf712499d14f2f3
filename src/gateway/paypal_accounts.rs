//! PayPal accounts gateway

use super::{fetch, send_validated};
use crate::client::{encode_segment, Transport};
use crate::types::{
    CreatePaypalAccountData, ListQuery, PaypalAccount, PaypalAccountList, PaypalAccountListQuery,
    UpdatePaypalAccountData,
};
use crate::Result;
use http::Method;
use std::sync::Arc;

/// Operations on `/users/{user}/paypal-accounts`
#[derive(Clone)]
pub struct PaypalAccountsGateway {
    transport: Arc<dyn Transport>,
}

fn collection(user_token: &str) -> String {
    format!("users/{}/paypal-accounts", encode_segment(user_token))
}

impl PaypalAccountsGateway {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn create_paypal_account(
        &self,
        user_token: &str,
        data: &CreatePaypalAccountData,
    ) -> Result<PaypalAccount> {
        let path = collection(user_token);
        send_validated(self.transport.as_ref(), Method::POST, &path, data).await
    }

    pub async fn retrieve_paypal_account(
        &self,
        user_token: &str,
        paypal_account_token: &str,
    ) -> Result<PaypalAccount> {
        let path = format!(
            "{}/{}",
            collection(user_token),
            encode_segment(paypal_account_token)
        );
        fetch(self.transport.as_ref(), Method::GET, &path, None, String::new()).await
    }

    /// Change the email of an existing PayPal account
    pub async fn update_paypal_account(
        &self,
        user_token: &str,
        paypal_account_token: &str,
        data: &UpdatePaypalAccountData,
    ) -> Result<PaypalAccount> {
        let path = format!(
            "{}/{}",
            collection(user_token),
            encode_segment(paypal_account_token)
        );
        send_validated(self.transport.as_ref(), Method::PUT, &path, data).await
    }

    pub async fn list_paypal_accounts(
        &self,
        user_token: &str,
        query: &PaypalAccountListQuery,
    ) -> Result<PaypalAccountList> {
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
