//! Users gateway

use super::{fetch, send_validated};
use crate::client::{encode_segment, Transport};
use crate::types::{
    AuthenticationToken, CreateUserData, ListQuery, UpdateUserData, User, UserBalanceList,
    UserBalanceListQuery, UserList, UserListQuery, UserReceiptList, UserReceiptListQuery,
};
use crate::Result;
use http::Method;
use std::sync::Arc;

/// Operations on `/users`
#[derive(Clone)]
pub struct UsersGateway {
    transport: Arc<dyn Transport>,
}

impl UsersGateway {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Validate and create a user
    pub async fn create_user(&self, data: &CreateUserData) -> Result<User> {
        send_validated(self.transport.as_ref(), Method::POST, "users", data).await
    }

    pub async fn retrieve_user(&self, user_token: &str) -> Result<User> {
        let path = format!("users/{}", encode_segment(user_token));
        fetch(self.transport.as_ref(), Method::GET, &path, None, String::new()).await
    }

    /// Validate and apply a partial update
    pub async fn update_user(&self, user_token: &str, data: &UpdateUserData) -> Result<User> {
        let path = format!("users/{}", encode_segment(user_token));
        send_validated(self.transport.as_ref(), Method::PUT, &path, data).await
    }

    pub async fn list_users(&self, query: &UserListQuery) -> Result<UserList> {
        let pairs = query.to_query();
        fetch(
            self.transport.as_ref(),
            Method::GET,
            "users",
            Some(&pairs),
            String::new(),
        )
        .await
    }

    /// Issue a single-use token for the client-side widgets
    pub async fn create_authentication_token(
        &self,
        user_token: &str,
    ) -> Result<AuthenticationToken> {
        let path = format!("users/{}/authentication-token", encode_segment(user_token));
        fetch(self.transport.as_ref(), Method::POST, &path, None, String::new()).await
    }

    pub async fn list_user_balances(
        &self,
        user_token: &str,
        query: &UserBalanceListQuery,
    ) -> Result<UserBalanceList> {
        let path = format!("users/{}/balances", encode_segment(user_token));
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

    pub async fn list_user_receipts(
        &self,
        user_token: &str,
        query: &UserReceiptListQuery,
    ) -> Result<UserReceiptList> {
        let path = format!("users/{}/receipts", encode_segment(user_token));
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
