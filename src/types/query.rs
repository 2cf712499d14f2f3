//! List filters and their conversion into query string pairs
//!
//! Filters are sent as-is: they are never validated. Unset fields are left
//! out of the query string entirely.

use super::common::DATETIME_FORMAT;
use crate::client::QueryPairs;
use chrono::NaiveDateTime;

/// Filter object that can be rendered as query string pairs
pub trait ListQuery {
    /// Render the set fields as `(key, value)` pairs
    fn to_query(&self) -> QueryPairs;
}

/// Accumulates query pairs, skipping unset values
#[derive(Debug, Default)]
struct QueryBuilder {
    pairs: QueryPairs,
}

impl QueryBuilder {
    fn text(mut self, key: &str, value: &Option<String>) -> Self {
        if let Some(value) = value {
            if !value.is_empty() {
                self.pairs.push((key.to_string(), value.clone()));
            }
        }
        self
    }

    fn datetime(mut self, key: &str, value: &Option<NaiveDateTime>) -> Self {
        if let Some(value) = value {
            self.pairs
                .push((key.to_string(), value.format(DATETIME_FORMAT).to_string()));
        }
        self
    }

    fn number(mut self, key: &str, value: Option<u32>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    fn build(self) -> QueryPairs {
        self.pairs
    }
}

/// Filters for listing users
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserListQuery {
    pub client_user_id: Option<String>,
    pub created_before: Option<NaiveDateTime>,
    pub created_after: Option<NaiveDateTime>,
    pub email: Option<String>,
    pub program_token: Option<String>,
    pub status: Option<String>,
    pub verification_status: Option<String>,
    pub sort_by: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl UserListQuery {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by client user id
    pub fn with_client_user_id(mut self, client_user_id: impl Into<String>) -> Self {
        self.client_user_id = Some(client_user_id.into());
        self
    }

    /// Filter by email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Only users created inside the given range
    pub fn created_between(mut self, after: NaiveDateTime, before: NaiveDateTime) -> Self {
        self.created_after = Some(after);
        self.created_before = Some(before);
        self
    }

    /// Set pagination bounds
    pub fn with_page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }
}

impl ListQuery for UserListQuery {
    fn to_query(&self) -> QueryPairs {
        QueryBuilder::default()
            .text("clientUserId", &self.client_user_id)
            .datetime("createdBefore", &self.created_before)
            .datetime("createdAfter", &self.created_after)
            .text("email", &self.email)
            .text("programToken", &self.program_token)
            .text("status", &self.status)
            .text("verificationStatus", &self.verification_status)
            .text("sortBy", &self.sort_by)
            .number("offset", self.offset)
            .number("limit", self.limit)
            .build()
    }
}

/// Filters for listing a user's balances
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserBalanceListQuery {
    pub currency: Option<String>,
    pub sort_by: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery for UserBalanceListQuery {
    fn to_query(&self) -> QueryPairs {
        QueryBuilder::default()
            .text("currency", &self.currency)
            .text("sortBy", &self.sort_by)
            .number("offset", self.offset)
            .number("limit", self.limit)
            .build()
    }
}

/// Filters for listing a user's receipts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserReceiptListQuery {
    pub created_before: Option<NaiveDateTime>,
    pub created_after: Option<NaiveDateTime>,
    pub currency: Option<String>,
    pub sort_by: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery for UserReceiptListQuery {
    fn to_query(&self) -> QueryPairs {
        QueryBuilder::default()
            .datetime("createdBefore", &self.created_before)
            .datetime("createdAfter", &self.created_after)
            .text("currency", &self.currency)
            .text("sortBy", &self.sort_by)
            .number("offset", self.offset)
            .number("limit", self.limit)
            .build()
    }
}

/// Filters for listing a user's bank accounts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankAccountListQuery {
    pub created_before: Option<NaiveDateTime>,
    pub created_after: Option<NaiveDateTime>,
    pub r#type: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery for BankAccountListQuery {
    fn to_query(&self) -> QueryPairs {
        QueryBuilder::default()
            .datetime("createdBefore", &self.created_before)
            .datetime("createdAfter", &self.created_after)
            .text("type", &self.r#type)
            .text("status", &self.status)
            .text("sortBy", &self.sort_by)
            .number("offset", self.offset)
            .number("limit", self.limit)
            .build()
    }
}

/// Filters for listing a user's PayPal accounts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaypalAccountListQuery {
    pub created_before: Option<NaiveDateTime>,
    pub created_on: Option<NaiveDateTime>,
    pub created_after: Option<NaiveDateTime>,
    pub r#type: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery for PaypalAccountListQuery {
    fn to_query(&self) -> QueryPairs {
        QueryBuilder::default()
            .datetime("createdBefore", &self.created_before)
            .datetime("createdOn", &self.created_on)
            .datetime("createdAfter", &self.created_after)
            .text("type", &self.r#type)
            .text("status", &self.status)
            .text("sortBy", &self.sort_by)
            .number("offset", self.offset)
            .number("limit", self.limit)
            .build()
    }
}

/// Filters for listing payments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentListQuery {
    pub client_payment_id: Option<String>,
    pub created_before: Option<NaiveDateTime>,
    pub created_after: Option<NaiveDateTime>,
    pub currency: Option<String>,
    pub memo: Option<String>,
    pub release_date: Option<NaiveDateTime>,
    pub sort_by: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery for PaymentListQuery {
    fn to_query(&self) -> QueryPairs {
        QueryBuilder::default()
            .text("clientPaymentId", &self.client_payment_id)
            .datetime("createdBefore", &self.created_before)
            .datetime("createdAfter", &self.created_after)
            .text("currency", &self.currency)
            .text("memo", &self.memo)
            .datetime("releaseDate", &self.release_date)
            .text("sortBy", &self.sort_by)
            .number("offset", self.offset)
            .number("limit", self.limit)
            .build()
    }
}
