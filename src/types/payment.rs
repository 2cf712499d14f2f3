//! Payment payloads and responses

use super::common::{optional_datetime, Link, Page};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payload of `POST /payments`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentData {
    /// Amount as a pre-formatted digit string
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub client_payment_id: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub destination_token: String,
    #[serde(default)]
    pub program_token: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(
        default,
        with = "optional_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_on: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(
        default,
        with = "optional_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_on: Option<NaiveDateTime>,
}

/// Payment resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub token: String,
    pub status: String,
    pub created_on: String,
    pub amount: String,
    pub currency: String,
    pub client_payment_id: String,
    pub purpose: String,
    pub expires_on: String,
    pub destination_token: String,
    pub program_token: String,
    pub memo: String,
    pub notes: String,
    pub release_on: String,
    pub links: Vec<Link>,
}

impl Payment {
    /// Get the amount as a decimal
    pub fn amount_as_decimal(&self) -> crate::Result<Decimal> {
        self.amount.parse().map_err(|_| {
            crate::HyperwalletError::invalid_amount(format!(
                "Invalid payment amount: {}",
                self.amount
            ))
        })
    }
}

/// Page of payments
pub type PaymentList = Page<Payment>;
