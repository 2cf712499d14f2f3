//! PayPal account payloads and responses

use super::common::{Link, Page};
use serde::{Deserialize, Serialize};

/// Payload of `POST /users/{token}/paypal-accounts`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaypalAccountData {
    #[serde(default)]
    pub transfer_method_country: String,
    #[serde(default)]
    pub transfer_method_currency: String,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub email: String,
}

impl CreatePaypalAccountData {
    /// Create a payload with the `PAYPAL_ACCOUNT` type already set
    pub fn new(
        transfer_method_country: impl Into<String>,
        transfer_method_currency: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            transfer_method_country: transfer_method_country.into(),
            transfer_method_currency: transfer_method_currency.into(),
            r#type: super::constants::transfer_method_types::PAYPAL_ACCOUNT.to_string(),
            email: email.into(),
        }
    }
}

/// Payload of `PUT /users/{token}/paypal-accounts/{token}`
///
/// The email is the whole patch, so it stays mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePaypalAccountData {
    #[serde(default)]
    pub email: String,
}

impl UpdatePaypalAccountData {
    /// Create a patch changing the account email
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// PayPal account resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaypalAccount {
    pub token: String,
    pub r#type: String,
    pub status: String,
    pub created_on: String,
    pub transfer_method_country: String,
    pub transfer_method_currency: String,
    pub user_token: String,
    pub email: String,
    pub links: Vec<Link>,
}

/// Page of PayPal accounts
pub type PaypalAccountList = Page<PaypalAccount>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_payload_sets_type() {
        let data = CreatePaypalAccountData::new("US", "USD", "qwe@ad.comm");
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "transferMethodCountry": "US",
                "transferMethodCurrency": "USD",
                "type": "PAYPAL_ACCOUNT",
                "email": "qwe@ad.comm"
            })
        );
    }
}
