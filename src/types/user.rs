//! User payloads and responses

use super::common::{Link, Page};
use super::variant::{Create, Update, Variant};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Fields of a user create or update request
///
/// Use the [`CreateUserData`] and [`UpdateUserData`] aliases. Empty strings
/// mean "not set" and are left out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct UserData<V: Variant> {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub program_token: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub client_user_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub profile_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub middle_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country_of_birth: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country_of_nationality: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub government_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub government_id_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub passport_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub drivers_license_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub employer_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_line2: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state_province: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_operating_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_registration_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_registration_state_province: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_registration_country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_contact_role: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_contact_address_line1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_contact_address_line2: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_contact_city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_contact_state_province: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_contact_country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub business_contact_postal_code: String,
    #[serde(skip)]
    pub variant: PhantomData<V>,
}

/// Payload of `POST /users`
pub type CreateUserData = UserData<Create>;

/// Payload of `PUT /users/{token}`
pub type UpdateUserData = UserData<Update>;

/// User resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub token: String,
    pub status: String,
    pub verification_status: String,
    pub created_on: String,
    pub client_user_id: String,
    pub profile_type: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub email: String,
    pub address_line1: String,
    pub city: String,
    pub state_province: String,
    pub country: String,
    pub postal_code: String,
    pub language: String,
    pub time_zone: String,
    pub program_token: String,
    pub links: Vec<Link>,
}

/// Page of users
pub type UserList = Page<User>;

/// Single-use token for the client-side widgets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthenticationToken {
    pub value: String,
}

/// Balance of a user in one currency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserBalance {
    pub currency: String,
    pub amount: String,
}

impl UserBalance {
    /// Get the amount as a decimal
    pub fn amount_as_decimal(&self) -> crate::Result<Decimal> {
        self.amount.parse().map_err(|_| {
            crate::HyperwalletError::invalid_amount(format!(
                "Invalid balance amount: {}",
                self.amount
            ))
        })
    }
}

/// Page of balances
pub type UserBalanceList = Page<UserBalance>;

/// Payment details attached to a receipt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptDetails {
    pub client_payment_id: String,
    pub payee_name: String,
}

/// Account movement of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserReceipt {
    pub token: String,
    pub journal_id: String,
    pub r#type: String,
    pub created_on: String,
    pub entry: String,
    pub source_token: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub destination_token: String,
    pub amount: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fee: String,
    pub currency: String,
    pub details: ReceiptDetails,
}

/// Page of receipts
pub type UserReceiptList = Page<UserReceipt>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_user_data_omits_empty_fields() {
        let data = CreateUserData {
            client_user_id: "qwerty".to_string(),
            address_line1: "575 Market St".to_string(),
            business_contact_address_line1: "1 Main St".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            json!({
                "clientUserId": "qwerty",
                "addressLine1": "575 Market St",
                "businessContactAddressLine1": "1 Main St"
            })
        );
    }

    #[test]
    fn test_user_deserializes_partial_payload() {
        let user: User = serde_json::from_value(json!({
            "token": "usr-1",
            "timeZone": "GMT",
            "links": [{ "params": { "rel": "self" }, "href": "https://example.com/users/usr-1" }]
        }))
        .unwrap();

        assert_eq!(user.token, "usr-1");
        assert_eq!(user.time_zone, "GMT");
        assert!(user.email.is_empty());
        assert_eq!(user.links.len(), 1);
    }

    #[test]
    fn test_receipt_details() {
        let receipt: UserReceipt = serde_json::from_value(json!({
            "token": "rcp-1",
            "journalId": "51660665",
            "type": "PAYMENT",
            "amount": "5000.00",
            "currency": "USD",
            "details": { "clientPaymentId": "trans-0001", "payeeName": "John Smith" }
        }))
        .unwrap();

        assert_eq!(receipt.r#type, "PAYMENT");
        assert_eq!(receipt.details.payee_name, "John Smith");
    }

    #[test]
    fn test_balance_amount_as_decimal() {
        let balance = UserBalance {
            currency: "USD".to_string(),
            amount: "12.50".to_string(),
        };
        assert_eq!(balance.amount_as_decimal().unwrap(), Decimal::new(1250, 2));

        let bad = UserBalance {
            currency: "USD".to_string(),
            amount: "twelve".to_string(),
        };
        assert!(bad.amount_as_decimal().is_err());
    }
}
