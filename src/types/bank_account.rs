//! Bank account (wire transfer method) payloads and responses

use super::common::{Link, Page};
use super::variant::{Create, Update, Variant};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Fields of a bank account create or update request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct BankAccountData<V: Variant> {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub profile_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub transfer_method_country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub transfer_method_currency: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bank_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bank_account_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub middle_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state_province: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_line2: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(skip)]
    pub variant: PhantomData<V>,
}

/// Payload of `POST /users/{token}/bank-accounts`
pub type CreateBankAccountData = BankAccountData<Create>;

/// Payload of `PUT /users/{token}/bank-accounts/{token}`
pub type UpdateBankAccountData = BankAccountData<Update>;

/// Bank account resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankAccount {
    pub token: String,
    pub r#type: String,
    pub status: String,
    pub verification_status: String,
    pub created_on: String,
    pub transfer_method_country: String,
    pub transfer_method_currency: String,
    pub bank_name: String,
    pub branch_id: String,
    pub bank_account_id: String,
    pub bank_account_purpose: String,
    pub user_token: String,
    pub profile_type: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub address_line1: String,
    pub city: String,
    pub state_province: String,
    pub country: String,
    pub postal_code: String,
    pub links: Vec<Link>,
}

/// Page of bank accounts
pub type BankAccountList = Page<BankAccount>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_payload_is_a_partial_patch() {
        let data = UpdateBankAccountData {
            city: "San Francisco".to_string(),
            r#type: "WIRE_ACCOUNT".to_string(),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({ "type": "WIRE_ACCOUNT", "city": "San Francisco" })
        );
    }

    #[test]
    fn test_bank_account_response() {
        let account: BankAccount = serde_json::from_value(json!({
            "token": "trm-1",
            "type": "WIRE_ACCOUNT",
            "bankAccountId": "987654321",
            "branchId": "021000021"
        }))
        .unwrap();

        assert_eq!(account.r#type, "WIRE_ACCOUNT");
        assert_eq!(account.bank_account_id, "987654321");
        assert_eq!(account.branch_id, "021000021");
    }
}
