//! Bank account create/update validation

use super::rule_set::RuleSet;
use super::rules::{patterns, Presence};
use super::structural::{check_structure, FieldSpec};
use super::Validate;
use crate::error::ValidationError;
use crate::types::constants::transfer_method_types::WIRE_ACCOUNT;
use crate::types::{BankAccountData, CreateBankAccountData, UpdateBankAccountData, Variant};
use regex::Regex;

impl Validate for CreateBankAccountData {
    fn validate(&self) -> Result<(), ValidationError> {
        check_structure(
            "CreateBankAccountData",
            &[
                FieldSpec::required("ProfileType", &self.profile_type),
                FieldSpec::required("TransferMethodCountry", &self.transfer_method_country),
                FieldSpec::required("TransferMethodCurrency", &self.transfer_method_currency),
                FieldSpec::required("Type", &self.r#type),
                FieldSpec::required("BankID", &self.bank_id),
                FieldSpec::required("BankAccountID", &self.bank_account_id),
                FieldSpec::required("FirstName", &self.first_name),
                FieldSpec::required("LastName", &self.last_name),
                FieldSpec::required("Country", &self.country),
                FieldSpec::required("StateProvince", &self.state_province),
                FieldSpec::required("AddressLine1", &self.address_line1),
                FieldSpec::required("City", &self.city),
                FieldSpec::required("PostalCode", &self.postal_code),
            ],
        )?;
        bank_account_rules(self, Presence::Required, &patterns::BANK_ID_CREATE).finish()
    }
}

impl Validate for UpdateBankAccountData {
    fn validate(&self) -> Result<(), ValidationError> {
        bank_account_rules(self, Presence::Optional, &patterns::BANK_ID_UPDATE).finish()
    }
}

fn bank_account_rules<V: Variant>(
    data: &BankAccountData<V>,
    presence: Presence,
    bank_id: &Regex,
) -> RuleSet {
    let mut set = RuleSet::new(presence);
    set.pattern("ProfileType", &data.profile_type, &patterns::PROFILE_TYPE)
        .pattern(
            "TransferMethodCountry",
            &data.transfer_method_country,
            &patterns::COUNTRY_CODE,
        )
        .pattern(
            "TransferMethodCurrency",
            &data.transfer_method_currency,
            &patterns::CURRENCY_CODE,
        )
        .equals("Type", &data.r#type, WIRE_ACCOUNT)
        .pattern("BankID", &data.bank_id, bank_id)
        .pattern("BankAccountID", &data.bank_account_id, &patterns::BANK_ACCOUNT_ID)
        .pattern("FirstName", &data.first_name, &patterns::PERSON_NAME)
        .optional_pattern("MiddleName", &data.middle_name, &patterns::PERSON_NAME)
        .pattern("LastName", &data.last_name, &patterns::PERSON_NAME)
        .pattern("Country", &data.country, &patterns::REGION)
        .state_province("StateProvince", &data.state_province, &data.country)
        .pattern("AddressLine1", &data.address_line1, &patterns::ADDRESS_LINE)
        .optional_pattern("AddressLine2", &data.address_line2, &patterns::ADDRESS_LINE)
        .pattern("City", &data.city, &patterns::REGION)
        .pattern("PostalCode", &data.postal_code, &patterns::POSTAL_CODE);
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StructuralTag;

    fn valid_account() -> CreateBankAccountData {
        CreateBankAccountData {
            profile_type: "INDIVIDUAL".to_string(),
            transfer_method_country: "US".to_string(),
            transfer_method_currency: "USD".to_string(),
            r#type: "WIRE_ACCOUNT".to_string(),
            bank_id: "AsdGas12345".to_string(),
            bank_account_id: "987654321".to_string(),
            first_name: "Alex".to_string(),
            middle_name: "Serg".to_string(),
            last_name: "Niki".to_string(),
            country: "US".to_string(),
            state_province: "CA".to_string(),
            address_line1: "575 Market St".to_string(),
            city: "San Francisco".to_string(),
            postal_code: "94105".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_account_passes() {
        assert_eq!(valid_account().validate(), Ok(()));
    }

    #[test]
    fn test_missing_transfer_method_country() {
        let account = CreateBankAccountData {
            transfer_method_country: String::new(),
            ..valid_account()
        };
        let err = account.validate().unwrap_err();
        let structural = err.as_structural().unwrap();
        assert_eq!(structural.payload, "CreateBankAccountData");
        assert_eq!(structural.field, "TransferMethodCountry");
        assert_eq!(structural.tag, StructuralTag::Required);
    }

    #[test]
    fn test_rule_violations_in_declaration_order() {
        let account = CreateBankAccountData {
            bank_id: "123456789AS".to_string(),
            first_name: "Alex!@!".to_string(),
            country: "USUSUSUSUSUSUSUSUSUSUSUSUSUSUSUSUSUSUSUSUSUSUSUSUSUS".to_string(),
            address_line1: "575 Market St$%".to_string(),
            postal_code: "94105941059410594105".to_string(),
            ..valid_account()
        };

        let err = account.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad value for BankID\nBad value for FirstName\nBad value for Country\nBad value for AddressLine1\nBad value for PostalCode"
        );
    }

    #[test]
    fn test_type_and_codes() {
        let account = CreateBankAccountData {
            transfer_method_country: "USA".to_string(),
            transfer_method_currency: "US".to_string(),
            r#type: "PAYPAL_ACCOUNT".to_string(),
            bank_account_id: "DE89 3704 0044".to_string(),
            ..valid_account()
        };

        let err = account.validate().unwrap_err();
        assert_eq!(
            err.as_rules().unwrap().messages(),
            &[
                "Bad value for TransferMethodCountry",
                "Bad value for TransferMethodCurrency",
                "Bad value for Type",
                "Bad value for BankAccountID",
            ]
        );
    }

    #[test]
    fn test_us_state_rule() {
        let account = CreateBankAccountData {
            state_province: "California".to_string(),
            ..valid_account()
        };
        let err = account.validate().unwrap_err();
        assert!(err.as_rules().unwrap().contains("StateProvince"));
    }

    #[test]
    fn test_update_skips_absent_fields() {
        assert!(UpdateBankAccountData::default().validate().is_ok());

        let update = UpdateBankAccountData {
            city: "San Francisco".to_string(),
            bank_id: "DEUTDEFF500".to_string(),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let update = UpdateBankAccountData {
            bank_id: "123456789AS".to_string(),
            postal_code: "94105$".to_string(),
            ..Default::default()
        };
        let err = update.validate().unwrap_err();
        assert_eq!(err.to_string(), "Bad value for BankID\nBad value for PostalCode");
    }

    #[test]
    fn test_update_state_without_country_has_no_length_rule() {
        let update = UpdateBankAccountData {
            state_province: "California".to_string(),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }
}
