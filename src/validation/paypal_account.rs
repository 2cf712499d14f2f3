//! PayPal account create/update validation

use super::rule_set::RuleSet;
use super::rules::{patterns, Presence};
use super::structural::{check_structure, FieldSpec};
use super::Validate;
use crate::error::{StructuralTag, ValidationError};
use crate::types::constants::transfer_method_types::PAYPAL_ACCOUNT;
use crate::types::{CreatePaypalAccountData, UpdatePaypalAccountData};

const EMAIL_FORMATS: &[StructuralTag] = &[StructuralTag::Email];

impl Validate for CreatePaypalAccountData {
    fn validate(&self) -> Result<(), ValidationError> {
        check_structure(
            "CreatePaypalAccountData",
            &[
                FieldSpec::required("TransferMethodCountry", &self.transfer_method_country),
                FieldSpec::required("TransferMethodCurrency", &self.transfer_method_currency),
                FieldSpec::required("Type", &self.r#type),
                FieldSpec::required("Email", &self.email).with_formats(EMAIL_FORMATS),
            ],
        )?;

        let mut set = RuleSet::new(Presence::Required);
        set.pattern(
            "TransferMethodCurrency",
            &self.transfer_method_currency,
            &patterns::CURRENCY_CODE,
        )
        .equals("Type", &self.r#type, PAYPAL_ACCOUNT);
        set.finish()
    }
}

impl Validate for UpdatePaypalAccountData {
    fn validate(&self) -> Result<(), ValidationError> {
        check_structure(
            "UpdatePaypalAccountData",
            &[FieldSpec::required("Email", &self.email).with_formats(EMAIL_FORMATS)],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_create() {
        let data = CreatePaypalAccountData::new("US", "USD", "qwe@ad.comm");
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_wrong_type() {
        let data = CreatePaypalAccountData {
            r#type: "WIRE_ACCOUNT".to_string(),
            ..CreatePaypalAccountData::new("US", "USD", "qwe@ad.comm")
        };
        assert_eq!(data.validate().unwrap_err().to_string(), "Bad value for Type");
    }

    #[test]
    fn test_currency_and_type_both_reported() {
        let data = CreatePaypalAccountData {
            transfer_method_currency: "USDUSD".to_string(),
            r#type: "WIRE_ACCOUNT".to_string(),
            ..CreatePaypalAccountData::new("US", "USD", "qwe@ad.comm")
        };
        assert_eq!(
            data.validate().unwrap_err().to_string(),
            "Bad value for TransferMethodCurrency\nBad value for Type"
        );
    }

    #[test]
    fn test_missing_country_is_structural() {
        let data = CreatePaypalAccountData::new("", "USD", "qwe@ad.comm");
        let err = data.validate().unwrap_err();
        assert_eq!(err.as_structural().unwrap().field, "TransferMethodCountry");
    }

    #[test]
    fn test_update_email() {
        assert!(UpdatePaypalAccountData::new("qwe@ad.comm").validate().is_ok());

        let err = UpdatePaypalAccountData::new("@ad.comm").validate().unwrap_err();
        let structural = err.as_structural().unwrap();
        assert_eq!(structural.field, "Email");
        assert_eq!(structural.tag, StructuralTag::Email);

        let err = UpdatePaypalAccountData::default().validate().unwrap_err();
        assert_eq!(err.as_structural().unwrap().tag, StructuralTag::Required);
        assert_eq!(
            err.to_string(),
            "Key: 'UpdatePaypalAccountData.Email' Error:Field validation for 'Email' failed on the 'required' tag"
        );
    }
}
