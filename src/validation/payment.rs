//! Payment create validation

use super::rule_set::RuleSet;
use super::rules::{self, patterns, Presence};
use super::structural::{check_structure, FieldSpec};
use super::Validate;
use crate::error::{StructuralTag, ValidationError};
use crate::types::CreatePaymentData;

/// Longest accepted client payment id, in characters
pub const CLIENT_PAYMENT_ID_MAX: usize = 50;

const AMOUNT_FORMATS: &[StructuralTag] = &[StructuralTag::Numeric];

impl Validate for CreatePaymentData {
    fn validate(&self) -> Result<(), ValidationError> {
        check_structure(
            "CreatePaymentData",
            &[
                FieldSpec::required("Amount", &self.amount).with_formats(AMOUNT_FORMATS),
                FieldSpec::required("ClientPaymentID", &self.client_payment_id),
                FieldSpec::required("Currency", &self.currency),
                FieldSpec::required("DestinationToken", &self.destination_token),
                FieldSpec::required("ProgramToken", &self.program_token),
                FieldSpec::required("Purpose", &self.purpose),
            ],
        )?;

        let mut set = RuleSet::new(Presence::Required);
        set.check("Amount", rules::is_numeric_string(&self.amount))
            .max_length(
                "ClientPaymentID",
                &self.client_payment_id,
                CLIENT_PAYMENT_ID_MAX,
            )
            .pattern("Currency", &self.currency, &patterns::CURRENCY_CODE);
        set.finish()
    }
}
