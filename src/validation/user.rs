//! User create/update validation

use super::age;
use super::rule_set::RuleSet;
use super::rules::{patterns, Presence};
use super::structural::{check_structure, FieldSpec};
use super::Validate;
use crate::error::{StructuralTag, ValidationError};
use crate::types::{CreateUserData, UpdateUserData, UserData, Variant};
use chrono::NaiveDate;

const PROFILE_TYPE_FORMATS: &[StructuralTag] = &[StructuralTag::Alpha, StructuralTag::Uppercase];
const EMAIL_FORMATS: &[StructuralTag] = &[StructuralTag::Email];

impl CreateUserData {
    /// Validate as if the current date were `today`
    pub fn validate_on(&self, today: NaiveDate) -> Result<(), ValidationError> {
        check_structure(
            "CreateUserData",
            &[
                FieldSpec::required("ProgramToken", &self.program_token),
                FieldSpec::required("ClientUserID", &self.client_user_id),
                FieldSpec::required("ProfileType", &self.profile_type)
                    .with_formats(PROFILE_TYPE_FORMATS),
                FieldSpec::required("FirstName", &self.first_name),
                FieldSpec::required("LastName", &self.last_name),
                FieldSpec::required("DateOfBirth", &self.date_of_birth),
                FieldSpec::required("Email", &self.email).with_formats(EMAIL_FORMATS),
                FieldSpec::required("AddressLine1", &self.address_line1),
                FieldSpec::required("City", &self.city),
                FieldSpec::required("StateProvince", &self.state_province),
                FieldSpec::required("Country", &self.country),
                FieldSpec::required("PostalCode", &self.postal_code),
            ],
        )?;
        user_rules(self, Presence::Required, today).finish()
    }
}

impl UpdateUserData {
    /// Validate as if the current date were `today`
    pub fn validate_on(&self, today: NaiveDate) -> Result<(), ValidationError> {
        check_structure(
            "UpdateUserData",
            &[
                FieldSpec::optional("ProfileType", &self.profile_type)
                    .with_formats(PROFILE_TYPE_FORMATS),
                FieldSpec::optional("Email", &self.email).with_formats(EMAIL_FORMATS),
            ],
        )?;
        user_rules(self, Presence::Optional, today).finish()
    }
}

impl Validate for CreateUserData {
    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_on(age::today())
    }
}

impl Validate for UpdateUserData {
    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_on(age::today())
    }
}

// Business state fields follow their own country when it is set.
fn country_or<'a>(own: &'a str, fallback: &'a str) -> &'a str {
    if own.is_empty() {
        fallback
    } else {
        own
    }
}

fn user_rules<V: Variant>(data: &UserData<V>, presence: Presence, today: NaiveDate) -> RuleSet {
    let mut set = RuleSet::new(presence);
    set.pattern("ClientUserID", &data.client_user_id, &patterns::CLIENT_USER_ID)
        .pattern("ProfileType", &data.profile_type, &patterns::PROFILE_TYPE)
        .pattern("FirstName", &data.first_name, &patterns::PERSON_NAME)
        .optional_pattern("MiddleName", &data.middle_name, &patterns::PERSON_NAME)
        .pattern("LastName", &data.last_name, &patterns::PERSON_NAME)
        .adult_birth_date("DateOfBirth", &data.date_of_birth, today)
        .optional_pattern(
            "GovernmentIDType",
            &data.government_id_type,
            &patterns::GOVERNMENT_ID_TYPE,
        )
        .pattern("AddressLine1", &data.address_line1, &patterns::ADDRESS_LINE)
        .optional_pattern("AddressLine2", &data.address_line2, &patterns::ADDRESS_LINE)
        .pattern("City", &data.city, &patterns::REGION)
        .state_province("StateProvince", &data.state_province, &data.country)
        .pattern("Country", &data.country, &patterns::REGION)
        .pattern("PostalCode", &data.postal_code, &patterns::POSTAL_CODE);

    set.optional_pattern("BusinessName", &data.business_name, &patterns::BUSINESS_NAME)
        .optional_pattern(
            "BusinessOperatingName",
            &data.business_operating_name,
            &patterns::BUSINESS_NAME,
        )
        .optional_pattern(
            "BusinessRegistrationID",
            &data.business_registration_id,
            &patterns::BUSINESS_REGISTRATION_ID,
        )
        .optional_state_province(
            "BusinessRegistrationStateProvince",
            &data.business_registration_state_province,
            country_or(&data.business_registration_country, &data.country),
        )
        .optional_pattern(
            "BusinessRegistrationCountry",
            &data.business_registration_country,
            &patterns::REGION,
        )
        .optional_pattern(
            "BusinessContactRole",
            &data.business_contact_role,
            &patterns::BUSINESS_CONTACT_ROLE,
        )
        .optional_pattern(
            "BusinessContactAddressLine1",
            &data.business_contact_address_line1,
            &patterns::ADDRESS_LINE,
        )
        .optional_pattern(
            "BusinessContactAddressLine2",
            &data.business_contact_address_line2,
            &patterns::ADDRESS_LINE,
        )
        .optional_pattern(
            "BusinessContactCity",
            &data.business_contact_city,
            &patterns::REGION,
        )
        .optional_state_province(
            "BusinessContactStateProvince",
            &data.business_contact_state_province,
            country_or(&data.business_contact_country, &data.country),
        )
        .optional_pattern(
            "BusinessContactCountry",
            &data.business_contact_country,
            &patterns::REGION,
        )
        .optional_pattern(
            "BusinessContactPostalCode",
            &data.business_contact_postal_code,
            &patterns::POSTAL_CODE,
        );
    set
}
