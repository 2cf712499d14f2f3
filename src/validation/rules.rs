//! Field rule engine
//!
//! Stateless predicates over a single string value. Every pattern is compiled
//! once, on first use, and shared by all validators. Patterns describe the
//! whole value: each one is anchored at both ends.
//!
//! `\w` in the provider's documentation means ASCII word characters, spelled
//! `[[:word:]]` here so that Unicode letters are rejected the same way the
//! API rejects them.

use crate::types::constants::UNITED_STATES;
use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {}: {}", pattern, e))
}

/// Precompiled field patterns
pub mod patterns {
    use super::compile;
    use once_cell::sync::Lazy;
    use regex::Regex;

    /// Client-assigned user id: 1 to 75 characters
    pub static CLIENT_USER_ID: Lazy<Regex> = Lazy::new(|| compile(r"^[[:word:]+,\-./~|]{1,75}$"));

    /// `INDIVIDUAL` or `BUSINESS`
    pub static PROFILE_TYPE: Lazy<Regex> = Lazy::new(|| compile(r"^(?:INDIVIDUAL|BUSINESS)$"));

    /// First, middle and last names
    pub static PERSON_NAME: Lazy<Regex> = Lazy::new(|| compile(r"^[[:word:]',\-. ]{1,50}$"));

    /// `YYYY-MM-DD`
    pub static DATE: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$"));

    /// `PASSPORT` or `NATIONAL_ID_CARD`
    pub static GOVERNMENT_ID_TYPE: Lazy<Regex> =
        Lazy::new(|| compile(r"^(?:PASSPORT|NATIONAL_ID_CARD)$"));

    /// Street address lines
    pub static ADDRESS_LINE: Lazy<Regex> =
        Lazy::new(|| compile(r"^[[:word:] #'(),\-./:;°]{1,100}$"));

    /// City, state/province and country names
    pub static REGION: Lazy<Regex> = Lazy::new(|| compile(r"^[[:word:] &'()\-.]{1,50}$"));

    /// Postal and ZIP codes
    pub static POSTAL_CODE: Lazy<Regex> = Lazy::new(|| compile(r"^[[:word:] \-]{1,16}$"));

    /// Legal and operating business names
    pub static BUSINESS_NAME: Lazy<Regex> =
        Lazy::new(|| compile(r"^[[:word:] !&'()+,\-./:;]{1,100}$"));

    /// Business registration number
    pub static BUSINESS_REGISTRATION_ID: Lazy<Regex> =
        Lazy::new(|| compile(r"^[[:word:] ()+\-./]{1,50}$"));

    /// `DIRECTOR`, `OWNER` or `OTHER`
    pub static BUSINESS_CONTACT_ROLE: Lazy<Regex> =
        Lazy::new(|| compile(r"^(?:DIRECTOR|OWNER|OTHER)$"));

    /// Two-character country code
    pub static COUNTRY_CODE: Lazy<Regex> = Lazy::new(|| compile(r"^[[:word:]]{2}$"));

    /// Three-character currency code
    pub static CURRENCY_CODE: Lazy<Regex> = Lazy::new(|| compile(r"^[[:word:]]{3}$"));

    /// Bank id accepted when creating a bank account: 6 letters then 5 alphanumerics
    pub static BANK_ID_CREATE: Lazy<Regex> =
        Lazy::new(|| compile(r"^[a-zA-Z]{6}[0-9a-zA-Z]{5}$"));

    /// Bank id accepted when updating a bank account, in SWIFT/BIC layout
    pub static BANK_ID_UPDATE: Lazy<Regex> =
        Lazy::new(|| compile(r"^[a-zA-Z]{4}[a-zA-Z]{2}[0-9a-zA-Z]{2}[0-9a-zA-Z]{3}$"));

    /// Bank account number or IBAN
    pub static BANK_ACCOUNT_ID: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z0-9-]{1,34}$"));

    /// Payment amount: 1 to 20 digits, no decimal point
    pub static AMOUNT: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{1,20}$"));

    /// Email address
    pub static EMAIL: Lazy<Regex> =
        Lazy::new(|| compile(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));

    /// Signed integer or decimal number
    pub static NUMERIC: Lazy<Regex> = Lazy::new(|| compile(r"^[-+]?[0-9]+(?:\.[0-9]+)?$"));

    /// ASCII letters only
    pub static ALPHA: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z]+$"));

    /// Every pattern, for eager compilation
    pub fn all() -> [&'static Lazy<Regex>; 20] {
        [
            &CLIENT_USER_ID,
            &PROFILE_TYPE,
            &PERSON_NAME,
            &DATE,
            &GOVERNMENT_ID_TYPE,
            &ADDRESS_LINE,
            &REGION,
            &POSTAL_CODE,
            &BUSINESS_NAME,
            &BUSINESS_REGISTRATION_ID,
            &BUSINESS_CONTACT_ROLE,
            &COUNTRY_CODE,
            &CURRENCY_CODE,
            &BANK_ID_CREATE,
            &BANK_ID_UPDATE,
            &BANK_ACCOUNT_ID,
            &AMOUNT,
            &EMAIL,
            &NUMERIC,
            &ALPHA,
        ]
    }
}

/// Compile every built-in pattern now instead of on first use
pub fn precompile() {
    for pattern in patterns::all() {
        Lazy::force(pattern);
    }
}

/// How a rule treats an empty value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Empty fails the rule
    Required,
    /// Empty passes the rule without further checks
    Optional,
}

impl Presence {
    /// Apply `pattern` to `value` under this presence mode
    pub fn matches(self, value: &str, pattern: &Regex) -> bool {
        match self {
            Presence::Required => required_and_matches(value, pattern),
            Presence::Optional => optional_and_matches(value, pattern),
        }
    }

    /// Whether the rule is skipped for `value`
    pub fn skips(self, value: &str) -> bool {
        self == Presence::Optional && value.is_empty()
    }
}

/// True iff the whole value matches `pattern`
pub fn matches_pattern(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value)
}

/// Value must be non-empty and match
pub fn required_and_matches(value: &str, pattern: &Regex) -> bool {
    !value.is_empty() && matches_pattern(value, pattern)
}

/// Empty always passes, anything else must match
pub fn optional_and_matches(value: &str, pattern: &Regex) -> bool {
    value.is_empty() || matches_pattern(value, pattern)
}

/// At most `max` characters
pub fn length_at_most(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Syntactically valid email address
pub fn is_valid_email(value: &str) -> bool {
    matches_pattern(value, &patterns::EMAIL)
}

/// 1 to 20 digits, no sign and no decimal point
pub fn is_numeric_string(value: &str) -> bool {
    matches_pattern(value, &patterns::AMOUNT)
}

/// State/province must be exactly two characters when `country` is `US`
///
/// For any other country only the pattern check applies, so this passes.
pub fn state_length_for_country(state: &str, country: &str) -> bool {
    country != UNITED_STATES || state.chars().count() == 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        precompile();
    }

    #[test]
    fn test_patterns_are_anchored() {
        assert!(matches_pattern("INDIVIDUAL", &patterns::PROFILE_TYPE));
        assert!(matches_pattern("BUSINESS", &patterns::PROFILE_TYPE));
        assert!(!matches_pattern("INDIVIDUALS", &patterns::PROFILE_TYPE));
        assert!(!matches_pattern("MY_BUSINESS", &patterns::PROFILE_TYPE));
        assert!(!matches_pattern("UNKNOWN", &patterns::PROFILE_TYPE));

        assert!(matches_pattern("OWNER", &patterns::BUSINESS_CONTACT_ROLE));
        assert!(!matches_pattern("DIRECTOR OWNER", &patterns::BUSINESS_CONTACT_ROLE));
    }

    #[test]
    fn test_required_and_optional() {
        assert!(!required_and_matches("", &patterns::REGION));
        assert!(optional_and_matches("", &patterns::REGION));
        assert!(required_and_matches("Moscow", &patterns::REGION));
        assert!(!optional_and_matches("Moscow$", &patterns::REGION));

        assert!(!Presence::Required.matches("", &patterns::POSTAL_CODE));
        assert!(Presence::Optional.matches("", &patterns::POSTAL_CODE));
        assert!(Presence::Optional.skips(""));
        assert!(!Presence::Optional.skips("94105"));
        assert!(!Presence::Required.skips(""));
    }

    #[test]
    fn test_word_characters_are_ascii() {
        assert!(matches_pattern("Alex", &patterns::PERSON_NAME));
        assert!(matches_pattern("O'Neil-Smith Jr.", &patterns::PERSON_NAME));
        assert!(!matches_pattern("Алекс", &patterns::PERSON_NAME));
        assert!(!matches_pattern("Alex$%", &patterns::PERSON_NAME));
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches_pattern(&"a".repeat(50), &patterns::REGION));
        assert!(!matches_pattern(&"a".repeat(51), &patterns::REGION));
        assert!(matches_pattern(&"x".repeat(75), &patterns::CLIENT_USER_ID));
        assert!(!matches_pattern(&"x".repeat(76), &patterns::CLIENT_USER_ID));
        assert!(length_at_most("abc", 3));
        assert!(!length_at_most("abcd", 3));
        assert!(length_at_most("°°°", 3));
    }

    #[test]
    fn test_address_line() {
        assert!(matches_pattern("Pushkina str, 12/54-1", &patterns::ADDRESS_LINE));
        assert!(matches_pattern("Apt #4; 10° N", &patterns::ADDRESS_LINE));
        assert!(!matches_pattern("575 Market St$%", &patterns::ADDRESS_LINE));
        assert!(!matches_pattern("Pushkina str, 12/54-1 &#", &patterns::ADDRESS_LINE));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("tst@test.com"));
        assert!(is_valid_email("qwe@ad.comm"));
        assert!(!is_valid_email("@test.com"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_numeric_string() {
        assert!(is_numeric_string("100"));
        assert!(is_numeric_string(&"9".repeat(20)));
        assert!(!is_numeric_string(&"9".repeat(21)));
        assert!(!is_numeric_string("10.50"));
        assert!(!is_numeric_string("-5"));
        assert!(!is_numeric_string(""));
    }

    #[test]
    fn test_bank_id_patterns() {
        assert!(matches_pattern("AsdGas12345", &patterns::BANK_ID_CREATE));
        assert!(!matches_pattern("123456789AS", &patterns::BANK_ID_CREATE));
        assert!(matches_pattern("DEUTDEFF500", &patterns::BANK_ID_UPDATE));
        assert!(!matches_pattern("DEUTDEFF", &patterns::BANK_ID_UPDATE));
    }

    #[test]
    fn test_state_length_depends_on_country() {
        assert!(state_length_for_country("NY", "US"));
        assert!(!state_length_for_country("New York", "US"));
        assert!(state_length_for_country("Ontario", "CA"));
        assert!(state_length_for_country("Ontario", ""));
    }
}
