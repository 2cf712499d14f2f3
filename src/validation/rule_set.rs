//! Ordered collection of pattern rules for one payload

use super::age::{self, ADULT_AGE};
use super::rules::{self, patterns, Presence};
use crate::error::{RuleViolations, ValidationError};
use chrono::NaiveDate;
use regex::Regex;

/// Runs rules in declaration order and keeps every failure
///
/// Rule methods follow the set's [`Presence`] unless their name says
/// otherwise: create payloads use [`Presence::Required`], update payloads use
/// [`Presence::Optional`] so that unset fields are skipped.
#[derive(Debug)]
pub struct RuleSet {
    presence: Presence,
    violations: RuleViolations,
}

impl RuleSet {
    pub fn new(presence: Presence) -> Self {
        Self {
            presence,
            violations: RuleViolations::new(),
        }
    }

    /// Record `field` as bad unless `passed`
    pub fn check(&mut self, field: &str, passed: bool) -> &mut Self {
        if !passed {
            self.violations.push(field);
        }
        self
    }

    /// Whole-value pattern match
    pub fn pattern(&mut self, field: &str, value: &str, pattern: &Regex) -> &mut Self {
        let passed = self.presence.matches(value, pattern);
        self.check(field, passed)
    }

    /// Pattern match that passes on empty values for creates too
    pub fn optional_pattern(&mut self, field: &str, value: &str, pattern: &Regex) -> &mut Self {
        self.check(field, rules::optional_and_matches(value, pattern))
    }

    /// Value must equal `expected`
    pub fn equals(&mut self, field: &str, value: &str, expected: &str) -> &mut Self {
        let passed = self.presence.skips(value) || value == expected;
        self.check(field, passed)
    }

    /// At most `max` characters
    pub fn max_length(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        let passed = self.presence.skips(value)
            || (!value.is_empty() && rules::length_at_most(value, max));
        self.check(field, passed)
    }

    /// State/province pattern plus the two-character rule for `US`
    pub fn state_province(&mut self, field: &str, state: &str, country: &str) -> &mut Self {
        let presence = self.presence;
        self.state_province_with(presence, field, state, country)
    }

    /// [`RuleSet::state_province`] for a field that may always be left empty
    pub fn optional_state_province(
        &mut self,
        field: &str,
        state: &str,
        country: &str,
    ) -> &mut Self {
        self.state_province_with(Presence::Optional, field, state, country)
    }

    fn state_province_with(
        &mut self,
        presence: Presence,
        field: &str,
        state: &str,
        country: &str,
    ) -> &mut Self {
        let passed = presence.skips(state)
            || (presence.matches(state, &patterns::REGION)
                && rules::state_length_for_country(state, country));
        self.check(field, passed)
    }

    /// `YYYY-MM-DD` date of someone at least eighteen years old on `today`
    ///
    /// A malformed date and an under-age date produce the same single message.
    pub fn adult_birth_date(&mut self, field: &str, value: &str, today: NaiveDate) -> &mut Self {
        let passed = self.presence.skips(value) || is_adult_birth_date(value, today);
        self.check(field, passed)
    }

    /// The collected violations, if any
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Rules(self.violations))
        }
    }
}

fn is_adult_birth_date(value: &str, today: NaiveDate) -> bool {
    if !rules::matches_pattern(value, &patterns::DATE) {
        return false;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(birth) => age::age_on(birth, today) >= ADULT_AGE,
        Err(_) => false,
    }
}
