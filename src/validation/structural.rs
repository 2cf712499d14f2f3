//! Mandatory-field pass
//!
//! Runs before the pattern rules and stops at the first failing field, so a
//! payload missing `FirstName` reports exactly that and nothing else.

use super::rules::{self, patterns};
use crate::error::{StructuralError, StructuralTag};

/// One field of a payload's structural schema
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec<'a> {
    field: &'static str,
    value: &'a str,
    required: bool,
    formats: &'static [StructuralTag],
}

impl<'a> FieldSpec<'a> {
    /// Field that must be non-empty
    pub fn required(field: &'static str, value: &'a str) -> Self {
        Self {
            field,
            value,
            required: true,
            formats: &[],
        }
    }

    /// Field whose formats are only checked when it is set
    pub fn optional(field: &'static str, value: &'a str) -> Self {
        Self {
            field,
            value,
            required: false,
            formats: &[],
        }
    }

    /// Format constraints checked after presence, in order
    pub fn with_formats(mut self, formats: &'static [StructuralTag]) -> Self {
        self.formats = formats;
        self
    }

    fn first_failure(&self) -> Option<StructuralTag> {
        if self.value.is_empty() {
            return self.required.then_some(StructuralTag::Required);
        }
        self.formats
            .iter()
            .copied()
            .find(|tag| !format_holds(*tag, self.value))
    }
}

fn format_holds(tag: StructuralTag, value: &str) -> bool {
    match tag {
        StructuralTag::Required => !value.is_empty(),
        StructuralTag::Email => rules::is_valid_email(value),
        StructuralTag::Numeric => rules::matches_pattern(value, &patterns::NUMERIC),
        StructuralTag::Alpha => rules::matches_pattern(value, &patterns::ALPHA),
        StructuralTag::Uppercase => value.to_uppercase() == value,
    }
}

/// First field of `schema` that is missing or malformed
pub fn check_structure(
    payload: &'static str,
    schema: &[FieldSpec<'_>],
) -> Result<(), StructuralError> {
    for entry in schema {
        if let Some(tag) = entry.first_failure() {
            return Err(StructuralError::new(payload, entry.field, tag));
        }
    }
    Ok(())
}
