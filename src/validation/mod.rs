//! Local validation of create/update payloads
//!
//! Every payload is checked in two phases before it is sent:
//!
//! 1. A structural pass over the mandatory fields. It stops at the first
//!    missing or malformed field and reports it as a
//!    [`StructuralError`](crate::error::StructuralError).
//! 2. A pattern pass over every field with a rule. It runs only when the
//!    structural pass succeeded and reports all failures, in declaration
//!    order, as [`RuleViolations`](crate::error::RuleViolations).
//!
//! Update payloads use the same rules as creates, but unset (empty) fields
//! are skipped.
//!
//! # Examples
//!
//! ```
//! use hyperwallet::types::CreatePaypalAccountData;
//! use hyperwallet::validation::Validate;
//!
//! let data = CreatePaypalAccountData::new("US", "USDUSD", "qwe@ad.comm");
//! let err = data.validate().unwrap_err();
//! assert_eq!(err.to_string(), "Bad value for TransferMethodCurrency");
//! ```

pub mod age;
pub mod rule_set;
pub mod rules;
pub mod structural;

mod bank_account;
mod payment;
mod paypal_account;
mod user;

use crate::error::ValidationError;

pub use payment::CLIENT_PAYMENT_ID_MAX;
pub use rule_set::RuleSet;
pub use rules::Presence;
pub use structural::{check_structure, FieldSpec};

/// A payload that can be checked locally before it is sent
pub trait Validate {
    /// Run the structural pass, then the pattern pass
    fn validate(&self) -> Result<(), ValidationError>;
}
