//! Error types for the Hyperwallet client
//!
//! Two families of errors come out of this crate:
//!
//! - [`ValidationError`] is produced locally, before any request is sent, when
//!   a create/update payload is rejected. It has exactly two shapes, a
//!   [`StructuralError`] naming the first missing or malformed mandatory field,
//!   and [`RuleViolations`] listing every failing pattern rule in declaration
//!   order.
//! - Everything else ([`HyperwalletError::Http`], [`HyperwalletError::Api`],
//!   [`HyperwalletError::Serialization`], ...) comes from the plumbing around
//!   the HTTP call.

use std::fmt;

/// Result type alias for Hyperwallet operations
pub type Result<T> = std::result::Result<T, HyperwalletError>;

/// Main error type for the Hyperwallet client
#[derive(Debug, thiserror::Error)]
pub enum HyperwalletError {
    /// The payload was rejected before any request was made
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network failure, timeout or other transport-level error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code
    #[error("API request failed with status {status}: {body}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Raw response body
        body: String,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured base URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A monetary amount in a response could not be parsed
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl HyperwalletError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an API status error
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create an invalid amount error
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Whether this error was raised by local payload validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The validation error, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Rejection of a create/update payload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A mandatory field is missing or structurally malformed
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// One or more pattern rules failed
    #[error(transparent)]
    Rules(#[from] RuleViolations),
}

impl ValidationError {
    /// The structural error, if the first phase failed
    pub fn as_structural(&self) -> Option<&StructuralError> {
        match self {
            Self::Structural(err) => Some(err),
            Self::Rules(_) => None,
        }
    }

    /// The rule violations, if the second phase failed
    pub fn as_rules(&self) -> Option<&RuleViolations> {
        match self {
            Self::Rules(violations) => Some(violations),
            Self::Structural(_) => None,
        }
    }
}

/// Constraint a mandatory-field check can fail on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralTag {
    /// Field must be non-empty
    Required,
    /// Field must be a syntactically valid email address
    Email,
    /// Field must be a number (optional sign, optional decimal part)
    Numeric,
    /// Field must contain ASCII letters only
    Alpha,
    /// Field must not contain lowercase letters
    Uppercase,
}

impl StructuralTag {
    /// Tag name as it appears in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            StructuralTag::Required => "required",
            StructuralTag::Email => "email",
            StructuralTag::Numeric => "numeric",
            StructuralTag::Alpha => "alpha",
            StructuralTag::Uppercase => "uppercase",
        }
    }
}

impl fmt::Display for StructuralTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First mandatory field that failed the structural pass
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Key: '{payload}.{field}' Error:Field validation for '{field}' failed on the '{tag}' tag")]
pub struct StructuralError {
    /// Payload type name, e.g. `CreateUserData`
    pub payload: &'static str,
    /// Field name, e.g. `FirstName`
    pub field: &'static str,
    /// Constraint that failed
    pub tag: StructuralTag,
}

impl StructuralError {
    /// Create a new structural error
    pub fn new(payload: &'static str, field: &'static str, tag: StructuralTag) -> Self {
        Self {
            payload,
            field,
            tag,
        }
    }
}

/// Ordered list of failed pattern rules
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", .messages.join("\n"))]
pub struct RuleViolations {
    messages: Vec<String>,
}

impl RuleViolations {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `Bad value for <field>` message
    pub fn push(&mut self, field: &str) {
        self.messages.push(format!("Bad value for {}", field));
    }

    /// Messages in the order the rules were declared
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether no rule failed
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of failed rules
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether a message was recorded for `field`
    pub fn contains(&self, field: &str) -> bool {
        let expected = format!("Bad value for {}", field);
        self.messages.iter().any(|message| *message == expected)
    }
}
