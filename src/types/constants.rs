//! Enumerated values accepted by the API

/// User and bank account profile types
pub mod profile_types {
    /// Individual profile
    pub const INDIVIDUAL: &str = "INDIVIDUAL";
    /// Business profile
    pub const BUSINESS: &str = "BUSINESS";
    /// Placeholder returned for unknown profiles, never accepted on input
    pub const UNKNOWN: &str = "UNKNOWN";

    /// Check if a profile type is accepted on input
    pub fn is_supported(profile_type: &str) -> bool {
        matches!(profile_type, INDIVIDUAL | BUSINESS)
    }
}

/// Roles of a business contact
pub mod business_contact_roles {
    pub const DIRECTOR: &str = "DIRECTOR";
    pub const OWNER: &str = "OWNER";
    pub const OTHER: &str = "OTHER";
}

/// Kinds of government identification
pub mod government_id_types {
    pub const PASSPORT: &str = "PASSPORT";
    pub const NATIONAL_ID_CARD: &str = "NATIONAL_ID_CARD";
}

/// Legal forms of a business
pub mod business_types {
    pub const CORPORATION: &str = "CORPORATION";
    pub const PARTNERSHIP: &str = "PARTNERSHIP";
    pub const PRIVATE_COMPANY: &str = "PRIVATE_COMPANY";
}

/// Transfer method types
pub mod transfer_method_types {
    /// Bank account reached by wire transfer
    pub const WIRE_ACCOUNT: &str = "WIRE_ACCOUNT";
    /// PayPal account
    pub const PAYPAL_ACCOUNT: &str = "PAYPAL_ACCOUNT";
}

/// Country code that makes state/province a two-letter abbreviation
pub const UNITED_STATES: &str = "US";
