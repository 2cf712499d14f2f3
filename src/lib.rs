//! # Hyperwallet Rust Client
//!
//! A typed, async client for the Hyperwallet payouts REST API (v3), with local
//! validation of every create/update payload before it is sent.
//!
//! ## Features
//!
//! - **Users**: create, retrieve, update and list users, issue authentication
//!   tokens, list balances and receipts
//! - **Transfer methods**: wire bank accounts and PayPal accounts per user
//! - **Payments**: create, retrieve and list payments
//! - **Local validation**: a mandatory-field pass followed by field pattern
//!   rules, so malformed payloads never reach the network
//! - **Pluggable transport**: the [`Transport`] trait decouples gateways from
//!   `reqwest`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hyperwallet::types::{constants::profile_types, CreateUserData};
//! use hyperwallet::{Hyperwallet, HyperwalletConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HyperwalletConfig::new("restapiuser@12345", "password")
//!         .with_program_token("prg-5cd8a525-0553-4e30-8e47-c5440b743855");
//!     let hyperwallet = Hyperwallet::new(config)?;
//!
//!     let user = hyperwallet
//!         .users()
//!         .create_user(&CreateUserData {
//!             program_token: hyperwallet.program_token().to_string(),
//!             client_user_id: "qwerty".to_string(),
//!             profile_type: profile_types::INDIVIDUAL.to_string(),
//!             first_name: "Alex".to_string(),
//!             last_name: "Grete".to_string(),
//!             date_of_birth: "1988-01-05".to_string(),
//!             email: "tst@test.com".to_string(),
//!             address_line1: "Pushkina str, 12/54-1".to_string(),
//!             city: "Moscow".to_string(),
//!             state_province: "NY".to_string(),
//!             country: "US".to_string(),
//!             postal_code: "117968".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("Created user {}", user.token);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Request payloads, response resources and list filters
//! - **`validation`**: Field rule engine and per-resource validators
//! - **`gateway`**: Resource gateways and the [`Hyperwallet`] facade
//! - **`client`**: HTTP transport
//! - **`config`**: Credentials, base URL and timeout
//! - **`error`**: Error handling

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use client::{HyperwalletClient, Transport};
pub use config::HyperwalletConfig;
pub use error::{HyperwalletError, Result, ValidationError};
pub use gateway::{
    BankAccountsGateway, Hyperwallet, PaymentsGateway, PaypalAccountsGateway, UsersGateway,
};
pub use validation::Validate;

/// Current version of the Hyperwallet client library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// REST API version targeted by this client
pub const API_VERSION: &str = "v3";
