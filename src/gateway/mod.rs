//! Resource gateways and the [`Hyperwallet`] facade
//!
//! A gateway maps one resource family onto REST calls. Create and update
//! operations validate their payload first and return the
//! [`ValidationError`](crate::error::ValidationError) untouched, without
//! reaching the network, when it is rejected. List operations send their
//! filters as-is.
//!
//! # Architecture
//!
//! - [`Hyperwallet`] - owns the shared transport and hands out gateways
//! - [`UsersGateway`] - users, authentication tokens, balances, receipts
//! - [`BankAccountsGateway`] - wire transfer bank accounts of a user
//! - [`PaypalAccountsGateway`] - PayPal transfer methods of a user
//! - [`PaymentsGateway`] - payments
//!
//! # Examples
//!
//! ```no_run
//! use hyperwallet::types::UserListQuery;
//! use hyperwallet::Hyperwallet;
//!
//! # async fn example() -> hyperwallet::Result<()> {
//! let hyperwallet = Hyperwallet::from_env()?;
//!
//! let users = hyperwallet
//!     .users()
//!     .list_users(&UserListQuery::new().with_page(0, 10))
//!     .await?;
//! for user in users.iter() {
//!     println!("{} {}", user.token, user.email);
//! }
//! # Ok(())
//! # }
//! ```

use crate::client::{HyperwalletClient, QueryPairs, Transport};
use crate::config::HyperwalletConfig;
use crate::error::ValidationError;
use crate::validation::Validate;
use crate::Result;
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

pub mod bank_accounts;
pub mod payments;
pub mod paypal_accounts;
pub mod users;


pub use bank_accounts::BankAccountsGateway;
pub use payments::PaymentsGateway;
pub use paypal_accounts::PaypalAccountsGateway;
pub use users::UsersGateway;

/// Entry point holding one transport shared by every gateway
#[derive(Clone)]
pub struct Hyperwallet {
    transport: Arc<dyn Transport>,
    program_token: String,
}

impl std::fmt::Debug for Hyperwallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hyperwallet")
            .field("program_token", &self.program_token)
            .field("transport", &"<transport>")
            .finish()
    }
}

impl Hyperwallet {
    /// Create a facade backed by [`HyperwalletClient`]
    pub fn new(config: HyperwalletConfig) -> Result<Self> {
        let client = HyperwalletClient::new(&config)?;
        Ok(Self {
            transport: Arc::new(client),
            program_token: config.program_token,
        })
    }

    /// Create a facade from `PROGRAM_TOKEN`, `API_USER_NAME` and `API_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Self::new(HyperwalletConfig::from_env()?)
    }

    /// Create a facade over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            program_token: String::new(),
        }
    }

    /// Set the program token reported by [`Hyperwallet::program_token`]
    pub fn with_program_token(mut self, program_token: impl Into<String>) -> Self {
        self.program_token = program_token.into();
        self
    }

    /// Program token from the configuration, empty if none was given
    pub fn program_token(&self) -> &str {
        &self.program_token
    }

    pub fn users(&self) -> UsersGateway {
        UsersGateway::new(self.transport.clone())
    }

    pub fn bank_accounts(&self) -> BankAccountsGateway {
        BankAccountsGateway::new(self.transport.clone())
    }

    pub fn paypal_accounts(&self) -> PaypalAccountsGateway {
        PaypalAccountsGateway::new(self.transport.clone())
    }

    pub fn payments(&self) -> PaymentsGateway {
        PaymentsGateway::new(self.transport.clone())
    }
}

/// Validate `payload`, then send it as the JSON body
pub(crate) async fn send_validated<P, R>(
    transport: &dyn Transport,
    method: Method,
    path: &str,
    payload: &P,
) -> Result<R>
where
    P: Validate + Serialize,
    R: DeserializeOwned,
{
    if let Err(err) = payload.validate() {
        log_rejection(&method, path, &err);
        return Err(err.into());
    }

    let body = serde_json::to_string(payload)?;
    fetch(transport, method, path, None, body).await
}

/// Execute one request and decode the response body
pub(crate) async fn fetch<R>(
    transport: &dyn Transport,
    method: Method,
    path: &str,
    query: Option<&QueryPairs>,
    body: String,
) -> Result<R>
where
    R: DeserializeOwned,
{
    let bytes = transport.execute(method, path, query, body).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn log_rejection(method: &Method, path: &str, err: &ValidationError) {
    match err {
        ValidationError::Structural(structural) => tracing::warn!(
            "{} {} rejected: {}.{} failed on '{}'",
            method,
            path,
            structural.payload,
            structural.field,
            structural.tag
        ),
        ValidationError::Rules(violations) => tracing::warn!(
            "{} {} rejected: {} field rule(s) failed",
            method,
            path,
            violations.len()
        ),
    }
}
