//! Request payloads, response resources and list filters
//!
//! Payloads mirror the provider's JSON bodies field for field. Response types
//! are plain read-only mirrors of what the API returns and are never validated.
//!
//! # Architecture
//!
//! - [`user`] - user payloads, users, balances, receipts
//! - [`bank_account`] - wire transfer bank accounts
//! - [`paypal_account`] - PayPal transfer methods
//! - [`payment`] - payments
//! - [`query`] - list filters rendered as query strings
//! - [`common`] - links and the generic [`Page`] list wrapper
//! - [`variant`] - [`Create`]/[`Update`] markers for shared field sets
//! - [`constants`] - enumerated values accepted by the API
//!
//! # Examples
//!
//! ```
//! use hyperwallet::types::{constants::profile_types, CreateUserData, UpdateUserData};
//!
//! let create = CreateUserData {
//!     client_user_id: "qwerty".to_string(),
//!     profile_type: profile_types::INDIVIDUAL.to_string(),
//!     ..Default::default()
//! };
//!
//! // An update only carries the fields that change
//! let patch = UpdateUserData {
//!     city: "Moscow".to_string(),
//!     ..Default::default()
//! };
//! # let _ = (create, patch);
//! ```

pub mod bank_account;
pub mod common;
pub mod constants;
pub mod payment;
pub mod paypal_account;
pub mod query;
pub mod user;
pub mod variant;

// Re-export commonly used types
pub use bank_account::{
    BankAccount, BankAccountData, BankAccountList, CreateBankAccountData, UpdateBankAccountData,
};
pub use common::{Link, Page, Params, DATETIME_FORMAT};
pub use payment::{CreatePaymentData, Payment, PaymentList};
pub use paypal_account::{
    CreatePaypalAccountData, PaypalAccount, PaypalAccountList, UpdatePaypalAccountData,
};
pub use query::{
    BankAccountListQuery, ListQuery, PaymentListQuery, PaypalAccountListQuery,
    UserBalanceListQuery, UserListQuery, UserReceiptListQuery,
};
pub use user::{
    AuthenticationToken, CreateUserData, ReceiptDetails, UpdateUserData, User, UserBalance,
    UserBalanceList, UserData, UserList, UserReceipt, UserReceiptList,
};
pub use variant::{Create, Update, Variant};
