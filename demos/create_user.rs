//! Create a Hyperwallet user
//!
//! Reads `API_USER_NAME`, `API_PASSWORD`, `PROGRAM_TOKEN` and optionally
//! `API_BASE_URL` from the environment or a `.env` file, validates a sample
//! individual user and, if it passes, creates it in the sandbox.
//!
//! Pass `--dry-run` to stop after local validation.

use hyperwallet::types::{constants::profile_types, CreateUserData};
use hyperwallet::{Hyperwallet, HyperwalletConfig, HyperwalletError, Validate};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let dry_run = std::env::args().any(|arg| arg == "--dry-run");

    let config = HyperwalletConfig::from_env()?;
    println!("Using {} as {:?}", config.base_url, config.username);

    let user = CreateUserData {
        program_token: config.program_token.clone(),
        client_user_id: format!("demo-{}", chrono::Utc::now().timestamp()),
        profile_type: profile_types::INDIVIDUAL.to_string(),
        first_name: "Alex".to_string(),
        last_name: "Grete".to_string(),
        date_of_birth: "1988-01-05".to_string(),
        email: "tst@test.com".to_string(),
        address_line1: "Pushkina str, 12/54-1".to_string(),
        city: "Moscow".to_string(),
        state_province: "NY".to_string(),
        country: "US".to_string(),
        postal_code: "117968".to_string(),
        ..Default::default()
    };

    if let Err(e) = user.validate() {
        eprintln!("Payload rejected:\n{}", e);
        return Ok(());
    }
    println!("Payload is valid");

    if dry_run {
        return Ok(());
    }

    let hyperwallet = Hyperwallet::new(config)?;
    match hyperwallet.users().create_user(&user).await {
        Ok(created) => {
            println!("Created user {} ({})", created.token, created.status);
            let token = hyperwallet
                .users()
                .create_authentication_token(&created.token)
                .await?;
            println!("Authentication token: {}", token.value);
        }
        Err(HyperwalletError::Api { status, body }) => {
            eprintln!("API returned {}: {}", status, body);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
