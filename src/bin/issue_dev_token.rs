// src/bin/issue_dev_token.rs
//
// Mints an access token for a local user id:
//   cargo run --bin issue_dev_token -- 42
use anyhow::{Context, Result, bail};
use profile_service::{
    application::{dto::TokenSubject, ports::security::TokenManager},
    config::AppConfig,
    domain::user::UserId,
    infrastructure::security::token::BiscuitTokenManager,
};

#[tokio::main]
async fn main() -> Result<()> {
    let raw_id = match std::env::args().nth(1) {
        Some(value) => value,
        None => bail!("usage: issue_dev_token <user-id>"),
    };
    let id: i64 = raw_id
        .parse()
        .with_context(|| format!("user id must be an integer, got {raw_id}"))?;
    let user_id = UserId::new(id)?;

    let config = AppConfig::from_env()?;
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let issued = manager.issue(TokenSubject { user_id }).await?;

    eprintln!("expires at {} ({}s)", issued.expires_at, issued.expires_in);
    println!("{}", issued.token);
    Ok(())
}
