//! Issue a viewer token for local development.
//!
//! Usage: `issue_viewer_token <user_id> <username> <role> [resource:action ...]`
use anyhow::{Context, Result, bail};
use kb_display::application::{dto::TokenSubject, ports::security::TokenManager};
use kb_display::config::AppConfig;
use kb_display::domain::user::{Capability, Role, UserId};
use kb_display::infrastructure::security::token::BiscuitTokenManager;
use std::collections::HashSet;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [user_id, username, role, extra @ ..] = args.as_slice() else {
        bail!("usage: issue_viewer_token <user_id> <username> <role> [resource:action ...]");
    };

    let user_id: i64 = user_id.parse().context("user_id must be an integer")?;
    let role: Role = role
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown role '{role}'"))?;

    let mut capabilities = HashSet::new();
    for entry in extra {
        let (resource, action) = entry
            .split_once(':')
            .with_context(|| format!("capability '{entry}' must be resource:action"))?;
        capabilities.insert(Capability::new(resource, action));
    }

    let config = AppConfig::from_env()?;
    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let token = manager
        .issue(TokenSubject {
            user_id: UserId::new(user_id)?,
            username: username.clone(),
            role,
            capabilities,
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&token)?);
    Ok(())
}
