//! Command implementations. Each returns the text to print on stdout.

use crate::cli::{Cli, Commands};
use crate::config::client_config;
use anyhow::{Context, Result};
use authdog::session::{self, SessionSnapshot};
use authdog::{AuthdogClient, ClientConfig};
use authdog_telemetry::{command_span, session_span};
use serde_json::json;
use tracing::Instrument;
use url::Url;

pub async fn run(cli: Cli) -> Result<String> {
    let config = client_config(&cli)?;
    let span = command_span(command_name(&cli.command), &config.base_url);

    match cli.command {
        Commands::Userinfo { token, pretty } => {
            userinfo(config, &token, pretty).instrument(span).await
        }
        Commands::Session { url, storage, fetch } => {
            let snapshot: SessionSnapshot = storage.into_iter().collect();
            bootstrap(config, &url, &snapshot, fetch).instrument(span).await
        }
        Commands::Logout { tenant_uri } => {
            let _enter = span.enter();
            logout(&tenant_uri)
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Userinfo { .. } => "userinfo",
        Commands::Session { .. } => "session",
        Commands::Logout { .. } => "logout",
    }
}

pub async fn userinfo(config: ClientConfig, token: &str, pretty: bool) -> Result<String> {
    let client = AuthdogClient::new(config)?;
    let info = client.fetch_user_info(token).await?;
    let out =
        if pretty { serde_json::to_string_pretty(&info)? } else { serde_json::to_string(&info)? };
    Ok(out)
}

pub async fn bootstrap(
    config: ClientConfig,
    location: &str,
    storage: &SessionSnapshot,
    fetch: bool,
) -> Result<String> {
    let location = Url::parse(location).with_context(|| format!("invalid page URL '{location}'"))?;
    let boot = {
        let span = session_span(location.path());
        let _enter = span.enter();
        session::initialize_session(&location, storage)?
    };

    let mut out = serde_json::to_value(&boot)?;
    if fetch {
        let client = AuthdogClient::new(config)?;
        out["user"] = client.fetch_application_user(&boot.credentials).await?.unwrap_or_default();
    }
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn logout(tenant_uri: &str) -> Result<String> {
    let effects = session::logout(tenant_uri);
    Ok(serde_json::to_string_pretty(&json!({ "tenant": tenant_uri, "effects": effects }))?)
}
