use crate::cli::Cli;
use anyhow::Result;
use authdog::ClientConfig;
use std::time::Duration;

/// Client configuration from the environment, with command-line overrides applied.
pub fn client_config(cli: &Cli) -> Result<ClientConfig> {
    let base = ClientConfig::from_env()?;
    Ok(apply_overrides(base, cli))
}

pub(crate) fn apply_overrides(mut config: ClientConfig, cli: &Cli) -> ClientConfig {
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(api_key) = &cli.api_key {
        config.api_key = Some(api_key.clone());
    }
    if let Some(ms) = cli.timeout_ms {
        config.timeout = Duration::from_millis(ms);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_environment_values() {
        let cli = Cli::try_parse_from([
            "authdog",
            "--api-key",
            "flag-key",
            "--timeout-ms",
            "1200",
            "logout",
        ])
        .unwrap();
        let base = ClientConfig::new("https://env.example.com").with_api_key("env-key");

        let config = apply_overrides(base, &cli);

        assert_eq!(config.base_url, "https://env.example.com");
        assert_eq!(config.api_key.as_deref(), Some("flag-key"));
        assert_eq!(config.timeout, Duration::from_millis(1200));
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::try_parse_from(["authdog", "logout"]).unwrap();
        let base = ClientConfig::default();
        assert_eq!(apply_overrides(base.clone(), &cli), base);
    }
}
