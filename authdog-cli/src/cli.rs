use authdog::DEFAULT_BASE_URL;
use authdog_telemetry::LogFormat;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "authdog")]
#[command(version, about = "Authdog API command-line client", long_about = None)]
pub struct Cli {
    /// Service base URL (overrides AUTHDOG_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Static API key (overrides AUTHDOG_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Request timeout in milliseconds (overrides AUTHDOG_TIMEOUT_MS)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Log output format: pretty or json
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the profile behind an access token
    Userinfo {
        /// Access token sent as a bearer credential
        #[arg(short, long)]
        token: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Recover session credentials from a page URL and stored values
    Session {
        /// Page URL, including its query string
        #[arg(long)]
        url: String,

        /// Stored session value as KEY=VALUE (repeatable)
        #[arg(long = "storage", value_parser = parse_key_val)]
        storage: Vec<(String, String)>,

        /// Also fetch the application user with the recovered credentials
        #[arg(long)]
        fetch: bool,
    },

    /// Show the effects of logging out
    Logout {
        /// Tenant the session belongs to
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        tenant_uri: String,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) =
        s.split_once('=').ok_or_else(|| format!("invalid KEY=VALUE: no '=' in '{s}'"))?;
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
