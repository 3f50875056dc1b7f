//! # authdog-cli
//!
//! Command-line front end for the Authdog SDK.
//!
//! ```text
//! authdog userinfo --token <TOKEN> [--pretty]
//! authdog session --url <URL> [--storage KEY=VALUE]... [--fetch]
//! authdog logout [--tenant-uri <URI>]
//! ```
//!
//! Connection settings come from `AUTHDOG_BASE_URL`, `AUTHDOG_API_KEY` and
//! `AUTHDOG_TIMEOUT_MS` (a `.env` file is honoured) and can be overridden
//! with `--base-url`, `--api-key` and `--timeout-ms`.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Commands};

/// Process exit code for a failed command.
///
/// Rejected tokens exit with 2 so scripts can tell them apart from other
/// failures, which exit with 1.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<authdog::AuthdogError>() {
        Some(e) if e.is_authentication_error() => 2,
        _ => 1,
    }
}
