//! # authdog
//!
//! Rust client for the Authdog authentication service.
//!
//! ## Crate Organization
//!
//! - **`client`** - [`AuthdogClient`], the async `/v1/userinfo` client
//! - **`config`** - [`ClientConfig`] and environment loading
//! - **`error`** - [`AuthdogError`] and its two specialisations
//! - **`types`** - the typed userinfo payload
//! - **`session`** - browser session bootstrap as pure functions
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use authdog::{AuthdogClient, AuthdogError, ClientConfig};
//!
//! let client = AuthdogClient::new(ClientConfig::from_env()?)?;
//! match client.fetch_user_info(&token).await {
//!     Ok(info) => println!("hello {}", info.user.display_name),
//!     Err(AuthdogError::Authentication(e)) => eprintln!("login again: {e}"),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
mod response;
pub mod session;
pub mod types;

pub use client::{AuthdogClient, AuthdogClientBuilder, DEFAULT_USER_AGENT};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, AuthdogError, AuthenticationError, Result};
pub use response::{ErrorBody, classify_response};
pub use session::Credentials;
pub use types::{
    Email, ErrorResponse, Meta, Names, Photo, Session, User, UserInfoResponse, Verification,
};
