//! # Authdog Telemetry
//!
//! Structured logging for the Authdog SDK and CLI, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust
//! use authdog_telemetry::{init_telemetry, info, instrument};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     init_telemetry("authdog-cli")?;
//!
//!     #[instrument]
//!     async fn fetch() {
//!         info!("fetching userinfo");
//!     }
//!     Ok(())
//! }
//! ```

pub mod init;
pub mod spans;

// Re-export tracing macros for convenience
pub use tracing::{Span, debug, error, info, instrument, trace, warn};

pub use init::{LogFormat, init_telemetry, init_telemetry_with_format, init_test_telemetry};
pub use spans::*;
