//! Span helpers for CLI operations.

use tracing::Span;

/// Create a span for one CLI command.
///
/// # Example
/// ```
/// use authdog_telemetry::command_span;
/// let span = command_span("userinfo", "https://api.authdog.com");
/// let _enter = span.enter();
/// ```
pub fn command_span(command: &str, base_url: &str) -> Span {
    tracing::info_span!("authdog.command", command = command, base_url = base_url)
}

/// Create a span for a session bootstrap run.
pub fn session_span(path: &str) -> Span {
    tracing::info_span!("authdog.session", url.path = path)
}
