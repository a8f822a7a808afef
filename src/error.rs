use reqwest::StatusCode;
use thiserror::Error;

/// Startup configuration problems. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("OPENAI_API_KEY environment variable is empty")]
    EmptyApiKey,
}

/// Clipboard access failures. Fatal wherever they occur; there is no
/// recovery path once the clipboard cannot be read.
#[derive(Debug, Error)]
#[error("failed to read clipboard: {0}")]
pub struct ClipboardError(#[from] pub arboard::Error);

/// Failures of a single completion call. Recoverable; the loop logs
/// these and keeps going.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Network, TLS, timeout or response-decoding failure.
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status; carries the raw response body as diagnostic text.
    #[error("completion API returned {status}: {body}")]
    Api { status: StatusCode, body: String },
}
