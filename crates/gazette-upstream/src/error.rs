//! Error types for the news provider client.
//!
//! Messages never contain the API key: request URLs are stripped from
//! transport errors before they are stored.

/// Errors that can occur while fetching articles from the provider.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The provider did not answer within the configured timeout.
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The provider answered with a body that is not a search response.
    #[error("malformed provider response: {0}")]
    Decode(String),

    /// The client could not be constructed.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl UpstreamError {
    /// Creates a new status error, truncating long bodies.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        const MAX_BODY: usize = 256;

        let mut body = body.into();
        if body.len() > MAX_BODY {
            let cut = (0..=MAX_BODY)
                .rev()
                .find(|i| body.is_char_boundary(*i))
                .unwrap_or(0);
            body.truncate(cut);
            body.push_str("...");
        }

        Self::Status { status, body }
    }

    /// Converts a transport error, dropping the URL (it carries the token).
    pub fn from_transport(err: reqwest::Error, timeout_seconds: u64) -> Self {
        if err.is_timeout() {
            return Self::Timeout {
                seconds: timeout_seconds,
            };
        }
        Self::Request(err.without_url().to_string())
    }

    /// Returns true if this is a transient error that might succeed on retry.
    ///
    /// The server never retries on its own; this is exposed for logging.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request(_) | Self::Timeout { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Decode(_) | Self::Config(_) => false,
        }
    }
}
