use serde::{Deserialize, Serialize};

/// Unified error type for all Riot API operations.
///
/// All variants are serializable for structured error reporting. The raw
/// response body is preserved where the API supplied one, so callers can
/// surface the provider's own message verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum RiotError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The requested identity or summoner does not exist (HTTP 404).
    NotFound {
        /// Human-readable description of what was looked up.
        resource: String,
    },

    /// The configured API key was rejected (HTTP 401/403).
    InvalidApiKey {
        /// Original error body from the API, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error body from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the API's response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Any other non-2xx response, carried verbatim.
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl RiotError {
    /// Whether the error is expected behavior (bad input, missing resource),
    /// used for log-level selection: `warn` when `true`, `error` otherwise.
    ///
    /// Update this method when adding variants.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::InvalidApiKey { .. } | Self::RateLimited { .. }
        )
    }
}

impl std::fmt::Display for RiotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "[riot] Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "[riot] Request timeout: {detail}"),
            Self::NotFound { resource } => write!(f, "[riot] {resource} not found"),
            Self::InvalidApiKey { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "[riot] Invalid API key: {msg}")
                } else {
                    write!(f, "[riot] Invalid API key")
                }
            }
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "[riot] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[riot] Rate limited")
                }
            }
            Self::ParseError { detail } => write!(f, "[riot] Parse error: {detail}"),
            Self::ApiError { status, body } => write!(f, "[riot] HTTP {status}: {body}"),
        }
    }
}

impl std::error::Error for RiotError {}

/// Convenience type alias for `Result<T, RiotError>`.
pub type Result<T> = std::result::Result<T, RiotError>;
