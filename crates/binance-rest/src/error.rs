//! Error types for REST API operations

use binance_auth::AuthError;
use binance_types::{BinanceErrorCode, RecoveryStrategy};
use serde::Deserialize;

/// Errors that can occur during REST API operations
///
/// `MissingParameter`, `InvalidParameter` and `Configuration` are raised
/// before anything goes on the wire. Nothing is retried automatically;
/// [`RestError::recovery_strategy`] is a hint for the caller's own policy.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// A required parameter was absent or empty
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// A parameter was present but unacceptable
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The client is not set up for this call (no key, no secret, bad URL)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Binance answered with a non-2xx status and an error body
    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Exchange error code, e.g. -1121
        code: i64,
        /// Exchange error message
        message: String,
    },

    /// The request did not produce a usable exchange response
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A successful response body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Network-level failures
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, TLS, timeout or body read failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Non-2xx status without a structured error body
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
}

/// Binance error body: `{"code": -1121, "msg": "Invalid symbol."}`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

impl From<reqwest::Error> for RestError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(TransportError::Http(e))
    }
}

impl From<AuthError> for RestError {
    fn from(e: AuthError) -> Self {
        Self::Configuration(e.to_string())
    }
}

impl RestError {
    /// Build an error from a non-2xx response
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(err) => Self::Api {
                status,
                code: err.code,
                message: err.msg,
            },
            Err(_) => Self::Transport(TransportError::Status {
                status,
                body: body.to_string(),
            }),
        }
    }

    /// HTTP status, if a response was received
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(TransportError::Status { status, .. }) => Some(*status),
            Self::Transport(TransportError::Http(e)) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Known exchange error code, if any
    pub fn error_code(&self) -> Option<BinanceErrorCode> {
        match self {
            Self::Api { code, .. } => BinanceErrorCode::from_code(*code),
            _ => None,
        }
    }

    /// Get the recovery strategy for this error
    pub fn recovery_strategy(&self) -> RecoveryStrategy {
        match self {
            Self::Api { status, code, .. } => match BinanceErrorCode::from_code(*code) {
                Some(known) => known.recovery_strategy(),
                None => status_strategy(*status),
            },
            Self::Transport(TransportError::Status { status, .. }) => status_strategy(*status),
            Self::Transport(TransportError::Http(e)) if e.is_timeout() || e.is_connect() => {
                RecoveryStrategy::service_retry()
            }
            Self::Transport(TransportError::Http(_)) => RecoveryStrategy::Manual,
            Self::MissingParameter(_) | Self::InvalidParameter(_) => RecoveryStrategy::Skip,
            Self::Configuration(_) | Self::Parse(_) => RecoveryStrategy::Fatal,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        self.recovery_strategy().allows_retry()
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.http_status(), Some(418 | 429))
            || self.error_code().is_some_and(|c| c.is_rate_limit())
    }
}

fn status_strategy(status: u16) -> RecoveryStrategy {
    match status {
        // 418 is an IP ban after ignoring 429s
        418 | 429 => RecoveryStrategy::rate_limit_backoff(),
        401 | 403 => RecoveryStrategy::Reauthenticate,
        500..=599 => RecoveryStrategy::service_retry(),
        _ => RecoveryStrategy::Manual,
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
