//! Authentication credentials for the Binance API
//!
//! Implements HMAC-SHA256 signing as required by Binance's `TRADE`,
//! `USER_DATA` and `MARGIN` endpoints.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`
//!
//! The secret is only ever used as an HMAC key; it is never sent over the wire.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// API credentials for authenticated requests
///
/// The secret is optional: key-only endpoints (listen-key management,
/// some market data) need just the `X-MBX-APIKEY` header.
pub struct Credentials {
    /// API key (sent as a header)
    api_key: String,
    /// API secret (HMAC key, zeroized on drop)
    api_secret: Option<SecretBox<Vec<u8>>>,
}

impl Credentials {
    /// Create credentials from an API key and secret
    ///
    /// # Errors
    /// Returns `InvalidCredentials` if either value is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = non_empty_key(api_key.into())?;
        let api_secret = api_secret.into();

        if api_secret.trim().is_empty() {
            return Err(AuthError::InvalidCredentials(
                "API secret is empty".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            api_secret: Some(SecretBox::new(Box::new(api_secret.into_bytes()))),
        })
    }

    /// Create credentials that can only call key-only endpoints
    pub fn api_key_only(api_key: impl Into<String>) -> AuthResult<Self> {
        Ok(Self {
            api_key: non_empty_key(api_key.into())?,
            api_secret: None,
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BINANCE_API_KEY` (required) and `BINANCE_API_SECRET` (optional).
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;

        match std::env::var(API_SECRET_ENV) {
            Ok(secret) if !secret.trim().is_empty() => Self::new(api_key, secret),
            _ => {
                tracing::debug!("{} not set, credentials are key-only", API_SECRET_ENV);
                Self::api_key_only(api_key)
            }
        }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Check whether a secret is available for signing
    pub fn has_secret(&self) -> bool {
        self.api_secret.is_some()
    }

    /// Current time in milliseconds since the Unix epoch
    pub fn timestamp_ms() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    /// Sign a serialized query string
    ///
    /// Binance signature algorithm:
    /// 1. HMAC-SHA256(api_secret, query_string)
    /// 2. Lowercase hex encode result
    ///
    /// # Arguments
    /// * `payload` - The exact `key=value&...` string that will be sent,
    ///   without the `signature` field
    ///
    /// # Errors
    /// Returns `MissingSecret` for key-only credentials.
    pub fn sign(&self, payload: &str) -> AuthResult<String> {
        let secret = self.api_secret.as_ref().ok_or(AuthError::MissingSecret)?;

        let mut mac = HmacSha256::new_from_slice(secret.expose_secret())
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
        mac.update(payload.as_bytes());

        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

fn non_empty_key(api_key: String) -> AuthResult<String> {
    if api_key.trim().is_empty() {
        return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
    }
    Ok(api_key)
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: self
                .api_secret
                .as_ref()
                .map(|s| SecretBox::new(Box::new(s.expose_secret().clone()))),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", shown))
            .field(
                "api_secret",
                &if self.has_secret() { "[REDACTED]" } else { "None" },
            )
            .finish()
    }
}

/// Signer for a single request
///
/// Fixes the timestamp at construction so the value placed in the
/// parameter map and the value covered by the signature are the same.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    timestamp: u64,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer stamped with the current time
    ///
    /// # Errors
    /// Returns `MissingSecret` if the credentials cannot sign.
    pub fn new(credentials: &'a Credentials) -> AuthResult<Self> {
        Self::with_timestamp(credentials, Credentials::timestamp_ms())
    }

    /// Create a signer with a fixed timestamp
    pub fn with_timestamp(credentials: &'a Credentials, timestamp: u64) -> AuthResult<Self> {
        if !credentials.has_secret() {
            return Err(AuthError::MissingSecret);
        }
        Ok(Self {
            credentials,
            timestamp,
        })
    }

    /// Get the timestamp for this request
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the serialized query string
    pub fn sign(&self, payload: &str) -> AuthResult<String> {
        self.credentials.sign(payload)
    }
}
