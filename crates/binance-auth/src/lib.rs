//! Credentials and request signing for the Binance API
//!
//! Binance authenticates private endpoints with an API key header plus an
//! HMAC-SHA256 signature over the request's query string. This crate owns
//! both halves and keeps the secret out of logs and memory dumps.
//!
//! # Example
//!
//! ```no_run
//! use binance_auth::{Credentials, RequestSigner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::from_env()?;
//! let signer = RequestSigner::new(&creds)?;
//!
//! let payload = format!("symbol=BTCUSDT&timestamp={}", signer.timestamp());
//! let signature = signer.sign(&payload)?;
//! println!("{payload}&signature={signature}");
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;

pub use credentials::{Credentials, RequestSigner, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
