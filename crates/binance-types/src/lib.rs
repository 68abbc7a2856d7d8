//! Shared types for the Binance REST API
//!
//! This crate holds the type definitions shared by the auth and REST crates.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Symbol`] - Trading pair symbols (e.g., "BTCUSDT"), always upper-case
//! - [`Side`], [`OrderType`], [`TimeInForce`], [`PositionSide`] - Order enums
//! - [`BinanceErrorCode`], [`RecoveryStrategy`] - Exchange error code mapping

pub mod enums;
pub mod error_codes;
pub mod symbol;

// Re-export commonly used types
pub use enums::*;
pub use error_codes::*;
pub use symbol::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;

/// Upper bound Binance accepts for `recvWindow`, in milliseconds
pub const MAX_RECV_WINDOW: u64 = 60_000;
