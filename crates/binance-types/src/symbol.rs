//! Trading pair symbols (BTCUSDT format)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trading pair symbol, always stored upper-case
///
/// Binance symbols have no separator (`BTCUSDT`, not `BTC/USDT`), and the API
/// rejects lower-case input, so every constructor normalizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// BTC/USDT trading pair
    pub const BTC_USDT: &'static str = "BTCUSDT";
    /// ETH/USDT trading pair
    pub const ETH_USDT: &'static str = "ETHUSDT";
    /// BNB/USDT trading pair
    pub const BNB_USDT: &'static str = "BNBUSDT";

    /// Create a new symbol, upper-casing the input
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(normalize(s.as_ref()))
    }

    /// Get the symbol as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split off a known quote asset (e.g. `("BTC", "USDT")`)
    pub fn split_quote<'a>(&'a self, quote: &str) -> Option<(&'a str, &'a str)> {
        let quote = quote.to_ascii_uppercase();
        let base = self.0.strip_suffix(quote.as_str())?;
        if base.is_empty() {
            return None;
        }
        Some((base, &self.0[base.len()..]))
    }
}

/// Upper-case a symbol-like value and strip surrounding whitespace
pub fn normalize(s: &str) -> String {
    s.trim().to_ascii_uppercase()
}

impl FromStr for Symbol {
    type Err = SymbolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SymbolParseError::Empty);
        }

        if let Some(c) = trimmed.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(SymbolParseError::InvalidChar(c, s.to_string()));
        }

        Ok(Self::new(trimmed))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Error parsing a symbol
#[derive(Debug, Clone, thiserror::Error)]
pub enum SymbolParseError {
    #[error("Symbol is empty")]
    Empty,

    #[error("Invalid character '{0}' in symbol: {1}")]
    InvalidChar(char, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_is_uppercased() {
        assert_eq!(Symbol::new("btcusdt").as_str(), "BTCUSDT");
        assert_eq!(Symbol::from(" ethUsdt ").as_str(), "ETHUSDT");
    }

    #[test]
    fn test_symbol_parse_error() {
        assert!(matches!("".parse::<Symbol>(), Err(SymbolParseError::Empty)));
        assert!(matches!(
            "BTC/USDT".parse::<Symbol>(),
            Err(SymbolParseError::InvalidChar('/', _))
        ));
        assert_eq!("bnbusdt".parse::<Symbol>().unwrap().as_str(), Symbol::BNB_USDT);
    }

    #[test]
    fn test_split_quote() {
        let symbol = Symbol::new("btcusdt");
        assert_eq!(symbol.split_quote("usdt"), Some(("BTC", "USDT")));
        assert_eq!(symbol.split_quote("BTC"), None);
        assert_eq!(Symbol::new("USDT").split_quote("USDT"), None);
    }

    #[test]
    fn test_symbol_serde() {
        let symbol = Symbol::new("ethusdt");
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"ETHUSDT\"");
    }
}
