//! Request descriptors and parameter building
//!
//! Every endpoint method funnels through [`ParamsBuilder`]: required values are
//! checked for presence, symbol-like values are upper-cased, and the caller's
//! option struct is merged in without overriding required fields. The result
//! is an ordered [`Params`] list that is serialized once, so the string that
//! gets signed is the string that gets sent.

use crate::error::{RestError, RestResult};
use binance_auth::RequestSigner;
use binance_types::{
    normalize, KlineInterval, MarginModification, MarginType, NewOrderRespType, OrderType,
    PositionSide, Side, Symbol, TimeInForce, WorkingType, MAX_RECV_WINDOW,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

pub use reqwest::Method;

/// Parameter name for the receive window
pub const RECV_WINDOW: &str = "recvWindow";
/// Parameter name for the request timestamp
pub const TIMESTAMP: &str = "timestamp";
/// Parameter name for the HMAC signature
pub const SIGNATURE: &str = "signature";

/// Authentication required by an endpoint
///
/// Mirrors Binance's endpoint security types: `NONE`, key-only
/// (`USER_STREAM`, `MARKET_DATA`) and signed (`TRADE`, `USER_DATA`, `MARGIN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Security {
    /// Public endpoint; the key header is still sent if configured
    None,
    /// Requires the `X-MBX-APIKEY` header
    ApiKey,
    /// Requires the key header plus `timestamp` and `signature`
    Signed,
}

/// Which Binance host serves an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiHost {
    /// `api.binance.com` (spot, margin, wallet)
    Spot,
    /// `fapi.binance.com` (USD-M futures)
    Futures,
}

/// Ordered request parameters
///
/// Insertion order is preserved so the serialized form is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Look up a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as `application/x-www-form-urlencoded`
    pub fn to_query(&self) -> RestResult<String> {
        serde_urlencoded::to_string(&self.0).map_err(|e| RestError::InvalidParameter(e.to_string()))
    }

    /// Append `timestamp` and `signature`
    ///
    /// The signature covers the serialized parameters including the timestamp.
    /// Any change to the parameters afterwards invalidates it.
    pub fn sign(mut self, signer: &RequestSigner<'_>) -> RestResult<Self> {
        if self.contains(SIGNATURE) {
            return Err(RestError::InvalidParameter(
                "parameters are already signed".to_string(),
            ));
        }

        self.push(TIMESTAMP, signer.timestamp().to_string());
        let payload = self.to_query()?;
        let signature = signer.sign(&payload)?;
        self.push(SIGNATURE, signature);

        Ok(self)
    }
}

/// A value that can be placed in the parameter map
///
/// `None` and empty strings count as absent. `Debug` lets endpoint spans
/// record the raw argument.
pub trait ParamValue: std::fmt::Debug {
    fn into_param(self) -> Option<String>;
}

impl ParamValue for &str {
    fn into_param(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ParamValue for String {
    fn into_param(self) -> Option<String> {
        Some(self)
    }
}

impl ParamValue for &String {
    fn into_param(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: ParamValue> ParamValue for Option<T> {
    fn into_param(self) -> Option<String> {
        self.and_then(ParamValue::into_param)
    }
}

macro_rules! display_param {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamValue for $ty {
                fn into_param(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_param!(
    bool,
    u8,
    u16,
    u32,
    u64,
    i32,
    i64,
    usize,
    Decimal,
    Side,
    OrderType,
    TimeInForce,
    PositionSide,
    WorkingType,
    NewOrderRespType,
    MarginType,
    MarginModification,
    KlineInterval,
    Symbol,
    &Symbol,
);

/// Builds validated [`Params`] for one request
///
/// The first failure is kept and reported by [`ParamsBuilder::build`], so
/// calls can be chained without intermediate `?`.
#[derive(Debug, Default)]
pub struct ParamsBuilder {
    params: Params,
    error: Option<RestError>,
}

impl ParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a required parameter
    pub fn required(self, name: &str, value: impl ParamValue) -> Self {
        self.insert(name, value.into_param(), true, false)
    }

    /// Add a required parameter, upper-cased (symbols, sides, order types)
    pub fn required_upper(self, name: &str, value: impl ParamValue) -> Self {
        self.insert(name, value.into_param(), true, true)
    }

    /// Add a parameter if present
    pub fn optional(self, name: &str, value: impl ParamValue) -> Self {
        self.insert(name, value.into_param(), false, false)
    }

    /// Add an upper-cased parameter if present
    pub fn optional_upper(self, name: &str, value: impl ParamValue) -> Self {
        self.insert(name, value.into_param(), false, true)
    }

    /// Merge an option struct
    ///
    /// The struct must serialize to a map. `null` fields are skipped, and keys
    /// already set by a required parameter are left untouched.
    pub fn options<T: Serialize>(mut self, options: &T) -> Self {
        if self.error.is_some() {
            return self;
        }

        let value = match serde_json::to_value(options) {
            Ok(value) => value,
            Err(e) => {
                self.error = Some(RestError::InvalidParameter(e.to_string()));
                return self;
            }
        };

        let serde_json::Value::Object(map) = value else {
            self.error = Some(RestError::InvalidParameter(
                "options must serialize to a map".to_string(),
            ));
            return self;
        };

        for (key, value) in map {
            if self.params.contains(&key) {
                trace!(key = %key, "option ignored, parameter already set");
                continue;
            }

            let value = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            self.params.push(key, value);
        }

        self
    }

    /// Finish building, reporting the first validation failure
    pub fn build(self) -> RestResult<Params> {
        if let Some(error) = self.error {
            return Err(error);
        }

        if let Some(window) = self.params.get(RECV_WINDOW) {
            validate_recv_window(window)?;
        }

        Ok(self.params)
    }

    fn insert(mut self, name: &str, value: Option<String>, required: bool, upper: bool) -> Self {
        if self.error.is_some() {
            return self;
        }

        match value.filter(|v| !v.trim().is_empty()) {
            Some(v) => {
                let v = if upper { normalize(&v) } else { v };
                self.params.push(name, v);
            }
            None if required => {
                self.error = Some(RestError::MissingParameter(name.to_string()));
            }
            None => {}
        }

        self
    }
}

fn validate_recv_window(raw: &str) -> RestResult<()> {
    let window: u64 = raw
        .parse()
        .map_err(|_| RestError::InvalidParameter(format!("{RECV_WINDOW} must be an integer: {raw}")))?;

    if window > MAX_RECV_WINDOW {
        return Err(RestError::InvalidParameter(format!(
            "{RECV_WINDOW} {window} exceeds maximum of {MAX_RECV_WINDOW}"
        )));
    }

    Ok(())
}

/// One HTTP call, fully described
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub host: ApiHost,
    pub path: &'static str,
    pub params: Params,
    pub security: Security,
}

impl Request {
    pub fn new(method: Method, host: ApiHost, path: &'static str, security: Security) -> Self {
        Self {
            method,
            host,
            path,
            params: Params::new(),
            security,
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// True if parameters travel in the query string rather than the body
    pub fn uses_query(&self) -> bool {
        matches!(self.method, Method::GET | Method::DELETE)
    }
}
