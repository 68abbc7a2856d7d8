//! Binance API error code mapping with recovery hints
//!
//! Error bodies look like `{"code": -1121, "msg": "Invalid symbol."}`. The
//! numeric range tells the category; well-known codes get their own variant.
//! Recovery strategies are advisory: the client never retries on its own.

use std::time::Duration;

/// Suggested caller reaction to an API error
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RecoveryStrategy {
    /// Exponential backoff before retry
    Backoff {
        initial_ms: u64,
        max_ms: u64,
        multiplier: u32,
    },
    /// Fixed delay retry
    Retry { delay_ms: u64, max_attempts: u32 },
    /// Local clock is outside the receive window; resync with server time
    SyncClock,
    /// Key, signature or permissions are wrong
    Reauthenticate,
    /// Requires user intervention (e.g. add funds)
    UserAction { message: &'static str },
    /// Request is malformed; fix it rather than resend it
    Skip,
    /// Cannot recover programmatically
    Fatal,
    /// Manual investigation needed
    #[default]
    Manual,
}

impl RecoveryStrategy {
    /// Default exponential backoff for rate limits
    pub fn rate_limit_backoff() -> Self {
        Self::Backoff {
            initial_ms: 1000,
            max_ms: 60000,
            multiplier: 2,
        }
    }

    /// Default retry for transient service errors
    pub fn service_retry() -> Self {
        Self::Retry {
            delay_ms: 1000,
            max_attempts: 3,
        }
    }

    /// Get the initial delay duration
    pub fn initial_delay(&self) -> Option<Duration> {
        match self {
            Self::Backoff { initial_ms, .. } => Some(Duration::from_millis(*initial_ms)),
            Self::Retry { delay_ms, .. } => Some(Duration::from_millis(*delay_ms)),
            _ => None,
        }
    }

    /// Check if this strategy allows retry
    pub fn allows_retry(&self) -> bool {
        matches!(
            self,
            Self::Backoff { .. } | Self::Retry { .. } | Self::SyncClock
        )
    }
}

/// Error categories, derived from the numeric code range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// -1000..=-1099: server or network issues
    Server,
    /// -1100..=-1199: request issues
    Request,
    /// -2000..=-2099: order processing and key issues
    Processing,
    /// -4000..=-4999: futures filter and position issues
    Filter,
    /// Anything else
    Unknown,
}

impl ErrorCategory {
    /// Categorize a raw error code
    pub fn from_code(code: i64) -> Self {
        match code {
            -1099..=-1000 => Self::Server,
            -1199..=-1100 => Self::Request,
            -2099..=-2000 => Self::Processing,
            -4999..=-4000 => Self::Filter,
            _ => Self::Unknown,
        }
    }
}

/// Well-known Binance error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BinanceErrorCode {
    // === 10xx: server / network ===
    /// -1000 UNKNOWN
    Unknown,
    /// -1001 DISCONNECTED
    Disconnected,
    /// -1002 UNAUTHORIZED
    Unauthorized,
    /// -1003 TOO_MANY_REQUESTS
    TooManyRequests,
    /// -1006 UNEXPECTED_RESP
    UnexpectedResponse,
    /// -1007 TIMEOUT
    Timeout,
    /// -1015 TOO_MANY_ORDERS
    TooManyOrders,
    /// -1016 SERVICE_SHUTTING_DOWN
    ServiceShuttingDown,
    /// -1020 UNSUPPORTED_OPERATION
    UnsupportedOperation,
    /// -1021 INVALID_TIMESTAMP
    InvalidTimestamp,
    /// -1022 INVALID_SIGNATURE
    InvalidSignature,

    // === 11xx: request issues ===
    /// -1100 ILLEGAL_CHARS
    IllegalChars,
    /// -1101 TOO_MANY_PARAMETERS
    TooManyParameters,
    /// -1102 MANDATORY_PARAM_EMPTY_OR_MALFORMED
    MandatoryParamEmptyOrMalformed,
    /// -1103 UNKNOWN_PARAM
    UnknownParam,
    /// -1104 UNREAD_PARAMETERS
    UnreadParameters,
    /// -1105 PARAM_EMPTY
    ParamEmpty,
    /// -1106 PARAM_NOT_REQUIRED
    ParamNotRequired,
    /// -1111 BAD_PRECISION
    BadPrecision,
    /// -1115 INVALID_TIF
    InvalidTimeInForce,
    /// -1116 INVALID_ORDER_TYPE
    InvalidOrderType,
    /// -1117 INVALID_SIDE
    InvalidSide,
    /// -1121 BAD_SYMBOL
    BadSymbol,
    /// -1125 INVALID_LISTEN_KEY
    InvalidListenKey,
    /// -1130 INVALID_PARAMETER
    InvalidParameter,

    // === 20xx: processing ===
    /// -2010 NEW_ORDER_REJECTED
    NewOrderRejected,
    /// -2011 CANCEL_REJECTED
    CancelRejected,
    /// -2013 NO_SUCH_ORDER
    NoSuchOrder,
    /// -2014 BAD_API_KEY_FMT
    BadApiKeyFormat,
    /// -2015 REJECTED_MBX_KEY
    RejectedApiKey,
    /// -2018 BALANCE_NOT_SUFFICIENT
    BalanceNotSufficient,
    /// -2019 MARGIN_NOT_SUFFICIENT
    MarginNotSufficient,
    /// -2021 ORDER_WOULD_IMMEDIATELY_TRIGGER
    OrderWouldImmediatelyTrigger,
    /// -2022 REDUCE_ONLY_REJECT
    ReduceOnlyReject,

    // === 4xxx: futures filters ===
    /// -4003 QTY_LESS_THAN_ZERO
    QuantityLessThanZero,
    /// -4028 INVALID_LEVERAGE
    InvalidLeverage,
    /// -4046 NO_NEED_TO_CHANGE_MARGIN_TYPE
    NoNeedToChangeMarginType,
    /// -4059 NO_NEED_TO_CHANGE_POSITION_SIDE
    NoNeedToChangePositionSide,
    /// -4164 MIN_NOTIONAL
    MinNotional,
}

impl BinanceErrorCode {
    /// Map a numeric error code to a known variant
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            -1000 => Self::Unknown,
            -1001 => Self::Disconnected,
            -1002 => Self::Unauthorized,
            -1003 => Self::TooManyRequests,
            -1006 => Self::UnexpectedResponse,
            -1007 => Self::Timeout,
            -1015 => Self::TooManyOrders,
            -1016 => Self::ServiceShuttingDown,
            -1020 => Self::UnsupportedOperation,
            -1021 => Self::InvalidTimestamp,
            -1022 => Self::InvalidSignature,

            -1100 => Self::IllegalChars,
            -1101 => Self::TooManyParameters,
            -1102 => Self::MandatoryParamEmptyOrMalformed,
            -1103 => Self::UnknownParam,
            -1104 => Self::UnreadParameters,
            -1105 => Self::ParamEmpty,
            -1106 => Self::ParamNotRequired,
            -1111 => Self::BadPrecision,
            -1115 => Self::InvalidTimeInForce,
            -1116 => Self::InvalidOrderType,
            -1117 => Self::InvalidSide,
            -1121 => Self::BadSymbol,
            -1125 => Self::InvalidListenKey,
            -1130 => Self::InvalidParameter,

            -2010 => Self::NewOrderRejected,
            -2011 => Self::CancelRejected,
            -2013 => Self::NoSuchOrder,
            -2014 => Self::BadApiKeyFormat,
            -2015 => Self::RejectedApiKey,
            -2018 => Self::BalanceNotSufficient,
            -2019 => Self::MarginNotSufficient,
            -2021 => Self::OrderWouldImmediatelyTrigger,
            -2022 => Self::ReduceOnlyReject,

            -4003 => Self::QuantityLessThanZero,
            -4028 => Self::InvalidLeverage,
            -4046 => Self::NoNeedToChangeMarginType,
            -4059 => Self::NoNeedToChangePositionSide,
            -4164 => Self::MinNotional,

            _ => return None,
        })
    }

    /// The numeric code Binance uses for this error
    pub fn code(&self) -> i64 {
        match self {
            Self::Unknown => -1000,
            Self::Disconnected => -1001,
            Self::Unauthorized => -1002,
            Self::TooManyRequests => -1003,
            Self::UnexpectedResponse => -1006,
            Self::Timeout => -1007,
            Self::TooManyOrders => -1015,
            Self::ServiceShuttingDown => -1016,
            Self::UnsupportedOperation => -1020,
            Self::InvalidTimestamp => -1021,
            Self::InvalidSignature => -1022,
            Self::IllegalChars => -1100,
            Self::TooManyParameters => -1101,
            Self::MandatoryParamEmptyOrMalformed => -1102,
            Self::UnknownParam => -1103,
            Self::UnreadParameters => -1104,
            Self::ParamEmpty => -1105,
            Self::ParamNotRequired => -1106,
            Self::BadPrecision => -1111,
            Self::InvalidTimeInForce => -1115,
            Self::InvalidOrderType => -1116,
            Self::InvalidSide => -1117,
            Self::BadSymbol => -1121,
            Self::InvalidListenKey => -1125,
            Self::InvalidParameter => -1130,
            Self::NewOrderRejected => -2010,
            Self::CancelRejected => -2011,
            Self::NoSuchOrder => -2013,
            Self::BadApiKeyFormat => -2014,
            Self::RejectedApiKey => -2015,
            Self::BalanceNotSufficient => -2018,
            Self::MarginNotSufficient => -2019,
            Self::OrderWouldImmediatelyTrigger => -2021,
            Self::ReduceOnlyReject => -2022,
            Self::QuantityLessThanZero => -4003,
            Self::InvalidLeverage => -4028,
            Self::NoNeedToChangeMarginType => -4046,
            Self::NoNeedToChangePositionSide => -4059,
            Self::MinNotional => -4164,
        }
    }

    /// Error category for this code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Get the recovery strategy for this error code
    pub fn recovery_strategy(&self) -> RecoveryStrategy {
        match self {
            // Rate limiting - backoff
            Self::TooManyRequests | Self::TooManyOrders => RecoveryStrategy::rate_limit_backoff(),

            // Transient server state - retry
            Self::Disconnected | Self::Timeout | Self::UnexpectedResponse => {
                RecoveryStrategy::service_retry()
            }
            Self::ServiceShuttingDown => RecoveryStrategy::Retry {
                delay_ms: 5000,
                max_attempts: 3,
            },

            Self::InvalidTimestamp => RecoveryStrategy::SyncClock,

            // Authentication
            Self::Unauthorized
            | Self::InvalidSignature
            | Self::BadApiKeyFormat
            | Self::RejectedApiKey => RecoveryStrategy::Reauthenticate,

            // Funds
            Self::BalanceNotSufficient => RecoveryStrategy::UserAction {
                message: "Insufficient balance - deposit more or reduce order size",
            },
            Self::MarginNotSufficient => RecoveryStrategy::UserAction {
                message: "Insufficient margin - add collateral or reduce position",
            },
            Self::MinNotional => RecoveryStrategy::UserAction {
                message: "Order notional too small - increase quantity",
            },
            Self::InvalidListenKey => RecoveryStrategy::UserAction {
                message: "Listen key expired - create a new one",
            },

            // Malformed requests - fix, don't resend
            Self::IllegalChars
            | Self::TooManyParameters
            | Self::MandatoryParamEmptyOrMalformed
            | Self::UnknownParam
            | Self::UnreadParameters
            | Self::ParamEmpty
            | Self::ParamNotRequired
            | Self::BadPrecision
            | Self::InvalidTimeInForce
            | Self::InvalidOrderType
            | Self::InvalidSide
            | Self::BadSymbol
            | Self::InvalidParameter
            | Self::QuantityLessThanZero
            | Self::InvalidLeverage => RecoveryStrategy::Skip,

            // Nothing to do
            Self::NoNeedToChangeMarginType | Self::NoNeedToChangePositionSide => {
                RecoveryStrategy::Skip
            }

            // Order state
            Self::NewOrderRejected
            | Self::CancelRejected
            | Self::NoSuchOrder
            | Self::OrderWouldImmediatelyTrigger
            | Self::ReduceOnlyReject => RecoveryStrategy::Skip,

            Self::UnsupportedOperation => RecoveryStrategy::Fatal,
            Self::Unknown => RecoveryStrategy::Manual,
        }
    }

    /// Check if this is an authentication-related error
    pub fn is_auth_error(&self) -> bool {
        matches!(self.recovery_strategy(), RecoveryStrategy::Reauthenticate)
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::TooManyRequests | Self::TooManyOrders)
    }
}
