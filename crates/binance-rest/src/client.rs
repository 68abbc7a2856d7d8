//! Main REST client implementation

use crate::endpoints::{
    FuturesMarketEndpoints, FuturesStreamEndpoints, FuturesTradeEndpoints, MarginEndpoints,
    MarketEndpoints, TradeEndpoints, UserStreamEndpoints, WalletEndpoints,
};
use crate::error::{RestError, RestResult};
use crate::request::{ApiHost, Request, Security, RECV_WINDOW};
use binance_auth::{Credentials, RequestSigner};
use binance_types::MAX_RECV_WINDOW;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Spot, margin and wallet API
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";
/// USD-M futures API
pub const DEFAULT_FUTURES_BASE_URL: &str = "https://fapi.binance.com";
/// Spot testnet
pub const TESTNET_BASE_URL: &str = "https://testnet.binance.vision";
/// USD-M futures testnet
pub const TESTNET_FUTURES_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Binance REST API client
///
/// Endpoint groups are borrowed views over one client, so they share its
/// connection pool, credentials and base URLs.
///
/// # Example
///
/// ```no_run
/// use binance_rest::{BinanceRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BinanceRestClient::new()?;
///     let price = client.market().ticker_price(Some("btcusdt")).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BinanceRestClient::with_credentials(creds)?;
///     let positions = auth_client.futures_trade().position_risk("BTCUSDT").await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BinanceRestClient {
    http_client: Client,
    credentials: Option<Credentials>,
    base_url: String,
    futures_base_url: String,
    recv_window: Option<u64>,
}

impl BinanceRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let base_url = validate_base_url(&config.base_url)?;
        let futures_base_url = validate_base_url(&config.futures_base_url)?;

        if let Some(window) = config.recv_window {
            if window > MAX_RECV_WINDOW {
                return Err(RestError::Configuration(format!(
                    "default {RECV_WINDOW} {window} exceeds maximum of {MAX_RECV_WINDOW}"
                )));
            }
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(
                config
                    .user_agent
                    .as_deref()
                    .unwrap_or(concat!("binance-rest/", env!("CARGO_PKG_VERSION"))),
            )
            .build()
            .map_err(|e| RestError::Configuration(format!("failed to build HTTP client: {e}")))?;

        info!(
            base_url = %base_url,
            futures_base_url = %futures_base_url,
            authenticated = config.credentials.is_some(),
            "Created Binance REST client"
        );

        Ok(Self {
            http_client,
            credentials: config.credentials,
            base_url,
            futures_base_url,
            recv_window: config.recv_window,
        })
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Spot base URL in use
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Futures base URL in use
    pub fn futures_base_url(&self) -> &str {
        &self.futures_base_url
    }

    fn host_url(&self, host: ApiHost) -> &str {
        match host {
            ApiHost::Spot => &self.base_url,
            ApiHost::Futures => &self.futures_base_url,
        }
    }

    // ========================================================================
    // Endpoint Groups
    // ========================================================================

    /// Spot market data (public)
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Spot orders and account (signed)
    pub fn trade(&self) -> TradeEndpoints<'_> {
        TradeEndpoints::new(self)
    }

    /// Spot user data stream listen keys (API key only)
    pub fn user_stream(&self) -> UserStreamEndpoints<'_> {
        UserStreamEndpoints::new(self)
    }

    /// Wallet: coins, deposits and withdrawals
    pub fn wallet(&self) -> WalletEndpoints<'_> {
        WalletEndpoints::new(self)
    }

    /// Cross and isolated margin (signed)
    pub fn margin(&self) -> MarginEndpoints<'_> {
        MarginEndpoints::new(self)
    }

    /// USD-M futures market data (public)
    pub fn futures_market(&self) -> FuturesMarketEndpoints<'_> {
        FuturesMarketEndpoints::new(self)
    }

    /// USD-M futures orders, positions and account (signed)
    pub fn futures_trade(&self) -> FuturesTradeEndpoints<'_> {
        FuturesTradeEndpoints::new(self)
    }

    /// USD-M futures user data stream listen keys (API key only)
    pub fn futures_stream(&self) -> FuturesStreamEndpoints<'_> {
        FuturesStreamEndpoints::new(self)
    }

    // ========================================================================
    // Shortcuts
    // ========================================================================

    /// Test connectivity to the spot API
    pub async fn ping(&self) -> RestResult<Value> {
        self.market().ping().await
    }

    /// Spot server time
    pub async fn server_time(&self) -> RestResult<Value> {
        self.market().time().await
    }

    /// Open futures positions for a symbol
    pub async fn position_risk(&self, symbol: &str) -> RestResult<Value> {
        self.futures_trade().position_risk(symbol).await
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Send a request and return the JSON body
    ///
    /// Signed requests get the default `recvWindow` (when configured and not
    /// already present), then `timestamp` and `signature`. GET and DELETE
    /// carry parameters in the query string, POST and PUT in a form body.
    /// An empty success body is returned as `{}`.
    #[instrument(
        skip(self, request),
        fields(method = %request.method, path = request.path, security = ?request.security)
    )]
    pub async fn execute(&self, request: Request) -> RestResult<Value> {
        let uses_query = request.uses_query();
        let Request {
            method,
            host,
            path,
            params,
            security,
        } = request;

        let params = match security {
            Security::None => params,
            Security::ApiKey => {
                if self.credentials.is_none() {
                    return Err(RestError::Configuration(format!(
                        "API key required for {path}"
                    )));
                }
                params
            }
            Security::Signed => {
                let credentials = self.credentials.as_ref().ok_or_else(|| {
                    RestError::Configuration(format!("credentials required for {path}"))
                })?;

                let mut params = params;
                if let Some(window) = self.recv_window {
                    if !params.contains(RECV_WINDOW) {
                        params.push(RECV_WINDOW, window.to_string());
                    }
                }

                let signer = RequestSigner::new(credentials)?;
                params.sign(&signer)?
            }
        };

        let mut url = Url::parse(&format!("{}{}", self.host_url(host), path))
            .map_err(|e| RestError::Configuration(format!("invalid URL for {path}: {e}")))?;
        let encoded = params.to_query()?;

        let mut builder = if uses_query {
            if !encoded.is_empty() {
                url.set_query(Some(&encoded));
            }
            self.http_client.request(method, url)
        } else {
            self.http_client
                .request(method, url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(encoded)
        };

        if let Some(credentials) = &self.credentials {
            builder = builder.header(API_KEY_HEADER, credentials.api_key());
        }

        debug!(params = params.len(), "Dispatching request");

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        if !status.is_success() {
            return Err(RestError::from_response(status.as_u16(), &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        serde_json::from_str(&body).map_err(|e| RestError::Parse(e.to_string()))
    }

    /// Send a request and deserialize the body into `T`
    pub async fn execute_as<T: DeserializeOwned>(&self, request: Request) -> RestResult<T> {
        let value = self.execute(request).await?;
        serde_json::from_value(value).map_err(|e| RestError::Parse(e.to_string()))
    }
}

impl std::fmt::Debug for BinanceRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceRestClient")
            .field("base_url", &self.base_url)
            .field("futures_base_url", &self.futures_base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

fn validate_base_url(raw: &str) -> RestResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| RestError::Configuration(format!("invalid base URL {raw:?}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(RestError::Configuration(format!(
            "base URL must be http or https: {raw}"
        )));
    }

    Ok(trimmed.to_string())
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Spot, margin and wallet base URL
    pub base_url: String,
    /// USD-M futures base URL
    pub futures_base_url: String,
    /// Default `recvWindow` for signed requests (max 60000)
    pub recv_window: Option<u64>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            futures_base_url: DEFAULT_FUTURES_BASE_URL.to_string(),
            recv_window: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Point both hosts at the exchange testnets
    pub fn testnet() -> Self {
        Self::default()
            .with_base_url(TESTNET_BASE_URL)
            .with_futures_base_url(TESTNET_FUTURES_BASE_URL)
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the spot base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the futures base URL
    pub fn with_futures_base_url(mut self, url: impl Into<String>) -> Self {
        self.futures_base_url = url.into();
        self
    }

    /// Set the default receive window for signed requests
    pub fn with_recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }
}
