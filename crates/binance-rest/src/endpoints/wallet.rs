//! Wallet endpoints for deposits and withdrawals
//!
//! Everything except [`WalletEndpoints::system_status`] is signed.

use crate::client::BinanceRestClient;
use crate::error::RestResult;
use crate::request::{ApiHost, Method, ParamValue, Params, ParamsBuilder, Request, Security};
use crate::types::{DepositAddressOptions, TransferHistoryOptions, WithdrawOptions};
use serde_json::Value;
use tracing::{debug, instrument};

/// Wallet endpoints
pub struct WalletEndpoints<'a> {
    client: &'a BinanceRestClient,
}

impl<'a> WalletEndpoints<'a> {
    pub fn new(client: &'a BinanceRestClient) -> Self {
        Self { client }
    }

    async fn call(
        &self,
        method: Method,
        path: &'static str,
        security: Security,
        params: Params,
    ) -> RestResult<Value> {
        let request = Request::new(method, ApiHost::Spot, path, security).with_params(params);
        self.client.execute(request).await
    }

    /// System maintenance status (`0` normal, `1` maintenance)
    #[instrument(skip(self))]
    pub async fn system_status(&self) -> RestResult<Value> {
        self.call(Method::GET, "/sapi/v1/system/status", Security::None, Params::new())
            .await
    }

    /// All coins with network, deposit and withdrawal details
    #[instrument(skip(self))]
    pub async fn coin_info(&self) -> RestResult<Value> {
        debug!("Fetching coin information");
        self.call(Method::GET, "/sapi/v1/capital/config/getall", Security::Signed, Params::new())
            .await
    }

    /// Deposit address for a coin
    ///
    /// # Arguments
    /// * `coin` - Asset (e.g., "USDT")
    /// * `options` - Network selection
    #[instrument(skip(self, options))]
    pub async fn deposit_address(
        &self,
        coin: impl ParamValue,
        options: &DepositAddressOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("coin", coin)
            .options(options)
            .build()?;
        self.call(Method::GET, "/sapi/v1/capital/deposit/address", Security::Signed, params)
            .await
    }

    /// Deposit history
    #[instrument(skip(self, options))]
    pub async fn deposit_history(&self, options: &TransferHistoryOptions) -> RestResult<Value> {
        let params = ParamsBuilder::new().options(options).build()?;
        self.call(Method::GET, "/sapi/v1/capital/deposit/hisrec", Security::Signed, params)
            .await
    }

    /// Withdrawal history
    #[instrument(skip(self, options))]
    pub async fn withdraw_history(&self, options: &TransferHistoryOptions) -> RestResult<Value> {
        let params = ParamsBuilder::new().options(options).build()?;
        self.call(Method::GET, "/sapi/v1/capital/withdraw/history", Security::Signed, params)
            .await
    }

    /// Submit a withdrawal
    ///
    /// The address is sent exactly as given; many chains use case-sensitive
    /// addresses.
    #[instrument(skip(self, address, options))]
    pub async fn withdraw(
        &self,
        coin: impl ParamValue,
        address: impl ParamValue,
        amount: impl ParamValue,
        options: &WithdrawOptions,
    ) -> RestResult<Value> {
        let params = ParamsBuilder::new()
            .required_upper("coin", coin)
            .required("address", address)
            .required("amount", amount)
            .options(options)
            .build()?;
        debug!(coin = params.get("coin"), "Submitting withdrawal");
        self.call(Method::POST, "/sapi/v1/capital/withdraw/apply", Security::Signed, params)
            .await
    }
}
