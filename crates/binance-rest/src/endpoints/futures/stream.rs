//! USD-M futures user data stream endpoints
//!
//! Listen keys are managed with the API key header only.

use crate::client::BinanceRestClient;
use crate::error::RestResult;
use crate::request::{ApiHost, Method, ParamValue, Params, ParamsBuilder, Request, Security};
use serde_json::Value;
use tracing::{debug, instrument};

const LISTEN_KEY: &str = "/fapi/v1/listenKey";

/// USD-M futures listen key management
pub struct FuturesStreamEndpoints<'a> {
    client: &'a BinanceRestClient,
}

impl<'a> FuturesStreamEndpoints<'a> {
    pub fn new(client: &'a BinanceRestClient) -> Self {
        Self { client }
    }

    async fn keyed(&self, method: Method, params: Params) -> RestResult<Value> {
        let request =
            Request::new(method, ApiHost::Futures, LISTEN_KEY, Security::ApiKey).with_params(params);
        self.client.execute(request).await
    }

    /// Start a user data stream; returns `{"listenKey": ...}`
    #[instrument(skip(self))]
    pub async fn create_listen_key(&self) -> RestResult<Value> {
        debug!("Creating futures listen key");
        self.keyed(Method::POST, Params::new()).await
    }

    /// Extend a listen key's validity by 60 minutes
    #[instrument(skip_all)]
    pub async fn renew_listen_key(&self, listen_key: impl ParamValue) -> RestResult<Value> {
        let params = ParamsBuilder::new().required("listenKey", listen_key).build()?;
        self.keyed(Method::PUT, params).await
    }

    /// Close a user data stream
    #[instrument(skip_all)]
    pub async fn close_listen_key(&self, listen_key: impl ParamValue) -> RestResult<Value> {
        let params = ParamsBuilder::new().required("listenKey", listen_key).build()?;
        self.keyed(Method::DELETE, params).await
    }
}
