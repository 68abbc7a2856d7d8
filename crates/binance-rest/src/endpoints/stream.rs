//! Spot user data stream endpoints
//!
//! Listen keys only need the API key header; nothing is signed. A key stays
//! valid for 60 minutes and should be renewed about every 30.

use crate::client::BinanceRestClient;
use crate::error::RestResult;
use crate::request::{ApiHost, Method, ParamValue, Params, ParamsBuilder, Request, Security};
use serde_json::Value;
use tracing::{debug, instrument};

const USER_DATA_STREAM: &str = "/api/v3/userDataStream";

/// Spot listen key management
pub struct UserStreamEndpoints<'a> {
    client: &'a BinanceRestClient,
}

impl<'a> UserStreamEndpoints<'a> {
    pub fn new(client: &'a BinanceRestClient) -> Self {
        Self { client }
    }

    async fn keyed(&self, method: Method, params: Params) -> RestResult<Value> {
        let request =
            Request::new(method, ApiHost::Spot, USER_DATA_STREAM, Security::ApiKey).with_params(params);
        self.client.execute(request).await
    }

    /// Start a user data stream; returns `{"listenKey": ...}`
    #[instrument(skip(self))]
    pub async fn create_listen_key(&self) -> RestResult<Value> {
        debug!("Creating spot listen key");
        self.keyed(Method::POST, Params::new()).await
    }

    /// Keep a user data stream alive
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
