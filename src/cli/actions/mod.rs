pub mod ping;
pub mod test_connection;
pub mod token;

use crate::{
    api::Api,
    host::{ReqwestClient, TracingLogger},
    APP_USER_AGENT,
};
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Token,
    Ping,
    TestConnection,
}

/// API client wired to the network and to `tracing`.
/// # Errors
/// Returns an error if the HTTP client cannot be constructed.
pub fn client() -> Result<Api<ReqwestClient, TracingLogger>> {
    Ok(Api::new(ReqwestClient::new(APP_USER_AGENT)?, TracingLogger))
}
