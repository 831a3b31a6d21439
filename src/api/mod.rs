pub mod configuration;

#[cfg(test)]
mod test_support;

use crate::{
    error::ApiError,
    host::{self, Context, HttpClient, Logger},
};
use configuration::RequestDescriptor;
use secrecy::SecretString;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

const REQUEST_FAILED: &str = "HTTPs request failed";
const SUCCESS: u16 = 200;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Client for the token and ping endpoints.
///
/// Each call either returns its value or logs the failure through the
/// [`Logger`] once and hands back the matching [`ApiError`].
#[derive(Debug, Clone)]
pub struct Api<H, L> {
    http: H,
    log: L,
}

impl<H: HttpClient, L: Logger> Api<H, L> {
    pub fn new(http: H, log: L) -> Self {
        Self { http, log }
    }

    /// Exchange the client credentials from `context` for an access token.
    ///
    /// # Errors
    /// Returns an error if a setting is missing, the request fails, the
    /// endpoint answers with anything but 200, or the body has no `access_token`.
    #[instrument(skip_all)]
    pub async fn get_token(&self, context: &dyn Context) -> Result<SecretString, ApiError> {
        let tenant_id =
            self.host_setting(context, host::TENANT_ID, configuration::is_host_name)?;
        let client_id = self.setting(context, host::CLIENT_ID)?;
        let client_secret = SecretString::from(self.setting(context, host::CLIENT_SECRET)?);

        let request = configuration::auth(&tenant_id, &client_id, &client_secret);
        let body = self.send(&request).await?;

        match serde_json::from_value::<TokenResponse>(body) {
            Ok(TokenResponse {
                access_token: Some(token),
            }) => {
                self.log.verbose("Auth Succeeded", &SUCCESS.to_string());
                Ok(SecretString::from(token))
            }
            _ => {
                let err = ApiError::MissingAccessToken { url: request.url };
                self.log.error(REQUEST_FAILED, &err.to_string());
                Err(err)
            }
        }
    }

    /// Call the function app's ping endpoint with a fresh token and log the
    /// outcome as `Ping`.
    ///
    /// Settings are checked before the token fetch, and a failed token fetch
    /// ends the call before the ping request is sent.
    ///
    /// # Errors
    /// Returns an error if `function-name` is missing or not a host label, the
    /// token fetch fails, the request fails, the status is not 200, or the body
    /// is not JSON.
    #[instrument(skip_all)]
    pub async fn ping(&self, context: &dyn Context) -> Result<Value, ApiError> {
        let result = self.call_ping(context).await;

        match &result {
            Ok(body) => self.log.info("Ping", &body.to_string()),
            Err(_) => self.log.info("Ping", "Failed"),
        }

        result
    }

    async fn call_ping(&self, context: &dyn Context) -> Result<Value, ApiError> {
        let function_name =
            self.host_setting(context, host::FUNCTION_NAME, configuration::is_host_label)?;
        let token = self.get_token(context).await?;

        let request = configuration::ping(&token, &function_name);
        self.log.info("Auth Connection", &format!("{request:?}"));

        let body = self.send(&request).await?;
        self.log.verbose("Auth Succeeded", &SUCCESS.to_string());

        Ok(body)
    }

    /// Report whether a token can be obtained with the current settings.
    pub async fn test_connection(&self, context: &dyn Context) -> bool {
        let connected = self.get_token(context).await.is_ok();

        self.log.info(
            "Test Connection",
            if connected { "Succeeded" } else { "Failed" },
        );

        connected
    }

    fn setting(&self, context: &dyn Context, name: &str) -> Result<String, ApiError> {
        match context.data_source().setting(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => {
                let err = ApiError::MissingSetting {
                    name: name.to_string(),
                };
                self.log.error("Missing setting", name);
                Err(err)
            }
        }
    }

    // value is spliced into a URL host
    fn host_setting(
        &self,
        context: &dyn Context,
        name: &str,
        valid: fn(&str) -> bool,
    ) -> Result<String, ApiError> {
        let value = self.setting(context, name)?;
        if valid(&value) {
            return Ok(value);
        }

        let err = ApiError::InvalidSetting {
            name: name.to_string(),
            value,
        };
        self.log.error("Invalid setting", &err.to_string());
        Err(err)
    }

    async fn send(&self, request: &RequestDescriptor) -> Result<Value, ApiError> {
        let response = match self.http.request(request).await {
            Ok(response) => response,
            Err(e) => {
                let err = ApiError::Transport {
                    url: request.url.clone(),
                    message: format!("{e:#}"),
                };
                self.log.error(REQUEST_FAILED, &err.to_string());
                return Err(err);
            }
        };

        if response.status != SUCCESS {
            let err = ApiError::Status {
                url: request.url.clone(),
                status: response.status,
                body: response.body.clone(),
            };
            self.log.error(REQUEST_FAILED, &err.to_string());
            self.log
                .error(REQUEST_FAILED, &format!("Response: {}", response.body));
            return Err(err);
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(body) => Ok(body),
            Err(e) => {
                let err = ApiError::MalformedBody {
                    url: request.url.clone(),
                    message: e.to_string(),
                };
                self.log.error(REQUEST_FAILED, &err.to_string());
                self.log
                    .error(REQUEST_FAILED, &format!("Response: {}", response.body));
                Err(err)
            }
        }
    }
}
