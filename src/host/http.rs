use crate::api::configuration::RequestDescriptor;
use anyhow::Result;
use reqwest::Client;
use std::{future::Future, time::Duration};
use tracing::{debug, info_span, Instrument};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and raw body of an answered request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Outbound HTTP port.
///
/// Any status the server answers with is `Ok`; `Err` means no response was
/// received (DNS, TLS, connect, timeout).
pub trait HttpClient {
    fn request(
        &self,
        request: &RequestDescriptor,
    ) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// [`HttpClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, request: &RequestDescriptor) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.as_str());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let span = info_span!(
            "http.request",
            http.method = %request.method,
            url = %request.url
        );
        let response = builder.send().instrument(span).await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, "{} {}", request.method, request.url);

        Ok(HttpResponse { status, body })
    }
}
