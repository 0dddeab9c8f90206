use std::time::Duration;

use client_logging::client_debug;
use url::Url;

use crate::wire::decode_links_response;
use crate::{FailureKind, LinkRequest, LinkStatus, TransportError};

/// Where the crawler service listens unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8008/LIVE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSettings {
    pub endpoint: Url,
    /// Opt-in bound on connection setup. The request itself is never timed out.
    pub connect_timeout: Option<Duration>,
}

impl TransportSettings {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            connect_timeout: None,
        }
    }

    /// Parses and checks an endpoint. Only http and https are accepted.
    pub fn parse_endpoint(raw: &str) -> Result<Url, TransportError> {
        let url = Url::parse(raw)
            .map_err(|err| TransportError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(TransportError::new(
                FailureKind::InvalidEndpoint,
                format!("unsupported scheme {other:?}"),
            )),
        }
    }
}

impl Default for TransportSettings {
    fn default() -> Self {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL");
        Self::new(endpoint)
    }
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Performs exactly one request. No retries.
    async fn retrieve_links(&self, request: &LinkRequest)
        -> Result<Vec<LinkStatus>, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: TransportSettings,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn retrieve_links(
        &self,
        request: &LinkRequest,
    ) -> Result<Vec<LinkStatus>, TransportError> {
        client_debug!(
            "POST {} option={} website_len={}",
            self.settings.endpoint,
            request.option,
            request.website.len()
        );

        let response = self
            .client
            .post(self.settings.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        decode_links_response(&bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_decode() {
        return TransportError::new(FailureKind::MalformedResponse, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
