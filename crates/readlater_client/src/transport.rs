use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::{ClientSettings, TransportError, TransportFailure};

/// A single GraphQL operation ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphqlRequest {
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

/// Executes GraphQL requests.
///
/// Implementations resolve once per request with the decoded JSON body, which
/// may itself carry top-level `errors`, or with a transport failure.
#[async_trait::async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn send(&self, request: GraphqlRequest) -> Result<Value, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: url::Url,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: &ClientSettings) -> Result<Self, TransportError> {
        let base_url = url::Url::parse(&settings.base_url)
            .map_err(|err| TransportError::new(TransportFailure::InvalidEndpoint, err.to_string()))?;
        let client = build_client(settings.connect_timeout, settings.request_timeout)?;
        Ok(Self { base_url, client })
    }

    fn endpoint(&self, path: &str) -> Result<url::Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|err| TransportError::new(TransportFailure::InvalidEndpoint, err.to_string()))
    }
}

fn build_client(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<reqwest::Client, TransportError> {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|err| TransportError::new(TransportFailure::Network, err.to_string()))
}

fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::new();
    map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| TransportError::new(TransportFailure::InvalidHeader, err.to_string()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|err| TransportError::new(TransportFailure::InvalidHeader, err.to_string()))?;
        map.insert(name, value);
    }
    Ok(map)
}

#[async_trait::async_trait]
impl GraphqlTransport for ReqwestTransport {
    async fn send(&self, request: GraphqlRequest) -> Result<Value, TransportError> {
        let endpoint = self.endpoint(&request.path)?;
        let headers = header_map(&request.headers)?;
        let body = serde_json::to_vec(&request.body)
            .map_err(|err| TransportError::new(TransportFailure::Decode, err.to_string()))?;

        let response = self
            .client
            .post(endpoint)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(
                TransportFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&bytes)
            .map_err(|err| TransportError::new(TransportFailure::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(TransportFailure::Timeout, err.to_string());
    }
    TransportError::new(TransportFailure::Network, err.to_string())
}
