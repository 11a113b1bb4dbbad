use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use reqwest::Client;
use tracing::debug;

use crate::config::{AskConfig, API_URL_ENV};
use crate::errors::{AskError, AskResult};
use crate::types::{QueryRequest, QueryResponse};

/// Builds the HTTP client preconfigured with the static headers every
/// query request carries. No retry, timeout or auth logic is attached.
pub fn build_http_client() -> AskResult<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,PUT,POST,DELETE,PATCH,OPTIONS"),
    );

    Ok(Client::builder().default_headers(headers).build()?)
}

/// Capability interface for submitting a query to the backend.
///
/// There is exactly one production implementation; the trait exists so
/// callers holding the seam (the chat widget above all) can be driven by a
/// mock client in tests.
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Submits one query and returns the parsed response body.
    async fn submit(&self, query: Option<String>) -> AskResult<QueryResponse>;
}

/// Query client backed by a JSON POST to the configured backend URL.
#[derive(Debug, Clone)]
pub struct HttpQueryClient {
    client: Client,
    base_url: String,
}

impl HttpQueryClient {
    /// Create a new query client for the configured backend.
    ///
    /// The backend URL is taken from the config exactly once here; there is
    /// no fallback address and no reload path.
    pub fn new(config: &AskConfig) -> AskResult<Self> {
        let base_url = config.api_url.clone().ok_or_else(|| {
            AskError::ConfigError(format!(
                "backend URL is required to initialize the query client (set {})",
                API_URL_ENV
            ))
        })?;

        Ok(Self {
            client: build_http_client()?,
            base_url,
        })
    }

    /// The URL queries are posted to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl QueryClient for HttpQueryClient {
    async fn submit(&self, query: Option<String>) -> AskResult<QueryResponse> {
        let request = QueryRequest { query };
        let payload = serde_json::to_string(&request)?;
        debug!("Posting query to {}", self.base_url);
        debug!("Outgoing payload: {}", payload);

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await?;

        // The outcome is decided by body deserialization alone; the HTTP
        // status code is not interpreted.
        let body = response.json::<QueryResponse>().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_requires_backend_url() {
        let config = AskConfig {
            api_url: None,
            log_level: None,
        };

        let result = HttpQueryClient::new(&config);
        assert!(matches!(result, Err(AskError::ConfigError(_))));
    }

    #[test]
    fn construction_keeps_configured_url_as_is() {
        let config = AskConfig {
            api_url: Some("http://127.0.0.1:9/query".to_string()),
            log_level: None,
        };

        let client = HttpQueryClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/query");
    }
}
