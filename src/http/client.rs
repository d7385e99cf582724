//! Retrying HTTP client with credential injection

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Initial delay before the first retry
const INITIAL_BACKOFF: Duration = Duration::from_millis(100);

/// Upper bound on any single backoff delay
pub(super) const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// HTTP client for the resource API.
///
/// Applies the configured credentials to every request: the API key as the
/// `key` query parameter, a bearer token (when present) as the
/// `Authorization` header. Retries transient failures with exponential
/// backoff; 4xx responses other than 429 fail immediately with the decoded
/// API error envelope.
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a client from a validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET a JSON document from `path` under the base URL
    pub async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<JsonValue> {
        self.send_json(Method::GET, path, query, None).await
    }

    /// POST a JSON body, returning the JSON response
    pub async fn post_json(
        &self,
        path: &str,
        query: &[(String, String)],
        body: &JsonValue,
    ) -> Result<JsonValue> {
        self.send_json(Method::POST, path, query, Some(body)).await
    }

    /// PUT a JSON body, returning the JSON response
    pub async fn put_json(
        &self,
        path: &str,
        query: &[(String, String)],
        body: &JsonValue,
    ) -> Result<JsonValue> {
        self.send_json(Method::PUT, path, query, Some(body)).await
    }

    /// DELETE a resource; the API responds with an empty body on success
    pub async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<()> {
        self.send_json(Method::DELETE, path, query, None).await?;
        Ok(())
    }

    /// Issue one logical request, retrying transient failures.
    async fn send_json(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        let url = self.endpoint(path);
        let max_retries = self.config.max_retries;
        let mut attempt = 0;

        loop {
            let mut req = self.client.request(method.clone(), &url);

            if let Some(key) = &self.config.api_key {
                req = req.query(&[("key", key.as_str())]);
            }
            if !query.is_empty() {
                req = req.query(&query);
            }
            if let Some(token) = &self.config.access_token {
                req = req.bearer_auth(token);
            }
            if let Some(body) = body {
                req = req.json(body);
            }

            match req.send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_success() {
                        debug!(%method, %url, status = status.as_u16(), "request succeeded");
                        return read_json_body(response).await;
                    }

                    if is_retryable_status(status) && attempt < max_retries {
                        let delay = retry_delay(&response, attempt);
                        warn!(
                            %url,
                            status = status.as_u16(),
                            attempt = attempt + 1,
                            max = max_retries + 1,
                            ?delay,
                            "retrying after server error"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return Err(decode_api_error(status, response).await);
                }
                Err(e) => {
                    let transient = e.is_timeout() || e.is_connect();
                    if transient && attempt < max_retries {
                        let delay = backoff_delay(attempt);
                        warn!(%url, attempt = attempt + 1, max = max_retries + 1, ?delay, error = %e, "retrying after transport error");
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    if e.is_timeout() {
                        return Err(Error::Timeout {
                            timeout_ms: self.config.timeout().as_millis() as u64,
                        });
                    }
                    return Err(Error::Http(e));
                }
            }
        }
    }

    /// Join a resource path onto the configured base URL
    pub(super) fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("has_api_key", &self.config.api_key.is_some())
            .field("has_access_token", &self.config.access_token.is_some())
            .finish_non_exhaustive()
    }
}

/// Parse a success response body; empty bodies (204, delete) become null.
async fn read_json_body(response: Response) -> Result<JsonValue> {
    let text = response.text().await.map_err(Error::Http)?;
    if text.trim().is_empty() {
        return Ok(JsonValue::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

/// Wire shape of the API error envelope
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    reason: Option<String>,
}

/// Decode a non-2xx response into [`Error::Api`].
///
/// Falls back to the raw body text when the envelope doesn't parse.
async fn decode_api_error(status: StatusCode, response: Response) -> Error {
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => {
            let reason = envelope.error.errors.into_iter().find_map(|e| e.reason);
            let message = envelope
                .error
                .message
                .unwrap_or_else(|| status.to_string());
            Error::api(status.as_u16(), reason, message)
        }
        Err(_) => Error::api(status.as_u16(), None, body),
    }
}

/// Check if an HTTP status is retryable
fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}

/// Exponential backoff capped at [`MAX_BACKOFF`]
pub(super) fn backoff_delay(attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt);
    std::cmp::min(INITIAL_BACKOFF * factor, MAX_BACKOFF)
}

/// Delay before retrying `response`, honoring `Retry-After` when present
fn retry_delay(response: &Response, attempt: u32) -> Duration {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
        .map(|d| std::cmp::min(d, MAX_BACKOFF))
        .unwrap_or_else(|| backoff_delay(attempt))
}
