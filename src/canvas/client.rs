//! Low-level Canvas HTTP client.
//!
//! Every request goes through [`CanvasClient::execute`], which runs a single
//! explicit pipeline:
//!
//! 1. send the request, retrying transient failures with exponential backoff;
//! 2. if the body is a JSON array with a `rel="next"` link, follow the links
//!    (each follow-up with its own retries) and concatenate the pages;
//! 3. normalize the final failure, if any, into an [`ApiError`].
//!
//! Accessor methods live in [`super::accessors`] as `impl CanvasClient` blocks.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::error::{ApiError, CanvasError, CanvasResult};
use super::pagination::next_link;
use super::query::Query;
use super::retry::RetryPolicy;

/// Tunables for a [`CanvasClient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    /// Retries after the initial attempt.
    pub max_retries: u32,
    /// Delay before the first retry; doubled for each further retry.
    pub retry_delay: Duration,
    /// Per-request timeout. A timed-out request counts as a network failure.
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay: Duration::from_millis(1000),
            timeout: Duration::from_millis(30_000),
        }
    }
}

impl ClientOptions {
    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.retry_delay)
    }
}

/// Per-call request shaping.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub params: Query,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn params(params: Query) -> Self {
        Self { params, body: None }
    }

    pub fn body(body: Value) -> Self {
        Self {
            params: Query::new(),
            body: Some(body),
        }
    }
}

/// Client for the Canvas LMS REST API (`https://<host>/api/v1`).
///
/// Holds one long-lived `reqwest::Client` with the bearer credential baked
/// into its default headers. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct CanvasClient {
    base_url: String,
    http: Client,
    retry: RetryPolicy,
}

/// One decoded response.
struct Page {
    payload: Value,
    next: Option<String>,
    is_json: bool,
}

/// Outcome of a single failed attempt, before normalization.
enum Failure {
    /// No response was received.
    Network(reqwest::Error),
    /// A non-2xx response was received.
    Status { status: u16, body: Value },
    /// Anything else; surfaced unchanged.
    Unexpected(CanvasError),
}

impl Failure {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => RetryPolicy::is_retryable_status(*status),
            Self::Unexpected(_) => false,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Network(e) => format!("network: {}", e),
            Self::Status { status, .. } => format!("status {}", status),
            Self::Unexpected(e) => e.to_string(),
        }
    }

    fn into_error(self) -> CanvasError {
        match self {
            Self::Network(e) => ApiError::network(e).into(),
            Self::Status { status, body } => ApiError::from_response(status, body).into(),
            Self::Unexpected(e) => e,
        }
    }
}

impl CanvasClient {
    /// Create a client for `https://<host>/api/v1`.
    ///
    /// Host and token are expected to be validated by the caller.
    pub fn new(token: &str, host: &str, options: ClientOptions) -> CanvasResult<Self> {
        Self::with_base_url(format!("https://{}/api/v1", host), token, options)
    }

    /// Create a client against an explicit API root (used by tests and proxies).
    pub fn with_base_url(
        base_url: impl Into<String>,
        token: &str,
        options: ClientOptions,
    ) -> CanvasResult<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| CanvasError::invalid_argument("API token contains invalid characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()
            .map_err(CanvasError::Request)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
            retry: options.retry_policy(),
        })
    }

    /// The API root every relative path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ============================================================================
    // Verb helpers
    // ============================================================================

    pub async fn get(&self, path: &str, params: Query) -> CanvasResult<Value> {
        self.execute(Method::GET, path, RequestOptions::params(params))
            .await
    }

    pub async fn post(&self, path: &str, body: Value) -> CanvasResult<Value> {
        self.execute(Method::POST, path, RequestOptions::body(body))
            .await
    }

    pub async fn put(&self, path: &str, body: Value) -> CanvasResult<Value> {
        self.execute(Method::PUT, path, RequestOptions::body(body))
            .await
    }

    pub async fn delete(&self, path: &str, params: Query) -> CanvasResult<Value> {
        self.execute(Method::DELETE, path, RequestOptions::params(params))
            .await
    }

    // ============================================================================
    // Request pipeline
    // ============================================================================

    /// Execute one logical call: request, retries, and pagination drain.
    ///
    /// Returns the decoded payload (all pages concatenated for paginated
    /// collections) or exactly one error. Partial pages are never returned.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> CanvasResult<Value> {
        let url = self.endpoint(path, &options.params)?;
        info!(method = %method, path, "Canvas API request");

        let first = self
            .send_with_retry(&method, &url, options.body.as_ref())
            .await?;

        match (first.payload, first.next) {
            (Value::Array(items), Some(next)) if first.is_json => {
                self.drain_pages(url, items, next).await.map(Value::Array)
            }
            (payload, _) => Ok(payload),
        }
    }

    /// Follow `rel="next"` links, appending each page to `items`.
    ///
    /// A link back to a page already fetched is a pagination error.
    async fn drain_pages(
        &self,
        first_url: String,
        mut items: Vec<Value>,
        first_next: String,
    ) -> CanvasResult<Vec<Value>> {
        let mut seen = HashSet::from([first_url]);
        let mut next = Some(first_next);
        let mut pages = 1usize;

        while let Some(url) = next.take() {
            if !seen.insert(url.clone()) {
                warn!(url = %url, "Pagination link repeats an earlier page");
                return Err(CanvasError::Pagination(url));
            }
            info!(method = %Method::GET, url = %url, page = pages + 1, "Canvas API request");
            let page = self.send_with_retry(&Method::GET, &url, None).await?;
            match page.payload {
                Value::Array(more) => items.extend(more),
                _ => return Err(CanvasError::Pagination(url)),
            }
            next = page.next;
            pages += 1;
        }

        debug!(pages, items = items.len(), "Pagination complete");
        Ok(items)
    }

    /// Send one HTTP request, retrying transient failures.
    ///
    /// Retry state is local to this call.
    async fn send_with_retry(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
    ) -> CanvasResult<Page> {
        let mut state = self.retry.start();

        loop {
            let failure = match self.send_once(method, url, body).await {
                Ok(page) => return Ok(page),
                Err(failure) => failure,
            };

            if !failure.is_retryable() {
                return Err(failure.into_error());
            }

            match state.next_retry() {
                Some((attempt, delay)) => {
                    warn!(
                        method = %method,
                        url,
                        attempt,
                        max = self.retry.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        reason = %failure.describe(),
                        "Retrying Canvas API request"
                    );
                    tokio::time::sleep(delay).await;
                }
                None => return Err(failure.into_error()),
            }
        }
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Page, Failure> {
        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_builder() => return Err(Failure::Unexpected(CanvasError::Request(e))),
            Err(e) => return Err(Failure::Network(e)),
        };

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase().contains("json"))
            .unwrap_or(false);
        let next = next_link(response.headers());

        let bytes = response.bytes().await.map_err(Failure::Network)?;
        let payload = decode_body(&bytes);

        if status.is_success() {
            Ok(Page {
                payload,
                next,
                is_json,
            })
        } else {
            Err(Failure::Status {
                status: status.as_u16(),
                body: payload,
            })
        }
    }

    fn endpoint(&self, path: &str, params: &Query) -> CanvasResult<String> {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.encode()?);
        }
        Ok(url)
    }
}

/// JSON when it parses, text otherwise; an empty body is `null`.
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
