//! Request helper client.

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;

use super::error::ApiError;

/// How much of an unparseable body is kept in [`ApiError::Json`].
const BODY_EXCERPT_CHARS: usize = 500;

/// Per-request options.
///
/// Defaults to a `GET` with no extra headers, no query and no body.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,
    /// Headers applied on top of the defaults; these win on conflict
    pub headers: HeaderMap,
    /// Query parameters, appended in order
    pub query: Vec<(String, String)>,
    /// JSON request body
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    /// Create options for a plain `GET`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a header, replacing any earlier value with the same name.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Add a header from strings.
    pub fn try_header(self, name: &str, value: &str) -> Result<Self, ApiError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ApiError::InvalidHeader(name.to_string()))?;
        let value =
            HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader(value.to_string()))?;
        Ok(self.with_header(name, value))
    }

    /// Append a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set the JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Client for the station backend's JSON API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
}

impl ApiClient {
    /// Create a new client for the configured origin.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http_client(http, config))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            origin: config.origin.clone(),
        }
    }

    /// The origin all paths are resolved against.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Absolute URL for a path on the origin.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    /// Send a `GET` with default options.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(path, RequestOptions::default()).await
    }

    /// Send a request and parse the JSON response.
    ///
    /// Non-success statuses become [`ApiError::Status`] carrying the status
    /// code, its reason phrase and the response body as text.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let RequestOptions {
            method,
            headers,
            query,
            body,
        } = options;

        debug!(%method, %url, "sending API request");

        let mut request = self
            .http
            .request(method, &url)
            .headers(merge_headers(headers));

        if !query.is_empty() {
            request = request.query(&query);
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(&body).map_err(|e| ApiError::Json {
                message: e.to_string(),
                body: None,
            })?;
            request = request.body(bytes);
        }

        let response = request.send().await?;
        let status = response.status();

        debug!(status = status.as_u16(), %url, "received API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })
    }
}

/// Default headers with the caller's headers layered on top.
fn merge_headers(overrides: HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    // `extend` replaces every existing value for a name it yields
    headers.extend(overrides);
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{ACCEPT, AUTHORIZATION};

    #[test]
    fn default_options() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.query.is_empty());
        assert!(options.body.is_none());
    }

    #[test]
    fn options_builder() {
        let options = RequestOptions::new()
            .with_method(Method::POST)
            .with_header(ACCEPT, HeaderValue::from_static("application/json"))
            .with_query("lat", "52.5")
            .with_body(serde_json::json!({ "name": "Aral" }));

        assert_eq!(options.method, Method::POST);
        assert_eq!(options.headers[ACCEPT], "application/json");
        assert_eq!(options.query, vec![("lat".to_string(), "52.5".to_string())]);
        assert_eq!(options.body.unwrap()["name"], "Aral");
    }

    #[test]
    fn try_header_rejects_invalid_input() {
        let err = RequestOptions::new().try_header("bad header", "x").unwrap_err();
        assert!(matches!(err, ApiError::InvalidHeader(name) if name == "bad header"));

        let err = RequestOptions::new()
            .try_header("x-trace", "line\nbreak")
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidHeader(_)));
    }

    #[test]
    fn merge_keeps_default_content_type() {
        let mut extra = HeaderMap::new();
        extra.insert(AUTHORIZATION, HeaderValue::from_static("Bearer t"));

        let merged = merge_headers(extra);
        assert_eq!(merged[CONTENT_TYPE], "application/json");
        assert_eq!(merged[AUTHORIZATION], "Bearer t");
    }

    #[test]
    fn merge_lets_caller_override_content_type() {
        let mut extra = HeaderMap::new();
        extra.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let merged = merge_headers(extra);
        assert_eq!(merged.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(merged[CONTENT_TYPE], "text/plain");
    }

    #[test]
    fn url_joins_origin_and_path() {
        let client = ApiClient::new(&ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.origin(), "http://localhost:8080");
        assert_eq!(
            client.url("/api/gas-stations"),
            "http://localhost:8080/api/gas-stations"
        );
    }
}
