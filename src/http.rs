//! HTTP transport abstraction for the Vimeo API client
//!
//! This module provides a trait-based HTTP transport that can be easily
//! mocked for testing. The dispatcher assembles an [`HttpRequest`] and the
//! transport turns it into a completed [`HttpResponse`] or a
//! [`TransportError`].

use std::fmt;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

/// HTTP methods the dispatcher can be configured with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Head,
    Get,
    Post,
    Put,
    Patch,
    Options,
    Delete,
}

impl Method {
    /// Uppercase wire name of the method
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Head => "HEAD",
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Options => "OPTIONS",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-level faults: the request never produced an HTTP status
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// An outgoing request, fully assembled by the dispatcher
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
    /// Read-phase timeout. The connect-phase timeout is fixed at transport
    /// construction.
    pub timeout: Duration,
}

/// Response from an HTTP request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    pub url: String,
}

impl HttpResponse {
    /// Returns true if status is in 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserializes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).context("Failed to parse JSON response")
    }

    /// Human-readable failure message: the `error` field of a JSON error
    /// body, falling back to the raw body text.
    pub(crate) fn error_message(&self) -> String {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| self.body.trim().to_string())
    }
}

/// Trait for making HTTP requests
///
/// This abstraction allows easy mocking of HTTP calls in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends one request and returns the completed response
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a reqwest-based transport with the given connect timeout
    ///
    /// The connect phase is configured once here; reqwest does not support
    /// overriding it per request.
    pub fn new(connect_timeout: Duration) -> Result<Self, TransportError> {
        let inner = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::Other(anyhow!(e)))?;
        Ok(Self { inner })
    }

    fn to_reqwest_method(method: Method) -> reqwest::Method {
        match method {
            Method::Head => reqwest::Method::HEAD,
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Options => reqwest::Method::OPTIONS,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let timeout = request.timeout;
        let mut builder = self
            .inner
            .request(Self::to_reqwest_method(request.method), request.url.as_str())
            .headers(request.headers)
            .timeout(timeout);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| map_reqwest_error(&e, timeout))?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body, url })
    }
}

fn map_reqwest_error(error: &reqwest::Error, timeout: Duration) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(timeout)
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Other(anyhow!(error.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockHttpClient;
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn make_request(method: Method, url: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: url.to_string(),
            headers: HeaderMap::new(),
            body: None,
            timeout: Duration::from_secs(30),
        }
    }

    #[tokio::test]
    async fn mock_client_returns_configured_json() {
        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        let client = MockHttpClient::new().on_get_json("https://api.example.com/data", &data);

        let response = client
            .send(make_request(Method::Get, "https://api.example.com/data"))
            .await
            .unwrap();

        let parsed: TestData = response.json().unwrap();
        assert_eq!(parsed, data);
    }

    #[tokio::test]
    async fn mock_client_returns_error_for_unknown_url() {
        let client = MockHttpClient::new();

        let result = client
            .send(make_request(Method::Get, "https://api.example.com/unknown"))
            .await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No mock response configured"));
    }

    #[tokio::test]
    async fn mock_client_distinguishes_methods() {
        let client = MockHttpClient::new()
            .on(Method::Get, "https://api.example.com/thing", 200, "{}")
            .on(Method::Delete, "https://api.example.com/thing", 204, "");

        let get = client
            .send(make_request(Method::Get, "https://api.example.com/thing"))
            .await
            .unwrap();
        let delete = client
            .send(make_request(Method::Delete, "https://api.example.com/thing"))
            .await
            .unwrap();

        assert_eq!(get.status, 200);
        assert_eq!(delete.status, 204);
    }

    #[tokio::test]
    async fn mock_client_records_requests() {
        let client = MockHttpClient::new().on(Method::Get, "https://api.example.com/test", 200, "{}");

        let mut request = make_request(Method::Get, "https://api.example.com/test");
        request
            .headers
            .insert("Authorization", "Bearer token".parse().unwrap());

        client.send(request).await.unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://api.example.com/test");
        assert!(requests[0].headers.contains_key("Authorization"));
    }

    #[test]
    fn http_response_is_success() {
        let response = HttpResponse {
            status: 200,
            body: "{}".to_string(),
            url: String::new(),
        };
        assert!(response.is_success());

        let response = HttpResponse {
            status: 204,
            body: String::new(),
            url: String::new(),
        };
        assert!(response.is_success());

        let response = HttpResponse {
            status: 404,
            body: "{}".to_string(),
            url: String::new(),
        };
        assert!(!response.is_success());
    }

    #[test]
    fn error_message_prefers_json_error_field() {
        let response = HttpResponse {
            status: 400,
            body: r#"{"error": "Your request was malformed"}"#.to_string(),
            url: String::new(),
        };
        assert_eq!(response.error_message(), "Your request was malformed");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        let response = HttpResponse {
            status: 502,
            body: "Bad Gateway\n".to_string(),
            url: String::new(),
        };
        assert_eq!(response.error_message(), "Bad Gateway");
    }

    #[test]
    fn method_display_matches_wire_name() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Patch.to_string(), "PATCH");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
