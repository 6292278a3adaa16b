//! Vimeo API client: the endpoint dispatcher and response validator
//!
//! [`VimeoClient::request`] is the single dispatch point every resource
//! operation goes through: it builds default headers, serializes the JSON
//! body, applies the timeout and bearer auth, prefixes the API root, and
//! hands the assembled request to the transport. [`VimeoClient::execute`]
//! adds the status classification on top.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE, USER_AGENT};

use crate::auth::{BearerAuth, Credentials};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpClient, HttpRequest, HttpResponse, Method, ReqwestClient};

/// Query filter appended to list-style reads
///
/// One value per key; inserting a key again replaces the previous value.
pub type QueryFilter = BTreeMap<String, String>;

/// A declarative resource operation: what to call and which statuses the
/// API is documented to produce for it
#[derive(Debug, Clone)]
pub struct Operation<'a> {
    pub method: Method,
    /// Path with resource identifiers already interpolated
    pub uri: String,
    pub filter: Option<&'a QueryFilter>,
    pub body: Option<serde_json::Value>,
    pub success: &'static [u16],
    /// Statuses the API documents as failures for this endpoint. Anything
    /// outside both sets classifies as unexpected.
    pub errors: &'static [u16],
}

/// Per-call overrides for the dispatcher
///
/// `Default` leaves every decision to the client configuration.
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// Extra headers; values here win over the configured Accept/User-Agent
    pub headers: Option<HeaderMap>,
    /// JSON payload, serialized with `Content-Type: application/json`
    pub body: Option<serde_json::Value>,
    /// Pre-serialized payload sent as-is, skipping JSON serialization
    pub raw_body: Option<String>,
    /// Overrides the configured read timeout
    pub timeout: Option<Duration>,
    /// Skips bearer-token attachment for this call
    pub unauthenticated: bool,
}

/// Vimeo API client
///
/// Generic over the HTTP transport for testability. Shareable behind
/// `&self` from concurrent tasks; the configuration never changes after
/// construction.
pub struct VimeoClient<H: HttpClient = ReqwestClient> {
    http: H,
    config: ClientConfig,
    auth: Option<BearerAuth>,
}

impl VimeoClient<ReqwestClient> {
    /// Creates a client with the default configuration and transport
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Creates a client with a custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self, ClientError> {
        let http = ReqwestClient::new(config.connect_timeout)?;
        Self::from_parts(credentials, config, http)
    }
}

impl<H: HttpClient> VimeoClient<H> {
    fn from_parts(credentials: Credentials, config: ClientConfig, http: H) -> Result<Self, ClientError> {
        if let Err(err) = credentials.validate() {
            tracing::error!(%err, "rejecting client construction");
            return Err(err);
        }

        let auth = credentials.token.as_deref().map(BearerAuth::new);
        Ok(Self { http, config, auth })
    }

    /// Read access to the active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Dispatches one call: headers, serialization, timeout, auth, URL
    /// prefixing, then the transport
    ///
    /// No status classification happens here; a completed response is
    /// returned whatever its status. See [`VimeoClient::execute`] for the
    /// classified path the resource operations use.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, ClientError> {
        if !self.config.allows(method) {
            let err = ClientError::MethodNotImplemented(method);
            tracing::error!(%err, "dispatch rejected");
            return Err(err);
        }

        let mut headers = options.headers.unwrap_or_default();
        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, self.config.accept.parse().unwrap());
        }
        if !headers.contains_key(USER_AGENT) {
            headers.insert(USER_AGENT, self.config.user_agent.parse().unwrap());
        }

        let mut body = options.raw_body;
        if body.is_none() {
            if let Some(json) = options.body {
                headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());
                body = Some(json.to_string());
            }
        }

        if !options.unauthenticated {
            if let Some(auth) = &self.auth {
                auth.apply(&mut headers);
            }
        }

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.config.api_root, path),
            headers,
            body,
            timeout: options.timeout.unwrap_or(self.config.read_timeout),
        };

        Ok(self.http.send(request).await?)
    }

    /// Runs a catalog operation: dispatch, then classify the response
    /// against the operation's declared status sets
    pub async fn execute(&self, op: Operation<'_>) -> Result<HttpResponse, ClientError> {
        let uri = match op.filter {
            Some(filter) if !filter.is_empty() => format!("{}?{}", op.uri, querystring(filter)),
            _ => op.uri,
        };
        tracing::debug!(method = %op.method, uri = %uri, "dispatching API call");

        let options = RequestOptions {
            body: op.body,
            ..RequestOptions::default()
        };
        let response = self.request(op.method, &uri, options).await?;
        self.check_response(response, op.success, op.errors)
    }

    /// Classifies a completed response against the expected status sets
    ///
    /// Every error is logged here, at the classification site, then
    /// returned to the caller.
    fn check_response(
        &self,
        response: HttpResponse,
        success: &[u16],
        errors: &[u16],
    ) -> Result<HttpResponse, ClientError> {
        if success.contains(&response.status) {
            tracing::debug!(status = response.status, url = %response.url, "successful API call");
            return Ok(response);
        }

        let message = response.error_message();
        let err = if errors.contains(&response.status) {
            ClientError::from_status(response.status, message, response.url)
        } else {
            ClientError::UnexpectedStatus {
                status: response.status,
                message,
                url: response.url,
            }
        };
        tracing::error!(%err, "API call failed");
        Err(err)
    }
}

impl<H: HttpClient + Clone> Clone for VimeoClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config.clone(),
            auth: self.auth.clone(),
        }
    }
}

/// Test-only constructor for dependency injection
#[cfg(test)]
impl<H: HttpClient> VimeoClient<H> {
    /// Creates a client with a custom HTTP transport
    pub fn with_http_client(
        credentials: Credentials,
        config: ClientConfig,
        http: H,
    ) -> Result<Self, ClientError> {
        Self::from_parts(credentials, config, http)
    }
}

/// Serializes a filter to `k=v` pairs joined by `&`, percent-encoding both
fn querystring(filter: &QueryFilter) -> String {
    filter
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
