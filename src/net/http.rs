//! HTTP transport seam.
//!
//! Client-side (csr): real requests via `gloo-net`.
//! Tests: scripted clients implementing `HttpClient`.
//!
//! ERROR HANDLING
//! ==============
//! `send` only fails for transport problems. Non-2xx statuses come back as an
//! ordinary `ApiResponse` so callers decide which statuses are special.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

/// Failures crossing the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, aborted).
    #[error("transport error: {0}")]
    Transport(String),
    /// Response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Server answered with a status the caller treats as failure.
    #[error("unexpected status {0}")]
    Status(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Outgoing request description. `bearer` becomes `Authorization: Bearer <token>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), bearer: None, body: None }
    }

    pub fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::Post, path: path.into(), bearer: None, body: Some(body) }
    }

    #[must_use]
    pub fn with_bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.map(str::to_owned);
        self
    }

    /// Value for the `Authorization` header, if a token is attached.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|t| format!("Bearer {t}"))
    }
}

/// Status plus raw body text of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Same meaning as `Response.ok` in the Fetch API.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Minimal fetch capability.
///
/// Futures are `!Send`: everything runs on the browser's single thread.
pub trait HttpClient {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>>;
}

/// `gloo-net` backed client for the browser build.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooHttpClient;

#[cfg(feature = "csr")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
impl HttpClient for GlooHttpClient {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        Box::pin(async move {
            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.path),
                Method::Post => gloo_net::http::Request::post(&request.path),
            };
            if let Some(value) = request.authorization() {
                builder = builder.header("Authorization", &value);
            }
            let resp = match &request.body {
                Some(body) => builder.json(body).map_err(transport_error)?.send().await,
                None => builder.send().await,
            }
            .map_err(transport_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport_error)?;
            Ok(ApiResponse { status, body })
        })
    }
}
