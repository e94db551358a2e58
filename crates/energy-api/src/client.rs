// File: crates/energy-api/src/client.rs
// Summary: HTTP client with the uniform request helper (JSON in/out, CSV passthrough).

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the energy backend REST API.
///
/// Authentication is session-cookie based; the underlying client keeps a
/// cookie store, so a successful `login` authenticates subsequent calls on
/// the same instance.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::POST, path, None::<&()>).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    /// Uniform request helper: serializes `body` as JSON and decodes a JSON
    /// response, surfacing the server's `error` message on failure.
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::Server(server_error_message(&text)));
        }
        serde_json::from_str(&text).map_err(|e| {
            tracing::error!("failed to decode response from {path}: {e}");
            Error::Json(e)
        })
    }

    /// Variant for endpoints that answer `text/csv`: returns the raw body
    /// without attempting to decode it.
    pub(crate) async fn request_text(&self, method: Method, path: &str) -> Result<String> {
        let response = self.send(method, path, None::<&()>).await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let text = response.text().await?;
        if content_type.contains("text/csv") {
            return Ok(text);
        }
        if !status.is_success() {
            return Err(Error::Server(server_error_message(&text)));
        }
        Ok(text)
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut request: RequestBuilder = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }
}

// ---- helpers ----------------------------------------------------------------

/// Pull the `error` field out of the standard failure envelope
/// (`{"success": false, "error": msg}`), with a generic fallback.
fn server_error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorEnvelope {
        error: Option<String>,
    }
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .unwrap_or_else(|| "server error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_message_is_extracted() {
        let msg = server_error_message(r#"{"success":false,"error":"session required"}"#);
        assert_eq!(msg, "session required");
    }

    #[test]
    fn unparseable_error_body_falls_back() {
        assert_eq!(server_error_message("<html>oops</html>"), "server error");
        assert_eq!(server_error_message(r#"{"success":false}"#), "server error");
    }

    #[test]
    fn trailing_slashes_are_stripped_from_the_base_url() {
        let client = ApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }
}
