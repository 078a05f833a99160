use async_trait::async_trait;
use serde_json::Value;
use std::env;

use crate::error::Error;

/// REST transport used by every resource service.
///
/// Services depend on `&dyn Api` so tests can swap in an in-memory fake;
/// `ApiClient` is the real reqwest-backed implementation. Methods deal in
/// `serde_json::Value` to keep the trait object-safe; the services decode
/// into their own models.
#[async_trait]
pub trait Api: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, Error>;
    async fn post(&self, path: &str, body: Value) -> Result<Value, Error>;
    async fn put(&self, path: &str, body: Value) -> Result<Value, Error>;
    async fn delete(&self, path: &str) -> Result<(), Error>;
}

/// HTTP client against the dashboard REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build a client from `TASKBOARD_API_URL` / `TASKBOARD_API_TOKEN`.
    pub fn from_env() -> Self {
        let base_url = env::var("TASKBOARD_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api".to_string());
        let mut client = Self::new(base_url);
        if let Ok(token) = env::var("TASKBOARD_API_TOKEN") {
            client = client.with_token(token);
        }
        client
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!("{} {}", method, path);
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Check the status and decode the body. Non-2xx responses surface the
    /// body's `"error"` field when present, otherwise the raw body text.
    async fn read_json(resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(text);
            tracing::warn!("api error {}: {}", status.as_u16(), message);
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| Error::Decode(e.to_string()))
    }
}

#[async_trait]
impl Api for ApiClient {
    async fn get(&self, path: &str) -> Result<Value, Error> {
        let resp = self.request(reqwest::Method::GET, path).send().await?;
        Self::read_json(resp).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, Error> {
        let resp = self
            .request(reqwest::Method::POST, path)
            .json(&body)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, Error> {
        let resp = self
            .request(reqwest::Method::PUT, path)
            .json(&body)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let resp = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::read_json(resp).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:3000/api/");
        assert_eq!(
            client.url("/projects/1/tasks"),
            "http://localhost:3000/api/projects/1/tasks"
        );
    }

    #[test]
    fn url_keeps_base_without_trailing_slash() {
        let client = ApiClient::new("https://api.example.com");
        assert_eq!(client.url("/users"), "https://api.example.com/users");
    }
}
