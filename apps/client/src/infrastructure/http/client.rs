use super::errors::error_from_status;
use crate::domain::shared::errors::DomainError;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

/// Thin wrapper over a cookie-carrying `reqwest::Client` bound to the
/// backend's base URL.
///
/// The session token is a cookie set by the login endpoint, so every
/// repository must share one `BackendClient` for calls to be authenticated.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, DomainError> {
        let http = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    /// POST whose response body carries nothing the client needs.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), DomainError> {
        self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), DomainError> {
        self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), DomainError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "backend response");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(error_from_status(status, &body))
    }
}
