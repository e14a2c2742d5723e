use reqwest::{Client, Request, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Issues a GET against `{base}{path}` and decodes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut builder = self.http_client().get(format!("{}{}", base_url, path));
        if let Some(token) = bearer_token() {
            builder = builder.bearer_auth(token);
        }
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        let (status, body) = self.dispatch(request).await?;
        decode_body(status, &body)
    }

    async fn dispatch(&self, request: Request) -> Result<(StatusCode, String), ApiError> {
        if let Some(mocked) = mock_response(&request).await {
            return mocked;
        }
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok((status, body))
    }
}

fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    if status.is_success() {
        return serde_json::from_str(body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
    }
    match serde_json::from_str::<ApiError>(body) {
        Ok(error) => Err(error),
        Err(_) => Err(ApiError::request_failed(format!(
            "Request failed with status {}",
            status
        ))),
    }
}

#[cfg(target_arch = "wasm32")]
fn bearer_token() -> Option<String> {
    crate::utils::storage::read_item("access_token")
}

#[cfg(all(not(target_arch = "wasm32"), not(test)))]
fn bearer_token() -> Option<String> {
    None
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
async fn mock_response(_request: &Request) -> Option<Result<(StatusCode, String), ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mocking::{register_mock, set_bearer_token, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mocking::{bearer_token, mock_response};
