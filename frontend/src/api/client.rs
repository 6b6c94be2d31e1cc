use reqwest::{header, Client, Response};

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: Option<String>,
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
            endpoint: None,
        }
    }

    pub fn new_with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: Some(endpoint.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    async fn resolved_endpoint(&self) -> String {
        if let Some(endpoint) = &self.endpoint {
            endpoint.clone()
        } else {
            config::await_contact_endpoint().await
        }
    }

    /// Sends one contact submission. A single attempt: no retry, no timeout.
    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<MessageResponse, ApiError> {
        let endpoint = self.resolved_endpoint().await;
        let response = self
            .http_client()
            .post(&endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            // The body is optional; an empty or non-JSON 2xx still counts as accepted.
            let text = response.text().await.unwrap_or_default();
            Ok(serde_json::from_str(&text).unwrap_or(MessageResponse {
                message: String::new(),
            }))
        } else {
            Err(error_from_response(response).await)
        }
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    match response.json::<ApiError>().await {
        Ok(error) => error,
        Err(_) => ApiError::http_status(status),
    }
}
