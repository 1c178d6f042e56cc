use crate::error::ClientError;
use async_trait::async_trait;
use roomcall_core::{ErrorResponse, TokenRequest, TokenResponse};
use tracing::debug;

pub const TOKEN_PATH: &str = "/generate-token";

/// Source of room access tokens.
#[async_trait(?Send)]
pub trait TokenProvider {
    async fn fetch_token(&self, request: &TokenRequest) -> Result<String, ClientError>;
}

/// Fetches tokens from the token service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTokenProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTokenProvider {
    /// `endpoint` is the full token URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Builds the endpoint from the service's base URL.
    pub fn from_base_url(base_url: &str) -> Self {
        Self::new(format!("{}{}", base_url.trim_end_matches('/'), TOKEN_PATH))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl TokenProvider for HttpTokenProvider {
    async fn fetch_token(&self, request: &TokenRequest) -> Result<String, ClientError> {
        debug!("Requesting token from {}", self.endpoint);

        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(ClientError::TokenRejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: TokenResponse = response.json().await?;
        if body.token.is_empty() {
            return Err(ClientError::EmptyToken);
        }
        Ok(body.token)
    }
}
