use async_trait::async_trait;
use sodachat_types::{AskRequest, AskResponse};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Anything that can answer a user message with the assistant's reply.
///
/// Futures are not required to be `Send`: the client runs on the browser's single
/// event loop and on the terminal client's main task.
#[async_trait(?Send)]
pub trait AskClient {
    async fn send_message(&self, content: &str) -> Result<String, ApiError>;
}

/// reqwest-backed client for `POST {base_url}/ask/`
#[derive(Debug, Clone)]
pub struct HttpAskClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAskClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: &ApiConfig, client: reqwest::Client) -> Self {
        Self {
            endpoint: config.ask_url(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, content: &str) -> Result<String, ApiError> {
        let request = AskRequest {
            message: content.to_string(),
        };

        log::debug!("POST {} ({} chars)", self.endpoint, content.chars().count());

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: AskResponse = response.json().await.map_err(|source| ApiError::Decode {
            url: self.endpoint.clone(),
            source,
        })?;

        Ok(data.response)
    }
}

#[async_trait(?Send)]
impl AskClient for HttpAskClient {
    async fn send_message(&self, content: &str) -> Result<String, ApiError> {
        match self.post(content).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                log::error!("Error sending message: {}", e);
                Err(e)
            }
        }
    }
}
