use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::CompletionError;
use crate::models::{CompletionRequest, CompletionResponse, Message};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// One-operation interface over the completion API so the watcher can be
/// tested against a fake provider instead of the network.
#[async_trait]
pub trait CompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

pub struct CompletionClient {
    http: Client,
    api_url: String,
    api_key: String,
    model: String,
    system_prompt: String
}

impl CompletionClient {

    pub fn new(http: Client, config: &Config) -> Self {
        Self::with_api_url(http, config, DEFAULT_API_URL)
    }

    // url is a parameter so tests can point the client at a mock server
    pub fn with_api_url(http: Client, config: &Config, api_url: &str) -> Self {
        CompletionClient {
            http,
            api_url: api_url.to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone()
        }
    }

}

#[async_trait]
impl CompletionProvider for CompletionClient {

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message::system(self.system_prompt.clone()),
                Message::user(prompt)
            ]
        };

        // No retries and no timeout override; the call blocks until the
        // full response body has arrived.
        let response = self.http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api { status, body });
        }

        let completion: CompletionResponse = response.json().await?;
        debug!(%status, choices = completion.choices.len(), "completion response received");

        // An empty choices array is a valid "no answer" outcome, not an error.
        let answer = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(answer)

    }

}
