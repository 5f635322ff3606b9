use async_trait::async_trait;
use serde_json::json;

use business::domain::relay::errors::RelayError;
use business::domain::relay::model::{ChatRequest, UpstreamReply};
use business::domain::relay::services::ChatCompletionService;

use crate::client::OpenAIClient;

/// Adapter forwarding normalized chat requests to the OpenAI chat
/// completions API and handing the reply back untouched.
pub struct ChatCompletionOpenAI {
    client: OpenAIClient,
}

impl ChatCompletionOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(request: &ChatRequest) -> serde_json::Value {
        let mut body = json!({
            "model": &request.model,
            "messages": &request.messages,
            "temperature": request.temperature,
        });
        // seed makes completions deterministic; omit it entirely when the
        // caller did not ask for one
        if let Some(seed) = request.seed {
            body["seed"] = json!(seed);
        }
        body
    }
}

#[async_trait]
impl ChatCompletionService for ChatCompletionOpenAI {
    async fn complete(&self, request: &ChatRequest) -> Result<UpstreamReply, RelayError> {
        let body = Self::build_body(request);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    RelayError::UpstreamTimeout
                } else {
                    RelayError::UpstreamUnreachable
                }
            })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|err| {
            if err.is_timeout() {
                RelayError::UpstreamTimeout
            } else {
                RelayError::UpstreamUnreachable
            }
        })?;

        Ok(UpstreamReply {
            status,
            body: bytes.to_vec(),
        })
    }
}
