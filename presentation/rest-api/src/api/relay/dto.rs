use serde::Deserialize;

use business::domain::relay::model::{ChatMessage, ChatRequest, ChatRole};

/// Chat payload sent by the Qualtrics frontend.
///
/// `model` and `temperature` are optional; normalization applies the
/// relay defaults. Extra fields are ignored rather than rejected so the
/// frontend can evolve independently.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionRequestDto {
    pub model: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessageDto>,
    pub temperature: Option<f64>,
    pub seed: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessageDto {
    pub role: ChatRole,
    pub content: String,
}

impl ChatCompletionRequestDto {
    pub fn into_domain(self) -> ChatRequest {
        let messages = self
            .messages
            .into_iter()
            .map(|message| ChatMessage {
                role: message.role,
                content: message.content,
            })
            .collect();

        ChatRequest::new(self.model, messages, self.temperature, self.seed)
    }
}
