use serde::{Deserialize, Serialize};

/// Model used when the caller does not specify one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Sampling temperature used when the caller omits one or sends an
/// out-of-range value.
pub const DEFAULT_TEMPERATURE: f64 = 1.0;

/// Role of a single conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message of the conversation history sent by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Normalized chat-completion request forwarded upstream.
///
/// The caller-facing payload allows `model` and `temperature` to be
/// omitted; normalization applies the defaults here so every downstream
/// layer works with concrete values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub seed: Option<i64>,
}

impl ChatRequest {
    /// Builds a normalized request from optional caller-supplied fields.
    ///
    /// Out-of-range temperatures fall back to the default instead of
    /// failing; the relay never rejects a request over a tuning knob.
    pub fn new(
        model: Option<String>,
        messages: Vec<ChatMessage>,
        temperature: Option<f64>,
        seed: Option<i64>,
    ) -> Self {
        let model = model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let temperature = temperature
            .filter(|t| (0.0..=2.0).contains(t))
            .unwrap_or(DEFAULT_TEMPERATURE);

        Self {
            model,
            messages,
            temperature,
            seed,
        }
    }
}

/// Raw reply from the upstream chat API, relayed to the caller verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_message() -> ChatMessage {
        ChatMessage {
            role: ChatRole::User,
            content: "Hello".to_string(),
        }
    }

    #[test]
    fn should_apply_default_model_when_missing() {
        let request = ChatRequest::new(None, vec![user_message()], None, None);
        assert_eq!(request.model, DEFAULT_MODEL);
    }

    #[test]
    fn should_apply_default_model_when_blank() {
        let request = ChatRequest::new(Some("  ".to_string()), vec![user_message()], None, None);
        assert_eq!(request.model, DEFAULT_MODEL);
    }

    #[test]
    fn should_keep_caller_model() {
        let request = ChatRequest::new(
            Some("gpt-4o-mini".to_string()),
            vec![user_message()],
            None,
            None,
        );
        assert_eq!(request.model, "gpt-4o-mini");
    }

    #[test]
    fn should_apply_default_temperature_when_missing() {
        let request = ChatRequest::new(None, vec![user_message()], None, None);
        assert_eq!(request.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn should_keep_temperature_within_range() {
        let request = ChatRequest::new(None, vec![user_message()], Some(0.2), None);
        assert_eq!(request.temperature, 0.2);
    }

    #[test]
    fn should_fall_back_to_default_temperature_when_out_of_range() {
        let request = ChatRequest::new(None, vec![user_message()], Some(3.5), None);
        assert_eq!(request.temperature, DEFAULT_TEMPERATURE);

        let request = ChatRequest::new(None, vec![user_message()], Some(-0.1), None);
        assert_eq!(request.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn should_keep_seed_only_when_provided() {
        let with_seed = ChatRequest::new(None, vec![user_message()], None, Some(42));
        assert_eq!(with_seed.seed, Some(42));

        let without_seed = ChatRequest::new(None, vec![user_message()], None, None);
        assert_eq!(without_seed.seed, None);
    }

    #[test]
    fn should_serialize_roles_in_lowercase() {
        let message = ChatMessage {
            role: ChatRole::Assistant,
            content: "Hi".to_string(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "assistant");
    }

    #[test]
    fn should_reject_unknown_role_on_deserialize() {
        let result: Result<ChatMessage, _> =
            serde_json::from_str(r#"{"role":"tool","content":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_detect_success_statuses() {
        let ok = UpstreamReply {
            status: 200,
            body: vec![],
        };
        let rate_limited = UpstreamReply {
            status: 429,
            body: vec![],
        };
        assert!(ok.is_success());
        assert!(!rate_limited.is_success());
    }
}
