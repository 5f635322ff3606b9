use std::sync::Arc;

use logger::TracingLogger;

use openai::chat_completion::ChatCompletionOpenAI;
use openai::client::OpenAIClient;

use business::application::relay::forward::ForwardChatUseCaseImpl;
use business::domain::relay::use_cases::forward::ForwardChatUseCase;

use crate::config::app_config::AppConfig;
use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub status_api: crate::api::status::routes::StatusApi,
    pub forward_chat_use_case: Arc<dyn ForwardChatUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();
        let status_api =
            crate::api::status::routes::StatusApi::new(config.deployment_url.clone());

        // Infrastructure adapters. Startup fails here when the credential
        // is missing; the relay never serves traffic without it.
        let openai_config = OpenAIConfig::from_env()?;
        let openai_client = OpenAIClient::new(openai_config.api_key);
        let completer = Arc::new(ChatCompletionOpenAI::new(openai_client));

        let forward_chat_use_case: Arc<dyn ForwardChatUseCase> =
            Arc::new(ForwardChatUseCaseImpl { completer, logger });

        Ok(Self {
            health_api,
            status_api,
            forward_chat_use_case,
        })
    }
}
