use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::relay::errors::RelayError;
use crate::domain::relay::model::{ChatRequest, UpstreamReply};
use crate::domain::relay::services::ChatCompletionService;
use crate::domain::relay::use_cases::forward::ForwardChatUseCase;

pub struct ForwardChatUseCaseImpl {
    pub completer: Arc<dyn ChatCompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ForwardChatUseCase for ForwardChatUseCaseImpl {
    async fn execute(&self, request: ChatRequest) -> Result<UpstreamReply, RelayError> {
        if request.messages.is_empty() {
            self.logger.warn("Rejected chat request with empty messages list");
            return Err(RelayError::EmptyMessages);
        }

        self.logger.info(&format!(
            "Forwarding chat request (model: {}, messages: {}, temperature: {})",
            request.model,
            request.messages.len(),
            request.temperature
        ));

        let reply = self.completer.complete(&request).await?;

        if reply.is_success() {
            self.logger.info(&format!(
                "Upstream replied with status {} ({} bytes)",
                reply.status,
                reply.body.len()
            ));
        } else {
            self.logger.warn(&format!(
                "Upstream replied with error status {}",
                reply.status
            ));
        }

        Ok(reply)
    }
}
