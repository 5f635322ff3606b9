use async_trait::async_trait;

use crate::domain::relay::errors::RelayError;
use crate::domain::relay::model::{ChatRequest, UpstreamReply};

#[async_trait]
pub trait ForwardChatUseCase: Send + Sync {
    async fn execute(&self, request: ChatRequest) -> Result<UpstreamReply, RelayError>;
}
