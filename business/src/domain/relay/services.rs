use async_trait::async_trait;

use crate::domain::relay::errors::RelayError;
use crate::domain::relay::model::{ChatRequest, UpstreamReply};

/// Port to the upstream chat-completion API.
///
/// Implementations attach the server-held credential; the caller-supplied
/// payload never carries one. Upstream non-2xx statuses are returned as a
/// regular [`UpstreamReply`] so the endpoint can relay them unchanged;
/// only transport failures map to [`RelayError`].
#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<UpstreamReply, RelayError>;
}
