use async_trait::async_trait;

use super::types::ProviderId;

/// Source of assistant replies.
///
/// Replies are infallible: every prompt maps to some text.
#[async_trait]
pub trait AiProvider: Send + Sync {
    fn provider_id(&self) -> ProviderId;

    async fn respond(&self, prompt: &str) -> String;
}
