//! Text generation.

use async_trait::async_trait;

use crate::error::AiResult;

/// A language model that turns one prompt into one reply.
///
/// Implementations own their sampling settings (model, temperature,
/// output cap); callers only supply the prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` as a single user message and return the reply text.
    async fn generate(&self, prompt: &str) -> AiResult<String>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    async fn generate(&self, prompt: &str) -> AiResult<String> {
        (**self).generate(prompt).await
    }
}
