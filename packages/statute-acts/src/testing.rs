//! Testing utilities.
//!
//! Mock text generator for exercising the summarizer without real LLM
//! calls. For page fetching see [`crate::fetchers::MockFetcher`].

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use openai_client::OpenAIError;

use crate::error::{AiError, AiResult};
use crate::traits::generator::TextGenerator;

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Failure(String),
}

/// A mock text generator with scripted outcomes.
///
/// Outcomes are consumed in the order they were added, one per call. Once
/// the script runs out every call fails, so an unexpected extra call shows
/// up as a fallback summary rather than a panic.
#[derive(Default, Clone)]
pub struct MockGenerator {
    script: Arc<RwLock<VecDeque<Scripted>>>,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl MockGenerator {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(Scripted::Reply(reply.into()));
        self
    }

    /// Queue a provider failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(Scripted::Failure(message.into()));
        self
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.read().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> AiResult<String> {
        self.prompts.write().unwrap().push(prompt.to_string());

        let next = self.script.write().unwrap().pop_front();
        match next {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Failure(message)) => Err(AiError::Generation(OpenAIError::Network(message))),
            None => Err(AiError::Generation(OpenAIError::Network(
                "mock script exhausted".into(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_is_consumed_in_order() {
        let mock = MockGenerator::new().with_reply("first").with_failure("boom");

        assert_eq!(mock.generate("a").await.unwrap(), "first");
        assert!(mock.generate("b").await.is_err());
        assert!(mock.generate("c").await.is_err());
        assert_eq!(mock.prompts(), vec!["a", "b", "c"]);
    }
}
