//! OpenAI implementation of [`TextGenerator`].
//!
//! # Example
//!
//! ```rust,ignore
//! use statute_acts::ai::OpenAIGenerator;
//!
//! let generator = OpenAIGenerator::new(OpenAIClient::new(api_key))
//!     .with_model("gpt-4o-mini")
//!     .with_temperature(0.2);
//! ```

use async_trait::async_trait;

use openai_client::{ChatRequest, Message, OpenAIClient};

use crate::error::{AiError, AiResult};
use crate::traits::generator::TextGenerator;

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Default completion length cap.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Text generator backed by the OpenAI chat-completions API.
#[derive(Clone)]
pub struct OpenAIGenerator {
    client: OpenAIClient,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIGenerator {
    /// Wrap a client with the default model and sampling settings.
    pub fn new(client: OpenAIClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion length cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request(&self, prompt: &str) -> ChatRequest {
        ChatRequest::new(&self.model)
            .message(Message::user(prompt))
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
    }
}

#[async_trait]
impl TextGenerator for OpenAIGenerator {
    async fn generate(&self, prompt: &str) -> AiResult<String> {
        let response = self.client.chat_completion(&self.request(prompt)).await?;
        if response.content.trim().is_empty() {
            return Err(AiError::EmptyResponse);
        }
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_generator_builder() {
        let generator = OpenAIGenerator::new(OpenAIClient::new("sk-test"))
            .with_model("gpt-4o-mini")
            .with_temperature(0.0)
            .with_max_tokens(64);

        let request = generator.request("hello");

        assert_eq!(generator.model(), "gpt-4o-mini");
        assert_eq!(request.messages, vec![Message::user("hello")]);
        assert_eq!(request.temperature, Some(0.0));
        assert_eq!(request.max_tokens, Some(64));
    }

    #[tokio::test]
    async fn test_generate_sends_single_user_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 500,
                "messages": [{"role": "user", "content": "Summarize Acts 1981"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "{}"}, "finish_reason": "stop"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAIClient::new("sk-test").with_base_url(server.uri());
        let reply = OpenAIGenerator::new(client)
            .generate("Summarize Acts 1981")
            .await
            .unwrap();

        assert_eq!(reply, "{}");
    }

    #[tokio::test]
    async fn test_null_content_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "length"}]
            })))
            .mount(&server)
            .await;

        let client = OpenAIClient::new("sk-test").with_base_url(server.uri());
        let err = OpenAIGenerator::new(client).generate("x").await.unwrap_err();

        assert!(matches!(err, AiError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_api_error_maps_to_generation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let client = OpenAIClient::new("sk-bad").with_base_url(server.uri());
        let err = OpenAIGenerator::new(client).generate("x").await.unwrap_err();

        match err {
            AiError::Generation(inner) => assert_eq!(inner.status(), Some(401)),
            other => panic!("expected generation error, got {other:?}"),
        }
    }
}
