//! Text-generation backends.

mod openai;

pub use openai::{OpenAIGenerator, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
