//! Session-law references from Texas statute chapters.
//!
//! Fetches a fixed list of statute chapter pages, pulls out the "Acts"
//! references each page cites, and optionally asks an LLM for a structured
//! summary of every reference.
//!
//! # Usage
//!
//! ```rust,ignore
//! use statute_acts::{texas_chapters, ActSummarizer, HttpFetcher, OpenAIGenerator, Pipeline};
//!
//! let report = Pipeline::new(HttpFetcher::new()?).collect(&texas_chapters()).await;
//! print!("{}", statute_acts::output::render_references(&report));
//!
//! let summarizer = ActSummarizer::new(OpenAIGenerator::new(OpenAIClient::new(api_key)));
//! let summaries = summarizer.summarize_report(&report).await;
//! statute_acts::output::write_summaries("act_summaries.json", &summaries)?;
//! ```
//!
//! # Modules
//!
//! - [`pipeline`] - Chapter pass, extraction tiers, summarization
//! - [`traits`] - Fetcher and text-generator seams
//! - [`fetchers`] - HTTP and mock fetchers
//! - [`ai`] - OpenAI text generator
//! - [`output`] - Console listings and the JSON summaries file
//! - [`testing`] - Mock text generator

pub mod ai;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod output;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use config::Config;
pub use error::{AiError, FetchError, OutputError};
pub use traits::{fetcher::PageFetcher, generator::TextGenerator};
pub use types::{
    chapter::{texas_chapters, ChapterActs, ChapterSource, RunReport, SkippedChapter},
    reference::ActReference,
    summary::{ActSummary, NOT_AVAILABLE},
};

pub use ai::OpenAIGenerator;
pub use fetchers::{HttpFetcher, MockFetcher};
pub use pipeline::{extract_act_references, extract_from_html, ActSummarizer, Pipeline};
pub use testing::MockGenerator;
