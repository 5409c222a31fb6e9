//! The act-reference pipeline.
//!
//! - Chapter pass: fetch each page, extract references (`collect`)
//! - Extraction tiers: anchors, then paragraph fallback (`extract`)
//! - Summarization with fallback records (`summarize`)

pub mod collect;
pub mod extract;
pub mod prompts;
pub mod summarize;

pub use collect::Pipeline;
pub use extract::{
    anchor_references, extract_act_references, extract_from_html, paragraph_references,
    ACTS_MARKER,
};
pub use prompts::{format_summarize_prompt, NO_LINK_PLACEHOLDER, SUMMARIZE_ACT_PROMPT};
pub use summarize::{parse_summary, ActSummarizer, DEFAULT_DELAY};
