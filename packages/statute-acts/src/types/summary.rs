//! Structured act summaries.

use serde::{Deserialize, Serialize};

/// Placeholder used for every descriptive field of a fallback summary.
pub const NOT_AVAILABLE: &str = "Summary not available";

/// Structured description of one act, as persisted to `act_summaries.json`.
///
/// Field names are the wire format: the model is asked for exactly these
/// keys and the output file uses them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActSummary {
    pub act_name: String,
    pub consumer_product_taxed: String,
    pub tax_rate: String,
    pub taxpayer: String,
    pub enforcement: String,
    pub source_links: Vec<String>,
}

impl ActSummary {
    /// The record substituted when summarization fails.
    pub fn fallback(act_name: impl Into<String>) -> Self {
        Self {
            act_name: act_name.into(),
            consumer_product_taxed: NOT_AVAILABLE.to_string(),
            tax_rate: NOT_AVAILABLE.to_string(),
            taxpayer: NOT_AVAILABLE.to_string(),
            enforcement: NOT_AVAILABLE.to_string(),
            source_links: Vec::new(),
        }
    }

    /// True if every descriptive field holds the fallback placeholder.
    pub fn is_fallback(&self) -> bool {
        self.source_links.is_empty()
            && [
                &self.consumer_product_taxed,
                &self.tax_rate,
                &self.taxpayer,
                &self.enforcement,
            ]
            .iter()
            .all(|f| f.as_str() == NOT_AVAILABLE)
    }
}
