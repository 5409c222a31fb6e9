//! Act summarization with a fixed fallback record.
//!
//! Every failure (provider error, empty reply, malformed JSON, wrong
//! field types) is absorbed here and replaced by [`ActSummary::fallback`].
//! Callers never see an error and a batch is never cut short.

use std::time::Duration;
use tracing::{debug, info, warn};

use openai_client::strip_code_blocks;

use crate::error::{AiError, AiResult};
use crate::pipeline::prompts::format_summarize_prompt;
use crate::traits::generator::TextGenerator;
use crate::types::chapter::RunReport;
use crate::types::reference::ActReference;
use crate::types::summary::ActSummary;

/// Default pause after each summarization call.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Summarizes act references one at a time, pausing after each call.
pub struct ActSummarizer<G: TextGenerator> {
    generator: G,
    delay: Duration,
}

impl<G: TextGenerator> ActSummarizer<G> {
    /// Create a summarizer with the default one-second pause.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            delay: DEFAULT_DELAY,
        }
    }

    /// Set the pause applied after every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Summarize one reference. Never fails.
    pub async fn summarize(&self, reference: &ActReference, chapter: &str) -> ActSummary {
        let summary = match self.try_summarize(reference, chapter).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(
                    label = %reference.label,
                    chapter = %chapter,
                    error = %e,
                    "Summarization failed, using fallback record"
                );
                ActSummary::fallback(&reference.label)
            }
        };

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        summary
    }

    /// Summarize every reference in `report`, sequentially and in order.
    pub async fn summarize_report(&self, report: &RunReport) -> Vec<ActSummary> {
        let total = report.reference_count();
        let mut summaries = Vec::with_capacity(total);

        for (index, (chapter, reference)) in report.references().enumerate() {
            info!(
                chapter = %chapter,
                label = %reference.label,
                index = index + 1,
                total,
                "Summarizing act"
            );
            summaries.push(self.summarize(reference, chapter).await);
        }

        summaries
    }

    async fn try_summarize(&self, reference: &ActReference, chapter: &str) -> AiResult<ActSummary> {
        let prompt = format_summarize_prompt(&reference.label, reference.link.as_deref(), chapter);
        let reply = self.generator.generate(&prompt).await?;
        debug!(label = %reference.label, reply_len = reply.len(), "Received summary reply");
        parse_summary(&reply)
    }
}

/// Parse a model reply into an [`ActSummary`].
///
/// The reply must be a JSON object with the six summary keys and the
/// expected types. A surrounding Markdown code fence is tolerated; nothing
/// else is repaired.
pub fn parse_summary(reply: &str) -> AiResult<ActSummary> {
    let json = strip_code_blocks(reply);
    if json.is_empty() {
        return Err(AiError::EmptyResponse);
    }
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGenerator;
    use crate::types::chapter::{ChapterActs, ChapterSource};

    const GOOD_REPLY: &str = r#"{
        "act_name": "Limited Sales, Excise, and Use Tax Act",
        "consumer_product_taxed": "Tangible personal property",
        "tax_rate": "6.25 percent",
        "taxpayer": "Retailers collecting from purchasers",
        "enforcement": "Comptroller of Public Accounts",
        "source_links": ["https://statutes.capitol.texas.gov/Docs/TX/htm/TX.151.htm"]
    }"#;

    fn reference() -> ActReference {
        ActReference::with_link("Acts 1981, 67th Leg.", "/sl/1981")
    }

    #[test]
    fn test_parse_summary_accepts_code_fence() {
        let fenced = format!("```json\n{GOOD_REPLY}\n```");

        let summary = parse_summary(&fenced).unwrap();

        assert_eq!(summary.tax_rate, "6.25 percent");
        assert_eq!(summary.source_links.len(), 1);
    }

    #[test]
    fn test_parse_summary_rejects_wrong_types() {
        let reply = r#"{"act_name":"A","consumer_product_taxed":"B","tax_rate":"C",
            "taxpayer":"D","enforcement":"E","source_links":"https://one.test"}"#;

        assert!(matches!(parse_summary(reply), Err(AiError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_summary_rejects_missing_keys() {
        assert!(matches!(
            parse_summary(r#"{"act_name":"A"}"#),
            Err(AiError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_summary_empty_reply() {
        assert!(matches!(parse_summary("  "), Err(AiError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_summarize_parses_reply_and_sends_prompt() {
        let generator = MockGenerator::new().with_reply(GOOD_REPLY);
        let summarizer = ActSummarizer::new(&generator).with_delay(Duration::ZERO);

        let summary = summarizer.summarize(&reference(), "Tax Code Chapter 151").await;

        assert_eq!(summary.act_name, "Limited Sales, Excise, and Use Tax Act");
        assert!(!summary.is_fallback());
        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Acts 1981, 67th Leg."));
        assert!(prompts[0].contains("/sl/1981"));
        assert!(prompts[0].contains("Tax Code Chapter 151"));
    }

    #[tokio::test]
    async fn test_invalid_json_yields_fallback() {
        let generator = MockGenerator::new().with_reply("The act imposes a tax on cigarettes.");
        let summarizer = ActSummarizer::new(generator).with_delay(Duration::ZERO);

        let summary = summarizer.summarize(&reference(), "Tax Code Chapter 151").await;

        assert_eq!(
            summary,
            ActSummary {
                act_name: "Acts 1981, 67th Leg.".to_string(),
                consumer_product_taxed: "Summary not available".to_string(),
                tax_rate: "Summary not available".to_string(),
                taxpayer: "Summary not available".to_string(),
                enforcement: "Summary not available".to_string(),
                source_links: vec![],
            }
        );
    }

    #[tokio::test]
    async fn test_provider_failure_yields_fallback() {
        let generator = MockGenerator::new().with_failure("insufficient_quota");
        let summarizer = ActSummarizer::new(generator).with_delay(Duration::ZERO);

        let summary = summarizer.summarize(&reference(), "Tax Code Chapter 151").await;

        assert!(summary.is_fallback());
        assert_eq!(summary.act_name, "Acts 1981, 67th Leg.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_follows_every_call() {
        let generator = MockGenerator::new()
            .with_reply(GOOD_REPLY)
            .with_failure("timeout")
            .with_reply("not json");
        let summarizer = ActSummarizer::new(generator);
        let report = RunReport {
            chapters: vec![ChapterActs {
                chapter: ChapterSource::new("Tax Code Chapter 151", "https://a.test"),
                references: vec![
                    ActReference::new("Acts 1"),
                    ActReference::new("Acts 2"),
                    ActReference::new("Acts 3"),
                ],
            }],
            ..Default::default()
        };

        let start = tokio::time::Instant::now();
        let summaries = summarizer.summarize_report(&report).await;

        let elapsed = start.elapsed();
        assert!(elapsed >= DEFAULT_DELAY * 3 && elapsed < DEFAULT_DELAY * 4);
        assert_eq!(summaries.len(), 3);
        assert!(!summaries[0].is_fallback());
        assert!(summaries[1].is_fallback());
        assert!(summaries[2].is_fallback());
        assert_eq!(summaries[2].act_name, "Acts 3");
    }

    #[tokio::test]
    async fn test_empty_report_makes_no_calls() {
        let generator = MockGenerator::new();
        let summarizer = ActSummarizer::new(&generator);

        let summaries = summarizer.summarize_report(&RunReport::default()).await;

        assert!(summaries.is_empty());
        assert_eq!(generator.call_count(), 0);
    }
}
