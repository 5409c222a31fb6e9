//! Console rendering and the `act_summaries.json` file.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::OutputResult;
use crate::types::chapter::RunReport;
use crate::types::summary::ActSummary;

/// Default output file for the summarizing run.
pub const DEFAULT_SUMMARIES_PATH: &str = "act_summaries.json";

/// Render the per-chapter reference listing.
///
/// One `--- <chapter> ---` header per chapter with references, then one
/// line per reference: `label - link`, or just `label` when unlinked.
pub fn render_references(report: &RunReport) -> String {
    let mut out = String::new();
    for chapter in &report.chapters {
        let _ = writeln!(out, "\n--- {} ---", chapter.chapter.name);
        for reference in &chapter.references {
            match &reference.link {
                Some(link) => {
                    let _ = writeln!(out, "{} - {}", reference.label, link);
                }
                None => {
                    let _ = writeln!(out, "{}", reference.label);
                }
            }
        }
    }
    out
}

/// Render summaries as readable blocks.
pub fn render_summaries(summaries: &[ActSummary]) -> String {
    let mut out = String::new();
    for summary in summaries {
        let _ = writeln!(out, "\n{}", summary.act_name);
        let _ = writeln!(out, "  Product taxed: {}", summary.consumer_product_taxed);
        let _ = writeln!(out, "  Tax rate:      {}", summary.tax_rate);
        let _ = writeln!(out, "  Taxpayer:      {}", summary.taxpayer);
        let _ = writeln!(out, "  Enforcement:   {}", summary.enforcement);
        if summary.source_links.is_empty() {
            let _ = writeln!(out, "  Sources:       none");
        } else {
            let _ = writeln!(out, "  Sources:       {}", summary.source_links.join(", "));
        }
    }
    out
}

/// Write summaries as a two-space-indented JSON array, replacing `path`.
pub fn write_summaries(path: impl AsRef<Path>, summaries: &[ActSummary]) -> OutputResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(summaries)?;
    fs::write(path, json)?;
    info!(path = %path.display(), count = summaries.len(), "Wrote act summaries");
    Ok(())
}

/// Read a summaries file written by [`write_summaries`].
pub fn read_summaries(path: impl AsRef<Path>) -> OutputResult<Vec<ActSummary>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
