//! Chapter pass: fetch each chapter page and extract its act references.

use tracing::{info, warn};

use crate::pipeline::extract::extract_from_html;
use crate::traits::fetcher::PageFetcher;
use crate::types::chapter::{ChapterActs, ChapterSource, RunReport, SkippedChapter};

/// Walks a chapter list with one fetcher.
///
/// Chapters are processed strictly in list order, one at a time. A failed
/// fetch skips only that chapter.
pub struct Pipeline<F: PageFetcher> {
    fetcher: F,
}

impl<F: PageFetcher> Pipeline<F> {
    /// Create a pipeline around a fetcher.
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch and extract every chapter, collecting the results.
    pub async fn collect(&self, chapters: &[ChapterSource]) -> RunReport {
        let mut report = RunReport::default();

        for chapter in chapters {
            info!(chapter = %chapter.name, url = %chapter.url, "Processing chapter");

            let html = match self.fetcher.fetch(&chapter.url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!(chapter = %chapter.name, status = ?e.status(), error = %e, "Failed to retrieve page");
                    report.skipped.push(SkippedChapter {
                        chapter: chapter.clone(),
                        status: e.status(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let references = extract_from_html(&html);
            if references.is_empty() {
                info!(chapter = %chapter.name, "No act references found on this page");
                report.empty.push(chapter.clone());
                continue;
            }

            info!(chapter = %chapter.name, count = references.len(), "Extracted act references");
            report.chapters.push(ChapterActs {
                chapter: chapter.clone(),
                references,
            });
        }

        report
    }
}
