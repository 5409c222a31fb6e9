//! Chapter sources and the per-chapter extraction results.

use serde::{Deserialize, Serialize};

use crate::types::reference::ActReference;

/// A named statute chapter and the page it lives on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSource {
    /// Display name (e.g., "Tax Code Chapter 151")
    pub name: String,

    /// Page URL
    pub url: String,
}

impl ChapterSource {
    /// Create a new chapter source.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// The four Texas statute chapters scraped by default, in processing order.
pub fn texas_chapters() -> Vec<ChapterSource> {
    vec![
        ChapterSource::new(
            "Alcoholic Beverage Code Chapter 11",
            "https://statutes.capitol.texas.gov/Docs/AL/htm/AL.11.htm",
        ),
        ChapterSource::new(
            "Health and Safety Code Chapter 161",
            "https://statutes.capitol.texas.gov/Docs/HS/htm/HS.161.htm",
        ),
        ChapterSource::new(
            "Tax Code Chapter 151",
            "https://statutes.capitol.texas.gov/Docs/TX/htm/TX.151.htm",
        ),
        ChapterSource::new(
            "Tax Code Chapter 162",
            "https://statutes.capitol.texas.gov/Docs/TX/htm/TX.162.htm",
        ),
    ]
}

/// A chapter whose page yielded at least one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterActs {
    pub chapter: ChapterSource,
    pub references: Vec<ActReference>,
}

/// A chapter that was skipped because its page could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedChapter {
    pub chapter: ChapterSource,

    /// HTTP status, when the server answered at all
    pub status: Option<u16>,

    /// Human-readable failure description
    pub reason: String,
}

/// Everything one pass over the chapter list produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Chapters with references, in table order
    pub chapters: Vec<ChapterActs>,

    /// Chapters whose fetch failed
    pub skipped: Vec<SkippedChapter>,

    /// Chapters fetched successfully but with no references
    pub empty: Vec<ChapterSource>,
}

impl RunReport {
    /// Total references across all chapters.
    pub fn reference_count(&self) -> usize {
        self.chapters.iter().map(|c| c.references.len()).sum()
    }

    /// True when no chapter produced a reference.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Iterate `(chapter name, reference)` pairs in processing order.
    pub fn references(&self) -> impl Iterator<Item = (&str, &ActReference)> {
        self.chapters.iter().flat_map(|c| {
            c.references
                .iter()
                .map(move |r| (c.chapter.name.as_str(), r))
        })
    }
}
