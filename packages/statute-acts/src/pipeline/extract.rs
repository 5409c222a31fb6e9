//! Act reference extraction.
//!
//! Two tiers, tried in order, first non-empty result wins:
//!
//! 1. Anchors whose visible text contains `"Acts"`, with their `href`.
//! 2. Only if (1) found nothing: paragraph text split on `;`, keeping
//!    segments that contain `"Acts"`, unlinked.
//!
//! Matching is a plain case-sensitive substring test, not anchored to word
//! boundaries: "SessionActsIndex" matches, "acts" does not.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::types::reference::ActReference;

/// Substring that marks a reference.
pub const ACTS_MARKER: &str = "Acts";

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("static selector"));
static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("static selector"));

/// Parse `html` and extract its act references.
pub fn extract_from_html(html: &str) -> Vec<ActReference> {
    let document = Html::parse_document(html);
    extract_act_references(&document)
}

/// Extract act references from a parsed document.
pub fn extract_act_references(document: &Html) -> Vec<ActReference> {
    let tiers: [fn(&Html) -> Vec<ActReference>; 2] = [anchor_references, paragraph_references];

    tiers
        .iter()
        .map(|tier| tier(document))
        .find(|refs| !refs.is_empty())
        .unwrap_or_default()
}

/// Tier 1: anchors whose visible text contains the marker.
pub fn anchor_references(document: &Html) -> Vec<ActReference> {
    document
        .select(&ANCHOR)
        .filter_map(|a| {
            let text: String = a.text().collect();
            if !text.contains(ACTS_MARKER) {
                return None;
            }
            Some(ActReference {
                label: text.trim().to_string(),
                link: a.value().attr("href").map(str::to_string),
            })
        })
        .collect()
}

/// Tier 2: `;`-separated paragraph segments containing the marker.
pub fn paragraph_references(document: &Html) -> Vec<ActReference> {
    document
        .select(&PARAGRAPH)
        .flat_map(|p| {
            paragraph_text(p)
                .split(';')
                .filter(|segment| segment.contains(ACTS_MARKER))
                .map(|segment| ActReference::new(segment.trim()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Visible text of an element: each text node trimmed, empty nodes
/// skipped, the rest joined by one space. Whitespace inside a node is kept.
fn paragraph_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
