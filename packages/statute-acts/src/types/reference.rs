//! Act references found on a statute page.

use serde::{Deserialize, Serialize};

/// A textual mention of a legislative enactment, optionally hyperlinked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActReference {
    /// Trimmed visible text (e.g., "Acts 1981, 67th Leg.")
    pub label: String,

    /// The anchor's `href`, as written in the page
    pub link: Option<String>,
}

impl ActReference {
    /// Create an unlinked reference.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: None,
        }
    }

    /// Create a linked reference.
    pub fn with_link(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: Some(link.into()),
        }
    }
}
