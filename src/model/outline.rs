//! Result types handed to the serialization step.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outline entry level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level header
    H1,
    /// Second-level header
    H2,
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingLevel::H1 => f.write_str("H1"),
            HeadingLevel::H2 => f.write_str("H2"),
        }
    }
}

/// One header in the document outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Header level
    pub level: HeadingLevel,
    /// Header text
    pub text: String,
    /// 1-based page number
    pub page: u32,
    /// Extraction order of the source fragment (not serialized)
    #[serde(skip)]
    pub order: usize,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32, order: usize) -> Self {
        Self {
            level,
            text: text.into(),
            page,
            order,
        }
    }
}

/// Title and outline inferred for one document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParseResult {
    /// Document title, empty when no candidate qualified
    pub title: String,
    /// Headers ordered by page, then extraction order
    pub outline: Vec<OutlineEntry>,
}

impl ParseResult {
    /// Result for a document with no discoverable structure.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether a title was found.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Number of outline entries at the given level.
    pub fn count(&self, level: HeadingLevel) -> usize {
        self.outline.iter().filter(|e| e.level == level).count()
    }
}
