//! Per-fragment labels attached by the analysis passes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::HeadingLevel;

/// Why a fragment was excluded from structural consideration.
///
/// Labels are mutually exclusive; the classifier assigns the first rule
/// that matches.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NoiseLabel {
    /// Not noise
    #[default]
    None,
    /// Running header/footer, page number, date or copyright line
    HeaderFooter,
    /// Version, revision or document-ID stamp
    VersionInfo,
    /// Cell of a table
    TableElement,
    /// Table-of-contents line
    TocEntry,
}

impl NoiseLabel {
    /// Every label, in evaluation order.
    pub const ALL: [NoiseLabel; 5] = [
        NoiseLabel::None,
        NoiseLabel::HeaderFooter,
        NoiseLabel::VersionInfo,
        NoiseLabel::TableElement,
        NoiseLabel::TocEntry,
    ];

    /// Whether this label excludes the fragment from title/header selection.
    pub fn is_noise(self) -> bool {
        self != NoiseLabel::None
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            NoiseLabel::None => "none",
            NoiseLabel::HeaderFooter => "header_footer",
            NoiseLabel::VersionInfo => "version_info",
            NoiseLabel::TableElement => "table_element",
            NoiseLabel::TocEntry => "toc_entry",
        }
    }
}

impl fmt::Display for NoiseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural role assigned to a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeaderLevel {
    /// The document title
    Title,
    /// Top-level header
    H1,
    /// Second-level header
    H2,
    /// Paragraph text or noise
    #[default]
    Discard,
}

impl HeaderLevel {
    /// The outline level, if this fragment belongs in the outline.
    pub fn heading(self) -> Option<HeadingLevel> {
        match self {
            HeaderLevel::H1 => Some(HeadingLevel::H1),
            HeaderLevel::H2 => Some(HeadingLevel::H2),
            HeaderLevel::Title | HeaderLevel::Discard => None,
        }
    }
}
