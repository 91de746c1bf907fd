//! Outline assembly: ordering and de-duplication of classified headers.

use std::collections::HashSet;

use crate::model::{Fragment, HeaderLevel, HeadingLevel, OutlineEntry};

/// `(text, page)` pairs already emitted for one document.
#[derive(Debug, Clone, Default)]
pub struct SeenHeaders {
    keys: HashSet<(String, u32)>,
}

impl SeenHeaders {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a header; returns `false` when it was already seen.
    pub fn insert(&mut self, text: &str, page: u32) -> bool {
        self.keys.insert((text.to_string(), page))
    }

    /// Whether the header was already seen.
    pub fn contains(&self, text: &str, page: u32) -> bool {
        self.keys.contains(&(text.to_string(), page))
    }

    /// Number of distinct headers recorded.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Builds the final outline from per-fragment header levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineAssembler;

impl OutlineAssembler {
    /// Assemble the outline with a fresh de-duplication set.
    pub fn assemble(fragments: &[Fragment], levels: &[HeaderLevel], title: &str) -> Vec<OutlineEntry> {
        let mut seen = SeenHeaders::new();
        Self::assemble_with(fragments, levels, title, &mut seen)
    }

    /// Assemble the outline, recording emitted headers in `seen`.
    ///
    /// Entries are ordered by page, then extraction order. The first
    /// occurrence of a `(text, page)` pair wins and entries repeating the
    /// title are dropped.
    pub fn assemble_with(
        fragments: &[Fragment],
        levels: &[HeaderLevel],
        title: &str,
        seen: &mut SeenHeaders,
    ) -> Vec<OutlineEntry> {
        let mut headers: Vec<(usize, HeadingLevel)> = levels
            .iter()
            .enumerate()
            .filter_map(|(i, level)| level.heading().map(|h| (i, h)))
            .collect();
        headers.sort_by_key(|&(i, _)| (fragments[i].page, fragments[i].order, i));

        let mut outline = Vec::with_capacity(headers.len());
        for (i, level) in headers {
            let fragment = &fragments[i];
            if !title.is_empty() && fragment.text == title {
                continue;
            }
            if !seen.insert(&fragment.text, fragment.page) {
                log::debug!(
                    "OutlineAssembler: dropping duplicate {:?} on page {}",
                    fragment.text,
                    fragment.page
                );
                continue;
            }
            outline.push(OutlineEntry::new(
                level,
                fragment.text.clone(),
                fragment.page,
                fragment.order,
            ));
        }
        outline
    }
}
