//! Noise classification: boilerplate, stamps, tables and ToC lines.
//!
//! Rules are evaluated per fragment in a fixed order and the first match
//! wins. A final page-level pass turns pages dominated by ToC lines into
//! ToC pages wholesale.

use std::collections::{HashMap, HashSet};

use crate::model::{Fragment, NoiseLabel};

use super::options::AnalysisOptions;
use super::page_index::PageIndex;
use super::patterns::{self, first_match, mask_digits};
use super::table_detector::TableDetector;

/// Labels produced for one document.
#[derive(Debug, Clone, Default)]
pub struct NoiseReport {
    /// One label per input fragment
    pub labels: Vec<NoiseLabel>,
    /// Pages treated as table of contents, ascending
    pub toc_pages: Vec<u32>,
}

/// Assigns a `NoiseLabel` to every fragment.
#[derive(Debug, Clone)]
pub struct NoiseClassifier {
    options: AnalysisOptions,
    tables: TableDetector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Edge {
    First,
    Last,
}

impl NoiseClassifier {
    /// Create a classifier with the given options.
    pub fn new(options: &AnalysisOptions) -> Self {
        Self {
            options: options.clone(),
            tables: TableDetector::with_config(options.table.clone()),
        }
    }

    /// Label every fragment of a document.
    pub fn classify(&self, fragments: &[Fragment], pages: &PageIndex) -> NoiseReport {
        let boilerplate = self.repeating_boilerplate(fragments, pages);

        let mut labels: Vec<NoiseLabel> = (0..fragments.len())
            .map(|i| self.classify_fragment(fragments, pages, i, boilerplate.contains(&i)))
            .collect();

        let toc_pages = self.toc_pages(fragments, pages);
        for &page in &toc_pages {
            for &i in pages.page(page) {
                labels[i] = NoiseLabel::TocEntry;
            }
        }

        log::debug!(
            "NoiseClassifier: {} of {} fragments labelled as noise, ToC pages {:?}",
            labels.iter().filter(|l| l.is_noise()).count(),
            fragments.len(),
            toc_pages
        );

        NoiseReport { labels, toc_pages }
    }

    fn classify_fragment(
        &self,
        fragments: &[Fragment],
        pages: &PageIndex,
        index: usize,
        repeating: bool,
    ) -> NoiseLabel {
        let text = fragments[index].text.as_str();

        if let Some(rule) = first_match(patterns::HEADER_FOOTER, text) {
            log::trace!("NoiseClassifier: {:?} matched {}", text, rule.name);
            return NoiseLabel::HeaderFooter;
        }
        if repeating {
            return NoiseLabel::HeaderFooter;
        }
        if let Some(rule) = first_match(patterns::VERSION_INFO, text) {
            log::trace!("NoiseClassifier: {:?} matched {}", text, rule.name);
            return NoiseLabel::VersionInfo;
        }
        if self.tables.is_table_element(fragments, pages, index) {
            return NoiseLabel::TableElement;
        }
        if let Some(rule) = first_match(patterns::TOC_LINE, text) {
            log::trace!("NoiseClassifier: {:?} matched {}", text, rule.name);
            return NoiseLabel::TocEntry;
        }
        NoiseLabel::None
    }

    /// Pages where the share of ToC-looking lines exceeds the configured ratio.
    fn toc_pages(&self, fragments: &[Fragment], pages: &PageIndex) -> Vec<u32> {
        pages
            .pages()
            .filter(|(_, ids)| {
                let matching = ids
                    .iter()
                    .filter(|&&i| patterns::any_match(patterns::TOC_LINE, &fragments[i].text))
                    .count();
                matching as f32 / ids.len() as f32 > self.options.toc_page_ratio
            })
            .map(|(page, _)| page)
            .collect()
    }

    /// First/last fragments of a page whose text (digits masked) recurs at
    /// the same vertical position on a majority of pages.
    fn repeating_boilerplate(&self, fragments: &[Fragment], pages: &PageIndex) -> HashSet<usize> {
        let mut found = HashSet::new();
        let page_count = pages.page_count();
        if page_count < self.options.min_boilerplate_pages.max(2) {
            return found;
        }

        let mut groups: HashMap<(Edge, String), Vec<usize>> = HashMap::new();
        for (_, ids) in pages.pages() {
            let edges = [(Edge::First, ids.first()), (Edge::Last, ids.last())];
            for (edge, index) in edges {
                // Position is part of the match, so fragments without geometry never repeat
                let Some(&i) = index.filter(|&&i| !fragments[i].bbox.is_empty()) else {
                    continue;
                };
                groups
                    .entry((edge, mask_digits(&fragments[i].text)))
                    .or_default()
                    .push(i);
            }
        }

        for members in groups.values() {
            if members.len() < 2 {
                continue;
            }
            let cluster = self.largest_position_cluster(fragments, members);
            let cluster_pages: HashSet<u32> = cluster.iter().map(|&i| fragments[i].page).collect();
            if cluster_pages.len() as f32 / page_count as f32 > self.options.boilerplate_page_ratio
            {
                found.extend(cluster);
            }
        }

        if !found.is_empty() {
            log::debug!(
                "NoiseClassifier: {} repeating header/footer fragments",
                found.len()
            );
        }
        found
    }

    /// Largest subset of `members` whose top edges lie within tolerance of
    /// one of them.
    fn largest_position_cluster(&self, fragments: &[Fragment], members: &[usize]) -> Vec<usize> {
        let tolerance = self.options.boilerplate_y_tolerance;
        members
            .iter()
            .map(|&anchor| {
                let y = fragments[anchor].bbox.y0;
                members
                    .iter()
                    .copied()
                    .filter(|&i| (fragments[i].bbox.y0 - y).abs() <= tolerance)
                    .collect::<Vec<_>>()
            })
            .max_by_key(Vec::len)
            .unwrap_or_default()
    }
}
