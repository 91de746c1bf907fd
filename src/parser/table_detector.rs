//! Light-weight table cell detection from neighboring fragments.
//!
//! This is not full table reconstruction: a fragment is a table cell when
//! it looks like cell content and its immediate extraction-order
//! neighbors line up with it as a row.

use crate::model::Fragment;

use super::page_index::PageIndex;
use super::patterns::is_revision_keyword;

/// Table detector configuration.
#[derive(Debug, Clone)]
pub struct TableDetectorConfig {
    /// Minimum number of same-row neighbors (excluding the fragment itself)
    pub min_row_neighbors: usize,
    /// Maximum characters for cell-like text
    pub max_cell_chars: usize,
    /// Maximum words for cell-like text
    pub max_cell_words: usize,
    /// Minimum share of digit/symbol characters for cell-like text (0.0-1.0)
    pub min_symbolic_ratio: f32,
    /// Y tolerance for grouping fragments into a row (fraction of font size)
    pub y_tolerance_factor: f32,
    /// Largest allowed ratio between the widest and narrowest column gap
    pub max_gap_ratio: f32,
    /// How many neighbors on each side to scan for revision-table keywords
    pub revision_window: usize,
}

impl Default for TableDetectorConfig {
    fn default() -> Self {
        Self {
            min_row_neighbors: 2,
            max_cell_chars: 24,
            max_cell_words: 3,
            min_symbolic_ratio: 0.5,
            y_tolerance_factor: 0.4,
            max_gap_ratio: 4.0,
            revision_window: 5,
        }
    }
}

/// Decides whether a fragment is part of a table.
#[derive(Debug, Clone)]
pub struct TableDetector {
    config: TableDetectorConfig,
}

impl TableDetector {
    /// Create a new table detector with default configuration.
    pub fn new() -> Self {
        Self {
            config: TableDetectorConfig::default(),
        }
    }

    /// Create a new table detector with custom configuration.
    pub fn with_config(config: TableDetectorConfig) -> Self {
        Self { config }
    }

    /// Whether the fragment at `index` is a table element.
    pub fn is_table_element(&self, fragments: &[Fragment], pages: &PageIndex, index: usize) -> bool {
        self.in_numeric_row(fragments, pages, index)
            || self.in_revision_table(fragments, pages, index)
    }

    /// Short, mostly numeric/symbolic text.
    pub fn is_cell_text(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty()
            || text.chars().count() > self.config.max_cell_chars
            || text.split_whitespace().count() > self.config.max_cell_words
        {
            return false;
        }

        let visible: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        let symbolic = visible.iter().filter(|c| !c.is_alphabetic()).count();
        symbolic as f32 / visible.len() as f32 >= self.config.min_symbolic_ratio
    }

    /// Contiguous extraction-order neighbors sitting on the same row as
    /// `index`, in page order, including `index` itself.
    pub fn row_members(&self, fragments: &[Fragment], pages: &PageIndex, index: usize) -> Vec<usize> {
        let anchor = &fragments[index];
        if anchor.bbox.is_empty() {
            return vec![index];
        }

        let mut before = Vec::new();
        let mut offset = -1;
        while let Some(n) = pages.neighbor(index, offset) {
            if !self.same_row(anchor, &fragments[n]) {
                break;
            }
            before.push(n);
            offset -= 1;
        }

        let mut members: Vec<usize> = before.into_iter().rev().collect();
        members.push(index);

        let mut offset = 1;
        while let Some(n) = pages.neighbor(index, offset) {
            if !self.same_row(anchor, &fragments[n]) {
                break;
            }
            members.push(n);
            offset += 1;
        }

        members
    }

    fn in_numeric_row(&self, fragments: &[Fragment], pages: &PageIndex, index: usize) -> bool {
        if !self.is_cell_text(&fragments[index].text) {
            return false;
        }

        let row = self.row_members(fragments, pages, index);
        if row.len() < self.config.min_row_neighbors + 1 {
            return false;
        }

        let comparable = self.has_comparable_spacing(fragments, &row);
        log::trace!(
            "TableDetector: fragment {} has {} row neighbors, comparable spacing = {}",
            fragments[index].order,
            row.len() - 1,
            comparable
        );
        comparable
    }

    fn in_revision_table(&self, fragments: &[Fragment], pages: &PageIndex, index: usize) -> bool {
        if !is_revision_keyword(&fragments[index].text) {
            return false;
        }

        let window = self.config.revision_window as isize;
        (-window..=window)
            .filter(|&offset| offset != 0)
            .filter_map(|offset| pages.neighbor(index, offset))
            .any(|n| is_revision_keyword(&fragments[n].text))
    }

    fn same_row(&self, a: &Fragment, b: &Fragment) -> bool {
        if b.bbox.is_empty() {
            return false;
        }
        let tolerance = a.font_size.max(b.font_size) * self.config.y_tolerance_factor;
        (a.bbox.center_y() - b.bbox.center_y()).abs() <= tolerance
    }

    /// Cells must not overlap and the gaps between them must be of
    /// comparable size.
    fn has_comparable_spacing(&self, fragments: &[Fragment], row: &[usize]) -> bool {
        let mut boxes: Vec<_> = row.iter().map(|&i| fragments[i].bbox).collect();
        boxes.sort_by(|a, b| a.x0.total_cmp(&b.x0));

        let gaps: Vec<f32> = boxes.windows(2).map(|w| w[1].x0 - w[0].x1).collect();
        if gaps.iter().any(|&g| g < 0.0) {
            return false;
        }

        let widest = gaps.iter().copied().fold(0.0_f32, f32::max);
        let narrowest = gaps.iter().copied().fold(f32::INFINITY, f32::min);
        widest <= narrowest.max(1.0) * self.config.max_gap_ratio
    }
}

impl Default for TableDetector {
    fn default() -> Self {
        Self::new()
    }
}
