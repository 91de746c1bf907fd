//! Analysis options and configuration.

use super::table_detector::TableDetectorConfig;

/// Tuning knobs for the structure-inference passes.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Two font sizes within this many points count as equal
    pub font_size_tolerance: f32,

    /// Maximum word count for a bold body-size fragment to become H2
    pub max_h2_words: usize,

    /// Fraction of a page's fragments that must look like ToC lines
    /// before the whole page is treated as a table of contents
    pub toc_page_ratio: f32,

    /// Fraction of pages a first/last fragment must repeat on to count as
    /// a running header or footer
    pub boilerplate_page_ratio: f32,

    /// Minimum page count before repeating-boilerplate detection applies
    pub min_boilerplate_pages: usize,

    /// Vertical distance (points) within which repeated edge fragments
    /// count as sitting at the same position
    pub boilerplate_y_tolerance: f32,

    /// Neighbor-based table detection settings
    pub table: TableDetectorConfig,

    /// Whether to process multiple documents in parallel
    pub parallel: bool,
}

impl AnalysisOptions {
    /// Create new analysis options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font-size equality tolerance.
    pub fn with_font_size_tolerance(mut self, tolerance: f32) -> Self {
        self.font_size_tolerance = tolerance.max(0.0);
        self
    }

    /// Set the word limit for H2 headers.
    pub fn with_max_h2_words(mut self, words: usize) -> Self {
        self.max_h2_words = words;
        self
    }

    /// Set the ToC whole-page ratio.
    pub fn with_toc_page_ratio(mut self, ratio: f32) -> Self {
        self.toc_page_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Set the repeating-boilerplate page ratio.
    pub fn with_boilerplate_page_ratio(mut self, ratio: f32) -> Self {
        self.boilerplate_page_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Set the minimum page count for boilerplate detection.
    pub fn with_min_boilerplate_pages(mut self, pages: usize) -> Self {
        self.min_boilerplate_pages = pages;
        self
    }

    /// Set table detection settings.
    pub fn with_table_config(mut self, config: TableDetectorConfig) -> Self {
        self.table = config;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Whether `a` and `b` are the same size within tolerance.
    pub fn same_size(&self, a: f32, b: f32) -> bool {
        (a - b).abs() <= self.font_size_tolerance
    }

    /// Whether `a` is larger than `b` by more than the tolerance.
    pub fn larger_than(&self, a: f32, b: f32) -> bool {
        a - b > self.font_size_tolerance
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            font_size_tolerance: 0.05,
            max_h2_words: 10,
            toc_page_ratio: 0.5,
            boilerplate_page_ratio: 0.5,
            min_boilerplate_pages: 2,
            boilerplate_y_tolerance: 2.0,
            table: TableDetectorConfig::default(),
            parallel: true,
        }
    }
}
