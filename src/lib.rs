//! # pdfoutline
//!
//! Title and header outline inference for PDF-derived text.
//!
//! The library takes the flat, page-ordered text fragments produced by a
//! PDF text extractor (text, page, font size, weight and position) and
//! infers a document title plus a two-level (H1/H2) outline from
//! typography alone.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{analyze_file, render};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     let result = analyze_file("document.fragments.json")?;
//!     println!("{}", render::to_json(&result, render::JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Noise filtering**: running headers/footers, page numbers, dates,
//!   version stamps, table cells and table-of-contents pages
//! - **Typography pivot**: body text size from the font size histogram
//! - **Graceful degradation**: documents without a body size still yield
//!   bold short lines as H2
//! - **Parallel processing**: uses Rayon for multi-document batches

pub mod error;
pub mod input;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use input::{parse_fragments_json, read_fragments, validate_fragments};
pub use model::{
    BoundingBox, Fragment, HeaderLevel, HeadingLevel, NoiseLabel, OutlineEntry, ParseResult,
    TextSpan,
};
pub use parser::{
    AnalysisOptions, DocumentAnalysis, FontProfile, StructureAnalyzer, TableDetectorConfig,
};
pub use render::JsonFormat;

use std::path::Path;

use rayon::prelude::*;

/// Infer title and outline with default options.
///
/// # Example
///
/// ```
/// use pdfoutline::{analyze, Fragment};
///
/// let fragments = vec![
///     Fragment::new("Annual Report", 1, 24.0, 0),
///     Fragment::new("Highlights", 1, 14.0, 1),
///     Fragment::new("Revenue grew in every region.", 1, 11.0, 2),
///     Fragment::new("Costs were flat.", 1, 11.0, 3),
/// ];
/// let result = analyze(&fragments);
/// assert_eq!(result.title, "Annual Report");
/// assert_eq!(result.outline[0].text, "Highlights");
/// ```
pub fn analyze(fragments: &[Fragment]) -> ParseResult {
    StructureAnalyzer::new().analyze(fragments)
}

/// Infer title and outline with custom options.
pub fn analyze_with_options(fragments: &[Fragment], options: AnalysisOptions) -> ParseResult {
    StructureAnalyzer::with_options(options).analyze(fragments)
}

/// Analyze several documents, each in its own independent pass.
///
/// Runs in parallel unless `options.parallel` is false. Results are in
/// input order.
pub fn analyze_many(documents: &[Vec<Fragment>], options: &AnalysisOptions) -> Vec<ParseResult> {
    let analyzer = StructureAnalyzer::with_options(options.clone());
    if options.parallel {
        documents
            .par_iter()
            .map(|fragments| analyzer.analyze(fragments))
            .collect()
    } else {
        documents
            .iter()
            .map(|fragments| analyzer.analyze(fragments))
            .collect()
    }
}

/// Read a fragment file and infer title and outline.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::analyze_file;
///
/// let result = analyze_file("report.json").unwrap();
/// println!("{}", result.title);
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<ParseResult> {
    let fragments = read_fragments(path)?;
    Ok(analyze(&fragments))
}

/// Builder for configuring and running outline inference.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{JsonFormat, Outliner};
///
/// let json = Outliner::new()
///     .toc_page_ratio(0.6)
///     .font_size_tolerance(0.1)
///     .analyze_file("report.json")?
///     .to_json(JsonFormat::Compact)?;
/// # Ok::<(), pdfoutline::Error>(())
/// ```
pub struct Outliner {
    options: AnalysisOptions,
}

impl Outliner {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: AnalysisOptions::default(),
        }
    }

    /// Set the ToC whole-page ratio.
    pub fn toc_page_ratio(mut self, ratio: f32) -> Self {
        self.options = self.options.with_toc_page_ratio(ratio);
        self
    }

    /// Set the font-size equality tolerance.
    pub fn font_size_tolerance(mut self, tolerance: f32) -> Self {
        self.options = self.options.with_font_size_tolerance(tolerance);
        self
    }

    /// Set the H2 word limit.
    pub fn max_h2_words(mut self, words: usize) -> Self {
        self.options = self.options.with_max_h2_words(words);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// The options built so far.
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze fragments already in memory.
    pub fn analyze(&self, fragments: &[Fragment]) -> OutlinerResult {
        let analyzer = StructureAnalyzer::with_options(self.options.clone());
        OutlinerResult {
            analysis: analyzer.inspect(fragments),
        }
    }

    /// Read a fragment file and analyze it.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<OutlinerResult> {
        let fragments = read_fragments(path)?;
        Ok(self.analyze(&fragments))
    }
}

impl Default for Outliner {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of running an `Outliner`.
pub struct OutlinerResult {
    /// Intermediate labels and the final result
    pub analysis: DocumentAnalysis,
}

impl OutlinerResult {
    /// The inferred title and outline.
    pub fn result(&self) -> &ParseResult {
        &self.analysis.result
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.analysis.result, format)
    }

    /// Convert to a Markdown outline.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.analysis.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Fragment> {
        vec![
            Fragment::new("Project Plan", 1, 22.0, 0),
            Fragment::new("Goals", 1, 15.0, 1),
            Fragment::new("We plan to ship in spring.", 1, 11.0, 2),
            Fragment::new("Milestones", 2, 11.0, 3).with_bold(true),
            Fragment::new("Three milestones are planned.", 2, 11.0, 4),
        ]
    }

    #[test]
    fn test_outliner_builder() {
        let outliner = Outliner::new()
            .toc_page_ratio(0.8)
            .max_h2_words(6)
            .sequential();

        assert_eq!(outliner.options().toc_page_ratio, 0.8);
        assert_eq!(outliner.options().max_h2_words, 6);
        assert!(!outliner.options().parallel);
    }

    #[test]
    fn test_outliner_default() {
        let outliner = Outliner::default();
        assert!(outliner.options().parallel);
    }

    #[test]
    fn test_analyze_sample() {
        let result = analyze(&sample());
        assert_eq!(result.title, "Project Plan");
        let outline: Vec<(HeadingLevel, &str, u32)> = result
            .outline
            .iter()
            .map(|e| (e.level, e.text.as_str(), e.page))
            .collect();
        assert_eq!(
            outline,
            vec![
                (HeadingLevel::H1, "Goals", 1),
                (HeadingLevel::H2, "Milestones", 2),
            ]
        );
    }

    #[test]
    fn test_analyze_many_matches_sequential() {
        let documents = vec![sample(), Vec::new(), sample()];
        let parallel = analyze_many(&documents, &AnalysisOptions::default());
        let sequential = analyze_many(&documents, &AnalysisOptions::new().sequential());

        assert_eq!(parallel, sequential);
        assert_eq!(parallel.len(), 3);
        assert_eq!(parallel[1], ParseResult::empty());
    }

    #[test]
    fn test_outliner_result_rendering() {
        let output = Outliner::new().analyze(&sample());
        assert_eq!(output.result().title, "Project Plan");
        assert!(output.to_markdown().starts_with("# Project Plan"));
        assert!(output.to_json(JsonFormat::Compact).unwrap().contains("\"H2\""));
    }

    #[test]
    fn test_analyze_file_missing() {
        let result = analyze_file("does/not/exist.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
