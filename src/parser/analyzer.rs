//! Pass orchestration for one document.

use std::collections::BTreeMap;

use crate::model::{Fragment, HeaderLevel, NoiseLabel, ParseResult};

use super::font_profile::{FontProfile, FontProfileAnalyzer};
use super::heading::HeaderClassifier;
use super::noise::NoiseClassifier;
use super::options::AnalysisOptions;
use super::outline::OutlineAssembler;
use super::page_index::PageIndex;
use super::title::TitleSelector;

/// Everything the passes derived for one document.
#[derive(Debug, Clone, Default)]
pub struct DocumentAnalysis {
    /// Font size statistics over non-noise fragments
    pub profile: FontProfile,
    /// Noise label per input fragment
    pub labels: Vec<NoiseLabel>,
    /// Header level per input fragment
    pub levels: Vec<HeaderLevel>,
    /// Pages excluded as table of contents
    pub toc_pages: Vec<u32>,
    /// Index of the title fragment
    pub title_index: Option<usize>,
    /// Final title and outline
    pub result: ParseResult,
}

impl DocumentAnalysis {
    /// Number of fragments per noise label.
    pub fn label_counts(&self) -> BTreeMap<NoiseLabel, usize> {
        let mut counts = BTreeMap::new();
        for &label in &self.labels {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    /// Whether classification ran without a paragraph font size.
    pub fn is_degraded(&self) -> bool {
        self.profile.is_degraded()
    }
}

/// Infers title and outline from a document's fragments.
///
/// Every pass is a pure function of the fragments and the options, so one
/// analyzer can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct StructureAnalyzer {
    options: AnalysisOptions,
}

impl StructureAnalyzer {
    /// Create an analyzer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom options.
    pub fn with_options(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Infer title and outline.
    pub fn analyze(&self, fragments: &[Fragment]) -> ParseResult {
        self.inspect(fragments).result
    }

    /// Run every pass and keep the intermediate labels.
    pub fn inspect(&self, fragments: &[Fragment]) -> DocumentAnalysis {
        if fragments.is_empty() {
            return DocumentAnalysis::default();
        }

        log::debug!("StructureAnalyzer: analyzing {} fragments", fragments.len());
        let pages = PageIndex::new(fragments);

        let noise = NoiseClassifier::new(&self.options).classify(fragments, &pages);
        let profile = FontProfileAnalyzer::analyze(fragments, &noise.labels);
        if profile.is_degraded() {
            log::warn!("No body text font size found; only bold short lines can become headers");
        }

        let title_index = TitleSelector::new(&self.options).select(fragments, &noise.labels, &profile);
        let title = title_index
            .map(|i| fragments[i].text.clone())
            .unwrap_or_default();

        let levels = HeaderClassifier::new(&self.options).classify_all(
            fragments,
            &noise.labels,
            &profile,
            title_index,
        );
        let outline = OutlineAssembler::assemble(fragments, &levels, &title);

        log::debug!(
            "StructureAnalyzer: title {:?}, {} outline entries",
            title,
            outline.len()
        );

        DocumentAnalysis {
            profile,
            labels: noise.labels,
            levels,
            toc_pages: noise.toc_pages,
            title_index,
            result: ParseResult { title, outline },
        }
    }
}
