//! Header level classification.

use crate::model::{Fragment, HeaderLevel, NoiseLabel};

use super::font_profile::FontProfile;
use super::options::AnalysisOptions;

/// Assigns H1/H2/discard using the paragraph font size as pivot.
#[derive(Debug, Clone)]
pub struct HeaderClassifier<'a> {
    options: &'a AnalysisOptions,
}

impl<'a> HeaderClassifier<'a> {
    /// Create a new header classifier.
    pub fn new(options: &'a AnalysisOptions) -> Self {
        Self { options }
    }

    /// Classify a single fragment.
    ///
    /// Noise is always discarded. Without a paragraph size only the
    /// bold-and-short rule can fire, so no H1 is produced.
    pub fn classify(
        &self,
        fragment: &Fragment,
        label: NoiseLabel,
        paragraph_font_size: Option<f32>,
    ) -> HeaderLevel {
        if label.is_noise() {
            return HeaderLevel::Discard;
        }

        let short_bold = fragment.bold && fragment.word_count() <= self.options.max_h2_words;
        match paragraph_font_size {
            Some(body) if self.options.larger_than(fragment.font_size, body) => HeaderLevel::H1,
            Some(body) if self.options.same_size(fragment.font_size, body) && short_bold => {
                HeaderLevel::H2
            }
            Some(_) => HeaderLevel::Discard,
            None if short_bold => HeaderLevel::H2,
            None => HeaderLevel::Discard,
        }
    }

    /// Classify every fragment of a document.
    ///
    /// The title fragment is marked `Title`; other fragments on the title
    /// page repeating the title text are discarded.
    pub fn classify_all(
        &self,
        fragments: &[Fragment],
        labels: &[NoiseLabel],
        profile: &FontProfile,
        title: Option<usize>,
    ) -> Vec<HeaderLevel> {
        let title_fragment = title.map(|i| &fragments[i]);

        fragments
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(i, (fragment, &label))| match title_fragment {
                Some(_) if Some(i) == title => HeaderLevel::Title,
                Some(t) if t.page == fragment.page && t.text == fragment.text => {
                    HeaderLevel::Discard
                }
                _ => self.classify(fragment, label, profile.paragraph_font_size),
            })
            .collect()
    }
}
