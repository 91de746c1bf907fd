//! Title selection.

use crate::model::{Fragment, NoiseLabel};

use super::font_profile::FontProfile;
use super::options::AnalysisOptions;

/// Page the title is expected on.
pub const TITLE_PAGE: u32 = 1;

/// Picks the document title from the first page.
#[derive(Debug, Clone)]
pub struct TitleSelector<'a> {
    options: &'a AnalysisOptions,
}

impl<'a> TitleSelector<'a> {
    /// Create a new title selector.
    pub fn new(options: &'a AnalysisOptions) -> Self {
        Self { options }
    }

    /// Index of the title fragment, if any candidate qualifies.
    ///
    /// Candidates are non-noise first-page fragments set larger than body
    /// text. The largest wins; equal sizes go to the earliest fragment.
    pub fn select(
        &self,
        fragments: &[Fragment],
        labels: &[NoiseLabel],
        profile: &FontProfile,
    ) -> Option<usize> {
        let body = profile.paragraph_font_size?;

        let chosen = fragments
            .iter()
            .enumerate()
            .filter(|(i, f)| {
                f.page == TITLE_PAGE
                    && !labels[*i].is_noise()
                    && self.options.larger_than(f.font_size, body)
            })
            .min_by(|(_, a), (_, b)| {
                b.font_size
                    .total_cmp(&a.font_size)
                    .then_with(|| a.order.cmp(&b.order))
            })
            .map(|(i, _)| i);

        match chosen {
            Some(i) => log::debug!("TitleSelector: selected {:?}", fragments[i].text),
            None => log::debug!("TitleSelector: no title candidate"),
        }
        chosen
    }
}
