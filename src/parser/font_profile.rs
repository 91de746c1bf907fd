//! Body-text font size estimation.

use std::collections::BTreeMap;

use crate::model::{Fragment, NoiseLabel};

/// Observations falling into one 0.1pt histogram bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeBucket {
    /// Number of observations in the bucket
    pub count: usize,
    /// Exact sizes seen, in first-seen order, with frequency
    observed: Vec<(f32, usize)>,
}

impl SizeBucket {
    fn add(&mut self, size: f32) {
        self.count += 1;
        match self.observed.iter_mut().find(|(s, _)| *s == size) {
            Some((_, n)) => *n += 1,
            None => self.observed.push((size, 1)),
        }
    }

    /// The most frequent exact size in the bucket; the earliest seen wins ties.
    pub fn representative(&self) -> Option<f32> {
        let mut best: Option<(f32, usize)> = None;
        for &(size, n) in &self.observed {
            if best.map_or(true, |(_, c)| n > c) {
                best = Some((size, n));
            }
        }
        best.map(|(size, _)| size)
    }
}

/// Font size statistics for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontProfile {
    /// Observed font sizes, bucketed to tenths of a point
    pub size_histogram: BTreeMap<i32, SizeBucket>,
    /// Most common observed size among non-noise fragments, if any were seen
    pub paragraph_font_size: Option<f32>,
}

impl FontProfile {
    /// Build a profile from raw size observations.
    pub fn from_sizes(sizes: impl IntoIterator<Item = f32>) -> Self {
        let mut profile = Self::default();
        for size in sizes {
            profile.add_size(size);
        }
        profile.analyze();
        profile
    }

    /// Add a font size observation.
    pub fn add_size(&mut self, size: f32) {
        self.size_histogram
            .entry(size_key(size))
            .or_default()
            .add(size);
    }

    /// Resolve the paragraph size from the fullest bucket, preferring the
    /// smaller bucket on ties.
    ///
    /// The result is a size some fragment actually carries, never the
    /// bucket's rounded value.
    pub fn analyze(&mut self) {
        let mut best: Option<&SizeBucket> = None;
        // Ascending key order, so a strict comparison keeps the smaller size.
        for bucket in self.size_histogram.values() {
            if best.map_or(true, |b| bucket.count > b.count) {
                best = Some(bucket);
            }
        }
        self.paragraph_font_size = best.and_then(SizeBucket::representative);
    }

    /// Whether no body size could be established.
    pub fn is_degraded(&self) -> bool {
        self.paragraph_font_size.is_none()
    }

    /// How often a size (to 0.1pt) was observed.
    pub fn count(&self, size: f32) -> usize {
        self.size_histogram
            .get(&size_key(size))
            .map_or(0, |bucket| bucket.count)
    }

    /// Observed sizes in ascending order, with counts.
    pub fn sizes(&self) -> impl Iterator<Item = (f32, usize)> + '_ {
        self.size_histogram.iter().map(|(&key, bucket)| {
            let size = bucket.representative().unwrap_or(key as f32 / 10.0);
            (size, bucket.count)
        })
    }
}

/// Computes a `FontProfile` from labelled fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontProfileAnalyzer;

impl FontProfileAnalyzer {
    /// Histogram every fragment whose label is `none`.
    ///
    /// Noise, and table cells in particular, is left out so that large
    /// tables cannot dominate the mode.
    pub fn analyze(fragments: &[Fragment], labels: &[NoiseLabel]) -> FontProfile {
        let mut profile = FontProfile::default();
        for (fragment, label) in fragments.iter().zip(labels) {
            if !label.is_noise() {
                profile.add_size(fragment.font_size);
            }
        }
        profile.analyze();

        log::debug!(
            "FontProfileAnalyzer: {} distinct sizes, paragraph size = {:?}",
            profile.size_histogram.len(),
            profile.paragraph_font_size
        );
        profile
    }
}

/// Round to 0.1pt precision.
fn size_key(size: f32) -> i32 {
    (size * 10.0).round() as i32
}
