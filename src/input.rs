//! Reading fragment sequences produced by the extraction step.
//!
//! Input is a JSON array of fragment objects. `bold`, `bbox` and `order`
//! may be omitted; `bbox` is accepted either as `{x0, y0, x1, y1}` or as a
//! `[x0, y0, x1, y1]` array.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{normalize_text, BoundingBox, Fragment};

#[derive(Debug, Deserialize)]
struct RawFragment {
    text: String,
    page: u32,
    font_size: f32,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    bbox: Option<RawBoundingBox>,
    #[serde(default)]
    order: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBoundingBox {
    Array([f32; 4]),
    Object(BoundingBox),
}

impl From<RawBoundingBox> for BoundingBox {
    fn from(raw: RawBoundingBox) -> Self {
        match raw {
            RawBoundingBox::Array([x0, y0, x1, y1]) => BoundingBox::new(x0, y0, x1, y1),
            RawBoundingBox::Object(bbox) => bbox,
        }
    }
}

/// Decode and validate fragments from a JSON string.
pub fn parse_fragments_json(json: &str) -> Result<Vec<Fragment>> {
    let raw: Vec<RawFragment> = serde_json::from_str(json)?;
    let fragments: Vec<Fragment> = raw
        .into_iter()
        .enumerate()
        .map(|(i, r)| Fragment {
            text: normalize_text(&r.text),
            page: r.page,
            font_size: r.font_size,
            bold: r.bold,
            bbox: r.bbox.map(BoundingBox::from).unwrap_or_default(),
            order: r.order.unwrap_or(i),
        })
        .collect();

    validate_fragments(&fragments)?;
    log::debug!("Loaded {} fragments", fragments.len());
    Ok(fragments)
}

/// Read, decode and validate a fragment file.
pub fn read_fragments<P: AsRef<Path>>(path: P) -> Result<Vec<Fragment>> {
    let json = fs::read_to_string(path)?;
    parse_fragments_json(&json)
}

/// Check fragments against the input contract.
///
/// Reports the first violation found.
pub fn validate_fragments(fragments: &[Fragment]) -> Result<()> {
    let mut orders = HashSet::with_capacity(fragments.len());

    for (i, fragment) in fragments.iter().enumerate() {
        if fragment.text.trim().is_empty() {
            return Err(Error::invalid_fragment(i, "text is empty"));
        }
        if fragment.page == 0 {
            return Err(Error::invalid_fragment(i, "page must be at least 1"));
        }
        if !fragment.font_size.is_finite() || fragment.font_size <= 0.0 {
            return Err(Error::invalid_fragment(
                i,
                format!("font size must be positive, got {}", fragment.font_size),
            ));
        }
        if !orders.insert(fragment.order) {
            return Err(Error::invalid_fragment(
                i,
                format!("duplicate order {}", fragment.order),
            ));
        }
    }

    Ok(())
}
