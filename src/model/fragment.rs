//! Text fragments handed over by the extraction step.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Axis-aligned rectangle in page coordinates (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the box (never negative).
    pub fn width(&self) -> f32 {
        (self.x1 - self.x0).max(0.0)
    }

    /// Height of the box (never negative).
    pub fn height(&self) -> f32 {
        (self.y1 - self.y0).max(0.0)
    }

    /// Vertical center.
    pub fn center_y(&self) -> f32 {
        (self.y0 + self.y1) / 2.0
    }

    /// Whether the box carries no geometry at all.
    ///
    /// Fragments without position data get an all-zero box; neighbor
    /// reasoning must not treat those as aligned.
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        BoundingBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// One unit of extracted text on one page.
///
/// Fragments are never mutated by the analysis passes; labels are kept
/// alongside them, indexed by position in the input slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Trimmed, non-empty text
    pub text: String,
    /// 1-based page number
    pub page: u32,
    /// Font size in points, quantized by the extraction step
    pub font_size: f32,
    /// Whether the text is set in a bold face
    #[serde(default)]
    pub bold: bool,
    /// Position on the page
    #[serde(default)]
    pub bbox: BoundingBox,
    /// Extraction order within the document
    pub order: usize,
}

impl Fragment {
    /// Create a regular-weight fragment without position data.
    pub fn new(text: impl Into<String>, page: u32, font_size: f32, order: usize) -> Self {
        Self {
            text: text.into(),
            page,
            font_size,
            bold: false,
            bbox: BoundingBox::default(),
            order,
        }
    }

    /// Set the bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set the bounding box.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = bbox;
        self
    }

    /// Number of whitespace-delimited words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Assemble a fragment from the spans of one extracted line.
    ///
    /// Span texts are joined with single spaces, the font size is the
    /// largest span size quantized to 0.1pt, and the line counts as bold
    /// when any span uses a bold face. Returns `None` when no span carries
    /// visible text.
    pub fn from_spans(page: u32, order: usize, spans: &[TextSpan]) -> Option<Self> {
        let visible: Vec<&TextSpan> = spans.iter().filter(|s| !s.text.trim().is_empty()).collect();
        if visible.is_empty() {
            return None;
        }

        let joined = visible
            .iter()
            .map(|s| s.text.trim())
            .collect::<Vec<_>>()
            .join(" ");
        let font_size = visible.iter().map(|s| s.font_size).fold(0.0_f32, f32::max);
        let bold = visible.iter().any(|s| s.is_bold());
        let bbox = visible
            .iter()
            .fold(BoundingBox::default(), |acc, s| acc.union(&s.bbox));

        Some(Self {
            text: normalize_text(&joined),
            page,
            font_size: quantize_font_size(font_size),
            bold,
            bbox,
            order,
        })
    }
}

/// A styled run of text as reported by a PDF text extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// Font name (e.g., "Helvetica-Bold")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Position on the page
    #[serde(default)]
    pub bbox: BoundingBox,
}

impl TextSpan {
    /// Create a new span without position data.
    pub fn new(text: impl Into<String>, font_name: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            font_name: font_name.into(),
            font_size,
            bbox: BoundingBox::default(),
        }
    }

    /// Set the bounding box.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = bbox;
        self
    }

    /// Whether the font name indicates a bold face.
    pub fn is_bold(&self) -> bool {
        let name = self.font_name.to_lowercase();
        name.contains("bold") || name.contains("black") || name.contains("heavy")
    }
}

/// NFC-normalize text and collapse internal whitespace runs to one space.
pub fn normalize_text(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Round a font size to 0.1pt.
pub fn quantize_font_size(size: f32) -> f32 {
    (size * 10.0).round() / 10.0
}
