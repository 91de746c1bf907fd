//! Document model types for structure inference.
//!
//! Fragments flow in from the extraction step, labels are attached by the
//! analysis passes, and `ParseResult` flows out to serialization.

mod fragment;
mod labels;
mod outline;

pub use fragment::{normalize_text, quantize_font_size, BoundingBox, Fragment, TextSpan};
pub use labels::{HeaderLevel, NoiseLabel};
pub use outline::{HeadingLevel, OutlineEntry, ParseResult};
