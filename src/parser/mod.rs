//! Structure inference passes.
//!
//! Fragments go through noise classification, font profiling, title
//! selection, header classification and outline assembly, in that order.

mod analyzer;
mod font_profile;
mod heading;
mod noise;
mod options;
mod outline;
mod page_index;
pub mod patterns;
mod table_detector;
mod title;

pub use analyzer::{DocumentAnalysis, StructureAnalyzer};
pub use font_profile::{FontProfile, FontProfileAnalyzer, SizeBucket};
pub use heading::HeaderClassifier;
pub use noise::{NoiseClassifier, NoiseReport};
pub use options::AnalysisOptions;
pub use outline::{OutlineAssembler, SeenHeaders};
pub use page_index::PageIndex;
pub use table_detector::{TableDetector, TableDetectorConfig};
pub use title::{TitleSelector, TITLE_PAGE};
