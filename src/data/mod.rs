//! Corpus loading, vocabulary, windowing, and batch generation.
//!
//! ## Submodules
//!
//! - [`vocab`] — Character vocabulary in first-occurrence order
//! - [`windows`] — Shuffled training window offsets
//! - [`samples`] — Sample configuration and one-hot batch materialization
//! - [`text_data`] — [`TextData`], the preprocessor tying these together
//! - [`corpus`] — Reading corpus files from disk

pub mod corpus;
pub mod samples;
pub mod text_data;
pub mod vocab;
pub mod windows;

pub use corpus::{read_corpus, strip_gutenberg_markers};
pub use samples::{one_hot_batch, SampleConfig};
pub use text_data::TextData;
pub use vocab::Vocabulary;
pub use windows::{window_count, WindowOffsets};
