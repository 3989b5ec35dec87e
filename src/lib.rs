//! # textdata
//!
//! Character-level corpus preprocessing for sequence model training.
//!
//! ## Overview
//!
//! A [`TextData`] takes a raw string and derives, once:
//!
//! 1. a vocabulary of unique characters in first-occurrence order,
//! 2. the vocabulary index of every corpus character,
//! 3. a shuffled list of fixed-length window offsets at a configured stride.
//!
//! Each call to [`TextData::next_data_epoch`] then materializes the next
//! windows as one-hot inputs `(n, sample_len, vocab)` and one-hot
//! next-character targets `(n, vocab)`, cycling through the shuffled list.
//! Random slices of the corpus are available for seeding generation.
//!
//! ## Structure
//!
//! - [`data`] — Vocabulary, windowing, batch generation, corpus reading
//! - [`export`] — Writing the vocabulary for downstream consumers
//! - [`error`] — Error type

pub mod data;
pub mod error;
pub mod export;

pub use data::{SampleConfig, TextData, Vocabulary};
pub use error::{TextDataError, TextDataResult};
