//! Corpus preprocessor for character-level sequence models.
//!
//! [`TextData`] owns a corpus and everything derived from it at construction:
//! the vocabulary, the corpus-wide index array, and a shuffled list of window
//! offsets. After construction only the window cursor (and the random source
//! used for slicing) changes.

use ndarray::{Array2, Array3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use crate::error::{TextDataError, TextDataResult};

use super::samples::{one_hot_batch, SampleConfig};
use super::vocab::Vocabulary;
use super::windows::WindowOffsets;

/// A corpus prepared for next-character training.
///
/// The random source `R` drives the one-time window shuffle and the random
/// slice accessors. It defaults to an entropy-seeded [`StdRng`]; pass a seeded
/// generator through [`TextData::with_rng`] for reproducible runs.
///
/// Batch draws take `&mut self`: share one instance across workers only
/// behind external synchronization, or give each worker its own.
#[derive(Debug, Clone)]
pub struct TextData<R = StdRng> {
    id: String,
    text: String,
    vocab: Vocabulary,
    indices: Box<[u32]>,
    config: SampleConfig,
    windows: WindowOffsets,
    cursor: usize,
    rng: R,
}

impl TextData<StdRng> {
    /// Build from `text` using an entropy-seeded random source.
    ///
    /// # Errors
    ///
    /// See [`TextData::with_rng`].
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        config: SampleConfig,
    ) -> TextDataResult<Self> {
        Self::with_rng(id, text, config, StdRng::from_entropy())
    }

    /// Build from `text` with a deterministic random source.
    ///
    /// # Errors
    ///
    /// See [`TextData::with_rng`].
    pub fn with_seed(
        id: impl Into<String>,
        text: impl Into<String>,
        config: SampleConfig,
        seed: u64,
    ) -> TextDataResult<Self> {
        Self::with_rng(id, text, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TextData<R> {
    /// Build the vocabulary, index array, and shuffled window offsets.
    ///
    /// # Errors
    ///
    /// - [`TextDataError::MissingIdentifier`] if `id` is empty or blank.
    /// - [`TextDataError::InvalidConfig`] if `config` yields no window over
    ///   this corpus.
    pub fn with_rng(
        id: impl Into<String>,
        text: impl Into<String>,
        config: SampleConfig,
        mut rng: R,
    ) -> TextDataResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TextDataError::MissingIdentifier);
        }
        let text = text.into();

        let vocab = Vocabulary::from_text(&text);
        debug!(id = %id, vocabulary = ?vocab.chars(), "built vocabulary");

        let indices = vocab.encode(&text)?.into_boxed_slice();
        config.validate(indices.len())?;

        let windows =
            WindowOffsets::shuffled(indices.len(), config.sample_len, config.sample_step, &mut rng);

        info!(
            id = %id,
            text_len = indices.len(),
            char_set_size = vocab.size(),
            windows = windows.len(),
            "prepared text data"
        );

        Ok(Self {
            id,
            text,
            vocab,
            indices,
            config,
            windows,
            cursor: 0,
            rng,
        })
    }

    /// Draw the next `num_examples` windows as one-hot batches.
    ///
    /// Returns `(inputs, targets)` with shapes
    /// `(num_examples, sample_len, char_set_size)` and
    /// `(num_examples, char_set_size)`. Windows are taken from the shuffled
    /// offset list starting at the cursor, wrapping around its end; the
    /// cursor then advances by `num_examples`.
    pub fn next_data_epoch(&mut self, num_examples: usize) -> (Array3<f32>, Array2<f32>) {
        let offsets: Vec<usize> = (0..num_examples)
            .map(|e| self.windows.wrapped(self.cursor + e))
            .collect();

        let before = self.cursor;
        self.cursor = (self.cursor + num_examples) % self.windows.len();
        trace!(num_examples, cursor = before, next_cursor = self.cursor, "drew batch");

        one_hot_batch(
            &self.indices,
            &offsets,
            self.config.sample_len,
            self.vocab.size(),
        )
    }

    /// A random `sample_len` slice of the corpus, as text and indices.
    pub fn random_slice(&mut self) -> (String, Vec<u32>) {
        self.slice_from_random_start(self.config.sample_len)
    }

    /// A random slice of `len` symbols, as text and indices.
    ///
    /// The start is uniform over `0..=text_len - len - 1` and drawn
    /// independently of the training cursor.
    ///
    /// # Errors
    ///
    /// Returns [`TextDataError::SliceOutOfRange`] if `len >= text_len`.
    pub fn random_slice_with_length(&mut self, len: usize) -> TextDataResult<(String, Vec<u32>)> {
        if len >= self.text_len() {
            return Err(TextDataError::SliceOutOfRange {
                len,
                text_len: self.text_len(),
            });
        }
        Ok(self.slice_from_random_start(len))
    }

    fn slice_from_random_start(&mut self, len: usize) -> (String, Vec<u32>) {
        let start = self.rng.gen_range(0..self.text_len() - len);
        let indices = self.indices[start..start + len].to_vec();
        (self.vocab.decode(&indices), indices)
    }
}

impl<R> TextData<R> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Corpus length in symbols (not bytes).
    pub fn text_len(&self) -> usize {
        self.indices.len()
    }

    pub fn sample_len(&self) -> usize {
        self.config.sample_len
    }

    pub fn sample_step(&self) -> usize {
        self.config.sample_step
    }

    pub fn config(&self) -> SampleConfig {
        self.config
    }

    pub fn char_set_size(&self) -> usize {
        self.vocab.size()
    }

    /// Vocabulary symbol at `idx`, or `None` past the end.
    pub fn char_from_set(&self, idx: usize) -> Option<char> {
        self.vocab.index_to_char(idx)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Vocabulary index of every corpus symbol, in corpus order.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Window offsets in their shuffled traversal order.
    pub fn window_offsets(&self) -> &[usize] {
        self.windows.as_slice()
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Position of the next window in [`TextData::window_offsets`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Encode arbitrary text with this corpus' vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`TextDataError::UnknownSymbol`] if `text` contains a symbol
    /// that never occurs in the corpus.
    pub fn text_to_indices(&self, text: &str) -> TextDataResult<Vec<u32>> {
        self.vocab.encode(text)
    }

    /// Render indices back to text.
    pub fn indices_to_text(&self, indices: &[u32]) -> String {
        self.vocab.decode(indices)
    }
}
