//! Sample configuration and one-hot batch materialization.
//!
//! Converts window offsets into next-character prediction samples: the
//! `sample_len` symbols at each offset become the input, the symbol right
//! after them becomes the target.

use ndarray::{Array2, Array3};

use crate::error::{TextDataError, TextDataResult};

use super::windows::window_count;

/// Configuration for sample generation from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleConfig {
    /// Number of characters in each input window.
    pub sample_len: usize,
    /// Step size between consecutive window offsets.
    pub sample_step: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            sample_len: 40,
            sample_step: 3,
        }
    }
}

impl SampleConfig {
    /// Check that this configuration yields at least one window over a
    /// corpus of `text_len` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`TextDataError::InvalidConfig`] on a zero length or step, or
    /// when the corpus is too short for one window plus its label.
    pub fn validate(&self, text_len: usize) -> TextDataResult<()> {
        if self.sample_len == 0 {
            return Err(TextDataError::InvalidConfig(
                "sample_len must be positive".into(),
            ));
        }
        if self.sample_step == 0 {
            return Err(TextDataError::InvalidConfig(
                "sample_step must be positive".into(),
            ));
        }
        if self.sample_len >= text_len {
            return Err(TextDataError::InvalidConfig(format!(
                "sample_len {} must be less than corpus length {}",
                self.sample_len, text_len
            )));
        }
        if window_count(text_len, self.sample_len, self.sample_step) == 0 {
            return Err(TextDataError::InvalidConfig(format!(
                "corpus of length {} holds no window of length {} plus a label",
                text_len, self.sample_len
            )));
        }
        Ok(())
    }
}

/// Materialize one-hot inputs and targets for windows starting at `offsets`.
///
/// Returns `(inputs, targets)` where:
/// - `inputs` has shape `(offsets.len(), sample_len, vocab_size)`
/// - `targets` has shape `(offsets.len(), vocab_size)`
///
/// Both buffers start zeroed; exactly one cell per row is set.
///
/// # Panics
///
/// Panics if a window runs past the end of `indices` or an index is not
/// below `vocab_size`.
#[must_use]
pub fn one_hot_batch(
    indices: &[u32],
    offsets: &[usize],
    sample_len: usize,
    vocab_size: usize,
) -> (Array3<f32>, Array2<f32>) {
    let mut inputs = Array3::zeros((offsets.len(), sample_len, vocab_size));
    let mut targets = Array2::zeros((offsets.len(), vocab_size));

    for (example, &offset) in offsets.iter().enumerate() {
        let window = &indices[offset..offset + sample_len];
        for (t, &idx) in window.iter().enumerate() {
            inputs[[example, t, idx as usize]] = 1.0;
        }
        targets[[example, indices[offset + sample_len] as usize]] = 1.0;
    }

    (inputs, targets)
}
