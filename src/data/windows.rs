//! Training window start offsets.
//!
//! A window starting at `i` covers `i..i + sample_len` as input and uses the
//! symbol at `i + sample_len` as its label. Offsets are enumerated at a fixed
//! stride from 0 up to (excluding) `text_len - sample_len - 1`, then shuffled
//! exactly once.

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of windows a corpus of `text_len` symbols yields.
///
/// Equals `ceil((text_len - sample_len - 1) / sample_step)`, or 0 when the
/// corpus is too short to hold a single window plus its label.
#[must_use]
pub fn window_count(text_len: usize, sample_len: usize, sample_step: usize) -> usize {
    let span = text_len.saturating_sub(sample_len + 1);
    if sample_step == 0 {
        return 0;
    }
    span.div_ceil(sample_step)
}

/// Shuffled window offsets, fixed for the lifetime of the owner.
#[derive(Debug, Clone)]
pub struct WindowOffsets {
    offsets: Vec<usize>,
}

impl WindowOffsets {
    /// Offsets in ascending order, before shuffling.
    #[must_use]
    pub fn ordered(text_len: usize, sample_len: usize, sample_step: usize) -> Self {
        let end = text_len.saturating_sub(sample_len + 1);
        let offsets = if sample_step == 0 {
            Vec::new()
        } else {
            (0..end).step_by(sample_step).collect()
        };
        Self { offsets }
    }

    /// Enumerate offsets and apply a single uniform shuffle using `rng`.
    pub fn shuffled<R: Rng + ?Sized>(
        text_len: usize,
        sample_len: usize,
        sample_step: usize,
        rng: &mut R,
    ) -> Self {
        let mut windows = Self::ordered(text_len, sample_len, sample_step);
        windows.offsets.shuffle(rng);
        windows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offset at `position`, wrapping around the end of the list.
    ///
    /// # Panics
    ///
    /// Panics if there are no offsets.
    #[must_use]
    pub fn wrapped(&self, position: usize) -> usize {
        self.offsets[position % self.offsets.len()]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ordered_offsets() {
        let w = WindowOffsets::ordered(9, 3, 1);
        assert_eq!(w.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_ordered_offsets_with_stride() {
        // span = 20 - 4 - 1 = 15 -> 0, 3, 6, 9, 12
        let w = WindowOffsets::ordered(20, 4, 3);
        assert_eq!(w.as_slice(), &[0, 3, 6, 9, 12]);
        assert_eq!(window_count(20, 4, 3), 5);
    }

    #[test]
    fn test_window_count_matches_enumeration() {
        for text_len in 0..40 {
            for sample_len in 1..10 {
                for step in 1..6 {
                    assert_eq!(
                        WindowOffsets::ordered(text_len, sample_len, step).len(),
                        window_count(text_len, sample_len, step),
                        "text_len={text_len} sample_len={sample_len} step={step}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_too_short_corpus() {
        assert!(WindowOffsets::ordered(4, 3, 1).is_empty());
        assert!(WindowOffsets::ordered(2, 3, 1).is_empty());
        assert_eq!(window_count(4, 3, 1), 0);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = WindowOffsets::shuffled(500, 10, 2, &mut rng);
        let mut sorted = shuffled.as_slice().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, WindowOffsets::ordered(500, 10, 2).as_slice());
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let a = WindowOffsets::shuffled(300, 5, 1, &mut StdRng::seed_from_u64(42));
        let b = WindowOffsets::shuffled(300, 5, 1, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_wrapped() {
        let w = WindowOffsets::ordered(9, 3, 1);
        assert_eq!(w.wrapped(0), 0);
        assert_eq!(w.wrapped(5), 0);
        assert_eq!(w.wrapped(7), 2);
    }
}
