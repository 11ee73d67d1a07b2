//! Replaying uniform source.

use super::UniformSource;

/// Replays a fixed list of draws, wrapping around at the end.
///
/// Useful wherever a known draw sequence is needed, e.g. to pin the
/// first variate to an exact value.
///
/// # Examples
///
/// ```rust
/// use weibull_core::rng::{FixedSequence, UniformSource};
///
/// let mut source = FixedSequence::new(vec![0.25, 0.5]);
/// assert_eq!(source.next_uniform(), 0.25);
/// assert_eq!(source.next_uniform(), 0.5);
/// assert_eq!(source.next_uniform(), 0.25);
/// assert_eq!(source.consumed(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct FixedSequence {
    draws: Vec<f64>,
    consumed: usize,
}

impl FixedSequence {
    /// Creates a source replaying `draws` in order.
    ///
    /// # Panics
    ///
    /// Panics if `draws` is empty.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "FixedSequence requires at least one draw");
        Self { draws, consumed: 0 }
    }

    /// Number of draws handed out so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl UniformSource for FixedSequence {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        let value = self.draws[self.consumed % self.draws.len()];
        self.consumed += 1;
        value
    }
}
