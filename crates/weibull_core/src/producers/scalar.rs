//! Scalar producer.

use crate::rng::UniformSource;
use crate::variate::WeibullVariate;

/// Produces a single variate.
///
/// # Examples
///
/// ```rust
/// use weibull_core::producers::scalar;
/// use weibull_core::rng::FixedSequence;
/// use weibull_core::variate::WeibullVariate;
///
/// let mut source = FixedSequence::new([0.5]);
/// let x = scalar(&WeibullVariate::new(2.0, 3.0), &mut source);
/// assert!((x - 2.0 * (-(0.5_f64).ln()).cbrt()).abs() < 1e-12);
/// ```
#[inline]
pub fn scalar<S: UniformSource + ?Sized>(variate: &WeibullVariate, source: &mut S) -> f64 {
    variate.draw(source)
}
