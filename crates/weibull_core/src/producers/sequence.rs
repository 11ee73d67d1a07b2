//! Flat generic sequence producer.

use crate::rng::UniformSource;
use crate::variate::WeibullVariate;

/// Produces `len` variates in a plain `Vec<f64>`, index-ascending.
pub fn sequence<S: UniformSource + ?Sized>(
    len: usize,
    variate: &WeibullVariate,
    source: &mut S,
) -> Vec<f64> {
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(variate.draw(source));
    }
    out
}
