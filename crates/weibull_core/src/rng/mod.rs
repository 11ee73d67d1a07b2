//! # Uniform Sources
//!
//! Every Weibull variate is derived from exactly one uniform draw. This
//! module defines the capability that produces those draws and the
//! generators that implement it.
//!
//! ## Module Structure
//!
//! - [`seed`]: validated positive-integer seeds
//! - [`lcg`]: Park–Miller linear-congruential generator (the default source)
//! - [`prng`]: `rand::rngs::StdRng` wrapper for a higher-quality stream
//! - [`fixed`]: replaying source for deterministic stand-ins
//!
//! ## Usage Example
//!
//! ```rust
//! use weibull_core::rng::{Lcg, Seed, UniformSource};
//!
//! let seed = Seed::try_from(42).unwrap();
//! let mut a = Lcg::new(seed);
//! let mut b = Lcg::new(seed);
//!
//! // Same seed, same stream
//! assert_eq!(a.next_uniform(), b.next_uniform());
//! ```
//!
//! ## Reseeding
//!
//! Sources are never reseeded in place. [`SeedableSource::from_seed`]
//! builds a fresh instance, and the owner swaps it in.

pub mod fixed;
pub mod lcg;
pub mod prng;
pub mod seed;

pub use fixed::FixedSequence;
pub use lcg::Lcg;
pub use prng::StdUniform;
pub use seed::Seed;

/// A capability producing successive uniform draws.
///
/// One call to [`next_uniform`](UniformSource::next_uniform) is one draw;
/// producers rely on this to keep draw accounting exact.
pub trait UniformSource {
    /// Returns the next uniform draw.
    fn next_uniform(&mut self) -> f64;

    /// Fills `buffer` with successive draws, index-ascending.
    ///
    /// Empty buffers are a no-op and consume nothing.
    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// A uniform source that can be rebuilt deterministically from a seed.
pub trait SeedableSource: UniformSource + Sized {
    /// Builds a fresh source positioned at the start of `seed`'s stream.
    fn from_seed(seed: Seed) -> Self;
}
