//! Process-wide convenience entry point.
//!
//! Holds a single [`WeibullRandom`] shared by every thread, created on
//! first use over an entropy-seeded [`Lcg`]. Calls are serialised by a
//! mutex, and [`set_seed`] replaces the source for every later call,
//! whichever thread makes it.
//!
//! ```rust
//! use weibull_core::{global, Dims};
//!
//! global::set_seed(42).unwrap();
//! let a = global::random(Some(&Dims::from(5)), None).unwrap();
//!
//! global::set_seed(42).unwrap();
//! let b = global::random(Some(&Dims::from(5)), None).unwrap();
//!
//! assert_eq!(a, b);
//! ```

use std::sync::{LazyLock, Mutex, PoisonError};

use crate::error::{RandomError, Result};
use crate::generator::WeibullRandom;
use crate::options::RandomOptions;
use crate::output::Variates;
use crate::rng::{Lcg, Seed};
use crate::shape::Dims;

static GENERATOR: LazyLock<Mutex<WeibullRandom<Lcg>>> =
    LazyLock::new(|| Mutex::new(WeibullRandom::new()));

/// Generates variates from the shared generator.
///
/// See [`WeibullRandom::random`].
pub fn random(dims: Option<&Dims>, options: Option<&RandomOptions>) -> Result<Variates> {
    with_generator(|generator| generator.random(dims, options))
}

/// Reseeds the shared generator.
///
/// # Errors
///
/// [`RandomError::InvalidSeed`] unless `seed` is a positive integer; the
/// shared source is left untouched.
pub fn set_seed<T>(seed: T) -> Result<()>
where
    T: TryInto<Seed>,
    RandomError: From<T::Error>,
{
    let seed = seed.try_into()?;
    with_generator(|generator| generator.reseed(seed));
    Ok(())
}

/// Runs `f` with exclusive access to the shared generator.
///
/// The lock is held for the whole of `f`, so several calls made inside
/// one closure observe a contiguous stretch of the stream.
///
/// `f` must not call back into this module: [`random`], [`set_seed`] or
/// `with_generator` itself would wait on the lock already held and
/// deadlock.
pub fn with_generator<R>(f: impl FnOnce(&mut WeibullRandom<Lcg>) -> R) -> R {
    let mut generator = GENERATOR.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut generator)
}
