//! Park–Miller "minimal standard" linear-congruential generator.
//!
//! `state ← state · 16807 mod (2^31 − 1)`, each draw returning
//! `state / (2^31 − 1)`. The state never reaches 0 or the modulus, so
//! every draw lies strictly inside (0, 1).

use rand::Rng;

use super::{Seed, SeedableSource, UniformSource};

/// Modulus 2^31 − 1 (a Mersenne prime).
pub const MODULUS: u64 = 2_147_483_647;

/// Multiplier 7^5, a primitive root modulo [`MODULUS`].
pub const MULTIPLIER: u64 = 16_807;

/// Linear-congruential uniform source.
///
/// This is the default source behind [`WeibullRandom`](crate::WeibullRandom).
///
/// # Examples
///
/// ```rust
/// use weibull_core::rng::{Lcg, Seed, UniformSource};
///
/// let mut rng = Lcg::new(Seed::try_from(1).unwrap());
/// let u = rng.next_uniform();
/// assert_eq!(u, 16_807.0 / 2_147_483_647.0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    /// Current position, always in [1, MODULUS − 1].
    state: u64,
    /// Seed the stream was started from.
    seed: u64,
}

impl Lcg {
    /// Creates a generator at the start of `seed`'s stream.
    ///
    /// Seeds are reduced modulo [`MODULUS`]; a reduced value of 0 would
    /// be absorbing and is replaced by 1.
    pub fn new(seed: Seed) -> Self {
        let mut state = seed.get() % MODULUS;
        if state == 0 {
            state = 1;
        }
        Self {
            state,
            seed: seed.get(),
        }
    }

    /// Creates an unseeded generator, drawing its starting state from the
    /// thread-local entropy-backed `rand` generator.
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen_range(1..MODULUS);
        Self { state: seed, seed }
    }

    /// Returns the seed this stream was started from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the current generator state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the generator and returns the new state in [1, 2^31 − 2].
    #[inline]
    pub fn next_u31(&mut self) -> u32 {
        self.state = self.state * MULTIPLIER % MODULUS;
        self.state as u32
    }
}

impl UniformSource for Lcg {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        f64::from(self.next_u31()) / MODULUS as f64
    }
}

impl SeedableSource for Lcg {
    fn from_seed(seed: Seed) -> Self {
        Self::new(seed)
    }
}
