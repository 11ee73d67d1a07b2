//! Positive-integer seeds.

use std::fmt;

use crate::error::RandomError;

/// Largest integer exactly representable in an `f64` (2^53 − 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

const MAX_SAFE_SEED: u64 = 9_007_199_254_740_991;

/// A validated, strictly positive seed.
///
/// Construct through `TryFrom`; zero, negative, fractional and
/// non-finite values, and anything above [`MAX_SAFE_INTEGER`], are
/// rejected with [`RandomError::InvalidSeed`].
///
/// # Examples
///
/// ```rust
/// use weibull_core::rng::Seed;
///
/// assert_eq!(Seed::try_from(42).unwrap().get(), 42);
/// assert!(Seed::try_from(0).is_err());
/// assert!(Seed::try_from(-5_i64).is_err());
/// assert!(Seed::try_from(1.5_f64).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(u64);

impl Seed {
    /// Returns the seed value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid(value: impl fmt::Display) -> RandomError {
    RandomError::InvalidSeed {
        value: value.to_string(),
    }
}

impl TryFrom<u64> for Seed {
    type Error = RandomError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value == 0 || value > MAX_SAFE_SEED {
            return Err(invalid(value));
        }
        Ok(Self(value))
    }
}

impl TryFrom<u32> for Seed {
    type Error = RandomError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from(u64::from(value))
    }
}

impl TryFrom<i64> for Seed {
    type Error = RandomError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map_err(|_| invalid(value))
            .and_then(Self::try_from)
    }
}

impl TryFrom<i32> for Seed {
    type Error = RandomError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<f64> for Seed {
    type Error = RandomError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > MAX_SAFE_INTEGER {
            return Err(invalid(value));
        }
        Ok(Self(value as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_integers_accepted() {
        assert_eq!(Seed::try_from(1_u64).unwrap().get(), 1);
        assert_eq!(Seed::try_from(42_i32).unwrap().get(), 42);
        assert_eq!(Seed::try_from(7.0_f64).unwrap().get(), 7);
    }

    #[test]
    fn test_invalid_seeds_rejected() {
        for err in [
            Seed::try_from(0_i32).unwrap_err(),
            Seed::try_from(-5_i64).unwrap_err(),
            Seed::try_from(0_u64).unwrap_err(),
            Seed::try_from(2.5_f64).unwrap_err(),
            Seed::try_from(f64::NAN).unwrap_err(),
            Seed::try_from(f64::INFINITY).unwrap_err(),
            Seed::try_from(1e300_f64).unwrap_err(),
        ] {
            assert!(matches!(err, RandomError::InvalidSeed { .. }));
        }
    }

    #[test]
    fn test_ceiling_applies_to_every_input_type() {
        assert_eq!(Seed::try_from(MAX_SAFE_SEED).unwrap().get(), MAX_SAFE_SEED);
        assert_eq!(Seed::try_from(MAX_SAFE_INTEGER).unwrap().get(), MAX_SAFE_SEED);
        assert!(Seed::try_from(MAX_SAFE_SEED + 1).is_err());
        assert!(Seed::try_from(u64::MAX).is_err());
        assert!(Seed::try_from(i64::MAX).is_err());
        assert!(matches!(
            Seed::try_from(i64::MIN).unwrap_err(),
            RandomError::InvalidSeed { ref value } if value == "-9223372036854775808"
        ));
    }

    #[test]
    fn test_display_round_trips_value() {
        assert_eq!(Seed::try_from(12345).unwrap().to_string(), "12345");
    }
}
