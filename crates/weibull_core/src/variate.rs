//! Weibull variate transform.
//!
//! Maps one uniform draw to one Weibull-distributed value by inverse-CDF
//! sampling:
//!
//! ```text
//! F(x)     = 1 − exp(−(x/λ)^k)
//! F⁻¹(u)   = λ · (−ln(1 − u))^(1/k)
//! ```
//!
//! Parameters are not guarded here. Non-positive `λ` or `k` produce
//! whatever the formula yields (NaN, negative or infinite values), and a
//! draw of exactly 1 produces +∞.

use rand::Rng;
use rand_distr::Distribution;

use crate::rng::UniformSource;

/// Weibull inverse cumulative distribution function.
///
/// # Arguments
///
/// * `lambda` - Scale parameter λ
/// * `k` - Shape parameter k
/// * `u` - Uniform draw
///
/// # Examples
///
/// ```rust
/// use weibull_core::variate::weibull_inverse_cdf;
///
/// let x = weibull_inverse_cdf(2.0, 3.0, 0.5);
/// assert!((x - 2.0 * (-(0.5_f64).ln()).powf(1.0 / 3.0)).abs() < 1e-15);
/// ```
#[inline]
pub fn weibull_inverse_cdf(lambda: f64, k: f64, u: f64) -> f64 {
    lambda * (-(1.0 - u).ln()).powf(1.0 / k)
}

/// A Weibull distribution with scale `lambda` and shape `k`.
///
/// # Examples
///
/// ```rust
/// use weibull_core::rng::FixedSequence;
/// use weibull_core::variate::WeibullVariate;
///
/// let variate = WeibullVariate::new(1.0, 1.0);
/// let mut source = FixedSequence::new([0.0]);
/// assert_eq!(variate.draw(&mut source), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeibullVariate {
    lambda: f64,
    k: f64,
}

impl Default for WeibullVariate {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl WeibullVariate {
    /// Creates the distribution. No parameter validation is performed.
    #[inline]
    pub fn new(lambda: f64, k: f64) -> Self {
        Self { lambda, k }
    }

    /// Scale parameter λ.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Shape parameter k.
    #[inline]
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Draws one variate, consuming exactly one uniform draw.
    #[inline]
    pub fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        weibull_inverse_cdf(self.lambda, self.k, source.next_uniform())
    }
}

impl Distribution<f64> for WeibullVariate {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        weibull_inverse_cdf(self.lambda, self.k, rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FixedSequence, Lcg, Seed};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_known_value() {
        let variate = WeibullVariate::new(2.0, 3.0);
        let mut source = FixedSequence::new([0.5]);
        let expected = 2.0 * (-(0.5_f64).ln()).powf(1.0 / 3.0);
        assert_relative_eq!(variate.draw(&mut source), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_unit_parameters_are_exponential() {
        // λ = k = 1 reduces to −ln(1 − u).
        let u = 0.75;
        assert_relative_eq!(weibull_inverse_cdf(1.0, 1.0, u), 4.0_f64.ln(), epsilon = 1e-15);
    }

    #[test]
    fn test_edge_draws_pass_through() {
        assert_eq!(weibull_inverse_cdf(1.0, 2.0, 0.0), 0.0);
        assert_eq!(weibull_inverse_cdf(1.0, 2.0, 1.0), f64::INFINITY);
    }

    #[test]
    fn test_unguarded_parameters() {
        assert!(weibull_inverse_cdf(-1.0, 1.0, 0.5) < 0.0);
        assert!(weibull_inverse_cdf(1.0, 1.0, 2.0).is_nan());
    }

    #[test]
    fn test_draw_consumes_one_uniform() {
        let variate = WeibullVariate::default();
        let mut source = FixedSequence::new([0.1, 0.2]);
        variate.draw(&mut source);
        assert_eq!(source.consumed(), 1);
    }

    #[test]
    fn test_sample_mean_matches_rand_distr() {
        let lambda = 2.0;
        let k = 1.5;
        let n = 200_000;

        let ours = WeibullVariate::new(lambda, k);
        let mut lcg = Lcg::new(Seed::try_from(2024).unwrap());
        let our_mean = (0..n).map(|_| ours.draw(&mut lcg)).sum::<f64>() / n as f64;

        let reference = rand_distr::Weibull::new(lambda, k).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
        let ref_mean = (0..n).map(|_| reference.sample(&mut rng)).sum::<f64>() / n as f64;

        // Both estimate λ·Γ(1 + 1/k) ≈ 1.8055
        assert_relative_eq!(our_mean, ref_mean, max_relative = 0.02);
    }

    #[test]
    fn test_distribution_impl_uses_rng() {
        let variate = WeibullVariate::new(1.0, 2.0);
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let x: f64 = variate.sample(&mut rng);
        assert!(x >= 0.0 && x.is_finite());
    }

    proptest! {
        /// Support is [0, ∞) for valid parameters.
        #[test]
        fn prop_non_negative(
            lambda in 0.01f64..100.0,
            k in 0.1f64..10.0,
            u in 0.0f64..1.0,
        ) {
            let x = weibull_inverse_cdf(lambda, k, u);
            prop_assert!(x >= 0.0, "variate {} negative", x);
        }

        /// The inverse CDF is non-decreasing in the draw.
        #[test]
        fn prop_monotone_in_draw(
            lambda in 0.01f64..100.0,
            k in 0.1f64..10.0,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(weibull_inverse_cdf(lambda, k, lo) <= weibull_inverse_cdf(lambda, k, hi));
        }
    }
}
