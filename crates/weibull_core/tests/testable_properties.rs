//! End-to-end checks of the generator's observable contract.
//!
//! Covers output shapes, support, seeded determinism, draw accounting,
//! dimension and seed validation, and the scalar code path.

use approx::assert_relative_eq;
use proptest::prelude::*;
use weibull_core::rng::{FixedSequence, Lcg, Seed, UniformSource};
use weibull_core::{DType, Dims, RandomError, RandomOptions, Variates, WeibullRandom};

const FIXED_WIDTH: [DType; 9] = [
    DType::Int8,
    DType::Uint8,
    DType::Uint8Clamped,
    DType::Int16,
    DType::Uint16,
    DType::Int32,
    DType::Uint32,
    DType::Float32,
    DType::Float64,
];

fn seeded(seed: u64) -> WeibullRandom {
    WeibullRandom::with_seed(seed).unwrap()
}

#[test]
fn test_dimension_validation() {
    let mut generator = seeded(1);
    let before = generator.source().state();

    for dims in [Dims::from(0), Dims::from(-1), Dims::from(1.5), Dims::from([2, 0])] {
        let err = generator.random(Some(&dims), None).unwrap_err();
        assert!(matches!(err, RandomError::InvalidDimensions { .. }));
    }
    assert_eq!(generator.source().state(), before);
}

#[test]
fn test_seed_validation() {
    let mut generator = seeded(1);
    assert!(matches!(generator.set_seed(-5), Err(RandomError::InvalidSeed { .. })));
    assert!(matches!(generator.set_seed(0), Err(RandomError::InvalidSeed { .. })));
    assert!(generator.set_seed(42).is_ok());
}

#[test]
fn test_scalar_equivalence() {
    let mut a = seeded(99);
    let mut b = seeded(99);
    let omitted = a.random(None, None).unwrap();
    let one = b.random(Some(&Dims::from(1)), None).unwrap();
    assert!(matches!(omitted, Variates::Scalar(_)));
    assert_eq!(omitted, one);
}

#[test]
fn test_end_to_end_known_draw() {
    let mut generator = WeibullRandom::with_source(FixedSequence::new([0.5]));
    let options = RandomOptions::new().lambda(2.0).k(3.0);
    let x = generator.random(None, Some(&options)).unwrap();
    assert_relative_eq!(
        x.as_scalar().unwrap(),
        2.0 * (-(0.5_f64).ln()).powf(1.0 / 3.0),
        epsilon = 1e-12
    );
}

#[test]
fn test_options_from_json_drive_generation() {
    let options =
        RandomOptions::from_json(&serde_json::json!({ "lambda": 5, "dtype": "uint8_clamped" }))
            .unwrap();
    let out = seeded(4).random(Some(&Dims::from(100)), Some(&options)).unwrap();
    let array = out.as_typed().unwrap();
    assert_eq!(array.dtype(), DType::Uint8Clamped);
    assert_eq!(array.len(), 100);
}

#[test]
fn test_higher_dimensions_ignore_encoding() {
    let options = RandomOptions::new().dtype(DType::Int8);
    let out = seeded(5).random(Some(&Dims::from([2, 3, 4])), Some(&options)).unwrap();
    let nested = out.as_nested().unwrap();
    assert_eq!(nested.shape(), vec![2, 3, 4]);
    // Values keep full precision: nothing was truncated to int8.
    assert!(nested.flatten().iter().any(|x| x.fract() != 0.0));
}

#[test]
fn test_sample_mean_exponential_case() {
    // λ = 3, k = 1 is exponential with mean 3.
    let options = RandomOptions::new().lambda(3.0);
    let out = seeded(2024).random(Some(&Dims::from(200_000)), Some(&options)).unwrap();
    let values = out.as_sequence().unwrap();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    assert_relative_eq!(mean, 3.0, max_relative = 0.02);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_flat_length_and_support(len in 2usize..500, seed in 1u64..1_000_000) {
        let out = seeded(seed).random(Some(&Dims::from(len)), None).unwrap();
        let values = out.as_sequence().unwrap();
        prop_assert_eq!(values.len(), len);
        prop_assert!(values.iter().all(|&x| x >= 0.0));
    }

    #[test]
    fn prop_matrix_shape(
        rows in 1usize..20,
        cols in 1usize..20,
        dtype_index in 0usize..FIXED_WIDTH.len(),
    ) {
        let dtype = FIXED_WIDTH[dtype_index];
        let options = RandomOptions::new().dtype(dtype);
        let out = seeded(7).random(Some(&Dims::from([rows, cols])), Some(&options)).unwrap();
        let m = out.as_matrix().unwrap();
        prop_assert_eq!(m.rows(), rows);
        prop_assert_eq!(m.cols(), cols);
        prop_assert_eq!(m.dtype(), dtype);
        prop_assert_eq!(m.data().len(), rows * cols);
    }

    #[test]
    fn prop_reseeding_is_deterministic(seed in 1u64..u64::MAX, len in 2usize..200) {
        let mut generator = seeded(seed);
        let first = generator.random(Some(&Dims::from(len)), None).unwrap();
        generator.set_seed(seed).unwrap();
        let second = generator.random(Some(&Dims::from(len)), None).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Generating K elements advances the source exactly K draws, in
    /// the same order as K scalar calls.
    #[test]
    fn prop_draw_accounting(
        axes in prop::collection::vec(1usize..5, 1..4),
        seed in 1u64..1_000_000,
        generic in any::<bool>(),
    ) {
        let dtype = if generic { DType::Generic } else { DType::Float64 };
        let options = RandomOptions::new().dtype(dtype);

        let mut bulk = seeded(seed);
        let out = bulk.random(Some(&Dims::from(axes.clone())), Some(&options)).unwrap();
        let count: usize = axes.iter().product();
        prop_assert_eq!(out.element_count(), count);

        let mut singles = seeded(seed);
        let expected: Vec<f64> = (0..count)
            .map(|_| singles.random(None, None).unwrap().as_scalar().unwrap())
            .collect();
        prop_assert_eq!(out.to_f64_vec(), expected);

        let mut reference = Lcg::new(Seed::try_from(seed).unwrap());
        let mut skipped = vec![0.0; count];
        reference.fill_uniform(&mut skipped);
        prop_assert_eq!(bulk.source().state(), reference.state());
        prop_assert_eq!(singles.source().state(), reference.state());

        let next = bulk.source_mut().next_uniform();
        prop_assert_eq!(next, singles.source_mut().next_uniform());
        prop_assert_eq!(next, reference.next_uniform());
    }
}
