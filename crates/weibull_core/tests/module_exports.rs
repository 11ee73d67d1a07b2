//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths.

#[test]
fn test_root_reexports() {
    use weibull_core::{
        Coercion, DType, Dims, Matrix, NestedArray, RandomError, RandomOptions, ResolvedOptions,
        ShapeRequest, TypedArray, Variates, VariatesKind, WeibullRandom, WeibullVariate,
    };

    let _ = Coercion::Wrapping;
    let _ = DType::Generic;
    let _ = Dims::from(3);
    let _ = Matrix::zeros(1, 1, DType::Int8);
    let _ = NestedArray::Leaf(vec![]);
    let _ = RandomError::validation("k", "bad");
    let _ = RandomOptions::new();
    let _ = ResolvedOptions::default();
    let _ = ShapeRequest::Scalar;
    let _ = TypedArray::zeros(DType::Uint8, 1);
    let _ = Variates::Scalar(0.0);
    let _ = VariatesKind::Nested;
    let _: WeibullRandom = WeibullRandom::new();
    let _ = WeibullVariate::default();
}

#[test]
fn test_rng_exports() {
    use weibull_core::rng::{FixedSequence, Lcg, Seed, SeedableSource, StdUniform, UniformSource};

    fn takes_seedable<S: SeedableSource>(seed: Seed) -> S {
        S::from_seed(seed)
    }

    let seed = Seed::try_from(5).unwrap();
    let mut lcg: Lcg = takes_seedable(seed);
    let mut std_uniform: StdUniform = takes_seedable(seed);
    let mut fixed = FixedSequence::new([0.5]);
    let _ = lcg.next_uniform() + std_uniform.next_uniform() + fixed.next_uniform();
}

#[test]
fn test_producer_exports() {
    use weibull_core::producers::{matrix, nested, scalar, sequence, typed_sequence};
    use weibull_core::rng::FixedSequence;
    use weibull_core::variate::WeibullVariate;
    use weibull_core::DType;

    let variate = WeibullVariate::default();
    let mut source = FixedSequence::new([0.5]);
    let _ = scalar(&variate, &mut source);
    let _ = sequence(2, &variate, &mut source);
    let _ = typed_sequence(2, DType::Int8, &variate, &mut source);
    let _ = matrix(2, 2, DType::Float32, &variate, &mut source);
    let _ = nested(&[2, 2], &variate, &mut source);
    assert_eq!(source.consumed(), 1 + 2 + 2 + 4 + 4);
}

#[test]
fn test_global_exports() {
    use weibull_core::global::{random, set_seed, with_generator};
    use weibull_core::Dims;

    set_seed(1).unwrap();
    let out = random(Some(&Dims::from(3)), None).unwrap();
    assert_eq!(out.element_count(), 3);
    let seed = with_generator(|g| g.source().seed());
    assert_eq!(seed, 1);
}
