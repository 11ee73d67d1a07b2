//! Nested-sequence producer.

use crate::nested::NestedArray;
use crate::rng::UniformSource;
use crate::variate::WeibullVariate;

use super::sequence;

/// Produces an array-of-arrays with one axis per entry of `dims`.
///
/// Outer axes are filled first; each inner axis is filled
/// index-ascending before moving to the next outer index. An empty
/// `dims` yields an empty leaf and consumes nothing.
pub fn nested<S: UniformSource + ?Sized>(
    dims: &[usize],
    variate: &WeibullVariate,
    source: &mut S,
) -> NestedArray {
    match dims {
        [] => NestedArray::Leaf(Vec::new()),
        [len] => NestedArray::Leaf(sequence(*len, variate, source)),
        [len, rest @ ..] => {
            let mut children = Vec::with_capacity(*len);
            for _ in 0..*len {
                children.push(nested(rest, variate, source));
            }
            NestedArray::Branch(children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FixedSequence;

    #[test]
    fn test_shape_matches_dims() {
        let mut source = FixedSequence::new([0.25, 0.75]);
        let out = nested(&[2, 3, 4], &WeibullVariate::default(), &mut source);
        assert_eq!(out.shape(), vec![2, 3, 4]);
        assert_eq!(out.element_count(), 24);
        assert_eq!(source.consumed(), 24);
    }

    #[test]
    fn test_outer_to_inner_order() {
        let draws: Vec<f64> = (1..=6_i32).map(|i| f64::from(i) / 10.0).collect();
        let mut source = FixedSequence::new(draws.clone());
        let out = nested(&[3, 2], &WeibullVariate::default(), &mut source);

        let expected: Vec<f64> = draws.iter().map(|u| -(1.0 - u).ln()).collect();
        assert_eq!(out.flatten(), expected);
        assert_eq!(out.child(1).and_then(|c| c.as_leaf()), Some(&expected[2..4]));
    }

    #[test]
    fn test_empty_dims() {
        let mut source = FixedSequence::new([0.5]);
        let out = nested(&[], &WeibullVariate::default(), &mut source);
        assert!(out.is_empty());
        assert_eq!(source.consumed(), 0);
    }
}
