//! Dimension specifications and their classification into shape requests.
//!
//! [`Dims`] is the raw, caller-supplied form: a single number or a list
//! of numbers, exactly as it might arrive from JSON or a command line.
//! [`ShapeRequest::classify`] validates it once and produces the tagged
//! request the producers consume.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RandomError, Result};
use crate::rng::seed::MAX_SAFE_INTEGER;

/// Raw dimension input.
///
/// Values are held as `f64` so that non-integer, zero and negative inputs
/// can be represented and rejected with a precise error.
///
/// # Examples
///
/// ```rust
/// use weibull_core::Dims;
///
/// let one_d = Dims::from(5);
/// let two_d = Dims::from([2, 3]);
/// let parsed: Dims = serde_json::from_str("[2, 3]").unwrap();
/// assert_eq!(parsed, two_d);
/// # let _ = one_d;
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dims {
    /// A single length.
    Length(f64),
    /// One length per axis.
    Axes(Vec<f64>),
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dims::Length(len) => write!(f, "{}", len),
            Dims::Axes(axes) => {
                let parts: Vec<String> = axes.iter().map(|a| a.to_string()).collect();
                write!(f, "[{}]", parts.join(","))
            }
        }
    }
}

impl From<usize> for Dims {
    fn from(len: usize) -> Self {
        Dims::Length(len as f64)
    }
}

impl From<f64> for Dims {
    fn from(len: f64) -> Self {
        Dims::Length(len)
    }
}

impl From<i64> for Dims {
    fn from(len: i64) -> Self {
        Dims::Length(len as f64)
    }
}

impl From<i32> for Dims {
    fn from(len: i32) -> Self {
        Dims::Length(f64::from(len))
    }
}

impl From<Vec<usize>> for Dims {
    fn from(axes: Vec<usize>) -> Self {
        Dims::from(axes.as_slice())
    }
}

impl From<&[usize]> for Dims {
    fn from(axes: &[usize]) -> Self {
        Dims::Axes(axes.iter().map(|&a| a as f64).collect())
    }
}

impl<const N: usize> From<[usize; N]> for Dims {
    fn from(axes: [usize; N]) -> Self {
        Dims::from(&axes[..])
    }
}

impl From<Vec<f64>> for Dims {
    fn from(axes: Vec<f64>) -> Self {
        Dims::Axes(axes)
    }
}

/// A validated output shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeRequest {
    /// A single number (dimensions omitted, `1`, or `[1]`).
    Scalar,
    /// A one-dimensional sequence of the given length (> 1).
    Fixed1D(usize),
    /// Two or more axes.
    FixedND(Vec<usize>),
}

impl ShapeRequest {
    /// Classifies raw dimensions.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidDimensions`] unless `dims` is omitted, a
    /// positive integer, or a non-empty array of positive integers whose
    /// product fits in `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weibull_core::{Dims, ShapeRequest};
    ///
    /// assert_eq!(ShapeRequest::classify(None).unwrap(), ShapeRequest::Scalar);
    /// assert_eq!(
    ///     ShapeRequest::classify(Some(&Dims::from([1]))).unwrap(),
    ///     ShapeRequest::Scalar
    /// );
    /// assert_eq!(
    ///     ShapeRequest::classify(Some(&Dims::from(4))).unwrap(),
    ///     ShapeRequest::Fixed1D(4)
    /// );
    /// assert!(ShapeRequest::classify(Some(&Dims::from(1.5))).is_err());
    /// ```
    pub fn classify(dims: Option<&Dims>) -> Result<Self> {
        let Some(dims) = dims else {
            return Ok(ShapeRequest::Scalar);
        };
        let invalid = || RandomError::InvalidDimensions {
            value: dims.to_string(),
        };

        let lengths: Vec<usize> = match dims {
            Dims::Length(len) => vec![positive_integer(*len).ok_or_else(invalid)?],
            Dims::Axes(axes) => {
                if axes.is_empty() {
                    return Err(invalid());
                }
                axes.iter()
                    .map(|&a| positive_integer(a))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(invalid)?
            }
        };

        lengths
            .iter()
            .try_fold(1usize, |total, &len| total.checked_mul(len))
            .ok_or_else(invalid)?;

        Ok(match lengths.as_slice() {
            [1] => ShapeRequest::Scalar,
            [len] => ShapeRequest::Fixed1D(*len),
            _ => ShapeRequest::FixedND(lengths),
        })
    }

    /// Number of axes (0 for a scalar).
    pub fn ndims(&self) -> usize {
        match self {
            ShapeRequest::Scalar => 0,
            ShapeRequest::Fixed1D(_) => 1,
            ShapeRequest::FixedND(lengths) => lengths.len(),
        }
    }

    /// Total number of elements, i.e. uniform draws needed to fill it.
    pub fn element_count(&self) -> usize {
        match self {
            ShapeRequest::Scalar => 1,
            ShapeRequest::Fixed1D(len) => *len,
            ShapeRequest::FixedND(lengths) => lengths.iter().product(),
        }
    }
}

fn positive_integer(value: f64) -> Option<usize> {
    if value.is_finite() && value.fract() == 0.0 && (1.0..=MAX_SAFE_INTEGER).contains(&value) {
        usize::try_from(value as u64).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(dims: impl Into<Dims>) -> Result<ShapeRequest> {
        ShapeRequest::classify(Some(&dims.into()))
    }

    #[test]
    fn test_scalar_forms() {
        assert_eq!(ShapeRequest::classify(None).unwrap(), ShapeRequest::Scalar);
        assert_eq!(classify(1).unwrap(), ShapeRequest::Scalar);
        assert_eq!(classify([1]).unwrap(), ShapeRequest::Scalar);
    }

    #[test]
    fn test_one_dimensional() {
        assert_eq!(classify(10).unwrap(), ShapeRequest::Fixed1D(10));
        assert_eq!(classify([10]).unwrap(), ShapeRequest::Fixed1D(10));
    }

    #[test]
    fn test_multi_dimensional() {
        assert_eq!(classify([2, 3]).unwrap(), ShapeRequest::FixedND(vec![2, 3]));
        assert_eq!(classify([1, 1]).unwrap(), ShapeRequest::FixedND(vec![1, 1]));
        let cube = classify([2, 3, 4]).unwrap();
        assert_eq!(cube.ndims(), 3);
        assert_eq!(cube.element_count(), 24);
    }

    #[test]
    fn test_invalid_dimensions() {
        for dims in [
            Dims::from(0),
            Dims::from(-1),
            Dims::from(1.5),
            Dims::from(f64::NAN),
            Dims::from(f64::INFINITY),
            Dims::from([2, 0]),
            Dims::Axes(vec![]),
            Dims::Axes(vec![2.0, 2.5]),
        ] {
            let err = ShapeRequest::classify(Some(&dims)).unwrap_err();
            assert!(
                matches!(err, RandomError::InvalidDimensions { .. }),
                "expected InvalidDimensions for {}",
                dims
            );
        }
    }

    #[test]
    fn test_element_count_overflow_rejected() {
        let huge = 1usize << 32;
        for dims in [Dims::from([huge, huge]), Dims::from([huge, huge, huge])] {
            let err = ShapeRequest::classify(Some(&dims)).unwrap_err();
            assert!(matches!(err, RandomError::InvalidDimensions { .. }));
        }

        let at_limit = Dims::Axes(vec![MAX_SAFE_INTEGER, MAX_SAFE_INTEGER]);
        assert!(ShapeRequest::classify(Some(&at_limit)).is_err());

        let fits = classify([huge, 2]).unwrap();
        assert_eq!(fits.element_count(), huge * 2);
    }

    #[test]
    fn test_error_names_value() {
        let err = classify([2, 0]).unwrap_err();
        assert_eq!(
            err,
            RandomError::InvalidDimensions {
                value: "[2,0]".to_string()
            }
        );
    }

    #[test]
    fn test_deserialise_from_json() {
        let len: Dims = serde_json::from_str("5").unwrap();
        assert_eq!(classify(len).unwrap(), ShapeRequest::Fixed1D(5));
        assert!(serde_json::from_str::<Dims>("\"5\"").is_err());
    }
}
