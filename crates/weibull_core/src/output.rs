//! Output containers.

use std::fmt;

use serde::Serialize;

use crate::array::TypedArray;
use crate::matrix::Matrix;
use crate::nested::NestedArray;

/// The container returned by a generation call.
///
/// Which variant is produced depends only on the shape request and the
/// requested encoding:
///
/// | Shape             | `generic`    | fixed-width |
/// |-------------------|--------------|-------------|
/// | scalar / `1`      | `Scalar`     | `Scalar`    |
/// | `L > 1`           | `Sequence`   | `Typed`     |
/// | `[R, C]`          | `Nested`     | `Matrix`    |
/// | three or more axes| `Nested`     | `Nested`    |
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Variates {
    /// A single number.
    Scalar(f64),
    /// A flat generic sequence.
    Sequence(Vec<f64>),
    /// A flat fixed-width sequence.
    Typed(TypedArray),
    /// A two-dimensional fixed-width matrix.
    Matrix(Matrix),
    /// Nested generic sequences.
    Nested(NestedArray),
}

/// Discriminant of [`Variates`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariatesKind {
    /// [`Variates::Scalar`]
    Scalar,
    /// [`Variates::Sequence`]
    Sequence,
    /// [`Variates::Typed`]
    Typed,
    /// [`Variates::Matrix`]
    Matrix,
    /// [`Variates::Nested`]
    Nested,
}

impl fmt::Display for VariatesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariatesKind::Scalar => "scalar",
            VariatesKind::Sequence => "sequence",
            VariatesKind::Typed => "typed",
            VariatesKind::Matrix => "matrix",
            VariatesKind::Nested => "nested",
        };
        f.write_str(name)
    }
}

impl Variates {
    /// Which container this is.
    pub fn kind(&self) -> VariatesKind {
        match self {
            Variates::Scalar(_) => VariatesKind::Scalar,
            Variates::Sequence(_) => VariatesKind::Sequence,
            Variates::Typed(_) => VariatesKind::Typed,
            Variates::Matrix(_) => VariatesKind::Matrix,
            Variates::Nested(_) => VariatesKind::Nested,
        }
    }

    /// Total number of generated values.
    pub fn element_count(&self) -> usize {
        match self {
            Variates::Scalar(_) => 1,
            Variates::Sequence(values) => values.len(),
            Variates::Typed(array) => array.len(),
            Variates::Matrix(m) => m.data().len(),
            Variates::Nested(nested) => nested.element_count(),
        }
    }

    /// The value, if this is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Variates::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    /// The values, if this is a flat generic sequence.
    pub fn as_sequence(&self) -> Option<&[f64]> {
        match self {
            Variates::Sequence(values) => Some(values),
            _ => None,
        }
    }

    /// The array, if this is a flat fixed-width sequence.
    pub fn as_typed(&self) -> Option<&TypedArray> {
        match self {
            Variates::Typed(array) => Some(array),
            _ => None,
        }
    }

    /// The matrix, if this is one.
    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Variates::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// The nested array, if this is one.
    pub fn as_nested(&self) -> Option<&NestedArray> {
        match self {
            Variates::Nested(nested) => Some(nested),
            _ => None,
        }
    }

    /// Every value widened to `f64`, in generation order.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Variates::Scalar(x) => vec![*x],
            Variates::Sequence(values) => values.clone(),
            Variates::Typed(array) => array.to_f64_vec(),
            Variates::Matrix(m) => m.data().to_f64_vec(),
            Variates::Nested(nested) => nested.flatten(),
        }
    }
}
