//! Output encodings.
//!
//! [`DType`] is the closed set of element encodings a caller may request.
//! Each fixed-width tag maps to a native element type and a coercion
//! rule through [`DType::byte_width`] and [`DType::coercion`].

use std::fmt;
use std::str::FromStr;

use num_traits::{AsPrimitive, PrimInt};
use serde::{Deserialize, Serialize};

use crate::error::RandomError;

/// Element encoding of the generated container.
///
/// # Examples
///
/// ```rust
/// use weibull_core::DType;
///
/// let dtype: DType = "uint8_clamped".parse().unwrap();
/// assert_eq!(dtype, DType::Uint8Clamped);
/// assert_eq!(dtype.byte_width(), Some(1));
/// assert_eq!(DType::Generic.byte_width(), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DType {
    /// Dynamically-typed numbers (`f64` in a plain `Vec`).
    #[default]
    Generic,
    /// 8-bit signed, wrapping.
    Int8,
    /// 8-bit unsigned, wrapping.
    Uint8,
    /// 8-bit unsigned, clamped to [0, 255].
    Uint8Clamped,
    /// 16-bit signed, wrapping.
    Int16,
    /// 16-bit unsigned, wrapping.
    Uint16,
    /// 32-bit signed, wrapping.
    Int32,
    /// 32-bit unsigned, wrapping.
    Uint32,
    /// 32-bit IEEE float.
    Float32,
    /// 64-bit IEEE float.
    Float64,
}

/// How a generated `f64` is stored into a fixed-width element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coercion {
    /// No coercion; values stay `f64`.
    Dynamic,
    /// Truncate toward zero, reduce modulo 2^bits (two's complement).
    Wrapping,
    /// Round half to even and saturate to the representable range.
    Clamped,
    /// Round to the nearest representable float.
    Float,
}

impl DType {
    /// All tags, in declaration order.
    pub const ALL: [DType; 10] = [
        DType::Generic,
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

    /// The tag string, e.g. `"uint8_clamped"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Generic => "generic",
            DType::Int8 => "int8",
            DType::Uint8 => "uint8",
            DType::Uint8Clamped => "uint8_clamped",
            DType::Int16 => "int16",
            DType::Uint16 => "uint16",
            DType::Int32 => "int32",
            DType::Uint32 => "uint32",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

    /// Whether this is the dynamically-typed encoding.
    #[inline]
    pub fn is_generic(&self) -> bool {
        matches!(self, DType::Generic)
    }

    /// Bytes per element, or `None` for [`DType::Generic`].
    pub fn byte_width(&self) -> Option<usize> {
        match self {
            DType::Generic => None,
            DType::Int8 | DType::Uint8 | DType::Uint8Clamped => Some(1),
            DType::Int16 | DType::Uint16 => Some(2),
            DType::Int32 | DType::Uint32 | DType::Float32 => Some(4),
            DType::Float64 => Some(8),
        }
    }

    /// Coercion rule applied when storing a value.
    pub fn coercion(&self) -> Coercion {
        match self {
            DType::Generic => Coercion::Dynamic,
            DType::Int8
            | DType::Uint8
            | DType::Int16
            | DType::Uint16
            | DType::Int32
            | DType::Uint32 => Coercion::Wrapping,
            DType::Uint8Clamped => Coercion::Clamped,
            DType::Float32 | DType::Float64 => Coercion::Float,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DType {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DType::ALL
            .iter()
            .copied()
            .find(|dtype| dtype.as_str() == s)
            .ok_or_else(|| {
                RandomError::validation("dtype", format!("unrecognized data type `{}`", s))
            })
    }
}

/// Converts `value` to an integer type by truncation and modular wraparound.
///
/// NaN and infinities map to zero.
pub(crate) fn wrap_to<T>(value: f64) -> T
where
    T: PrimInt + 'static,
    u64: AsPrimitive<T>,
{
    if !value.is_finite() {
        return T::zero();
    }
    let bits = T::zero().count_zeros() as i32;
    let modulus = 2f64.powi(bits);
    let reduced = value.trunc().rem_euclid(modulus);
    (reduced as u64).as_()
}

/// Converts `value` to an integer type by rounding half to even and
/// saturating at the type's bounds.
///
/// NaN maps to zero.
pub(crate) fn clamp_to<T>(value: f64) -> T
where
    T: Copy + 'static,
    f64: AsPrimitive<T>,
{
    value.round_ties_even().as_()
}

/// Stores `value` into an integer element under `coercion`.
///
/// [`Coercion::Clamped`] saturates; every other rule wraps.
pub(crate) fn coerce_int<T>(coercion: Coercion, value: f64) -> T
where
    T: PrimInt + 'static,
    u64: AsPrimitive<T>,
    f64: AsPrimitive<T>,
{
    match coercion {
        Coercion::Clamped => clamp_to(value),
        Coercion::Wrapping | Coercion::Dynamic | Coercion::Float => wrap_to(value),
    }
}
