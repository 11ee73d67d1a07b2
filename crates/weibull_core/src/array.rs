//! Fixed-width flat containers.

use serde::Serialize;

use crate::dtype::{coerce_int, DType};

/// A flat sequence backed by one fixed-width numeric encoding.
///
/// Each variant owns a `Vec` of the native element type. Values written
/// through [`TypedArray::fill_with`] are coerced per [`DType::coercion`].
///
/// # Examples
///
/// ```rust
/// use weibull_core::{DType, TypedArray};
///
/// let mut array = TypedArray::zeros(DType::Int8, 3).unwrap();
/// let mut next = [1.9, -1.9, 130.0].into_iter();
/// array.fill_with(|| next.next().unwrap_or(0.0));
///
/// assert_eq!(array, TypedArray::Int8(vec![1, -1, -126]));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedArray {
    /// `int8` elements.
    Int8(Vec<i8>),
    /// `uint8` elements.
    Uint8(Vec<u8>),
    /// `uint8_clamped` elements.
    Uint8Clamped(Vec<u8>),
    /// `int16` elements.
    Int16(Vec<i16>),
    /// `uint16` elements.
    Uint16(Vec<u16>),
    /// `int32` elements.
    Int32(Vec<i32>),
    /// `uint32` elements.
    Uint32(Vec<u32>),
    /// `float32` elements.
    Float32(Vec<f32>),
    /// `float64` elements.
    Float64(Vec<f64>),
}

impl TypedArray {
    /// Allocates a zero-filled array of exactly `len` elements.
    ///
    /// Returns `None` for [`DType::Generic`], which has no fixed-width backing.
    pub fn zeros(dtype: DType, len: usize) -> Option<Self> {
        let array = match dtype {
            DType::Generic => return None,
            DType::Int8 => TypedArray::Int8(vec![0; len]),
            DType::Uint8 => TypedArray::Uint8(vec![0; len]),
            DType::Uint8Clamped => TypedArray::Uint8Clamped(vec![0; len]),
            DType::Int16 => TypedArray::Int16(vec![0; len]),
            DType::Uint16 => TypedArray::Uint16(vec![0; len]),
            DType::Int32 => TypedArray::Int32(vec![0; len]),
            DType::Uint32 => TypedArray::Uint32(vec![0; len]),
            DType::Float32 => TypedArray::Float32(vec![0.0; len]),
            DType::Float64 => TypedArray::Float64(vec![0.0; len]),
        };
        Some(array)
    }

    /// The encoding of this array.
    pub fn dtype(&self) -> DType {
        match self {
            TypedArray::Int8(_) => DType::Int8,
            TypedArray::Uint8(_) => DType::Uint8,
            TypedArray::Uint8Clamped(_) => DType::Uint8Clamped,
            TypedArray::Int16(_) => DType::Int16,
            TypedArray::Uint16(_) => DType::Uint16,
            TypedArray::Int32(_) => DType::Int32,
            TypedArray::Uint32(_) => DType::Uint32,
            TypedArray::Float32(_) => DType::Float32,
            TypedArray::Float64(_) => DType::Float64,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            TypedArray::Int8(v) => v.len(),
            TypedArray::Uint8(v) | TypedArray::Uint8Clamped(v) => v.len(),
            TypedArray::Int16(v) => v.len(),
            TypedArray::Uint16(v) => v.len(),
            TypedArray::Int32(v) => v.len(),
            TypedArray::Uint32(v) => v.len(),
            TypedArray::Float32(v) => v.len(),
            TypedArray::Float64(v) => v.len(),
        }
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrites every element, index-ascending, with successive values
    /// from `next`, coerced to the array's encoding.
    ///
    /// `next` is called exactly [`len`](Self::len) times.
    pub fn fill_with<F: FnMut() -> f64>(&mut self, mut next: F) {
        let coercion = self.dtype().coercion();
        match self {
            TypedArray::Int8(v) => v.iter_mut().for_each(|x| *x = coerce_int(coercion, next())),
            TypedArray::Uint8(v) | TypedArray::Uint8Clamped(v) => {
                v.iter_mut().for_each(|x| *x = coerce_int(coercion, next()))
            }
            TypedArray::Int16(v) => v.iter_mut().for_each(|x| *x = coerce_int(coercion, next())),
            TypedArray::Uint16(v) => v.iter_mut().for_each(|x| *x = coerce_int(coercion, next())),
            TypedArray::Int32(v) => v.iter_mut().for_each(|x| *x = coerce_int(coercion, next())),
            TypedArray::Uint32(v) => v.iter_mut().for_each(|x| *x = coerce_int(coercion, next())),
            TypedArray::Float32(v) => v.iter_mut().for_each(|x| *x = next() as f32),
            TypedArray::Float64(v) => v.iter_mut().for_each(|x| *x = next()),
        }
    }

    /// Size of the backing storage in bytes.
    pub fn byte_len(&self) -> usize {
        self.dtype().byte_width().map_or(0, |width| width * self.len())
    }

    /// Element `index` widened to `f64`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            TypedArray::Int8(v) => v.get(index).map(|&x| f64::from(x)),
            TypedArray::Uint8(v) | TypedArray::Uint8Clamped(v) => {
                v.get(index).map(|&x| f64::from(x))
            }
            TypedArray::Int16(v) => v.get(index).map(|&x| f64::from(x)),
            TypedArray::Uint16(v) => v.get(index).map(|&x| f64::from(x)),
            TypedArray::Int32(v) => v.get(index).map(|&x| f64::from(x)),
            TypedArray::Uint32(v) => v.get(index).map(|&x| f64::from(x)),
            TypedArray::Float32(v) => v.get(index).map(|&x| f64::from(x)),
            TypedArray::Float64(v) => v.get(index).copied(),
        }
    }

    /// All elements widened to `f64`, index-ascending.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        (0..self.len()).filter_map(|i| self.get(i)).collect()
    }
}
