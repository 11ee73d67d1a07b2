//! Two-dimensional fixed-width container.

use serde::Serialize;

use crate::array::TypedArray;
use crate::dtype::DType;

/// A row-major `rows × cols` matrix over a fixed-width encoding.
///
/// Element `(r, c)` lives at flat index `r * cols + c`.
///
/// # Examples
///
/// ```rust
/// use weibull_core::{DType, Matrix};
///
/// let m = Matrix::zeros(2, 3, DType::Float32).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), Some(0.0));
/// assert_eq!(m.get(2, 0), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Matrix {
    shape: (usize, usize),
    dtype: DType,
    data: TypedArray,
}

impl Matrix {
    /// Allocates a zero-filled matrix.
    ///
    /// `None` for [`DType::Generic`] or when `rows * cols` overflows.
    pub fn zeros(rows: usize, cols: usize, dtype: DType) -> Option<Self> {
        let data = TypedArray::zeros(dtype, rows.checked_mul(cols)?)?;
        Some(Self {
            shape: (rows, cols),
            dtype,
            data,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.0
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.1
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Element encoding.
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Row-major backing storage.
    #[inline]
    pub fn data(&self) -> &TypedArray {
        &self.data
    }

    /// Consumes the matrix, returning its backing storage.
    pub fn into_data(self) -> TypedArray {
        self.data
    }

    /// Element at `(row, col)` widened to `f64`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.data.get(row * self.cols() + col)
    }

    /// Row `row` widened to `f64`, or `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.rows() {
            return None;
        }
        (0..self.cols()).map(|col| self.get(row, col)).collect()
    }

    /// Fills row-major with successive values from `next`.
    pub(crate) fn fill_with<F: FnMut() -> f64>(&mut self, next: F) {
        self.data.fill_with(next);
    }
}
