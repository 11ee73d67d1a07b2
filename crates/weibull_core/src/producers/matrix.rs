//! Matrix producer.

use tracing::trace;

use crate::dtype::DType;
use crate::matrix::Matrix;
use crate::rng::UniformSource;
use crate::variate::WeibullVariate;

/// Produces a `rows × cols` matrix of `dtype`, filled row-major.
///
/// Returns `None` for [`DType::Generic`] without consuming any draws.
pub fn matrix<S: UniformSource + ?Sized>(
    rows: usize,
    cols: usize,
    dtype: DType,
    variate: &WeibullVariate,
    source: &mut S,
) -> Option<Matrix> {
    let mut out = Matrix::zeros(rows, cols, dtype)?;
    trace!(rows, cols, bytes = out.data().byte_len(), "allocated matrix");
    out.fill_with(|| variate.draw(&mut *source));
    Some(out)
}
