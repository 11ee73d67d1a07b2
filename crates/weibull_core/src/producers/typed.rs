//! Fixed-width sequence producer.

use tracing::trace;

use crate::array::TypedArray;
use crate::dtype::DType;
use crate::rng::UniformSource;
use crate::variate::WeibullVariate;

/// Produces `len` variates stored in a [`TypedArray`] of `dtype`.
///
/// Returns `None` for [`DType::Generic`] without consuming any draws.
pub fn typed_sequence<S: UniformSource + ?Sized>(
    len: usize,
    dtype: DType,
    variate: &WeibullVariate,
    source: &mut S,
) -> Option<TypedArray> {
    let mut array = TypedArray::zeros(dtype, len)?;
    trace!(dtype = %dtype, len, bytes = array.byte_len(), "allocated fixed-width sequence");
    array.fill_with(|| variate.draw(&mut *source));
    Some(array)
}
