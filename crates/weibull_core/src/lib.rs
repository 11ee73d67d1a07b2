//! # weibull_core: Weibull Random Variates
//!
//! Generates pseudo-random variates from a Weibull distribution with
//! scale `λ` and shape `k`, packed into the container the caller asks
//! for: a scalar, a flat sequence, a fixed-width typed sequence, a
//! row-major matrix, or nested arrays for higher dimensions.
//!
//! ## Architecture
//!
//! - [`rng`]: uniform sources (`UniformSource`, the default [`rng::Lcg`])
//! - [`variate`]: inverse-CDF transform, one uniform draw per variate
//! - [`shape`]: raw dimensions ([`Dims`]) and validated [`ShapeRequest`]s
//! - [`options`]: [`RandomOptions`] and their validation
//! - [`producers`]: one filler per output container
//! - [`generator`]: the dispatcher, [`WeibullRandom`]
//! - [`global`]: a process-wide shared generator with `random` / `set_seed`
//!
//! ## Usage Example
//!
//! ```rust
//! use weibull_core::{DType, Dims, RandomOptions, WeibullRandom};
//!
//! let mut generator: WeibullRandom = WeibullRandom::with_seed(12345).unwrap();
//!
//! // Ten generic variates
//! let values = generator.random(Some(&Dims::from(10)), None).unwrap();
//! assert_eq!(values.as_sequence().unwrap().len(), 10);
//!
//! // A 3 × 4 float32 matrix with λ = 2, k = 1.5
//! let options = RandomOptions::new().lambda(2.0).k(1.5).dtype(DType::Float32);
//! let matrix = generator.random(Some(&Dims::from([3, 4])), Some(&options)).unwrap();
//! assert_eq!(matrix.as_matrix().unwrap().shape(), (3, 4));
//! ```
//!
//! ## Reproducibility
//!
//! All producers draw from the generator's single source in a fixed
//! visitation order, one draw per element. Reseeding with the same seed
//! reproduces the same outputs for the same sequence of calls.
//!
//! ## Threading
//!
//! A [`WeibullRandom`] is an ordinary owned value with no internal
//! locking. The [`global`] generator is one process-wide instance behind
//! a mutex.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
pub mod dtype;
pub mod error;
pub mod generator;
pub mod global;
pub mod matrix;
pub mod nested;
pub mod options;
pub mod output;
pub mod producers;
pub mod rng;
pub mod shape;
pub mod variate;

pub use array::TypedArray;
pub use dtype::{Coercion, DType};
pub use error::{RandomError, Result};
pub use generator::WeibullRandom;
pub use matrix::Matrix;
pub use nested::NestedArray;
pub use options::{RandomOptions, ResolvedOptions};
pub use output::{Variates, VariatesKind};
pub use shape::{Dims, ShapeRequest};
pub use variate::WeibullVariate;
