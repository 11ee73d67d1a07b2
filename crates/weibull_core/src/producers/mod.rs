//! # Producers
//!
//! One producer per output container. All share the same skeleton:
//!
//! 1. Allocate the container sized exactly to the requested shape
//! 2. Visit every position once in a fixed order
//! 3. Store one variate per position, coerced to the encoding
//!
//! Total uniform draws consumed always equals the element count, in
//! visitation order, so a seeded source reproduces the same output.
//!
//! ## Visitation Order
//!
//! - Sequences: index `0..len` ascending
//! - Matrices: row-major
//! - Nested arrays: outer-to-inner, each inner axis index-ascending

mod matrix;
mod nested;
mod scalar;
mod sequence;
mod typed;

pub use matrix::matrix;
pub use nested::nested;
pub use scalar::scalar;
pub use sequence::sequence;
pub use typed::typed_sequence;
