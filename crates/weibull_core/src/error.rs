//! Error types for variate generation.
//!
//! All errors are raised synchronously at the call site, before any
//! uniform draw is consumed or any output container is allocated.

use std::convert::Infallible;

use thiserror::Error;

/// Errors raised by the Weibull generator.
///
/// # Variants
/// - `InvalidDimensions`: dimensions are neither a positive integer nor a
///   non-empty array of positive integers
/// - `Validation`: an option field failed its contract
/// - `InvalidSeed`: a seed value is not a positive integer
///
/// # Examples
/// ```
/// use weibull_core::RandomError;
///
/// let err = RandomError::InvalidSeed { value: "-5".to_string() };
/// assert_eq!(
///     format!("{}", err),
///     "invalid seed `-5`: must be a positive integer"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// Dimensions argument is not a positive integer or positive integer array.
    #[error(
        "invalid dimensions `{value}`: must be either a positive integer or a non-empty positive integer array"
    )]
    InvalidDimensions {
        /// Rendered offending value.
        value: String,
    },

    /// An option failed validation.
    #[error("invalid option `{field}`: {reason}")]
    Validation {
        /// Option name (`lambda`, `k`, `dtype`, or `options` for the whole object).
        field: String,
        /// Description of the failure.
        reason: String,
    },

    /// Seed value is not a positive integer.
    #[error("invalid seed `{value}`: must be a positive integer")]
    InvalidSeed {
        /// Rendered offending value.
        value: String,
    },
}

impl RandomError {
    /// Convenience constructor for [`RandomError::Validation`].
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<Infallible> for RandomError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandomError>;
