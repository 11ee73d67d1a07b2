//! Generation options and their validation.
//!
//! Options are validated in full before any uniform draw is consumed.
//! Unset fields resolve to `lambda = 1`, `k = 1`, `dtype = generic`.

use serde::{Deserialize, Serialize};

use crate::dtype::DType;
use crate::error::{RandomError, Result};

/// Default scale parameter.
pub const DEFAULT_LAMBDA: f64 = 1.0;

/// Default shape parameter.
pub const DEFAULT_K: f64 = 1.0;

/// Caller-supplied generation options.
///
/// # Examples
///
/// ```rust
/// use weibull_core::{DType, RandomOptions};
///
/// let options = RandomOptions::new().lambda(2.0).k(3.0).dtype(DType::Float32);
/// options.validate().unwrap();
///
/// let resolved = options.resolve().unwrap();
/// assert_eq!(resolved.lambda, 2.0);
/// assert_eq!(resolved.dtype, DType::Float32);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomOptions {
    /// Scale parameter λ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lambda: Option<f64>,
    /// Shape parameter k.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<f64>,
    /// Output encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtype: Option<DType>,
}

/// Options with every default applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedOptions {
    /// Scale parameter λ.
    pub lambda: f64,
    /// Shape parameter k.
    pub k: f64,
    /// Output encoding.
    pub dtype: DType,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
            k: DEFAULT_K,
            dtype: DType::Generic,
        }
    }
}

impl RandomOptions {
    /// Empty options (all defaults).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scale parameter λ.
    #[inline]
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.lambda = Some(lambda);
        self
    }

    /// Sets the shape parameter k.
    #[inline]
    pub fn k(mut self, k: f64) -> Self {
        self.k = Some(k);
        self
    }

    /// Sets the output encoding.
    #[inline]
    pub fn dtype(mut self, dtype: DType) -> Self {
        self.dtype = Some(dtype);
        self
    }

    /// Parses options from a JSON value.
    ///
    /// # Errors
    ///
    /// [`RandomError::Validation`] if `value` is not an object, holds an
    /// unrecognized key, a field of the wrong type, an unknown dtype tag,
    /// or fails [`validate`](Self::validate).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weibull_core::RandomOptions;
    ///
    /// let value = serde_json::json!({ "lambda": 2.0, "dtype": "int16" });
    /// assert!(RandomOptions::from_json(&value).is_ok());
    ///
    /// let bad = serde_json::json!({ "lambda": "two" });
    /// assert!(RandomOptions::from_json(&bad).is_err());
    /// ```
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(RandomError::validation(
                "options",
                format!("must be an object, got `{}`", value),
            ));
        }
        let options = Self::deserialize(value)
            .map_err(|e| RandomError::validation("options", e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Checks every set field.
    ///
    /// # Errors
    ///
    /// [`RandomError::Validation`] if `lambda` or `k` is set but is not a
    /// finite positive number.
    pub fn validate(&self) -> Result<()> {
        check_positive("lambda", self.lambda)?;
        check_positive("k", self.k)?;
        Ok(())
    }

    /// Validates, then applies defaults to unset fields.
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        self.validate()?;
        Ok(ResolvedOptions {
            lambda: self.lambda.unwrap_or(DEFAULT_LAMBDA),
            k: self.k.unwrap_or(DEFAULT_K),
            dtype: self.dtype.unwrap_or_default(),
        })
    }
}

fn check_positive(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(RandomError::validation(
            field,
            format!("must be a positive number, got `{}`", v),
        )),
        _ => Ok(()),
    }
}
