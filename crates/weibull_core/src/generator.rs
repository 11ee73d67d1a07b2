//! The dispatcher: validates a request and routes it to one producer.
//!
//! ## Routing
//!
//! | Shape            | Encoding     | Producer                  |
//! |------------------|--------------|---------------------------|
//! | scalar / `1`     | any          | [`producers::scalar`]     |
//! | `L > 1`          | `generic`    | [`producers::sequence`]   |
//! | `L > 1`          | fixed-width  | [`producers::typed_sequence`] |
//! | `[R, C]`         | fixed-width  | [`producers::matrix`]     |
//! | `[R, C]`         | `generic`    | [`producers::nested`]     |
//! | three or more axes | any        | [`producers::nested`]     |
//!
//! There is no N-dimensional fixed-width backing, so three or more axes
//! always fall back to nested generic sequences and the requested
//! encoding is ignored.

use tracing::{debug, trace};

use crate::error::{RandomError, Result};
use crate::options::{RandomOptions, ResolvedOptions};
use crate::output::Variates;
use crate::producers;
use crate::rng::{Lcg, Seed, SeedableSource, UniformSource};
use crate::shape::{Dims, ShapeRequest};
use crate::variate::WeibullVariate;

/// Weibull variate generator owning its uniform source.
///
/// Every call draws from the same source, so output depends on every
/// call made before it. Reseeding swaps in a freshly constructed source.
///
/// # Examples
///
/// ```rust
/// use weibull_core::{Dims, RandomOptions, WeibullRandom, DType};
///
/// let mut generator: WeibullRandom = WeibullRandom::with_seed(42).unwrap();
///
/// let x = generator.random(None, None).unwrap();
/// assert!(x.as_scalar().unwrap() >= 0.0);
///
/// let options = RandomOptions::new().dtype(DType::Float32);
/// let m = generator.random(Some(&Dims::from([2, 3])), Some(&options)).unwrap();
/// assert_eq!(m.as_matrix().unwrap().shape(), (2, 3));
/// ```
#[derive(Clone, Debug)]
pub struct WeibullRandom<S: UniformSource = Lcg> {
    source: S,
}

impl WeibullRandom<Lcg> {
    /// Creates a generator over an entropy-seeded [`Lcg`].
    pub fn new() -> Self {
        Self::with_source(Lcg::from_entropy())
    }
}

impl Default for WeibullRandom<Lcg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SeedableSource> WeibullRandom<S> {
    /// Creates a generator whose source starts at `seed`'s stream.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidSeed`] unless `seed` is a positive integer.
    pub fn with_seed<T>(seed: T) -> Result<Self>
    where
        T: TryInto<Seed>,
        RandomError: From<T::Error>,
    {
        let seed = seed.try_into()?;
        Ok(Self::with_source(S::from_seed(seed)))
    }

    /// Replaces the source with a fresh one started at `seed`.
    ///
    /// Every later call, whatever its shape, draws from the new stream.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidSeed`] unless `seed` is a positive integer;
    /// the current source is left untouched.
    pub fn set_seed<T>(&mut self, seed: T) -> Result<()>
    where
        T: TryInto<Seed>,
        RandomError: From<T::Error>,
    {
        self.reseed(seed.try_into()?);
        Ok(())
    }

    /// Replaces the source with a fresh one started at an already
    /// validated `seed`.
    pub fn reseed(&mut self, seed: Seed) {
        self.source = S::from_seed(seed);
        debug!(seed = %seed, "reseeded uniform source");
    }
}

impl<S: UniformSource> WeibullRandom<S> {
    /// Creates a generator drawing from `source`.
    #[inline]
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// The uniform source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the uniform source.
    #[inline]
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the generator, returning its source.
    #[inline]
    pub fn into_source(self) -> S {
        self.source
    }

    /// Generates variates for raw dimensions and options.
    ///
    /// Omitted `dims` yields a scalar; omitted `options` uses the defaults.
    ///
    /// # Errors
    ///
    /// - [`RandomError::InvalidDimensions`] for malformed `dims`
    /// - [`RandomError::Validation`] for malformed `options`
    ///
    /// On error no uniform draw has been consumed.
    pub fn random(
        &mut self,
        dims: Option<&Dims>,
        options: Option<&RandomOptions>,
    ) -> Result<Variates> {
        let shape = ShapeRequest::classify(dims)?;
        let resolved = match options {
            Some(options) => options.resolve()?,
            None => ResolvedOptions::default(),
        };
        Ok(self.generate(&shape, &resolved))
    }

    /// Generates variates for an already validated request.
    ///
    /// Consumes exactly `shape.element_count()` uniform draws.
    pub fn generate(&mut self, shape: &ShapeRequest, options: &ResolvedOptions) -> Variates {
        trace!(
            lambda = options.lambda,
            k = options.k,
            dtype = %options.dtype,
            "resolved options"
        );
        let variate = WeibullVariate::new(options.lambda, options.k);
        let dtype = options.dtype;
        let source = &mut self.source;

        let out = match shape {
            ShapeRequest::Scalar => Variates::Scalar(producers::scalar(&variate, source)),
            ShapeRequest::Fixed1D(len) => {
                match producers::typed_sequence(*len, dtype, &variate, source) {
                    Some(array) => Variates::Typed(array),
                    None => Variates::Sequence(producers::sequence(*len, &variate, source)),
                }
            }
            ShapeRequest::FixedND(lengths) => match lengths.as_slice() {
                [rows, cols] => match producers::matrix(*rows, *cols, dtype, &variate, source) {
                    Some(m) => Variates::Matrix(m),
                    None => Variates::Nested(producers::nested(lengths, &variate, source)),
                },
                _ => {
                    if !dtype.is_generic() {
                        debug!(
                            ndims = lengths.len(),
                            dtype = %dtype,
                            "no fixed-width backing beyond two dimensions, using nested arrays"
                        );
                    }
                    Variates::Nested(producers::nested(lengths, &variate, source))
                }
            },
        };

        debug!(
            kind = %out.kind(),
            elements = out.element_count(),
            "generated weibull variates"
        );
        out
    }
}
