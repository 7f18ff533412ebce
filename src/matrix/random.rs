//! Uniform random matrix factories.
//!
//! The zero-argument forms draw from a fresh thread-local generator on
//! every call and are therefore not reproducible run-to-run; callers that
//! need determinism pass their own generator to [`Matrix::random_with`].

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::Result;
use crate::traits::FloatScalar;

use super::Matrix;

impl<T: FloatScalar + SampleUniform> Matrix<T> {
    /// Create a matrix with entries uniformly distributed in [-1, 1].
    ///
    /// Fails with [`crate::Error::InvalidDimension`] if either count is
    /// zero.
    pub fn random(nrows: usize, ncols: usize) -> Result<Self> {
        Self::random_range(nrows, ncols, -T::one(), T::one())
    }

    /// Create a matrix with entries uniformly distributed in [`min`, `max`].
    ///
    /// Panics if `min > max`.
    pub fn random_range(nrows: usize, ncols: usize, min: T, max: T) -> Result<Self> {
        Self::random_with(&mut rand::thread_rng(), nrows, ncols, min, max)
    }

    /// Create a uniform random matrix from an explicit generator.
    ///
    /// ```
    /// use factrix::Matrix;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let a = Matrix::<f64>::random_with(&mut rng, 3, 3, -1.0, 1.0).unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let b = Matrix::<f64>::random_with(&mut rng, 3, 3, -1.0, 1.0).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn random_with<R: Rng + ?Sized>(
        rng: &mut R,
        nrows: usize,
        ncols: usize,
        min: T,
        max: T,
    ) -> Result<Self> {
        // Validate dimensions before touching the generator.
        let mut m = Self::zeros(nrows, ncols)?;
        let dist = Uniform::new_inclusive(min, max);
        for x in m.data.iter_mut() {
            *x = dist.sample(rng);
        }
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_is_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let a = Matrix::<f64>::random_with(&mut rng1, 4, 5, -1.0, 1.0).unwrap();
        let b = Matrix::<f64>::random_with(&mut rng2, 4, 5, -1.0, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn values_within_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let m = Matrix::<f64>::random_with(&mut rng, 20, 20, 2.0, 5.0).unwrap();
        for &x in &m {
            assert!((2.0..=5.0).contains(&x), "value {x} outside [2, 5]");
        }
    }

    #[test]
    fn default_range() {
        let m = Matrix::<f64>::random(10, 10).unwrap();
        for &x in &m {
            assert!((-1.0..=1.0).contains(&x), "value {x} outside [-1, 1]");
        }
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            Matrix::<f64>::random(0, 4),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn consecutive_draws_differ() {
        // 100 entries colliding is effectively impossible.
        let a = Matrix::<f64>::random(10, 10).unwrap();
        let b = Matrix::<f64>::random(10, 10).unwrap();
        assert_ne!(a, b);
    }
}
