//! Numerical-accuracy diagnostics for a QR factorization.
//!
//! All four metrics are pure: they validate operand shapes up front, never
//! mutate their inputs, and reduce to a single scalar in the infinity
//! norm. Shape violations fail with [`Error::DimensionMismatch`] naming
//! the offending metric.

use crate::error::{Error, Result};
use crate::linalg::invert_upper_triangular;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Residual `‖A − Q·R‖∞` of a factorization.
///
/// Requires `A.rows == Q.rows == R.rows`, `A.cols == R.cols`, and
/// `Q.cols == R.rows`.
///
/// ```
/// use factrix::{metrics, Matrix};
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// let f = a.qr();
/// assert!(metrics::residual_norm(&a, &f.q, &f.r).unwrap() < 1e-12);
/// ```
pub fn residual_norm<T: FloatScalar>(
    a: &Matrix<T>,
    q: &Matrix<T>,
    r: &Matrix<T>,
) -> Result<T> {
    if a.nrows() != q.nrows()
        || a.nrows() != r.nrows()
        || a.ncols() != r.ncols()
        || q.ncols() != r.nrows()
    {
        return Err(Error::DimensionMismatch {
            op: "residual_norm",
        });
    }

    let qr = q * r;
    Ok((a - &qr).norm_inf())
}

/// Orthogonality defect `‖Qᵀ·Q − I‖∞`.
///
/// Requires `Q` square. Holds to working precision regardless of the
/// conditioning of the factored matrix.
pub fn orthogonality_error<T: FloatScalar>(q: &Matrix<T>) -> Result<T> {
    if !q.is_square() {
        return Err(Error::DimensionMismatch {
            op: "orthogonality_error",
        });
    }

    let qtq = &q.transpose() * q;
    let id = Matrix::eye(q.nrows())?;
    Ok((qtq - &id).norm_inf())
}

/// Consistency defect `‖A·R⁻¹ − Q‖∞`, with `R⁻¹` obtained by triangular
/// back substitution.
///
/// Requires `A.rows == Q.rows`, `A.cols == R.rows`, and both `Q` and `R`
/// square. A singular `R` yields a non-finite result rather than an error
/// (the triangular inversion carries no singularity guard).
pub fn consistency_error<T: FloatScalar>(
    a: &Matrix<T>,
    q: &Matrix<T>,
    r: &Matrix<T>,
) -> Result<T> {
    if a.nrows() != q.nrows() || a.ncols() != r.nrows() || !q.is_square() || !r.is_square() {
        return Err(Error::DimensionMismatch {
            op: "consistency_error",
        });
    }

    let r_inv = invert_upper_triangular(r);
    let ar_inv = a * &r_inv;
    Ok((ar_inv - q).norm_inf())
}

/// Condition number estimate `cond∞(R) = ‖R‖∞ · ‖R⁻¹‖∞`.
///
/// Requires `R` square. A singular `R` yields `inf`/`NaN` rather than an
/// error, for the same reason as [`consistency_error`].
///
/// ```
/// use factrix::{metrics, Matrix};
/// let id = Matrix::<f64>::eye(4).unwrap();
/// assert_eq!(metrics::condition_number(&id).unwrap(), 1.0);
/// ```
pub fn condition_number<T: FloatScalar>(r: &Matrix<T>) -> Result<T> {
    if !r.is_square() {
        return Err(Error::DimensionMismatch {
            op: "condition_number",
        });
    }

    let r_inv = invert_upper_triangular(r);
    Ok(r.norm_inf() * r_inv.norm_inf())
}
