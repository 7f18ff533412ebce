use crate::linalg::ZERO_TOL;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Result of a Householder QR factorization: `a = q * r` with `q`
/// orthogonal (m×m) and `r` upper-trapezoidal (m×n).
///
/// Produced atomically by [`householder_qr`]; no partial state is ever
/// exposed.
#[derive(Debug, Clone)]
pub struct QrFactors<T> {
    /// Orthogonal factor, the accumulated product of all reflections.
    pub q: Matrix<T>,
    /// Triangular/trapezoidal factor.
    pub r: Matrix<T>,
}

/// Factor `a` into `Q * R` using successive Householder reflections.
///
/// Works for any shape (m≥n or m<n); the mathematically meaningful case is
/// m≥n. The input is never mutated: the algorithm owns a private working
/// copy.
///
/// A trailing subcolumn whose largest entry is below `1e-12` is skipped
/// outright: no reflection is applied and the column is left exactly as
/// found, including its diagonal entry. For rank-deficient input `r` may
/// therefore carry stale subdiagonal values in the skipped columns.
///
/// ```
/// use factrix::{householder_qr, Matrix};
///
/// let a = Matrix::from_rows(3, 3, &[
///     12.0_f64, -51.0, 4.0,
///     6.0, 167.0, -68.0,
///     -4.0, 24.0, -41.0,
/// ]).unwrap();
/// let f = householder_qr(&a);
///
/// // Q*R reconstructs A
/// let qr = &f.q * &f.r;
/// for (x, y) in qr.iter().zip(a.iter()) {
///     assert!((x - y).abs() < 1e-10);
/// }
/// // R is upper-triangular
/// assert!(f.r[(1, 0)].abs() < 1e-12);
/// assert!(f.r[(2, 0)].abs() < 1e-12);
/// assert!(f.r[(2, 1)].abs() < 1e-12);
/// ```
pub fn householder_qr<T: FloatScalar>(a: &Matrix<T>) -> QrFactors<T> {
    let m = a.nrows();
    let n = a.ncols();
    let steps = m.min(n);

    let mut q = Matrix::<T>::eye(m).expect("matrix rows are positive");
    let mut r = a.clone();

    let tol = T::from_f64(ZERO_TOL);

    for k in 0..steps {
        // Trailing subcolumn x = r[k.., k].
        let mut x = Vec::with_capacity(m - k);
        for i in k..m {
            x.push(r[(i, k)]);
        }

        // A numerically zero column gets no reflection and no diagonal
        // rewrite; the entries stay exactly as found.
        let mut max_abs = T::zero();
        for &v in &x {
            if v.abs() > max_abs {
                max_abs = v.abs();
            }
        }
        if max_abs < tol {
            continue;
        }

        let mut norm_sq = T::zero();
        for &v in &x {
            norm_sq = norm_sq + v * v;
        }
        let norm = norm_sq.sqrt();

        // Push the leading component away from zero to avoid cancellation.
        let sign = if x[0] >= T::zero() {
            T::one()
        } else {
            -T::one()
        };
        let sigma = -sign * norm;

        // Householder vector v = x - sigma*e1, beta = 2 / (v·v).
        let mut v = x;
        v[0] = v[0] - sigma;
        let mut vtv = T::zero();
        for &val in &v {
            vtv = vtv + val * val;
        }
        let beta = T::from_f64(2.0) / vtv;

        apply_reflection(&mut r, &mut q, &v, beta, k);

        // The reflected diagonal equals sigma up to rounding; store the
        // exact value and exact zeros below it.
        r[(k, k)] = sigma;
        for i in (k + 1)..m {
            r[(i, k)] = T::zero();
        }
    }

    QrFactors { q, r }
}

/// Apply `H = I - beta*v*v^T` (embedded as identity outside rows k..) to
/// `r` on the left over columns k..n, and accumulate it into `q` on the
/// right over columns k..k+v.len().
fn apply_reflection<T: FloatScalar>(
    r: &mut Matrix<T>,
    q: &mut Matrix<T>,
    v: &[T],
    beta: T,
    k: usize,
) {
    let m = r.nrows();
    let n = r.ncols();
    let len = v.len();

    // R <- H * R
    for j in k..n {
        let mut dot = T::zero();
        for i in 0..len {
            dot = dot + v[i] * r[(k + i, j)];
        }
        let s = beta * dot;
        for i in 0..len {
            r[(k + i, j)] = r[(k + i, j)] - s * v[i];
        }
    }

    // Q <- Q * H
    for i in 0..m {
        let mut dot = T::zero();
        for j in 0..len {
            dot = dot + q[(i, k + j)] * v[j];
        }
        let s = beta * dot;
        for j in 0..len {
            q[(i, k + j)] = q[(i, k + j)] - s * v[j];
        }
    }
}

/// Convenience method mirroring the free function.
impl<T: FloatScalar> Matrix<T> {
    /// Householder QR factorization of this matrix.
    ///
    /// ```
    /// use factrix::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[0.0_f64, 1.0, 1.0, 0.0]).unwrap();
    /// let f = a.qr();
    /// assert!((f.r[(0, 0)] - (-1.0)).abs() < 1e-15);
    /// ```
    pub fn qr(&self) -> QrFactors<T> {
        householder_qr(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!(
            (a - b).abs() < tol,
            "{}: {} vs {} (diff {})",
            msg,
            a,
            b,
            (a - b).abs()
        );
    }

    fn check_reconstruction(a: &Matrix<f64>, f: &QrFactors<f64>, tol: f64) {
        let qr = &f.q * &f.r;
        for i in 0..a.nrows() {
            for j in 0..a.ncols() {
                assert_near(qr[(i, j)], a[(i, j)], tol, &format!("QR[({i},{j})]"));
            }
        }
    }

    fn check_orthogonal(q: &Matrix<f64>, tol: f64) {
        let qtq = &q.transpose() * q;
        for i in 0..q.nrows() {
            for j in 0..q.ncols() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(qtq[(i, j)], expected, tol, &format!("QtQ[({i},{j})]"));
            }
        }
    }

    #[test]
    fn square_3x3() {
        let a = Matrix::from_rows(
            3,
            3,
            &[12.0, -51.0, 4.0, 6.0, 167.0, -68.0, -4.0, 24.0, -41.0],
        )
        .unwrap();
        let f = a.qr();

        check_reconstruction(&a, &f, TOL);
        check_orthogonal(&f.q, TOL);

        // R is upper-triangular with exact zeros below the diagonal
        assert_eq!(f.r[(1, 0)], 0.0);
        assert_eq!(f.r[(2, 0)], 0.0);
        assert_eq!(f.r[(2, 1)], 0.0);
    }

    #[test]
    fn antidiagonal_sign_convention() {
        // x = [0, 1]: sign is +1 because x[0] = 0 >= 0, so sigma = -1.
        let a = Matrix::from_rows(2, 2, &[0.0, 1.0, 1.0, 0.0]).unwrap();
        let f = a.qr();

        assert_near(f.r[(0, 0)], -1.0, 1e-15, "R[0][0]");
        check_reconstruction(&a, &f, 1e-9);
        check_orthogonal(&f.q, 1e-9);
    }

    #[test]
    fn identity_input() {
        let id = Matrix::<f64>::eye(3).unwrap();
        let f = id.qr();

        // Each column has x = [1, 0, ...], sigma = -1: Q and R are the
        // identity up to sign flips, and Q*R is exactly the identity.
        check_reconstruction(&id, &f, TOL);
        check_orthogonal(&f.q, TOL);
        for i in 0..3 {
            assert_near(f.r[(i, i)].abs(), 1.0, TOL, "diag magnitude");
        }
    }

    #[test]
    fn tall_3x2() {
        let a = Matrix::from_rows(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let f = a.qr();

        assert_eq!(f.q.nrows(), 3);
        assert_eq!(f.q.ncols(), 3);
        assert_eq!(f.r.nrows(), 3);
        assert_eq!(f.r.ncols(), 2);

        // Upper-trapezoidal: exact zeros below the diagonal
        assert_eq!(f.r[(1, 0)], 0.0);
        assert_eq!(f.r[(2, 0)], 0.0);
        assert_eq!(f.r[(2, 1)], 0.0);

        check_reconstruction(&a, &f, 1e-9);
        check_orthogonal(&f.q, 1e-9);
    }

    #[test]
    fn wide_2x3() {
        let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let f = a.qr();

        assert_eq!(f.q.nrows(), 2);
        assert_eq!(f.r.ncols(), 3);
        assert_eq!(f.r[(1, 0)], 0.0);
        check_reconstruction(&a, &f, TOL);
        check_orthogonal(&f.q, TOL);
    }

    #[test]
    fn zero_column_skipped() {
        // First column is zero: the step is skipped, leaving the column
        // exactly as found, and the remaining column is still reduced.
        let a = Matrix::from_rows(2, 2, &[0.0, 1.0, 0.0, 2.0]).unwrap();
        let f = a.qr();

        assert_eq!(f.r[(0, 0)], 0.0);
        assert_eq!(f.r[(1, 0)], 0.0);
        check_reconstruction(&a, &f, TOL);
        check_orthogonal(&f.q, TOL);
    }

    #[test]
    fn near_zero_matrix_left_untouched() {
        // Every subcolumn is below the 1e-12 floor: no reflections at all,
        // R keeps the stale entries and Q stays the identity.
        let a = Matrix::from_rows(2, 2, &[1e-13, 2e-13, -1e-13, 1e-13]).unwrap();
        let f = a.qr();

        assert_eq!(f.r, a);
        assert_eq!(f.q, Matrix::<f64>::eye(2).unwrap());
    }

    #[test]
    fn refactoring_triangular_is_stable() {
        // Feeding an upper-triangular R back in yields Q ~ identity up to
        // sign flips and R' ~ R up to sign flips.
        let a = Matrix::from_rows(3, 3, &[2.0, 1.0, 3.0, 0.0, -4.0, 1.0, 0.0, 0.0, 5.0]).unwrap();
        let f = a.qr();

        check_reconstruction(&a, &f, TOL);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(f.q[(i, j)].abs(), expected, TOL, &format!("|Q[({i},{j})]|"));
                assert_near(
                    f.r[(i, j)].abs(),
                    a[(i, j)].abs(),
                    TOL,
                    &format!("|R[({i},{j})]|"),
                );
            }
        }
    }
}
