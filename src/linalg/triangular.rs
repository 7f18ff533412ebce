use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Invert an upper-triangular matrix by back substitution, column by
/// column: the diagonal entry is inverted first, then each row above is
/// filled from the entries below it.
///
/// No singularity check is performed: a zero diagonal entry propagates
/// `inf`/`NaN` into the result rather than failing. Callers that need an
/// explicit error go through the general [`Matrix::inverse`] LU path.
///
/// # Panics
///
/// Panics if the matrix is not square.
///
/// ```
/// use factrix::{invert_upper_triangular, Matrix};
///
/// let r = Matrix::from_rows(2, 2, &[2.0_f64, 4.0, 0.0, 5.0]).unwrap();
/// let inv = invert_upper_triangular(&r);
/// let id = &r * &inv;
/// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!(id[(0, 1)].abs() < 1e-12);
/// ```
pub fn invert_upper_triangular<T: FloatScalar>(r: &Matrix<T>) -> Matrix<T> {
    assert!(
        r.is_square(),
        "triangular inversion requires a square matrix"
    );
    let n = r.nrows();
    let mut inv = Matrix::zeros(n, n).expect("matrix dimensions are positive");

    for j in (0..n).rev() {
        inv[(j, j)] = T::one() / r[(j, j)];
        for i in (0..j).rev() {
            let mut sum = T::zero();
            for k in (i + 1)..=j {
                sum = sum + r[(i, k)] * inv[(k, j)];
            }
            inv[(i, j)] = -sum / r[(i, i)];
        }
    }
    inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_2x2() {
        let r = Matrix::<f64>::from_rows(2, 2, &[2.0, 4.0, 0.0, 5.0]).unwrap();
        let inv = invert_upper_triangular(&r);
        let id = &r * &inv;
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((id[(i, j)] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn inverse_3x3_both_sides() {
        let r = Matrix::<f64>::from_rows(3, 3, &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 0.0, 0.0, 6.0]).unwrap();
        let inv = invert_upper_triangular(&r);

        let left = &inv * &r;
        let right = &r * &inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((left[(i, j)] - expected).abs() < 1e-12);
                assert!((right[(i, j)] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn result_is_upper_triangular() {
        let r = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 0.0, 0.0, 6.0]).unwrap();
        let inv = invert_upper_triangular(&r);
        assert_eq!(inv[(1, 0)], 0.0);
        assert_eq!(inv[(2, 0)], 0.0);
        assert_eq!(inv[(2, 1)], 0.0);
    }

    #[test]
    fn identity_inverts_to_identity() {
        let id = Matrix::<f64>::eye(4).unwrap();
        assert_eq!(invert_upper_triangular(&id), id);
    }

    #[test]
    fn zero_diagonal_produces_non_finite() {
        // No singularity guard here: the division runs and the result
        // carries inf/NaN.
        let r = Matrix::<f64>::from_rows(2, 2, &[1.0, 2.0, 0.0, 0.0]).unwrap();
        let inv = invert_upper_triangular(&r);
        assert!(inv.iter().any(|x| !x.is_finite()));
    }

    #[test]
    #[should_panic(expected = "square")]
    fn rectangular_panics() {
        let r = Matrix::<f64>::zeros(2, 3).unwrap();
        let _ = invert_upper_triangular(&r);
    }
}
