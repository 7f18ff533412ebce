use crate::error::{Error, Result};
use crate::linalg::ZERO_TOL;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// LU decomposition with scaled partial pivoting (Crout elimination),
/// in place.
///
/// On return, `a` contains both factors packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// Pivot rows are chosen by the largest `row_scale * |value|`, where each
/// row's scale is the reciprocal of its largest absolute entry before
/// elimination. `perm[j]` records the row swapped into position `j` at
/// step `j`; [`lu_solve`] replays the swaps in the same order.
///
/// Returns `true` if the number of row swaps was even. Fails with
/// [`Error::Singular`] if any row is entirely zero or a pivot magnitude
/// falls below `1e-12`.
pub fn lu_in_place<T: FloatScalar>(a: &mut Matrix<T>, perm: &mut [usize]) -> Result<bool> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LU decomposition requires a square matrix");
    assert_eq!(
        n,
        perm.len(),
        "permutation slice length must match matrix size"
    );

    // Implicit scaling: each row is weighted by 1/max|entry| during
    // pivot comparisons.
    let mut scales = vec![T::zero(); n];
    for i in 0..n {
        let mut max_val = T::zero();
        for &x in a.row_slice(i) {
            if x.abs() > max_val {
                max_val = x.abs();
            }
        }
        if max_val == T::zero() {
            return Err(Error::Singular);
        }
        scales[i] = T::one() / max_val;
    }

    let tol = T::from_f64(ZERO_TOL);
    let mut even = true;

    for j in 0..n {
        // Reduce the column above the diagonal (elements of U).
        for i in 0..j {
            let mut sum = a[(i, j)];
            for k in 0..i {
                sum = sum - a[(i, k)] * a[(k, j)];
            }
            a[(i, j)] = sum;
        }

        // Reduce the rest of the column and pick the pivot row by scaled
        // magnitude. The `>=` keeps the last row on ties.
        let mut pivot_row = j;
        let mut max_scaled = T::zero();
        for i in j..n {
            let mut sum = a[(i, j)];
            for k in 0..j {
                sum = sum - a[(i, k)] * a[(k, j)];
            }
            a[(i, j)] = sum;

            let scaled = scales[i] * sum.abs();
            if scaled >= max_scaled {
                max_scaled = scaled;
                pivot_row = i;
            }
        }

        if pivot_row != j {
            for k in 0..n {
                let tmp = a[(pivot_row, k)];
                a[(pivot_row, k)] = a[(j, k)];
                a[(j, k)] = tmp;
            }
            even = !even;
            scales[pivot_row] = scales[j];
        }
        perm[j] = pivot_row;

        if a[(j, j)].abs() < tol {
            return Err(Error::Singular);
        }

        // Scale the sub-column (elements of L).
        if j != n - 1 {
            let denom = T::one() / a[(j, j)];
            for i in (j + 1)..n {
                a[(i, j)] = a[(i, j)] * denom;
            }
        }
    }

    Ok(even)
}

/// Solve `Ax = b` in place given the packed LU factors and swap record
/// from [`lu_in_place`].
///
/// `b` holds the right-hand side on entry and the solution on return.
pub fn lu_solve<T: FloatScalar>(lu: &Matrix<T>, perm: &[usize], b: &mut [T]) {
    let n = lu.nrows();
    debug_assert_eq!(b.len(), n);

    // Forward substitution (Ly = Pb), replaying the row swaps as recorded.
    for i in 0..n {
        let pi = perm[i];
        let mut sum = b[pi];
        b[pi] = b[i];
        for j in 0..i {
            sum = sum - lu[(i, j)] * b[j];
        }
        b[i] = sum;
    }

    // Back substitution (Ux = y).
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum = sum - lu[(i, j)] * b[j];
        }
        b[i] = sum / lu[(i, i)];
    }
}

/// LU decomposition of a square matrix.
///
/// Stores the packed L/U factors and the pivot record. Use `solve()`,
/// `inverse()`, or `det()` to work with the decomposition.
///
/// # Example
///
/// ```
/// use factrix::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]).unwrap();
/// let lu = a.lu().unwrap();
///
/// let x = lu.solve(&[4.0, 11.0]);
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct Lu<T> {
    lu: Matrix<T>,
    perm: Vec<usize>,
    even: bool,
}

impl<T: FloatScalar> Lu<T> {
    /// Decompose a matrix.
    ///
    /// Fails with [`Error::NotSquare`] for rectangular input and
    /// [`Error::Singular`] for singular input.
    pub fn new(a: &Matrix<T>) -> Result<Self> {
        if !a.is_square() {
            return Err(Error::NotSquare {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        let n = a.nrows();
        let mut lu = a.clone();
        let mut perm = vec![0usize; n];
        let even = lu_in_place(&mut lu, &mut perm)?;
        Ok(Self { lu, perm, even })
    }

    /// Solve `Ax = b` for `x`.
    pub fn solve(&self, b: &[T]) -> Vec<T> {
        let n = self.lu.nrows();
        assert_eq!(b.len(), n, "rhs length mismatch");
        let mut x = b.to_vec();
        lu_solve(&self.lu, &self.perm, &mut x);
        x
    }

    /// Compute the matrix inverse by solving `LUx = e_k` for each column.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.lu.nrows();
        let mut inv = Matrix::zeros(n, n).expect("factor dimensions are positive");

        let mut col = vec![T::zero(); n];
        for k in 0..n {
            for x in col.iter_mut() {
                *x = T::zero();
            }
            col[k] = T::one();
            lu_solve(&self.lu, &self.perm, &mut col);
            for i in 0..n {
                inv[(i, k)] = col[i];
            }
        }
        inv
    }

    /// Compute the determinant: the pivot product with swap-parity sign.
    pub fn det(&self) -> T {
        let n = self.lu.nrows();
        let mut d = if self.even { T::one() } else { -T::one() };
        for i in 0..n {
            d = d * self.lu[(i, i)];
        }
        d
    }
}

/// Convenience methods on square matrices.
impl<T: FloatScalar> Matrix<T> {
    /// LU decomposition with scaled partial pivoting.
    pub fn lu(&self) -> Result<Lu<T>> {
        Lu::new(self)
    }

    /// Compute the matrix inverse via LU decomposition.
    ///
    /// Fails with [`Error::NotSquare`] for rectangular input and
    /// [`Error::Singular`] if a zero row or sub-threshold pivot is found.
    ///
    /// ```
    /// use factrix::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// let id = &a * &inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        Ok(self.lu()?.inverse())
    }
}
