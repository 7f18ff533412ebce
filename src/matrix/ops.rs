use core::ops::{Add, Mul, Sub};

use crate::traits::Scalar;

use super::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

// ── Matrix product ──────────────────────────────────────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Standard matrix product with the i-k-j loop order: the reduction
    /// index walks contiguous row slices of both operands, so the inner
    /// loop never strides across rows.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let mut out = Matrix {
            data: vec![T::zero(); self.nrows * rhs.ncols],
            nrows: self.nrows,
            ncols: rhs.ncols,
        };
        for i in 0..self.nrows {
            for k in 0..self.ncols {
                let aik = self.data[i * self.ncols + k];
                let rhs_row = rhs.row_slice(k);
                let out_row = out.row_slice_mut(i);
                for j in 0..rhs_row.len() {
                    out_row[j] = out_row[j] + aik * rhs_row[j];
                }
            }
        }
        out
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        let data = self.data.iter().map(|&a| a * rhs).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        &self * rhs
    }
}
