use crate::traits::FloatScalar;

use super::Matrix;

impl<T: FloatScalar> Matrix<T> {
    /// Infinity norm (maximum absolute row sum).
    ///
    /// Total function: never fails, and is 0 only for the all-zero matrix.
    ///
    /// ```
    /// use factrix::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]).unwrap();
    /// assert!((m.norm_inf() - 7.0).abs() < 1e-12);
    /// ```
    pub fn norm_inf(&self) -> T {
        let mut max = T::zero();
        for i in 0..self.nrows {
            let mut row_sum = T::zero();
            for &x in self.row_slice(i) {
                row_sum = row_sum + x.abs();
            }
            if row_sum > max {
                max = row_sum;
            }
        }
        max
    }

    /// One norm (maximum absolute column sum).
    ///
    /// ```
    /// use factrix::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]).unwrap();
    /// assert!((m.norm_one() - 6.0).abs() < 1e-12);
    /// ```
    pub fn norm_one(&self) -> T {
        let mut max = T::zero();
        for j in 0..self.ncols {
            let mut col_sum = T::zero();
            for i in 0..self.nrows {
                col_sum = col_sum + self[(i, j)].abs();
            }
            if col_sum > max {
                max = col_sum;
            }
        }
        max
    }

    /// Frobenius norm (square root of the sum of squared elements).
    ///
    /// ```
    /// use factrix::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_inf() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]).unwrap();
        assert!((m.norm_inf() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn norm_inf_single_row() {
        let m = Matrix::from_rows(1, 3, &[-1.0_f64, -2.0, -3.0]).unwrap();
        assert!((m.norm_inf() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn norm_inf_zero_matrix() {
        let m = Matrix::<f64>::zeros(3, 3).unwrap();
        assert_eq!(m.norm_inf(), 0.0);
    }

    #[test]
    fn norm_one() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]).unwrap();
        assert!((m.norm_one() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn frobenius_norm() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    }
}
