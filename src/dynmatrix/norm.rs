use crate::traits::FloatScalar;

use super::DynMatrix;

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: FloatScalar> DynMatrix<T> {
    /// Frobenius norm: square root of the sum of squared entries.
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[3.0_f64, 0.0, 0.0, 4.0]).unwrap();
    /// assert!((m.frobenius_norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T {
        let mut sum = T::zero();
        for &x in &self.data {
            sum = sum + x * x;
        }
        sum.sqrt()
    }

    /// Largest absolute entry (zero for an empty matrix).
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, -7.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.max_abs(), 7.0);
    /// ```
    pub fn max_abs(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| if x.abs() > acc { x.abs() } else { acc })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frobenius() {
        let m = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
        assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_norms_are_zero() {
        let m = DynMatrix::<f64>::zeros(0, 3);
        assert_eq!(m.frobenius_norm(), 0.0);
        assert_eq!(m.max_abs(), 0.0);
    }
}
