use alloc::vec;
use core::ops::{Mul, Sub};

use crate::linalg::LinalgError;
use crate::traits::Scalar;

use super::DynMatrix;

// ── Element-wise subtraction ─────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    fn zip_with(&self, rhs: &Self, op: &str, f: impl Fn(T, T) -> T) -> Self {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} {} {}x{}",
            self.nrows,
            self.ncols,
            op,
            rhs.nrows,
            rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Sub<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn sub(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        self.zip_with(rhs, "-", |a, b| a - b)
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Matrix product `self * rhs`.
    ///
    /// Returns `Err(DimensionMismatch)` if `self.ncols() != rhs.nrows()`.
    /// Plain triple-loop accumulation, no blocking.
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let b = DynMatrix::from_rows(3, 1, &[1.0, 0.0, -1.0]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.as_slice(), &[-2.0, -2.0]);
    /// assert!(a.matmul(&a).is_err());
    /// ```
    pub fn matmul(&self, rhs: &DynMatrix<T>) -> Result<DynMatrix<T>, LinalgError> {
        if self.ncols != rhs.nrows {
            return Err(LinalgError::DimensionMismatch {
                lhs: (self.nrows, self.ncols),
                rhs: (rhs.nrows, rhs.ncols),
            });
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for j in 0..p {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = sum + self.data[i * n + k] * rhs.data[k * p + j];
                }
                data[i * p + j] = sum;
            }
        }
        Ok(DynMatrix {
            data,
            nrows: m,
            ncols: p,
        })
    }
}

impl<T: Scalar> Mul<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    /// Panicking form of [`DynMatrix::matmul`].
    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        match self.matmul(rhs) {
            Ok(c) => c,
            Err(e) => panic!("{}", e),
        }
    }
}

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Copy> DynMatrix<T> {
    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t.ncols(), 2);
    /// assert_eq!(t[(1, 0)], 2.0);
    /// ```
    pub fn transpose(&self) -> Self {
        let n = self.ncols;
        DynMatrix::from_fn(self.ncols, self.nrows, |i, j| self.data[j * n + i])
    }
}
