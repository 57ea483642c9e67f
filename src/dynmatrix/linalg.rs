use crate::linalg::{JacobiOptions, LinalgError, SvdDecomposition, SvdOptions, SymmetricEigen};
use crate::traits::FloatScalar;

use super::DynMatrix;

// ── Convenience methods ─────────────────────────────────────────────

impl<T: FloatScalar> DynMatrix<T> {
    /// Thin SVD with the default tolerance (`1e-10`) and sweep budget (`100`).
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    ///
    /// let a = DynMatrix::from_rows(3, 2, &[
    ///     1.0_f64, 0.0,
    ///     0.0, 2.0,
    ///     0.0, 0.0,
    /// ]).unwrap();
    /// let svd = a.svd().unwrap();
    /// assert_eq!(svd.u().shape(), (3, 2));
    /// assert_eq!(svd.v().shape(), (2, 2));
    /// assert!((svd.singular_values()[0] - 2.0).abs() < 1e-10);
    /// assert!((svd.singular_values()[1] - 1.0).abs() < 1e-10);
    /// ```
    pub fn svd(&self) -> Result<SvdDecomposition<T>, LinalgError> {
        SvdDecomposition::new(self, &SvdOptions::default())
    }

    /// Thin SVD with explicit solver options.
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// use jacobi_svd::linalg::SvdOptions;
    ///
    /// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 2.0]).unwrap();
    /// let svd = a.svd_with(&SvdOptions::new(1e-12, 20)).unwrap();
    /// assert!((svd.singular_values()[0] - 3.0).abs() < 1e-10);
    /// assert!(svd.report().converged);
    /// ```
    pub fn svd_with(&self, opts: &SvdOptions<T>) -> Result<SvdDecomposition<T>, LinalgError> {
        SvdDecomposition::new(self, opts)
    }

    /// Symmetric eigendecomposition by cyclic Jacobi with default options.
    ///
    /// The caller is responsible for ensuring the matrix is symmetric.
    pub fn eig_symmetric(&self) -> Result<SymmetricEigen<T>, LinalgError> {
        SymmetricEigen::new(self, &JacobiOptions::default())
    }

    /// Symmetric eigendecomposition with explicit solver options.
    pub fn eig_symmetric_with(
        &self,
        opts: &JacobiOptions<T>,
    ) -> Result<SymmetricEigen<T>, LinalgError> {
        SymmetricEigen::new(self, opts)
    }
}
