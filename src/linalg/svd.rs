use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::dynmatrix::DynMatrix;
use crate::linalg::{ConvergenceReport, LinalgError, SvdOptions, SymmetricEigen, SINGULAR_VALUE_CUTOFF};
use crate::traits::FloatScalar;

/// Descending order with NaN sorted last, so the comparison stays total.
fn descending<T: FloatScalar>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Thin singular value decomposition of a dynamically-sized real matrix.
///
/// For an M×N input computes U (M×N), singular values σ (length N, sorted
/// descending, non-negative) and V (N×N, orthogonal) such that
/// `A ≈ U · diag(σ) · Vᵗ`.
///
/// The factorization goes through the normal matrix: the eigenpairs of
/// `AᵗA` (cyclic Jacobi) give V and σ² directly, and `U = A·V·diag(σ)⁻¹`.
/// Columns of U whose σ is at or below [`SINGULAR_VALUE_CUTOFF`] are set to
/// zero instead of being divided.
///
/// # Example
///
/// ```
/// use jacobi_svd::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[3.0_f64, 0.0, 0.0, 4.0]).unwrap();
/// let svd = a.svd().unwrap();
/// assert!((svd.singular_values()[0] - 4.0).abs() < 1e-10);
/// assert!((svd.singular_values()[1] - 3.0).abs() < 1e-10);
///
/// let rebuilt = svd.reconstruct();
/// assert!((&rebuilt - &a).max_abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct SvdDecomposition<T> {
    u: DynMatrix<T>,
    singular_values: Vec<T>,
    v: DynMatrix<T>,
    report: ConvergenceReport<T>,
}

impl<T: FloatScalar> SvdDecomposition<T> {
    /// Compute the thin SVD of `a`.
    ///
    /// Returns `Err(EmptyInput)` if either dimension is zero and
    /// `Err(InvalidArgument)` if `opts` fails validation. A solver that runs
    /// out of sweeps still yields a result; check [`report`](Self::report).
    pub fn new(a: &DynMatrix<T>, opts: &SvdOptions<T>) -> Result<Self, LinalgError> {
        if a.is_empty() {
            return Err(LinalgError::EmptyInput {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        opts.validate()?;

        let normal = a.transpose().matmul(a)?;
        let (eigenvalues, eigenvectors, report) = SymmetricEigen::new(&normal, opts)?.into_parts();

        // Rounding can push eigenvalues of AᵗA slightly below zero.
        let sigma: Vec<T> = eigenvalues
            .iter()
            .map(|&lambda| lambda.max(T::zero()).sqrt())
            .collect();

        let mut order: Vec<usize> = (0..sigma.len()).collect();
        order.sort_by(|&i, &j| descending(sigma[i], sigma[j]));

        let v = eigenvectors.select_cols(&order);
        let singular_values: Vec<T> = order.iter().map(|&i| sigma[i]).collect();

        let mut u = a.matmul(&v)?;
        let cutoff = T::from_f64(SINGULAR_VALUE_CUTOFF);
        for (j, &s) in singular_values.iter().enumerate() {
            if s > cutoff {
                for i in 0..u.nrows() {
                    u[(i, j)] = u[(i, j)] / s;
                }
            } else {
                u.zero_col(j);
            }
        }

        log::debug!(
            "svd {}x{}: sigma_max {:?}, sigma_min {:?}, {} sweeps",
            a.nrows(),
            a.ncols(),
            singular_values.first(),
            singular_values.last(),
            report.sweeps
        );

        Ok(Self {
            u,
            singular_values,
            v,
            report,
        })
    }

    /// The singular values, sorted descending.
    #[inline]
    pub fn singular_values(&self) -> &[T] {
        &self.singular_values
    }

    /// The left singular vectors U (M×N). Columns belonging to a zero
    /// singular value are zero.
    #[inline]
    pub fn u(&self) -> &DynMatrix<T> {
        &self.u
    }

    /// The right singular vectors V (N×N, orthogonal). Columns are the right
    /// singular vectors, ordered like [`singular_values`](Self::singular_values).
    #[inline]
    pub fn v(&self) -> &DynMatrix<T> {
        &self.v
    }

    /// Convergence of the underlying eigen-solve.
    #[inline]
    pub fn report(&self) -> &ConvergenceReport<T> {
        &self.report
    }

    /// Move out `(U, σ, V)`.
    pub fn into_parts(self) -> (DynMatrix<T>, Vec<T>, DynMatrix<T>) {
        (self.u, self.singular_values, self.v)
    }

    /// Numerical rank: number of singular values above `tol`.
    pub fn rank(&self, tol: T) -> usize {
        self.singular_values.iter().filter(|&&s| s > tol).count()
    }

    /// Condition number: σ_max / σ_min.
    ///
    /// Returns infinity if the smallest singular value is zero.
    pub fn condition_number(&self) -> T {
        let s_max = self.singular_values[0];
        let s_min = self.singular_values[self.singular_values.len() - 1];
        if s_min == T::zero() {
            T::infinity()
        } else {
            s_max / s_min
        }
    }

    /// `U · diag(σ) · Vᵗ`.
    pub fn reconstruct(&self) -> DynMatrix<T> {
        let m = self.u.nrows();
        let n = self.v.nrows();
        let k = self.singular_values.len();
        DynMatrix::from_fn(m, n, |i, j| {
            let mut sum = T::zero();
            for l in 0..k {
                sum = sum + self.u[(i, l)] * self.singular_values[l] * self.v[(j, l)];
            }
            sum
        })
    }
}
