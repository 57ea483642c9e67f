use alloc::vec::Vec;

use crate::dynmatrix::DynMatrix;
use crate::linalg::{JacobiOptions, LinalgError};
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

/// Outcome of a Jacobi eigen-solve.
///
/// Exhausting `max_sweeps` is not an error: the best-effort result is kept
/// and `converged` is `false`. `off_diagonal` is the Frobenius norm of the
/// part of the rotated matrix that was not annihilated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceReport<T> {
    /// Sweeps performed, including the final rotation-free sweep.
    pub sweeps: usize,
    /// Every off-diagonal entry ended at or below the tolerance.
    pub converged: bool,
    pub off_diagonal: T,
}

/// Frobenius norm of the strictly off-diagonal part of a square matrix.
pub fn off_diagonal_norm<T: FloatScalar>(a: &impl MatrixRef<T>) -> T {
    let n = a.nrows();
    let mut sum = T::zero();
    for i in 0..n {
        for j in 0..n {
            if i != j {
                let x = *a.get(i, j);
                sum = sum + x * x;
            }
        }
    }
    sum.sqrt()
}

fn max_off_diagonal<T: FloatScalar>(a: &impl MatrixRef<T>) -> T {
    let n = a.nrows();
    let mut max = T::zero();
    for p in 0..n {
        for q in (p + 1)..n {
            let x = (*a.get(p, q)).abs();
            if x > max {
                max = x;
            }
        }
    }
    max
}

/// Cyclic Jacobi eigen-decomposition of a symmetric matrix, in place.
///
/// On return:
/// - `a` is (approximately) diagonal; `a[(i, i)]` is the i-th eigenvalue
/// - `v` holds the accumulated rotations; column `i` is the eigenvector for
///   `a[(i, i)]`
///
/// Pairs `(p, q)`, `p < q`, are visited in row-major order. A pair whose
/// `|a[(p, q)]|` is at or below `tolerance` is skipped; otherwise the
/// rotation by `phi = ½·atan2(2·a_pq, a_qq − a_pp)` zeroes it exactly.
/// Iteration stops after the first sweep that applies no rotation, or after
/// `max_sweeps` sweeps. Eigenvalues are left in rotation order, unsorted.
///
/// Both triangles of `a` are read and written; the caller guarantees
/// symmetry. Panics if `a` is not square or `v` is not the same size.
pub fn jacobi_eigen_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    v: &mut impl MatrixMut<T>,
    tolerance: T,
    max_sweeps: usize,
) -> ConvergenceReport<T> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "Jacobi eigen-decomposition requires a square matrix");
    assert!(
        v.nrows() == n && v.ncols() == n,
        "eigenvector matrix must be {}x{}",
        n,
        n
    );

    // Initialize V = I
    for i in 0..n {
        for j in 0..n {
            *v.get_mut(i, j) = if i == j { T::one() } else { T::zero() };
        }
    }

    if n < 2 {
        return ConvergenceReport {
            sweeps: 0,
            converged: true,
            off_diagonal: T::zero(),
        };
    }

    let two = T::one() + T::one();
    let half = T::one() / two;
    let mut sweeps = 0usize;
    let mut converged = false;

    while sweeps < max_sweeps {
        sweeps += 1;
        let mut rotations = 0usize;

        for p in 0..n - 1 {
            for q in (p + 1)..n {
                let apq = *a.get(p, q);
                if apq.abs() <= tolerance {
                    continue;
                }
                rotations += 1;

                let app = *a.get(p, p);
                let aqq = *a.get(q, q);
                let phi = half * (two * apq).atan2(aqq - app);
                let (s, c) = phi.sin_cos();

                for k in 0..n {
                    if k == p || k == q {
                        continue;
                    }
                    let akp = *a.get(k, p);
                    let akq = *a.get(k, q);
                    let new_kp = c * akp - s * akq;
                    let new_kq = s * akp + c * akq;
                    *a.get_mut(k, p) = new_kp;
                    *a.get_mut(p, k) = new_kp;
                    *a.get_mut(k, q) = new_kq;
                    *a.get_mut(q, k) = new_kq;
                }

                let sc2 = two * s * c * apq;
                *a.get_mut(p, p) = c * c * app - sc2 + s * s * aqq;
                *a.get_mut(q, q) = s * s * app + sc2 + c * c * aqq;
                *a.get_mut(p, q) = T::zero();
                *a.get_mut(q, p) = T::zero();

                // V = V * J
                for k in 0..n {
                    let vkp = *v.get(k, p);
                    let vkq = *v.get(k, q);
                    *v.get_mut(k, p) = c * vkp - s * vkq;
                    *v.get_mut(k, q) = s * vkp + c * vkq;
                }
            }
        }

        log::trace!("jacobi sweep {}: {} rotations", sweeps, rotations);

        if rotations == 0 {
            converged = true;
            break;
        }
    }

    // The last permitted sweep may have finished the job without a
    // rotation-free pass to confirm it.
    if !converged {
        converged = max_off_diagonal(&*a) <= tolerance;
    }

    let off_diagonal = off_diagonal_norm(&*a);
    if converged {
        log::debug!(
            "jacobi {}x{} converged after {} sweeps (off-diagonal {:?})",
            n,
            n,
            sweeps,
            off_diagonal
        );
    } else {
        log::warn!(
            "jacobi {}x{} did not converge in {} sweeps (off-diagonal {:?}, tolerance {:?})",
            n,
            n,
            sweeps,
            off_diagonal,
            tolerance
        );
    }

    ConvergenceReport {
        sweeps,
        converged,
        off_diagonal,
    }
}

/// Eigendecomposition of a dynamically-sized real symmetric matrix by the
/// cyclic Jacobi method.
///
/// `eigenvalues()[i]` belongs to column `i` of `eigenvectors()`. The pairs
/// are NOT sorted; they come out in the order the rotations left them.
///
/// # Example
///
/// ```
/// use jacobi_svd::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, -1.0, -1.0, 2.0]).unwrap();
/// let eig = a.eig_symmetric().unwrap();
/// let mut vals = eig.eigenvalues().to_vec();
/// vals.sort_by(|x, y| x.partial_cmp(y).unwrap());
/// assert!((vals[0] - 1.0).abs() < 1e-10);
/// assert!((vals[1] - 3.0).abs() < 1e-10);
/// assert!(eig.report().converged);
/// ```
#[derive(Debug, Clone)]
pub struct SymmetricEigen<T> {
    eigenvalues: Vec<T>,
    eigenvectors: DynMatrix<T>,
    report: ConvergenceReport<T>,
}

impl<T: FloatScalar> SymmetricEigen<T> {
    /// Decompose a symmetric matrix.
    ///
    /// Returns `Err(NotSquare)` for non-square input and
    /// `Err(InvalidArgument)` if `opts` fails validation. Running out of
    /// sweeps is reported through [`report`](Self::report), not as an error.
    pub fn new(a: &DynMatrix<T>, opts: &JacobiOptions<T>) -> Result<Self, LinalgError> {
        if !a.is_square() {
            return Err(LinalgError::NotSquare {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        opts.validate()?;

        let n = a.nrows();
        let mut diagonalized = a.clone();
        let mut eigenvectors = DynMatrix::zeros(n, n);
        let report =
            jacobi_eigen_in_place(&mut diagonalized, &mut eigenvectors, opts.tolerance, opts.max_sweeps);

        let eigenvalues = (0..n).map(|i| diagonalized[(i, i)]).collect();

        Ok(Self {
            eigenvalues,
            eigenvectors,
            report,
        })
    }

    /// The eigenvalues, aligned with the eigenvector columns.
    #[inline]
    pub fn eigenvalues(&self) -> &[T] {
        &self.eigenvalues
    }

    /// The eigenvector matrix (columns are eigenvectors).
    #[inline]
    pub fn eigenvectors(&self) -> &DynMatrix<T> {
        &self.eigenvectors
    }

    #[inline]
    pub fn report(&self) -> &ConvergenceReport<T> {
        &self.report
    }

    /// Move out `(eigenvalues, eigenvectors, report)`.
    pub fn into_parts(self) -> (Vec<T>, DynMatrix<T>, ConvergenceReport<T>) {
        (self.eigenvalues, self.eigenvectors, self.report)
    }
}
