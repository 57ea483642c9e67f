mod linalg;
mod norm;
mod ops;
mod util;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Dynamically-sized heap-allocated dense matrix.
///
/// Row-major `Vec<T>` storage; the buffer length is always
/// `nrows * ncols` and the shape never changes after construction.
/// `Clone` is a deep copy, so every matrix has exactly one owner.
///
/// # Examples
///
/// ```
/// use jacobi_svd::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = DynMatrix::<f64>::eye(3);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

/// `nrows * ncols`, or `CapacityOverflow` if it does not fit.
#[inline]
fn checked_len(nrows: usize, ncols: usize) -> Result<usize, LinalgError> {
    nrows
        .checked_mul(ncols)
        .ok_or(LinalgError::CapacityOverflow {
            rows: nrows,
            cols: ncols,
        })
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Create an `nrows x ncols` zero matrix.
    ///
    /// Returns `Err(CapacityOverflow)` if `nrows * ncols` overflows.
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// use jacobi_svd::linalg::LinalgError;
    ///
    /// let m = DynMatrix::<f64>::try_zeros(2, 3).unwrap();
    /// assert_eq!(m[(1, 2)], 0.0);
    ///
    /// let err = DynMatrix::<f64>::try_zeros(usize::MAX, 2).unwrap_err();
    /// assert!(matches!(err, LinalgError::CapacityOverflow { .. }));
    /// ```
    pub fn try_zeros(nrows: usize, ncols: usize) -> Result<Self, LinalgError> {
        let len = checked_len(nrows, ncols)?;
        Ok(Self {
            data: vec![T::zero(); len],
            nrows,
            ncols,
        })
    }

    /// Create an `nrows x ncols` zero matrix.
    ///
    /// Panics if `nrows * ncols` overflows; see [`try_zeros`](Self::try_zeros).
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// let m = DynMatrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        match Self::try_zeros(nrows, ncols) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// let id = DynMatrix::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix by copying a flat slice in row-major order.
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Result<Self, LinalgError> {
        Self::from_vec(nrows, ncols, row_major.to_vec())
    }
}

impl<T> DynMatrix<T> {
    /// Take ownership of a row-major buffer.
    ///
    /// Returns `Err(ShapeMismatch)` if `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// let m = DynMatrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// assert!(DynMatrix::from_vec(2, 3, vec![0.0; 5]).is_err());
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, LinalgError> {
        let len = checked_len(nrows, ncols)?;
        if data.len() != len {
            return Err(LinalgError::ShapeMismatch {
                rows: nrows,
                cols: ncols,
                len: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix by calling `f(row, col)` for each element, row by row.
    ///
    /// Panics if `nrows * ncols` overflows, like [`zeros`](Self::zeros).
    ///
    /// ```
    /// use jacobi_svd::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let len = match checked_len(nrows, ncols) {
            Ok(len) => len,
            Err(e) => panic!("{}", e),
        };
        let mut data = Vec::with_capacity(len);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0 || self.ncols == 0
    }

    /// Row-major view of the storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DynMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> MatrixMut<T> for DynMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = DynMatrix::<f64>::zeros(3, 4);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        assert_eq!(m.as_slice().len(), 12);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn zeros_empty_shapes() {
        let m = DynMatrix::<f64>::zeros(0, 5);
        assert!(m.is_empty());
        assert_eq!(m.shape(), (0, 5));
        assert!(m.as_slice().is_empty());
    }

    #[test]
    fn try_zeros_overflow() {
        let err = DynMatrix::<f64>::try_zeros(usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            LinalgError::CapacityOverflow {
                rows: usize::MAX,
                cols: 2
            }
        );
    }

    #[test]
    #[should_panic(expected = "exceeds addressable size")]
    fn zeros_overflow_panics() {
        let _ = DynMatrix::<f64>::zeros(usize::MAX, usize::MAX);
    }

    #[test]
    #[should_panic(expected = "exceeds addressable size")]
    fn from_fn_overflow_panics() {
        let _ = DynMatrix::from_fn(usize::MAX, 2, |_, _| 0.0_f64);
    }

    #[test]
    fn from_fn_empty_never_calls() {
        let m = DynMatrix::from_fn(0, usize::MAX, |_, _| -> f64 { unreachable!() });
        assert_eq!(m.shape(), (0, usize::MAX));
        assert!(m.as_slice().is_empty());
    }

    #[test]
    fn eye() {
        let m = DynMatrix::<f64>::eye(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn from_rows() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    fn from_vec_wrong_length() {
        let err = DynMatrix::from_vec(2, 3, vec![0.0_f64; 5]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::ShapeMismatch {
                rows: 2,
                cols: 3,
                len: 5
            }
        );
    }

    #[test]
    fn from_vec_round_trips_buffer() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let m = DynMatrix::from_vec(3, 2, data.clone()).unwrap();
        assert_eq!(m[(2, 1)], 6.0);
        assert_eq!(m.into_vec(), data);
    }

    #[test]
    fn from_fn() {
        let m = DynMatrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(0, 2)], 2.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m[(2, 2)], 8.0);
        assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn index_mut() {
        let mut m = DynMatrix::<f64>::zeros(2, 2);
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
        assert_eq!(m.as_slice(), &[0.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn matrix_mut_trait() {
        let mut m = DynMatrix::<f64>::zeros(2, 2);
        fn set_diag<T: Scalar>(m: &mut impl MatrixMut<T>, val: T) {
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                *m.get_mut(i, i) = val;
            }
        }
        set_diag(&mut m, 7.0);
        assert_eq!(m[(0, 0)], 7.0);
        assert_eq!(m[(1, 1)], 7.0);
        assert_eq!(m[(0, 1)], 0.0);
        assert_eq!(*MatrixRef::get(&m, 1, 1), 7.0);
    }

    #[test]
    fn is_square() {
        let sq = DynMatrix::<f64>::zeros(3, 3);
        assert!(sq.is_square());
        let rect = DynMatrix::<f64>::zeros(2, 3);
        assert!(!rect.is_square());
    }

    #[test]
    fn clone_is_independent() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b[(0, 0)] = 9.0;
        assert_eq!(a[(0, 0)], 1.0);
    }
}
