pub(crate) mod jacobi;
pub(crate) mod options;
pub(crate) mod svd;

pub use jacobi::{jacobi_eigen_in_place, off_diagonal_norm, ConvergenceReport, SymmetricEigen};
pub use options::{
    JacobiOptions, SvdOptions, DEFAULT_MAX_SWEEPS, DEFAULT_TOLERANCE, SINGULAR_VALUE_CUTOFF,
};
pub use svd::SvdDecomposition;

/// Errors from matrix construction and linear algebra operations.
///
/// Every variant aborts the whole computation; no partial result is
/// returned. Non-convergence of the eigen-solver is deliberately not an
/// error, see [`ConvergenceReport`].
///
/// ```
/// use jacobi_svd::DynMatrix;
/// use jacobi_svd::linalg::LinalgError;
///
/// let err = DynMatrix::from_vec(2, 3, vec![0.0_f64; 5]).unwrap_err();
/// assert_eq!(err, LinalgError::ShapeMismatch { rows: 2, cols: 3, len: 5 });
///
/// let empty = DynMatrix::<f64>::zeros(0, 5);
/// assert_eq!(
///     empty.svd().unwrap_err(),
///     LinalgError::EmptyInput { rows: 0, cols: 5 },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// Supplied buffer length does not match the declared shape.
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    /// Inner dimensions of a matrix product disagree.
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// A square matrix was required.
    NotSquare { rows: usize, cols: usize },
    /// Decomposition requested on a matrix with a zero dimension.
    EmptyInput { rows: usize, cols: usize },
    /// `rows * cols` does not fit in `usize`.
    CapacityOverflow { rows: usize, cols: usize },
    /// A tuning parameter is out of range.
    InvalidArgument { reason: &'static str },
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "buffer of length {} does not match {}x{} matrix",
                len, rows, cols
            ),
            LinalgError::DimensionMismatch { lhs, rhs } => write!(
                f,
                "dimension mismatch: {}x{} * {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            LinalgError::NotSquare { rows, cols } => {
                write!(f, "square matrix required, got {}x{}", rows, cols)
            }
            LinalgError::EmptyInput { rows, cols } => {
                write!(f, "input matrix must not be empty, got {}x{}", rows, cols)
            }
            LinalgError::CapacityOverflow { rows, cols } => {
                write!(f, "{}x{} matrix exceeds addressable size", rows, cols)
            }
            LinalgError::InvalidArgument { reason } => write!(f, "invalid argument: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
