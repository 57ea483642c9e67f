//! Flat-buffer entry point.
//!
//! [`svd_row_major`] takes the matrix as a row-major `&[f64]` plus its
//! shape and hands back plain `Vec<f64>` buffers, for callers that keep
//! their data outside of [`DynMatrix`].
//!
//! ```
//! use jacobi_svd::svd_row_major;
//! use jacobi_svd::linalg::SvdOptions;
//!
//! let out = svd_row_major(2, 2, &[3.0, 0.0, 0.0, 4.0], &SvdOptions::default()).unwrap();
//! assert_eq!(out.u.len(), 4);
//! assert_eq!(out.v.len(), 4);
//! assert!((out.singular_values[0] - 4.0).abs() < 1e-10);
//! assert!((out.singular_values[1] - 3.0).abs() < 1e-10);
//! ```

use alloc::vec::Vec;

use crate::dynmatrix::DynMatrix;
use crate::linalg::{ConvergenceReport, LinalgError, SvdDecomposition, SvdOptions};

/// Result buffers of [`svd_row_major`].
///
/// `u` is `rows x cols` and `v` is `cols x cols`, both row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SvdBuffers {
    pub u: Vec<f64>,
    pub singular_values: Vec<f64>,
    pub v: Vec<f64>,
    pub rows: usize,
    pub cols: usize,
    pub report: ConvergenceReport<f64>,
}

/// Thin SVD of a row-major `rows x cols` buffer.
///
/// Returns `Err(ShapeMismatch)` if `data.len() != rows * cols`, and the
/// same errors as [`SvdDecomposition::new`] otherwise.
pub fn svd_row_major(
    rows: usize,
    cols: usize,
    data: &[f64],
    opts: &SvdOptions<f64>,
) -> Result<SvdBuffers, LinalgError> {
    let a = DynMatrix::from_rows(rows, cols, data)?;
    let svd = SvdDecomposition::new(&a, opts)?;
    let report = *svd.report();
    let (u, singular_values, v) = svd.into_parts();
    Ok(SvdBuffers {
        u: u.into_vec(),
        singular_values,
        v: v.into_vec(),
        rows,
        cols,
        report,
    })
}
