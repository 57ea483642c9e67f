//! # jacobi-svd
//!
//! Thin singular value decomposition of dense real matrices, no-std
//! compatible (needs `alloc`). Singular values and right singular vectors
//! come from a cyclic Jacobi eigendecomposition of the normal matrix `AᵗA`;
//! left singular vectors follow as `U = A·V·diag(σ)⁻¹`.
//!
//! ## Quick start
//!
//! ```
//! use jacobi_svd::DynMatrix;
//!
//! let a = DynMatrix::from_rows(3, 3, &[
//!     3.0_f64, 1.0, 1.0,
//!     -1.0, 3.0, 1.0,
//!     0.0, 0.0, 2.0,
//! ]).unwrap();
//!
//! let svd = a.svd().unwrap();
//! let s = svd.singular_values();
//! assert!(s[0] >= s[1] && s[1] >= s[2] && s[2] >= 0.0);
//!
//! // U · diag(σ) · Vᵗ reproduces A
//! assert!((&svd.reconstruct() - &a).max_abs() < 1e-10);
//! ```
//!
//! ## Modules
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime dimensions.
//!   `Vec<T>` row-major storage, arithmetic, transpose, products, norms,
//!   column utilities and aligned `Display`. Convenience methods
//!   `a.svd()` and `a.eig_symmetric()`.
//!
//! - [`linalg`] — The Jacobi eigen-solver ([`linalg::jacobi_eigen_in_place`]
//!   operates on `&mut impl MatrixMut<T>`, [`SymmetricEigen`] wraps it), the
//!   thin SVD driver [`SvdDecomposition`], solver options and [`LinalgError`].
//!
//! - [`interop`] — Flat `&[f64]` entry point [`svd_row_major`] for callers
//!   that do not want to build a `DynMatrix`.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by the solvers and norms
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Convergence
//!
//! Hitting the sweep budget is not an error. Every decomposition carries a
//! [`ConvergenceReport`] with the number of sweeps performed, whether all
//! off-diagonal entries fell within tolerance, and the remaining
//! off-diagonal Frobenius norm. A `log::warn!` is emitted when the budget
//! runs out; per-sweep progress is logged at `trace` level.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm, `std::error::Error` for [`LinalgError`] |
//! | `libm`  | no      | Pure-Rust software float fallback for `no_std` targets |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod dynmatrix;
pub mod interop;
pub mod linalg;
pub mod traits;

pub use dynmatrix::DynMatrix;
pub use interop::{svd_row_major, SvdBuffers};
pub use linalg::{
    ConvergenceReport, JacobiOptions, LinalgError, SvdDecomposition, SvdOptions, SymmetricEigen,
};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
