use crate::linalg::LinalgError;
use crate::traits::FloatScalar;

/// Default off-diagonal tolerance for the Jacobi eigen-solver.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default upper bound on Jacobi sweeps.
pub const DEFAULT_MAX_SWEEPS: usize = 100;

/// Singular values at or below this are treated as zero when normalizing
/// the columns of U. Independent of the solver tolerance.
pub const SINGULAR_VALUE_CUTOFF: f64 = 1e-12;

/// Tuning parameters for the cyclic Jacobi eigen-solver.
///
/// `tolerance` is both the per-pair "negligible off-diagonal" threshold and
/// the sweep-level convergence criterion. `max_sweeps` bounds the iteration
/// count deterministically.
///
/// ```
/// use jacobi_svd::linalg::JacobiOptions;
///
/// let opts = JacobiOptions::<f64>::default()
///     .with_tolerance(1e-12)
///     .with_max_sweeps(50);
/// assert!(opts.validate().is_ok());
/// assert!(opts.with_max_sweeps(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobiOptions<T> {
    pub tolerance: T,
    pub max_sweeps: usize,
}

/// The SVD driver is configured with the same two knobs as the solver.
pub type SvdOptions<T> = JacobiOptions<T>;

impl<T: FloatScalar> Default for JacobiOptions<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from_f64(DEFAULT_TOLERANCE),
            max_sweeps: DEFAULT_MAX_SWEEPS,
        }
    }
}

impl<T: FloatScalar> JacobiOptions<T> {
    pub fn new(tolerance: T, max_sweeps: usize) -> Self {
        Self {
            tolerance,
            max_sweeps,
        }
    }

    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Check that the tolerance is finite and positive and that at least
    /// one sweep is allowed.
    pub fn validate(&self) -> Result<(), LinalgError> {
        if !self.tolerance.is_finite() || self.tolerance <= T::zero() {
            return Err(LinalgError::InvalidArgument {
                reason: "tolerance must be finite and > 0",
            });
        }
        if self.max_sweeps == 0 {
            return Err(LinalgError::InvalidArgument {
                reason: "max_sweeps must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = JacobiOptions::<f64>::default();
        assert_eq!(opts.tolerance, 1e-10);
        assert_eq!(opts.max_sweeps, 100);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tol in [0.0, -1e-10, f64::NAN, f64::INFINITY] {
            let opts = JacobiOptions::new(tol, 10);
            assert!(
                matches!(opts.validate(), Err(LinalgError::InvalidArgument { .. })),
                "tolerance {} accepted",
                tol
            );
        }
    }

    #[test]
    fn rejects_zero_sweeps() {
        let opts = JacobiOptions::<f64>::default().with_max_sweeps(0);
        assert_eq!(
            opts.validate(),
            Err(LinalgError::InvalidArgument {
                reason: "max_sweeps must be at least 1",
            })
        );
    }

    #[test]
    fn f32_default_tolerance() {
        let opts = JacobiOptions::<f32>::default();
        assert!(opts.tolerance > 0.0);
        assert!(opts.validate().is_ok());
    }
}
