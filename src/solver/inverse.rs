//! Solving through the explicit inverse.
//!
//! `InverseSolver` computes `x = A^-1 b` with the cofactor inverse from [`crate::linalg`]. The
//! inverse is kept after each solve so further right-hand sides against the same matrix only
//! cost one matrix-vector product.
//!
//! # Usage
//! - `solve` recomputes the inverse for the given matrix.
//! - `solve_cached` reuses the last inverse.

use crate::error::{MatError, Result};
use crate::matrix::{Matrix, Vector};
use crate::solver::LinearSolver;
use num_traits::Float;

/// Solver that inverts `A` and multiplies.
#[derive(Debug, Clone)]
pub struct InverseSolver<T> {
    /// Inverse from the last successful `solve` (if any)
    inverse: Option<Matrix<T>>,
}

impl<T: Float> InverseSolver<T> {
    /// Create a new solver (no inverse yet).
    pub fn new() -> Self {
        InverseSolver { inverse: None }
    }

    /// The cached inverse, if a solve has succeeded.
    pub fn inverse(&self) -> Option<&Matrix<T>> {
        self.inverse.as_ref()
    }

    /// Solve using the cached inverse.
    ///
    /// # Errors
    /// * `NotFactored` if no solve has succeeded yet.
    /// * `DimensionMismatch` if `b` does not match the cached inverse.
    pub fn solve_cached(&self, b: &Vector<T>) -> Result<Vector<T>> {
        let inv = self.inverse.as_ref().ok_or(MatError::NotFactored)?;
        Vector::try_from(inv.matmul(b)?)
    }
}

impl<T: Float> LinearSolver<Matrix<T>, Vector<T>> for InverseSolver<T> {
    type Error = MatError;

    /// Solve A·x = b as x = A^-1 · b.
    ///
    /// # Errors
    /// `NotSquare`, `SingularMatrix` from the inversion, or `DimensionMismatch` if `b` has
    /// the wrong height. A failed solve keeps the previous cached inverse.
    fn solve(&mut self, a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>> {
        let inv = a.inverse()?;
        let x = Vector::try_from(inv.matmul(b)?)?;
        self.inverse = Some(inv);
        Ok(x)
    }
}

impl<T: Float> Default for InverseSolver<T> {
    fn default() -> Self {
        Self::new()
    }
}
