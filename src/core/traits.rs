//! Core linear-algebra traits for cachemat.

use crate::error::MatError;

/// Row and column counts of a matrix-like value.
pub trait MatShape {
    /// Number of rows (height).
    fn nrows(&self) -> usize;
    /// Number of columns (width).
    fn ncols(&self) -> usize;
    /// True when `nrows() == ncols()`.
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute dot(x, y). Fails when `x` and `y` differ in length.
    fn dot(&self, x: &V, y: &V) -> Result<Self::Scalar, MatError>;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}
