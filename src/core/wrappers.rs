//! Trait implementations for cachemat vectors.
//!
//! `InnerProduct` is implemented on `()` so generic code can hold an inner-product strategy
//! without owning any state. The dot product goes through the matrix product `x^T * y`, so
//! it shares the row/column pairing used by `Matrix::matmul`.

use crate::core::traits::InnerProduct;
use crate::error::MatError;
use crate::matrix::Vector;
use num_traits::Float;

/// Implements inner product and norm for `Vector<T>`.
impl<T: Float> InnerProduct<Vector<T>> for () {
    type Scalar = T;
    /// Computes the dot product of two vectors: `x^T y`.
    fn dot(&self, x: &Vector<T>, y: &Vector<T>) -> Result<T, MatError> {
        if x.height() != y.height() {
            return Err(MatError::DimensionMismatch {
                op: "dot",
                lhs: (x.width(), x.height()),
                rhs: (y.width(), y.height()),
            });
        }
        let product = x.transpose().matmul(y)?;
        Ok(product.as_slice()[0])
    }
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &Vector<T>) -> T {
        x.as_slice()
            .iter()
            .fold(T::zero(), |acc, &v| acc + v * v)
            .sqrt()
    }
}
