//! Column vectors: matrices with width 1.

use crate::core::traits::InnerProduct;
use crate::error::{MatError, Result};
use crate::matrix::{Matrix, Operand};
use num_traits::Float;
use std::ops::Deref;

/// A `Matrix` whose width is fixed to 1. Dereferences to the underlying matrix, so every
/// read-only matrix operation applies unchanged. Mutation goes through `Vector::set` and
/// `Vector::swap_row`, which cannot change the shape.
///
/// ```compile_fail
/// use cachemat::{Matrix, Vector};
/// let mut v = Vector::from_vec(vec![1.0, 2.0, 3.0]).unwrap();
/// *v = Matrix::from_vec(3, 3, vec![0.0; 9]).unwrap();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T = f64>(Matrix<T>);

impl<T: Float> Vector<T> {
    /// Zero vector of `size` components.
    pub fn zeros(size: usize) -> Result<Self> {
        Matrix::zeros(1, size).map(Vector)
    }

    /// Vector holding `content` as its components.
    pub fn from_vec(content: Vec<T>) -> Result<Self> {
        Matrix::from_vec(1, content.len(), content).map(Vector)
    }

    /// `size` components, zero-filled when `content` is `None` or empty.
    pub fn new(size: usize, content: Option<Vec<T>>) -> Result<Self> {
        Matrix::new(1, size, content).map(Vector)
    }

    /// Overwrite component `row`.
    pub fn set(&mut self, row: usize, value: T) -> Result<()> {
        if row >= self.0.height {
            return Err(MatError::IndexOutOfBounds { row, col: 0, width: 1, height: self.0.height });
        }
        self.0.set(row, 0, value)
    }

    /// Exchange components `x` and `y` in place.
    pub fn swap_row(&mut self, x: usize, y: usize) -> Result<()> {
        self.0.swap_row(x, y)
    }

    /// Dot product `self^T * other`.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        ().dot(self, other)
    }

    /// Cross product of two 3D vectors.
    pub fn cross(&self, other: &Vector<T>) -> Result<Vector<T>> {
        cross(self, other)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> T {
        ().norm(self)
    }
}

impl<T> Vector<T> {
    pub fn as_matrix(&self) -> &Matrix<T> {
        &self.0
    }

    pub fn into_matrix(self) -> Matrix<T> {
        self.0
    }
}

/// Dot product of two vectors of equal height.
///
/// # Errors
/// `DimensionMismatch` if the heights differ.
pub fn dot<T: Float>(p1: &Vector<T>, p2: &Vector<T>) -> Result<T> {
    p1.dot(p2)
}

/// Cross product `p1 x p2` of two 3D vectors.
///
/// # Errors
/// `Dimension` unless both vectors have height 3.
pub fn cross<T: Float>(p1: &Vector<T>, p2: &Vector<T>) -> Result<Vector<T>> {
    if p1.height != 3 || p2.height != 3 {
        return Err(MatError::Dimension(format!(
            "cross product only defined for 3D vectors, got heights {} and {}",
            p1.height, p2.height
        )));
    }
    let (a, b) = (&p1.content, &p2.content);
    Vector::from_vec(vec![
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

impl<T> Deref for Vector<T> {
    type Target = Matrix<T>;

    fn deref(&self) -> &Matrix<T> {
        &self.0
    }
}

impl<T> AsRef<Matrix<T>> for Vector<T> {
    fn as_ref(&self) -> &Matrix<T> {
        &self.0
    }
}

impl<T> TryFrom<Matrix<T>> for Vector<T> {
    type Error = MatError;

    fn try_from(m: Matrix<T>) -> Result<Self> {
        if m.width != 1 {
            return Err(MatError::Dimension(format!(
                "a vector must have width 1, got width {}",
                m.width
            )));
        }
        Ok(Vector(m))
    }
}

impl<T> From<Vector<T>> for Matrix<T> {
    fn from(v: Vector<T>) -> Self {
        v.0
    }
}

impl<'a, T> From<&'a Vector<T>> for Operand<'a, T> {
    fn from(v: &'a Vector<T>) -> Self {
        Operand::Matrix(&v.0)
    }
}
