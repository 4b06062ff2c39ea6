//! Matrix product, scalar scale, and chain multiplication.
//!
//! The product `A * B` fills cell `(r, c)` by pairing the contiguous row lane `A.row(r)` with the
//! strided column lane `B.col(c)`. Operands are only read; every result is a fresh matrix.

use crate::error::{MatError, Result};
use crate::matrix::Matrix;
use num_traits::{Float, NumCast};
use std::any::Any;
use std::ops::Mul;

/// Right-hand side of `Matrix::multiply`: another matrix (or vector) or a scalar.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a, T> {
    Matrix(&'a Matrix<T>),
    Scalar(T),
}

impl<'a, T> From<&'a Matrix<T>> for Operand<'a, T> {
    fn from(m: &'a Matrix<T>) -> Self {
        Operand::Matrix(m)
    }
}

impl From<f64> for Operand<'_, f64> {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl From<f32> for Operand<'_, f32> {
    fn from(s: f32) -> Self {
        Operand::Scalar(s)
    }
}

impl<T: Float> Matrix<T> {
    /// Multiply by a matrix, vector or scalar.
    ///
    /// Matrices and vectors give the matrix product; scalars scale every entry.
    pub fn multiply<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Matrix<T>>
    where
        T: 'a,
    {
        match rhs.into() {
            Operand::Matrix(m) => self.matmul(m),
            Operand::Scalar(s) => Ok(self.scale(s)),
        }
    }

    /// Matrix product `self * rhs`, of size `rhs.width` x `self.height`.
    ///
    /// # Errors
    /// `DimensionMismatch` unless `self.width == rhs.height`.
    pub fn matmul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.width != rhs.height {
            return Err(MatError::DimensionMismatch {
                op: "multiply",
                lhs: (self.width, self.height),
                rhs: (rhs.width, rhs.height),
            });
        }
        let mut content = Vec::with_capacity(rhs.width * self.height);
        for r in 0..self.height {
            for c in 0..rhs.width {
                let cell = self
                    .row_lane(r)
                    .zip(rhs.col_lane(c))
                    .fold(T::zero(), |acc, (a, b)| acc + a * b);
                content.push(cell);
            }
        }
        Ok(Matrix { width: rhs.width, height: self.height, content })
    }

    /// New matrix with every entry multiplied by `scalar`.
    pub fn scale(&self, scalar: T) -> Matrix<T> {
        Matrix {
            width: self.width,
            height: self.height,
            content: self.content.iter().map(|&v| v * scalar).collect(),
        }
    }
}

impl<T: Float + 'static> Matrix<T> {
    /// Multiply by a dynamically typed operand.
    ///
    /// Accepts `Matrix<T>`, `Vector<T>`, `T`, and the primitive numeric scalars (`f64`, `f32`,
    /// `i32`, `i64`, `u32`, `usize`).
    ///
    /// # Errors
    /// `UnsupportedOperand` for any other type; otherwise as `multiply`.
    pub fn multiply_any(&self, rhs: &dyn Any) -> Result<Matrix<T>> {
        if let Some(m) = rhs.downcast_ref::<Matrix<T>>() {
            return self.matmul(m);
        }
        if let Some(v) = rhs.downcast_ref::<crate::matrix::Vector<T>>() {
            return self.matmul(v.as_matrix());
        }
        if let Some(&s) = rhs.downcast_ref::<T>() {
            return Ok(self.scale(s));
        }
        let scalar: Option<T> = if let Some(&s) = rhs.downcast_ref::<f64>() {
            NumCast::from(s)
        } else if let Some(&s) = rhs.downcast_ref::<f32>() {
            NumCast::from(s)
        } else if let Some(&s) = rhs.downcast_ref::<i32>() {
            NumCast::from(s)
        } else if let Some(&s) = rhs.downcast_ref::<i64>() {
            NumCast::from(s)
        } else if let Some(&s) = rhs.downcast_ref::<u32>() {
            NumCast::from(s)
        } else if let Some(&s) = rhs.downcast_ref::<usize>() {
            NumCast::from(s)
        } else {
            return Err(MatError::UnsupportedOperand("expected a matrix, vector or numeric scalar"));
        };
        scalar
            .map(|s| self.scale(s))
            .ok_or(MatError::UnsupportedOperand("scalar not representable in the element type"))
    }
}

/// Left-associative product `((m[0] * m[1]) * m[2]) * ...`.
///
/// # Errors
/// `EmptyChain` for an empty slice; `DimensionMismatch` at the first incompatible pair.
pub fn chain_multiply<T: Float>(matrices: &[&Matrix<T>]) -> Result<Matrix<T>> {
    let (first, rest) = matrices.split_first().ok_or(MatError::EmptyChain)?;
    rest.iter()
        .try_fold((*first).clone(), |acc, m| acc.matmul(m))
}

impl<T: Float> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.scale(scalar)
    }
}

impl<T: Float> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.scale(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(width: usize, height: usize, v: &[f64]) -> Matrix<f64> {
        Matrix::from_vec(width, height, v.to_vec()).unwrap()
    }

    #[test]
    fn product_of_two_by_two() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = m(2, 2, &[2.0, 0.0, 1.0, 2.0]);
        assert_eq!(a.multiply(&b).unwrap().as_slice(), &[4.0, 4.0, 10.0, 8.0]);
    }

    #[test]
    fn product_shape_is_rhs_width_by_lhs_height() {
        // 3 wide, 2 tall times 2 wide, 3 tall
        let a = m(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = m(2, 3, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        let c = a.matmul(&b).unwrap();
        assert_eq!((c.width(), c.height()), (2, 2));
        assert_eq!(c.as_slice(), &[4.0, 5.0, 10.0, 11.0]);
    }

    #[test]
    fn mismatched_shapes_fail() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let p = m(1, 3, &[1.0, 2.0, 3.0]);
        assert_eq!(
            a.matmul(&p).unwrap_err(),
            MatError::DimensionMismatch { op: "multiply", lhs: (2, 2), rhs: (1, 3) }
        );
    }

    #[test]
    fn scalar_scale_leaves_operand_untouched() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let s = a.multiply(0.5).unwrap();
        assert_eq!(s.as_slice(), &[0.5, 1.0, 1.5, 2.0]);
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn dynamic_operands() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.multiply_any(&2_i32).unwrap().as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(a.multiply_any(&a.clone()).unwrap().as_slice(), &[7.0, 10.0, 15.0, 22.0]);
        assert!(matches!(
            a.multiply_any(&"two"),
            Err(MatError::UnsupportedOperand(_))
        ));
    }

    #[test]
    fn chain_is_left_associative() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = m(2, 2, &[2.0, 0.0, 1.0, 2.0]);
        let c = m(2, 2, &[0.0, 1.0, -1.0, 0.0]);
        let expected = a.matmul(&b).unwrap().matmul(&c).unwrap();
        assert_eq!(chain_multiply(&[&a, &b, &c]).unwrap(), expected);
        assert_eq!(chain_multiply(&[&a]).unwrap(), a);
        assert_eq!(chain_multiply::<f64>(&[]).unwrap_err(), MatError::EmptyChain);
    }
}
