//! Minors, cofactors, adjugate and inverse.

use crate::error::{MatError, Result};
use crate::linalg::ADJUGATE_WARN_DIM;
use crate::matrix::Matrix;
use log::warn;
use num_traits::Float;

impl<T: Float> Matrix<T> {
    /// The `(n-1)` x `(n-1)` submatrix left after deleting `row` and `col`.
    ///
    /// # Errors
    /// * `NotSquare` for non-square input.
    /// * `IndexOutOfBounds` if `row` or `col` is not below `n`.
    /// * `Dimension` for a 1x1 matrix, whose minor would be empty.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix<T>> {
        let n = self.square_dim()?;
        if row >= n || col >= n {
            return Err(MatError::IndexOutOfBounds { row, col, width: n, height: n });
        }
        let content = self
            .rows()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .flat_map(|(_, lane)| {
                lane.enumerate()
                    .filter(move |&(j, _)| j != col)
                    .map(|(_, v)| v)
            })
            .collect();
        Matrix::from_vec(n - 1, n - 1, content)
    }

    /// Signed minor `(-1)^(row+col) * det(minor(row, col))`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        let det = self.minor(row, col)?.determinant()?;
        Ok(if (row + col) % 2 == 0 { det } else { -det })
    }

    /// Adjugate: the transpose of the cofactor matrix. The adjugate of a 1x1 matrix is `[[1]]`.
    ///
    /// # Errors
    /// `NotSquare` for non-square input.
    pub fn adjugate(&self) -> Result<Matrix<T>> {
        let n = self.square_dim()?;
        if n > ADJUGATE_WARN_DIM {
            warn!(
                "adjugate of a {n}x{n} matrix takes {} determinant evaluations (O(n^5) overall)",
                n * n
            );
        }
        if n == 1 {
            return Matrix::from_vec(1, 1, vec![T::one()]);
        }
        let mut cofactors = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                cofactors.push(self.cofactor(i, j)?);
            }
        }
        Ok(Matrix::from_vec(n, n, cofactors)?.transpose())
    }

    /// Inverse `adj(self) * (1 / det(self))`.
    ///
    /// # Errors
    /// * `NotSquare` for non-square input.
    /// * `SingularMatrix` if the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(MatError::SingularMatrix);
        }
        Ok(self.adjugate()?.scale(T::one() / det))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sq(n: usize, v: &[f64]) -> Matrix<f64> {
        Matrix::from_vec(n, n, v.to_vec()).unwrap()
    }

    #[test]
    fn minor_keeps_relative_order() {
        let a = sq(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(a.minor(1, 1).unwrap().as_slice(), &[1.0, 3.0, 7.0, 9.0]);
        assert_eq!(a.minor(0, 2).unwrap().as_slice(), &[4.0, 5.0, 7.0, 8.0]);
        assert!(matches!(a.minor(3, 0), Err(MatError::IndexOutOfBounds { .. })));
        assert!(matches!(sq(1, &[2.0]).minor(0, 0), Err(MatError::Dimension(_))));
    }

    #[test]
    fn minor_requires_square() {
        let a = Matrix::from_vec(2, 3, vec![1.0; 6]).unwrap();
        assert!(matches!(a.minor(0, 0), Err(MatError::NotSquare { .. })));
        assert!(matches!(a.adjugate(), Err(MatError::NotSquare { .. })));
        assert!(matches!(a.inverse(), Err(MatError::NotSquare { .. })));
    }

    #[test]
    fn adjugate_of_two_by_two() {
        let a = sq(2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.adjugate().unwrap().as_slice(), &[4.0, -2.0, -3.0, 1.0]);
    }

    #[test]
    fn inverse_of_two_by_two() {
        let inv = sq(2, &[1.0, 2.0, 3.0, 4.0]).inverse().unwrap();
        let expected = [-2.0, 1.0, 1.5, -0.5];
        for (got, want) in inv.as_slice().iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    fn inverse_of_one_by_one() {
        assert_eq!(sq(1, &[4.0]).inverse().unwrap().as_slice(), &[0.25]);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert_eq!(sq(2, &[1.0, 2.0, 2.0, 4.0]).inverse().unwrap_err(), MatError::SingularMatrix);
    }

    #[test]
    fn inverse_round_trip_three_by_three() {
        let a = sq(3, &[2.0, 1.0, 1.0, 1.0, 3.0, 2.0, 1.0, 0.0, 0.0]);
        let inv = a.inverse().unwrap();
        let id = Matrix::<f64>::identity(3).unwrap();
        for prod in [a.matmul(&inv).unwrap(), inv.matmul(&a).unwrap()] {
            for (got, want) in prod.as_slice().iter().zip(id.as_slice()) {
                assert_abs_diff_eq!(*got, *want, epsilon = 1e-6);
            }
        }
    }
}
