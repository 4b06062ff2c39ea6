//! Determinant by pivoted Gaussian elimination.

use crate::error::{MatError, Result};
use crate::matrix::Matrix;
use log::trace;
use num_traits::Float;

impl<T: Float> Matrix<T> {
    /// Side length of a square matrix, or `NotSquare`.
    pub(crate) fn square_dim(&self) -> Result<usize> {
        if self.width != self.height {
            return Err(MatError::NotSquare { width: self.width, height: self.height });
        }
        Ok(self.width)
    }

    /// Determinant of a square matrix.
    ///
    /// Works on a copy; `self` is never modified. Each row swap flips the sign. When no
    /// nonzero pivot exists for some column the result is exactly zero.
    ///
    /// The diagonal pre-pass swaps a zero diagonal entry once with the next row. It does not
    /// return zero when the last diagonal entry is still zero afterwards: that rule would report
    /// matrices such as `[[1, 1], [1, 0]]` as singular. Singularity is decided only by the
    /// elimination pass, using exact-zero pivot tests.
    ///
    /// # Errors
    /// `NotSquare` if `width != height`.
    pub fn determinant(&self) -> Result<T> {
        let n = self.square_dim()?;
        let mut work = self.clone();
        let mut sign = T::one();

        // Diagonal pre-pass: push zeros off the diagonal where the next row allows it.
        for r in 0..n - 1 {
            if work.content[r * n + r] == T::zero() {
                work.swap_rows_unchecked(r, r + 1);
                sign = -sign;
                trace!("determinant: pre-pass swapped rows {} and {}", r, r + 1);
            }
        }

        for r in 0..n {
            if work.content[r * n + r] == T::zero() {
                match (r + 1..n).find(|&s| work.content[s * n + r] != T::zero()) {
                    Some(s) => {
                        work.swap_rows_unchecked(r, s);
                        sign = -sign;
                        trace!("determinant: pivot swap rows {} and {}", r, s);
                    }
                    None => {
                        trace!("determinant: column {} has no nonzero pivot, matrix is singular", r);
                        return Ok(T::zero());
                    }
                }
            }

            let pivot = work.content[r * n + r];
            for s in r + 1..n {
                let lead = work.content[s * n + r];
                if lead == T::zero() {
                    continue;
                }
                let factor = lead / pivot;
                // columns left of r are already zero in both rows
                for c in r..n {
                    let above = work.content[r * n + c];
                    let cell = &mut work.content[s * n + c];
                    *cell = *cell - factor * above;
                }
            }
        }

        let diagonal = (0..n).fold(T::one(), |acc, i| acc * work.content[i * n + i]);
        Ok(sign * diagonal)
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
    fn two_by_two() {
        assert_eq!(sq(2, &[1.0, 2.0, 3.0, 4.0]).determinant().unwrap(), -2.0);
    }

    #[test]
    fn one_by_one_is_the_entry() {
        assert_eq!(sq(1, &[-7.5]).determinant().unwrap(), -7.5);
        assert_eq!(sq(1, &[0.0]).determinant().unwrap(), 0.0);
    }

    #[test]
    fn zero_leading_pivot_is_swapped() {
        // [[0,1],[1,1]] has det -1
        assert_eq!(sq(2, &[0.0, 1.0, 1.0, 1.0]).determinant().unwrap(), -1.0);
    }

    #[test]
    fn zero_last_diagonal_is_not_singular() {
        // [[1,1],[1,0]] has det -1
        assert_eq!(sq(2, &[1.0, 1.0, 1.0, 0.0]).determinant().unwrap(), -1.0);
    }

    #[test]
    fn cyclic_permutation_terminates() {
        // [[0,1,0],[0,0,1],[1,0,0]] is an even permutation
        let p = sq(3, &[0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
        assert_eq!(p.determinant().unwrap(), 1.0);
    }

    #[test]
    fn dependent_rows_give_zero() {
        assert_eq!(sq(2, &[1.0, 2.0, 2.0, 4.0]).determinant().unwrap(), 0.0);
        assert_eq!(
            sq(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).determinant().unwrap().abs(),
            0.0
        );
    }

    #[test]
    fn three_by_three() {
        let a = sq(3, &[2.0, 1.0, 1.0, 1.0, 3.0, 2.0, 1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(a.determinant().unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn tiny_entries_are_not_treated_as_singular() {
        let a = sq(2, &[1e-10, 2e-10, 3e-10, 4e-10]);
        assert_abs_diff_eq!(a.determinant().unwrap(), -2e-20, epsilon = 1e-25);
    }

    #[test]
    fn operand_is_not_mutated() {
        let a = sq(2, &[0.0, 1.0, 1.0, 1.0]);
        let before = a.clone();
        a.determinant().unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn non_square_fails() {
        let a = Matrix::from_vec(3, 2, vec![1.0; 6]).unwrap();
        assert_eq!(a.determinant().unwrap_err(), MatError::NotSquare { width: 3, height: 2 });
    }
}
