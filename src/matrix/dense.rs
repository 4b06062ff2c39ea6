//! Dense row-major storage.
//!
//! A `Matrix<T>` owns a flat buffer of `width * height` entries. The entry at logical position
//! `(row, col)` lives at `row * width + col`; every accessor in this crate goes through that one
//! formula. Construction rejects zero dimensions and content of the wrong length, so the
//! `content.len() == width * height` invariant holds for every live value.

use crate::core::traits::MatShape;
use crate::error::{MatError, Result};
use crate::matrix::iter::Lane;
use num_traits::Float;
use std::ops::{Index, IndexMut};

/// Dense matrix stored as a flat row-major buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T = f64> {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) content: Vec<T>,
}

/// Validate `width` and `height` and return `width * height`.
fn checked_len(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(MatError::Dimension(format!(
            "matrix cannot have a dimension of size zero (width {width}, height {height})"
        )));
    }
    width.checked_mul(height).ok_or_else(|| {
        MatError::Dimension(format!("matrix size {width} x {height} overflows usize"))
    })
}

impl<T: Float> Matrix<T> {
    /// Zero-filled `width` x `height` matrix.
    pub fn zeros(width: usize, height: usize) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self { width, height, content: vec![T::zero(); len] })
    }

    /// Construct from row-major content.
    ///
    /// # Errors
    /// * `Dimension` if either dimension is zero.
    /// * `SizeMismatch` if `content.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, content: Vec<T>) -> Result<Self> {
        let len = checked_len(width, height)?;
        if content.len() != len {
            return Err(MatError::SizeMismatch { expected: len, got: content.len() });
        }
        Ok(Self { width, height, content })
    }

    /// Construct with optional content.
    ///
    /// `None` and `Some(vec![])` are both treated as "no content" and give an all-zero matrix;
    /// an empty vector is never reported as `SizeMismatch`. Any other content must have exactly
    /// `width * height` entries.
    pub fn new(width: usize, height: usize, content: Option<Vec<T>>) -> Result<Self> {
        match content {
            Some(content) if !content.is_empty() => Self::from_vec(width, height, content),
            _ => Self::zeros(width, height),
        }
    }

    /// Build a matrix whose entry `(row, col)` is `f(row, col)`.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let len = checked_len(width, height)?;
        let mut content = Vec::with_capacity(len);
        for row in 0..height {
            for col in 0..width {
                content.push(f(row, col));
            }
        }
        Ok(Self { width, height, content })
    }

    /// `n` x `n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Flat position of `(row, col)`, or `IndexOutOfBounds` if it falls outside the buffer.
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        row.checked_mul(self.width)
            .and_then(|base| base.checked_add(col))
            .filter(|&idx| idx < self.content.len())
            .ok_or(MatError::IndexOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
    }

    /// Read entry `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.offset(row, col)?;
        Ok(self.content[idx])
    }

    /// Overwrite entry `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.content[idx] = value;
        Ok(())
    }

    /// Exchange rows `x` and `y` in place.
    pub fn swap_row(&mut self, x: usize, y: usize) -> Result<()> {
        for r in [x, y] {
            if r >= self.height {
                return Err(MatError::IndexOutOfBounds {
                    row: r,
                    col: 0,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        self.swap_rows_unchecked(x, y);
        Ok(())
    }

    pub(crate) fn swap_rows_unchecked(&mut self, x: usize, y: usize) {
        if x == y {
            return;
        }
        let (lo, hi) = if x < y { (x, y) } else { (y, x) };
        let w = self.width;
        let (head, tail) = self.content.split_at_mut(hi * w);
        head[lo * w..(lo + 1) * w].swap_with_slice(&mut tail[..w]);
    }
}

impl<T: Copy> Matrix<T> {
    /// Column count.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major content.
    pub fn as_slice(&self) -> &[T] {
        &self.content
    }

    /// Consume the matrix, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.content
    }

    /// Contiguous view over row `i`.
    pub fn row(&self, i: usize) -> Result<Lane<'_, T>> {
        if i >= self.height {
            return Err(MatError::IndexOutOfBounds { row: i, col: 0, width: self.width, height: self.height });
        }
        Ok(self.row_lane(i))
    }

    /// Strided view over column `i`.
    pub fn col(&self, i: usize) -> Result<Lane<'_, T>> {
        if i >= self.width {
            return Err(MatError::IndexOutOfBounds { row: 0, col: i, width: self.width, height: self.height });
        }
        Ok(self.col_lane(i))
    }

    /// One row view per row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Lane<'_, T>> + Clone + '_ {
        (0..self.height).map(move |i| self.row_lane(i))
    }

    /// One column view per column, left to right.
    pub fn cols(&self) -> impl Iterator<Item = Lane<'_, T>> + Clone + '_ {
        (0..self.width).map(move |i| self.col_lane(i))
    }

    pub(crate) fn row_lane(&self, i: usize) -> Lane<'_, T> {
        Lane::new(&self.content, i * self.width, 1, self.width)
    }

    pub(crate) fn col_lane(&self, i: usize) -> Lane<'_, T> {
        Lane::new(&self.content, i, self.width, self.height)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(col < self.width && row < self.height, "index ({row}, {col}) out of bounds");
        &self.content[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(col < self.width && row < self.height, "index ({row}, {col}) out of bounds");
        &mut self.content[row * self.width + col]
    }
}

impl<T> MatShape for Matrix<T> {
    fn nrows(&self) -> usize {
        self.height
    }
    fn ncols(&self) -> usize {
        self.width
    }
}
