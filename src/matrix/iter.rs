//! Row and column views over a row-major buffer.

use std::iter::FusedIterator;

/// A finite strided walk over a borrowed buffer.
///
/// Rows are lanes with stride 1; columns are lanes with stride `width`. A lane borrows the
/// matrix content and never copies it. A fresh lane from `Matrix::row`/`Matrix::col` always
/// starts at the first entry.
#[derive(Clone, Debug)]
pub struct Lane<'a, T> {
    data: &'a [T],
    pos: usize,
    stride: usize,
    remaining: usize,
}

impl<'a, T> Lane<'a, T> {
    pub(crate) fn new(data: &'a [T], start: usize, stride: usize, len: usize) -> Self {
        debug_assert!(len == 0 || start + (len - 1) * stride < data.len());
        Self { data, pos: start, stride, remaining: len }
    }
}

impl<T: Copy> Iterator for Lane<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let v = self.data[self.pos];
        self.remaining -= 1;
        if self.remaining > 0 {
            self.pos += self.stride;
        }
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy> ExactSizeIterator for Lane<'_, T> {}

impl<T: Copy> FusedIterator for Lane<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::matrix::Matrix;

    fn sample() -> Matrix<f64> {
        // [[1,2,3],[4,5,6]]
        Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
    }

    #[test]
    fn row_is_contiguous() {
        let m = sample();
        let row = m.row(1).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row.collect::<Vec<_>>(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn col_strides_by_width() {
        let m = sample();
        assert_eq!(m.col(2).unwrap().collect::<Vec<_>>(), vec![3.0, 6.0]);
        assert!(m.col(3).is_err());
        assert!(m.row(2).is_err());
    }

    #[test]
    fn lanes_restart_from_the_matrix() {
        let m = sample();
        let first: f64 = m.col(0).unwrap().sum();
        let second: f64 = m.col(0).unwrap().sum();
        assert_eq!(first, second);
        let cols: Vec<Vec<f64>> = m.cols().map(|c| c.collect()).collect();
        assert_eq!(cols, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
        let rows: Vec<Vec<f64>> = m.rows().map(|r| r.collect()).collect();
        assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }
}
