//! Transpose.

use crate::matrix::Matrix;
use num_traits::Float;

impl<T: Float> Matrix<T> {
    /// New `height` x `width` matrix with `t[(col, row)] == self[(row, col)]`.
    pub fn transpose(&self) -> Matrix<T> {
        let mut content = Vec::with_capacity(self.content.len());
        for lane in self.cols() {
            content.extend(lane);
        }
        Matrix { width: self.height, height: self.width, content }
    }
}
