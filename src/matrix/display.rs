//! Textual rendering of matrix rows.

use crate::config::DisplayOptions;
use crate::matrix::Matrix;
use num_traits::Float;
use std::fmt;

impl<T: Float + fmt::Display> Matrix<T> {
    /// Render every row as fixed-point numbers joined by `opts.separator`, one row per line.
    pub fn display_with(&self, opts: &DisplayOptions) -> String {
        self.rows()
            .map(|row| {
                row.map(|v| format!("{:.*}", opts.precision, v))
                    .collect::<Vec<_>>()
                    .join(&opts.separator)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render with the default options: two decimals, columns separated by `" | "`.
    pub fn display(&self) -> String {
        self.display_with(&DisplayOptions::default())
    }
}

impl<T: Float + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
