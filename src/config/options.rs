//! Rendering options for matrix display.
//!
//! This module provides the `DisplayOptions` struct, which controls how
//! `Matrix::display_with` renders rows: the number of decimals printed for
//! each entry and the text placed between columns. The defaults give
//! two-decimal fixed-point entries separated by `" | "`.

/// Row rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Digits after the decimal point
    pub precision: usize,

    /// Text placed between adjacent columns
    pub separator: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            separator: String::from(" | "),
        }
    }
}

impl DisplayOptions {
    /// Options with `precision` decimals and the default separator.
    pub fn with_precision(precision: usize) -> Self {
        Self { precision, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_two_decimals_and_pipe() {
        let opts = DisplayOptions::default();
        assert_eq!(opts.precision, 2);
        assert_eq!(opts.separator, " | ");
        assert_eq!(DisplayOptions::with_precision(4).separator, " | ");
    }
}
