//! cachemat: dense row-major matrices without an external numeric backend
//!
//! This crate provides a small dense `Matrix<T>` (with `Vector<T>` as its width-1 form) stored as a
//! flat row-major buffer, with multiplication, transpose, a pivoted-elimination determinant, and
//! cofactor-based adjugate and inverse. It targets small-to-medium matrices.

pub mod config;
pub mod core;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod solver;

// Re-exports for convenience
pub use config::*;
pub use crate::core::*;
pub use error::*;
pub use linalg::*;
pub use matrix::*;
pub use solver::*;
