//! Matrix module: dense row-major storage, views, products and vectors.

pub mod dense;
pub mod display;
pub mod iter;
pub mod multiply;
pub mod transpose;
pub mod vector;

pub use dense::Matrix;
pub use iter::Lane;
pub use multiply::{Operand, chain_multiply};
pub use vector::{Vector, cross, dot};
