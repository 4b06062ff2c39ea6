//! Square-matrix algorithms: determinant, minors, adjugate and inverse.
//!
//! The determinant reduces a working copy by Gaussian elimination with row-swap pivoting and
//! exact-zero pivot tests (no tolerance). Adjugate and inverse are built from cofactors, costing
//! O(n^2) determinants of size n-1, i.e. O(n^5) overall. That is fine for the small matrices this
//! crate targets and slow beyond them.

pub mod cofactor;
pub mod determinant;

/// Side length above which `adjugate` logs a warning about its O(n^5) cost.
pub const ADJUGATE_WARN_DIM: usize = 10;
