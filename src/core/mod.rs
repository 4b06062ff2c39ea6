//! Core traits and their implementations for cachemat types.

pub mod traits;
pub mod wrappers;

pub use traits::{InnerProduct, MatShape};
