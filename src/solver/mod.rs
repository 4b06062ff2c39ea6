//! Linear solver interface.

/// Common interface for solving A·x = b.
pub trait LinearSolver<M, V> {
    type Error;
    /// Solve A·x = b, returning `x`.
    fn solve(&mut self, a: &M, b: &V) -> Result<V, Self::Error>;
}

pub mod inverse;
pub use inverse::InverseSolver;
