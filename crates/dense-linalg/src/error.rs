//! Error classification for operations without a result.

use thiserror::Error;

/// Result type of fallible linear algebra operations.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Reason why an operation could not produce a value.
///
/// None of these indicate a bug in the caller: they describe properties of the input data (a
/// singular matrix, an unsolvable system). Contract violations such as out-of-bounds indices panic
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum LinalgError {
    /// The matrix has no inverse (its determinant is zero).
    #[error("matrix is singular and has no inverse")]
    SingularMatrix,

    /// The linear equation system has no solution.
    #[error("equation system is contradictory")]
    ContradictorySystem,

    /// The input vectors do not span a space with a unique perpendicular direction.
    #[error("vectors are linearly dependent")]
    LinearlyDependentVectors,
}
