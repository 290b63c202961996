//! Adapter Error Types

use feature_matrix::MatrixError;
use thiserror::Error;

/// Errors from [`Ripper::fit_rows`](crate::Ripper::fit_rows)
#[derive(Debug, Error)]
pub enum FitError<E> {
    /// Nested rows could not be turned into a matrix
    #[error("Malformed feature matrix: {0}")]
    Matrix(#[from] MatrixError),

    /// The wrapped learner failed; carried as-is
    #[error(transparent)]
    Learner(E),
}

impl<E> FitError<E> {
    /// The learner error, if that is where the failure came from
    pub fn into_learner(self) -> Option<E> {
        match self {
            FitError::Learner(e) => Some(e),
            FitError::Matrix(_) => None,
        }
    }
}
