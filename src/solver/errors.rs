use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Too many candidates to enumerate for {count} of {available} numbers")]
    SearchTooLarge { count: usize, available: usize },
}
