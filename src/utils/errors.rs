use thiserror::Error;

/// Errors raised while validating or parsing search inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Number set cannot be empty")]
    EmptyNumberSet,
    #[error("Number set must not repeat values: {0} appears more than once")]
    DuplicateNumber(i64),
    #[error("Not an integer: {0}")]
    InvalidNumber(String),
    #[error("Operand count {count} is below the minimum of {minimum}")]
    OperandCountTooSmall { count: usize, minimum: usize },
    #[error("Operand count {count} exceeds the {available} numbers available")]
    OperandCountTooLarge { count: usize, available: usize },
}
