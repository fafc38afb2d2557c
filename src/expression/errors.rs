use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Expected one operator fewer than numbers, got {operators} operators for {numbers} numbers")]
    OperandMismatch { numbers: usize, operators: usize },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Intermediate value out of range")]
    Overflow,
}
