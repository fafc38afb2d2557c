use log::trace;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::expression::ast::{Candidate, Operator, check_operator_count};
use crate::expression::errors::ExpressionError;

/// Exact value of a (partial) evaluation
pub type Value = Ratio<i128>;

impl Operator {
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when dividing by zero and
    /// [`ExpressionError::Overflow`] when the exact result does not fit.
    pub fn apply(self, left: &Value, right: &Value) -> Result<Value, ExpressionError> {
        let result = match self {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
            Operator::Mul => left.checked_mul(right),
            Operator::Div => {
                if right.is_zero() {
                    trace!("Division by zero attempted: {} / {}", left, right);
                    return Err(ExpressionError::DivisionByZero);
                }
                left.checked_div(right)
            }
        };

        result.ok_or_else(|| {
            trace!("Overflow evaluating {} {} {}", left, self, right);
            ExpressionError::Overflow
        })
    }
}

/// Reduce `numbers` strictly left to right in exact rational arithmetic,
/// ignoring operator precedence.
///
/// A single number evaluates to itself and an empty list evaluates to zero.
///
/// # Errors
///
/// Returns [`ExpressionError::OperandMismatch`] when `operators` is not exactly one
/// shorter than `numbers`, [`ExpressionError::DivisionByZero`] when a divisor is zero
/// and [`ExpressionError::Overflow`] when an intermediate value does not fit.
pub fn evaluate(numbers: &[i64], operators: &[Operator]) -> Result<Value, ExpressionError> {
    check_operator_count(numbers.len(), operators.len())?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Ok(Value::zero());
    };

    rest.iter()
        .zip(operators)
        .try_fold(to_value(first), |acc, (&number, &op)| {
            op.apply(&acc, &to_value(number))
        })
}

/// Lift an integer into the exact value domain
pub fn to_value(number: i64) -> Value {
    Value::from_integer(i128::from(number))
}

impl Candidate {
    /// # Errors
    ///
    /// See [`evaluate`].
    pub fn evaluate(&self) -> Result<Value, ExpressionError> {
        let result = evaluate(&self.numbers, &self.operators);

        match &result {
            Ok(value) => trace!("{} evaluated to {}", self, value),
            Err(e) => trace!("{} failed to evaluate: {}", self, e),
        }

        result
    }
}
