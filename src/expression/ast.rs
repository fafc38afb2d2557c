use crate::expression::errors::ExpressionError;

/// Binary operators that may join two numbers of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator, in enumeration order
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// An ordered run of numbers with one operator between each neighbouring pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub(crate) numbers: Vec<i64>,
    pub(crate) operators: Vec<Operator>,
}

impl Candidate {
    /// # Errors
    ///
    /// Returns [`ExpressionError::OperandMismatch`] unless there is exactly one
    /// operator fewer than numbers.
    pub fn new(numbers: Vec<i64>, operators: Vec<Operator>) -> Result<Self, ExpressionError> {
        check_operator_count(numbers.len(), operators.len())?;
        Ok(Self { numbers, operators })
    }

    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// An empty number list only pairs with an empty operator list.
pub(crate) fn check_operator_count(numbers: usize, operators: usize) -> Result<(), ExpressionError> {
    let expected = numbers.saturating_sub(1);
    if operators == expected {
        Ok(())
    } else {
        Err(ExpressionError::OperandMismatch { numbers, operators })
    }
}
