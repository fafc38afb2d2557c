use std::fmt;

use crate::expression::ast::{Candidate, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Left-leaning grouping: `ceil(len / 2)` brackets are opened up front and one is
/// closed after every number past the first until none remain. Candidates with
/// fewer than two numbers have nothing to group and are written bare.
impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut open = if self.numbers.len() < 2 {
            0
        } else {
            self.numbers.len().div_ceil(2)
        };

        for _ in 0..open {
            write!(f, "(")?;
        }

        for (i, number) in self.numbers.iter().enumerate() {
            write!(f, "{}", number)?;
            if open > 0 && i > 0 {
                write!(f, ")")?;
                open -= 1;
            }
            if let Some(op) = self.operators.get(i) {
                write!(f, " {} ", op)?;
            }
        }

        Ok(())
    }
}

impl Candidate {
    /// Render as `<infix> = <target>`, e.g. `((7 + 3) + 1) = 11`.
    ///
    /// A single number renders without brackets (`11 = 11`) rather than leaving
    /// an unclosed `(`.
    pub fn render(&self, target: i64) -> String {
        format!("{} = {}", self, target)
    }
}

/// Free-function form of [`Candidate::render`], including its single-number case
pub fn render(candidate: &Candidate, target: i64) -> String {
    candidate.render(target)
}
