use std::fmt;

use crate::expression::Candidate;

/// A candidate that evaluates to the target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    candidate: Candidate,
    target: i64,
}

impl Solution {
    pub fn new(candidate: Candidate, target: i64) -> Self {
        Self { candidate, target }
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn operand_count(&self) -> usize {
        self.candidate.len()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.candidate.render(self.target))
    }
}
