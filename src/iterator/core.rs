use std::iter::{FlatMap, repeat_n};

use itertools::Itertools;
use itertools::structs::{Combinations, MultiProduct, Permutations};
use log::{debug, warn};

use crate::expression::{Candidate, ExpressionError, Operator, to_value};

use super::state::SearchStats;
use super::types::Solution;

type Selection = std::vec::IntoIter<i64>;
type Orderings = Permutations<Selection>;
type Arrangements = FlatMap<Combinations<Selection>, Orderings, fn(Vec<i64>) -> Orderings>;
type Assignments = MultiProduct<std::array::IntoIter<Operator, 4>>;

fn orderings(selection: Vec<i64>) -> Orderings {
    debug!("Enumerating orderings of {:?}", selection);
    let count = selection.len();
    selection.into_iter().permutations(count)
}

/// Every way to fill `gaps` slots from [`Operator::ALL`], last slot varying fastest
pub fn operator_assignments(gaps: usize) -> Assignments {
    repeat_n(Operator::ALL.into_iter(), gaps).multi_cartesian_product()
}

/// Lazily yields every candidate of `operand_count` numbers drawn from `numbers`,
/// nested as combination, then permutation, then operator assignment.
#[derive(Debug)]
pub struct CandidateIterator {
    arrangements: Arrangements,
    current: Option<(Vec<i64>, Assignments)>,
}

impl CandidateIterator {
    pub fn new(numbers: Vec<i64>, operand_count: usize) -> Self {
        let arrangements = numbers
            .into_iter()
            .combinations(operand_count)
            .flat_map(orderings as fn(Vec<i64>) -> Orderings);
        Self {
            arrangements,
            current: None,
        }
    }
}

impl Iterator for CandidateIterator {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((arrangement, assignments)) = &mut self.current
                && let Some(operators) = assignments.next()
            {
                return Some(Candidate {
                    numbers: arrangement.clone(),
                    operators,
                });
            }

            let arrangement = self.arrangements.next()?;
            let assignments = operator_assignments(arrangement.len().saturating_sub(1));
            self.current = Some((arrangement, assignments));
        }
    }
}

/// Filters a [`CandidateIterator`] down to the candidates that equal `target` exactly
#[derive(Debug)]
pub struct Solutions {
    candidates: CandidateIterator,
    target: i64,
    stats: SearchStats,
}

impl Solutions {
    pub fn new(candidates: CandidateIterator, target: i64) -> Self {
        Self {
            candidates,
            target,
            stats: SearchStats::new(),
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl Iterator for Solutions {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        let target = self.target;
        let expected = to_value(target);
        for candidate in self.candidates.by_ref() {
            self.stats.considered += 1;
            match candidate.evaluate() {
                Ok(value) if value == expected => {
                    self.stats.matched += 1;
                    return Some(Solution::new(candidate, target));
                }
                Ok(_) => {}
                Err(ExpressionError::DivisionByZero | ExpressionError::Overflow) => {
                    self.stats.skipped += 1
                }
                Err(e) => {
                    warn!("Skipping malformed candidate {:?}: {}", candidate, e);
                    self.stats.skipped += 1;
                }
            }
        }
        None
    }
}
