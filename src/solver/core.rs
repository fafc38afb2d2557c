use std::ops::RangeInclusive;

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

use crate::iterator::{CandidateIterator, Solution, Solutions};
use crate::solver::constants::MIN_OPERAND_COUNT;
use crate::solver::errors::SolverError;
use crate::utils::{candidate_count, validate_number_set, validate_operand_count};

/// Configuration for equation search
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Smallest operand count the driver tries
    pub min_operands: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_operands: MIN_OPERAND_COUNT,
        }
    }
}

/// Brute-force solver for left-to-right equations over a set of numbers
#[derive(Debug, Clone, Default)]
pub struct EquationSolver {
    config: SolverConfig,
}

impl EquationSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Operand counts the driver walks for a set of `available` numbers
    pub fn operand_counts(&self, available: usize) -> RangeInclusive<usize> {
        self.config.min_operands.max(MIN_OPERAND_COUNT)..=available
    }

    /// Number of candidates a search of `operand_count` numbers out of `numbers` visits
    ///
    /// # Errors
    ///
    /// Returns an error for invalid inputs or if the count overflows.
    pub fn candidate_count(
        &self,
        numbers: &[i64],
        operand_count: usize,
    ) -> Result<u128, SolverError> {
        self.validate(numbers, operand_count)?;
        candidate_count(numbers.len(), operand_count).ok_or(SolverError::SearchTooLarge {
            count: operand_count,
            available: numbers.len(),
        })
    }

    /// Lazily enumerate every solution using exactly `operand_count` numbers
    ///
    /// # Errors
    ///
    /// Returns an error if `numbers` is empty or repeats a value, or if
    /// `operand_count` is below two or above `numbers.len()`.
    pub fn search(
        &self,
        numbers: &[i64],
        target: i64,
        operand_count: usize,
    ) -> Result<Solutions, SolverError> {
        self.validate(numbers, operand_count)?;

        info!(
            "Searching {} of {:?} for {} ({} candidates)",
            operand_count,
            numbers,
            target,
            describe_count(numbers.len(), operand_count)
        );

        let candidates = CandidateIterator::new(numbers.to_vec(), operand_count);
        Ok(Solutions::new(candidates, target))
    }

    /// Same output as [`EquationSolver::search`], with combinations spread across
    /// the rayon pool and results collected in enumeration order.
    ///
    /// # Errors
    ///
    /// See [`EquationSolver::search`].
    pub fn search_parallel(
        &self,
        numbers: &[i64],
        target: i64,
        operand_count: usize,
    ) -> Result<Vec<Solution>, SolverError> {
        self.validate(numbers, operand_count)?;

        info!(
            "Searching {} of {:?} for {} in parallel ({} candidates)",
            operand_count,
            numbers,
            target,
            describe_count(numbers.len(), operand_count)
        );

        let selections: Vec<Vec<i64>> = numbers
            .iter()
            .copied()
            .combinations(operand_count)
            .collect();

        let solutions: Vec<Solution> = selections
            .into_par_iter()
            .flat_map_iter(move |selection| {
                let count = selection.len();
                Solutions::new(CandidateIterator::new(selection, count), target)
            })
            .collect();

        info!("Parallel search found {} solutions", solutions.len());
        Ok(solutions)
    }

    fn validate(&self, numbers: &[i64], operand_count: usize) -> Result<(), SolverError> {
        validate_number_set(numbers)?;
        validate_operand_count(operand_count, MIN_OPERAND_COUNT, numbers.len())?;
        debug!("Inputs valid: {} of {} numbers", operand_count, numbers.len());
        Ok(())
    }
}

fn describe_count(available: usize, operand_count: usize) -> String {
    candidate_count(available, operand_count)
        .map_or_else(|| "too many".to_string(), |count| count.to_string())
}
