//! Krypto - brute-force search for arithmetic equations that hit a target
//!
//! Given a set of distinct integers, a target and an operand count, this library
//! enumerates every ordered choice of numbers joined by `+`, `-`, `*` and `/`
//! whose strict left-to-right evaluation equals the target.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Candidate, ExpressionError, Operator, Value, evaluate, render, to_value};
pub use iterator::{SearchStats, Solution, Solutions};
pub use solver::{EquationSolver, SolverConfig, SolverError};
pub use utils::{UtilsError, candidate_count, parse_number_list};

/// Find every equation over `operand_count` of `numbers` that evaluates to `target`
///
/// This is a convenience function that runs a default solver to completion and
/// renders each solution, in enumeration order.
///
/// # Arguments
///
/// * `numbers` - Distinct integers to draw from
/// * `target` - The value every equation must reach
/// * `operand_count` - How many numbers each equation uses (at least two)
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` is empty or repeats a value
/// * `operand_count` is below two or larger than `numbers.len()`
///
/// # Examples
///
/// ```
/// use krypto::find_solutions;
///
/// match find_solutions(&[1, 3, 7, 16, 24], 11, 3) {
///     Ok(found) => assert!(found.contains(&"((7 + 3) + 1) = 11".to_string())),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solutions(
    numbers: &[i64],
    target: i64,
    operand_count: usize,
) -> Result<Vec<String>, SolverError> {
    let solver = EquationSolver::default();
    let solutions = solver.search(numbers, target, operand_count)?;
    Ok(solutions.map(|solution| solution.to_string()).collect())
}
