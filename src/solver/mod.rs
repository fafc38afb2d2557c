pub mod constants;
mod core;
mod errors;

pub use self::core::{EquationSolver, SolverConfig};
pub use errors::SolverError;
