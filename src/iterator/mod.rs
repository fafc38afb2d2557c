//! Lazy enumeration of candidate equations and the solutions among them

pub mod core;
pub mod state;
pub mod types;

pub use self::core::{CandidateIterator, Solutions, operator_assignments};
pub use state::SearchStats;
pub use types::Solution;
