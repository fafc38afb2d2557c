//! Input validation, parsing and counting helpers

mod counting;
mod errors;
mod parsing;
mod validation;

pub use counting::candidate_count;
pub use errors::UtilsError;
pub use parsing::parse_number_list;
pub use validation::{validate_number_set, validate_operand_count};
