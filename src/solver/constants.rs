// Defaults for the solver configuration
pub const MIN_OPERAND_COUNT: usize = 2;
