//! Candidate equations: representation, left-to-right evaluation and rendering

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Candidate, Operator};
pub use display::render;
pub use errors::ExpressionError;
pub use eval::{Value, evaluate, to_value};

#[cfg(test)]
mod tests;
