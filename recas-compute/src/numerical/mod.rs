//! Numeric root finding, independent of the symbolic pipeline.
//!
//! The solver works on the raw infix text: [`newton::substitute`] splices a guess into the
//! expression string, [`eval::eval`] evaluates the result, [`newton::newton`] iterates, and
//! [`solve::solve_equation`] scans guesses and formats the deduplicated roots.

pub mod error;
pub mod eval;
pub mod newton;
pub mod solve;
