//! Error kinds produced by the numeric evaluator and solver.

use ariadne::Report;
use recas_error::{build_report, ErrorKind};
use std::ops::Range;

pub use recas_error::Error;

/// A character with no meaning in the evaluator's grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedChar {
    /// The offending character.
    pub found: char,
}

impl ErrorKind for UnexpectedChar {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("unexpected character `{}`", self.found),
            Some("cannot evaluate from here".to_string()),
            None,
        )
    }
}

/// The input ended where the grammar required another factor.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEnd;

impl ErrorKind for UnexpectedEnd {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "unexpected end of input",
            Some("a value was expected here".to_string()),
            None,
        )
    }
}

/// A numeric literal that did not parse as a decimal number, such as `1.2.3`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumber {
    /// The literal text as written.
    pub text: String,
}

impl ErrorKind for InvalidNumber {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("`{}` is not a valid number", self.text),
            Some("this literal does not parse as a decimal number".to_string()),
            None,
        )
    }
}

/// Input remained after a complete expression was evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailingInput;

impl ErrorKind for TrailingInput {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "trailing input after the expression",
            Some("evaluation stopped before this".to_string()),
            None,
        )
    }
}

/// `solve` was called with an empty variable set.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingVariable;

impl ErrorKind for MissingVariable {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "no variable to solve for",
            Some("this equation names no variable".to_string()),
            Some("write the unknown as a letter, like `x`".to_string()),
        )
    }
}
