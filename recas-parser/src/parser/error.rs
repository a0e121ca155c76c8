//! Malformed-expression error kinds produced while parsing infix text.

use ariadne::Report;
use recas_error::{build_report, ErrorKind};
use std::ops::Range;

pub use recas_error::Error;

/// A character that is not part of the expression grammar was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnrecognizedSymbol {
    /// The raw text of the offending token.
    pub symbol: String,
}

impl ErrorKind for UnrecognizedSymbol {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("unrecognized symbol `{}`", self.symbol),
            Some("this character is not part of any expression".to_string()),
            Some("expressions are built from numbers, letters, parentheses, and `+ - * / ^`".to_string()),
        )
    }
}

/// An operator was encountered with fewer than two pending operands.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingOperand {
    /// The operator that was starved of operands.
    pub op: &'static str,
}

impl ErrorKind for MissingOperand {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("`{}` is missing an operand", self.op),
            Some("this operator needs a value on both sides".to_string()),
            None,
        )
    }
}

/// The input contained no expression at all.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyExpression;

impl ErrorKind for EmptyExpression {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "empty expression",
            Some("there is nothing to parse here".to_string()),
            None,
        )
    }
}

/// Two operands appeared with no operator joining them.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingOperator;

impl ErrorKind for MissingOperator {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "expected an operator between these values",
            Some("this value is not connected to the rest of the expression".to_string()),
            None,
        )
    }
}

/// A parenthesis was not closed (or was never opened).
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnclosedParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "unclosed parenthesis",
            Some("this parenthesis is not closed".to_string()),
            Some(if self.opening {
                "add a closing parenthesis `)` somewhere after this".to_string()
            } else {
                "add an opening parenthesis `(` somewhere before this".to_string()
            }),
        )
    }
}
