//! Infix to postfix (reverse-polish) conversion via the shunting-yard algorithm.

use crate::parser::error::{Error, UnclosedParenthesis, UnrecognizedSymbol};
use crate::parser::op::{Associativity, BinOpKind};
use crate::tokenizer::{Token, TokenKind};
use std::ops::Range;

/// A token in postfix order, ready for tree building.
#[derive(Debug, Clone, PartialEq)]
pub enum RpToken {
    /// A number or name.
    Operand {
        /// The region of the source code this operand came from.
        span: Range<usize>,

        /// The operand text. A glued leading sign is part of the text.
        text: String,
    },

    /// A binary operator.
    Operator {
        /// The region of the source code this operator came from.
        span: Range<usize>,

        /// The operation.
        kind: BinOpKind,
    },
}

/// An entry on the operator stack. The open parenthesis acts as a sentinel that stops
/// precedence-based popping and is itself never emitted.
enum StackEntry {
    Op { span: Range<usize>, kind: BinOpKind },
    Paren { span: Range<usize> },
}

/// Converts a token stream in infix order to postfix order.
///
/// For an incoming operator, stack-top operators are popped to the output while they have
/// strictly greater precedence, or equal precedence when the incoming operator is
/// left-associative; `^` is the only right-associative operator. A sign at the very start of the
/// input glues to an immediately following numeric literal; any other unary sign stays in the
/// operator stream and surfaces as a missing-operand error during tree building.
pub fn infix_to_postfix(tokens: &[Token]) -> Result<Vec<RpToken>, Error> {
    let mut output = Vec::new();
    let mut stack: Vec<StackEntry> = Vec::new();
    let mut index = 0;

    if tokens.len() >= 2
        && matches!(tokens[0].kind, TokenKind::Add | TokenKind::Sub)
        && tokens[1].kind.is_number()
    {
        let sign = if tokens[0].kind == TokenKind::Sub { "-" } else { "" };
        output.push(RpToken::Operand {
            span: tokens[0].span.start..tokens[1].span.end,
            text: format!("{}{}", sign, tokens[1].lexeme),
        });
        index = 2;
    }

    while index < tokens.len() {
        let token = &tokens[index];
        index += 1;

        match token.kind {
            TokenKind::Int | TokenKind::Float | TokenKind::Name => {
                output.push(RpToken::Operand {
                    span: token.span.clone(),
                    text: token.lexeme.to_string(),
                });
            }
            TokenKind::OpenParen => {
                stack.push(StackEntry::Paren { span: token.span.clone() });
            }
            TokenKind::CloseParen => loop {
                match stack.pop() {
                    Some(StackEntry::Op { span, kind }) => {
                        output.push(RpToken::Operator { span, kind });
                    }
                    Some(StackEntry::Paren { .. }) => break,
                    None => {
                        return Err(Error::new(
                            vec![token.span.clone()],
                            UnclosedParenthesis { opening: false },
                        ));
                    }
                }
            },
            TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Div | TokenKind::Exp => {
                let Some(op) = BinOpKind::from_token(token.kind) else {
                    unreachable!()
                };

                while let Some(StackEntry::Op { kind: top, .. }) = stack.last() {
                    let pop = top.precedence() > op.precedence()
                        || (top.precedence() == op.precedence()
                            && op.associativity() == Associativity::Left);
                    if !pop {
                        break;
                    }
                    let Some(StackEntry::Op { span, kind }) = stack.pop() else {
                        unreachable!()
                    };
                    output.push(RpToken::Operator { span, kind });
                }

                stack.push(StackEntry::Op { span: token.span.clone(), kind: op });
            }
            TokenKind::Whitespace => {}
            TokenKind::Symbol => {
                return Err(Error::new(
                    vec![token.span.clone()],
                    UnrecognizedSymbol { symbol: token.lexeme.to_string() },
                ));
            }
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Op { span, kind } => output.push(RpToken::Operator { span, kind }),
            StackEntry::Paren { span } => {
                return Err(Error::new(vec![span], UnclosedParenthesis { opening: true }));
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize_complete;
    use pretty_assertions::assert_eq;

    /// Converts the input and flattens the postfix stream to plain text for comparison.
    fn postfix_of(input: &str) -> Vec<String> {
        infix_to_postfix(&tokenize_complete(input))
            .unwrap()
            .into_iter()
            .map(|token| match token {
                RpToken::Operand { text, .. } => text,
                RpToken::Operator { kind, .. } => kind.symbol().to_string(),
            })
            .collect()
    }

    #[test]
    fn multiplication_binds_before_addition() {
        assert_eq!(postfix_of("1 + 2 * 3"), ["1", "2", "3", "*", "+"]);
    }

    #[test]
    fn exponent_is_right_associative() {
        assert_eq!(postfix_of("2 ^ 3 ^ 2"), ["2", "3", "2", "^", "^"]);
    }

    #[test]
    fn equal_precedence_pops_left_to_right() {
        assert_eq!(postfix_of("8 - 3 + 2"), ["8", "3", "-", "2", "+"]);
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(postfix_of("(1 + 2) * 3"), ["1", "2", "+", "3", "*"]);
    }

    #[test]
    fn leading_sign_glues_to_number() {
        assert_eq!(postfix_of("-3 * x"), ["-3", "x", "*"]);
    }

    #[test]
    fn dangling_close_paren_is_an_error() {
        let tokens = tokenize_complete("1 + 2)");
        assert!(infix_to_postfix(&tokens).is_err());
    }

    #[test]
    fn unclosed_open_paren_is_an_error() {
        let tokens = tokenize_complete("(1 + 2");
        assert!(infix_to_postfix(&tokens).is_err());
    }
}
