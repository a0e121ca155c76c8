//! Parses infix text into an expression [`Tree`].
//!
//! Parsing runs in three stages: the [`tokenizer`](crate::tokenizer) splits the text into
//! tokens, [`postfix::infix_to_postfix`] reorders them into reverse-polish order, and
//! [`Parser::parse`] folds the postfix stream into the arena tree, classifying each name
//! against the declared variable set.

pub mod error;
pub mod op;
pub mod postfix;

use crate::ast::{Expr, NodeId, Tree};
use crate::tokenizer::tokenize_complete;
use error::{EmptyExpression, Error, MissingOperand, MissingOperator};
use postfix::{infix_to_postfix, RpToken};
use std::ops::Range;

/// Parses an infix expression over a declared set of single-letter variable names.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    input: &'source str,
    variables: Vec<char>,
}

impl<'source> Parser<'source> {
    /// Creates a parser for the given input. `variables` holds the single-letter variable names
    /// appearing in the expression; any other name token becomes a constant leaf and simply
    /// never participates in folding.
    pub fn new(input: &'source str, variables: &str) -> Self {
        Self {
            input,
            variables: variables.chars().collect(),
        }
    }

    /// Parses the input into an expression tree rooted at a single node.
    pub fn parse(&self) -> Result<Tree, Error> {
        let tokens = tokenize_complete(self.input);
        let postfix = infix_to_postfix(&tokens)?;
        self.build_tree(postfix)
    }

    /// Folds a postfix stream into a tree. A non-operator token becomes a leaf; an operator pops
    /// exactly two pending operands (the first pop is its second operand) and becomes their
    /// parent. The last pending node is the root.
    fn build_tree(&self, postfix: Vec<RpToken>) -> Result<Tree, Error> {
        let mut tree = Tree::new();
        let mut pending: Vec<(NodeId, Range<usize>)> = Vec::new();

        for token in postfix {
            match token {
                RpToken::Operand { span, text } => {
                    let expr = if self.is_variable(&text) {
                        Expr::Variable(text)
                    } else {
                        Expr::Constant(text)
                    };
                    pending.push((tree.leaf(expr), span));
                }
                RpToken::Operator { span, kind } => {
                    let Some((rhs, _)) = pending.pop() else {
                        return Err(Error::new(vec![span], MissingOperand { op: kind.symbol() }));
                    };
                    let Some((lhs, lhs_span)) = pending.pop() else {
                        return Err(Error::new(vec![span], MissingOperand { op: kind.symbol() }));
                    };
                    let node = tree.binary(kind, lhs, rhs);
                    pending.push((node, lhs_span.start..span.end));
                }
            }
        }

        let Some((root, _)) = pending.pop() else {
            return Err(Error::new(vec![0..self.input.len()], EmptyExpression));
        };
        if let Some((_, span)) = pending.pop() {
            return Err(Error::new(vec![span], MissingOperator));
        }

        tree.set_root(root);
        Ok(tree)
    }

    fn is_variable(&self, text: &str) -> bool {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.variables.contains(&c),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::op::BinOpKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn operand_order_is_preserved() {
        let tree = Parser::new("6 / 2", "").parse().unwrap();
        let root = tree.root();

        assert_eq!(tree.op(root), Some(BinOpKind::Div));
        let [lhs, rhs] = tree.children(root).unwrap();
        assert_eq!(tree.leaf_text(lhs), Some("6"));
        assert_eq!(tree.leaf_text(rhs), Some("2"));
    }

    #[test]
    fn names_resolve_against_the_variable_set() {
        let tree = Parser::new("x + y", "x").parse().unwrap();
        let [lhs, rhs] = tree.children(tree.root()).unwrap();

        assert!(tree.is_variable(lhs));
        assert!(tree.is_constant(rhs));
    }

    #[test]
    fn exponent_chain_builds_right_associated() {
        let tree = Parser::new("2 ^ 3 ^ 2", "").parse().unwrap();
        let root = tree.root();

        assert_eq!(tree.op(root), Some(BinOpKind::Exp));
        let [base, exponent] = tree.children(root).unwrap();
        assert_eq!(tree.leaf_text(base), Some("2"));
        assert_eq!(tree.op(exponent), Some(BinOpKind::Exp));
    }

    #[test]
    fn starved_operator_is_an_error() {
        assert!(Parser::new("1 + ", "").parse().is_err());
        assert!(Parser::new("* 2", "").parse().is_err());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(Parser::new("", "").parse().is_err());
        assert!(Parser::new("   ", "").parse().is_err());
    }

    #[test]
    fn adjacent_operands_are_an_error() {
        assert!(Parser::new("1 2", "").parse().is_err());
    }
}
