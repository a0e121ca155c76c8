//! The closed set of binary operators understood by the engine.

use crate::tokenizer::TokenKind;

/// The associativity of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// The binary operation that is being performed.
///
/// Every operator node in the tree carries one of these; there are no unary operators in the tree
/// (a unary minus is rewritten into the binary form `-1 * x` by the canonicalizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation. Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div => 3,
            Self::Exp => 4,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// The source text of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        }
    }

    /// Converts an operator token into its operation, if the token is an operator.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Exp => Some(Self::Exp),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
