//! Parser and arena AST for the recas algebra engine.
//!
//! The crate turns infix text like `(x+1)*2` into a binary expression [`Tree`](ast::Tree):
//! tokenization ([`tokenizer`]), operator-precedence conversion to postfix order
//! ([`parser::postfix`]), and tree building ([`parser::Parser`]). The tree it produces is the
//! raw parse; canonicalization and simplification live downstream in `recas-compute`.

pub mod ast;
pub mod parser;
pub mod tokenizer;

pub use parser::Parser;
