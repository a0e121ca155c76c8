//! Renders a tree back to infix text.
//!
//! The canonicalizer leaves a lot of scaffolding behind (`1 *` scales, `-1 *` negations, `+ 0`
//! terms), so rendering is not a plain in-order walk. Tokens go through a buffer, and a handful
//! of rules drop or rewrite tokens as leaves are emitted: identity factors vanish, a `-1` factor
//! or a negative constant collapses into the `+` before it, and zero terms disappear together
//! with their sign. The same buffer drives the simplifier's fixed-point check, with an empty
//! delimiter.

use recas_parser::ast::{NodeId, Tree};
use recas_parser::parser::op::BinOpKind;

/// Factor texts that multiply or divide by one, suppressed under `*` and `/`.
const IDENTITY_FACTORS: [&str; 4] = ["1", "1.0", "-1", "-1.0"];

/// The negative identities among [`IDENTITY_FACTORS`]; these leave a `-` behind.
const NEGATIVE_ONES: [&str; 2] = ["-1", "-1.0"];

/// Term texts that add nothing, suppressed under `+` and `-`.
const ZEROS: [&str; 2] = ["0", "0.0"];

/// Renders the whole tree as infix text, joining tokens with `delim`.
pub fn render(tree: &Tree, delim: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    emit(tree, tree.root(), &mut out);
    out.join(delim)
}

fn emit(tree: &Tree, node: NodeId, out: &mut Vec<String>) {
    let Some([lhs, rhs]) = tree.children(node) else {
        emit_leaf(tree, node, out);
        return;
    };

    let parens = needs_parens(tree, node);
    if parens {
        out.push("(".to_string());
    }
    emit(tree, lhs, out);
    if !operator_suppressed(tree, node, lhs, rhs) {
        if let Some(op) = tree.op(node) {
            out.push(op.symbol().to_string());
        }
    }
    emit(tree, rhs, out);
    if parens {
        out.push(")".to_string());
    }
}

/// A node is parenthesized when its precedence is below its parent's, or when it is the second
/// operand of a `-` node at equal precedence. Everything else leans on precedence order alone.
fn needs_parens(tree: &Tree, node: NodeId) -> bool {
    let Some(parent) = tree.parent(node) else {
        return false;
    };
    let own = tree.expr(node).precedence();
    let above = tree.expr(parent).precedence();

    if own > above {
        false
    } else if own == above {
        tree.op(parent) == Some(BinOpKind::Sub)
            && tree.children(parent).is_some_and(|[_, rhs]| rhs == node)
    } else {
        true
    }
}

/// The operator symbol itself is dropped when the right operand is a `-1` leaf (the leaf's own
/// rule will emit a bare `-`), or when the left operand of a `*` is an identity factor about to
/// vanish.
fn operator_suppressed(tree: &Tree, node: NodeId, lhs: NodeId, rhs: NodeId) -> bool {
    let rhs_is_neg_one = tree
        .leaf_text(rhs)
        .is_some_and(|text| NEGATIVE_ONES.contains(&text));
    let lhs_is_identity = tree.op(node) == Some(BinOpKind::Mul)
        && tree
            .leaf_text(lhs)
            .is_some_and(|text| IDENTITY_FACTORS.contains(&text));
    rhs_is_neg_one || lhs_is_identity
}

fn emit_leaf(tree: &Tree, node: NodeId, out: &mut Vec<String>) {
    let Some(text) = tree.leaf_text(node) else {
        return;
    };
    let parent_op = tree.parent(node).and_then(|parent| tree.op(parent));

    match parent_op {
        Some(BinOpKind::Mul | BinOpKind::Div) if IDENTITY_FACTORS.contains(&text) => {
            if NEGATIVE_ONES.contains(&text) {
                if out.last().is_some_and(|last| last == "+") {
                    out.pop();
                }
                out.push("-".to_string());
            }
            return;
        }
        Some(BinOpKind::Add | BinOpKind::Sub) if ZEROS.contains(&text) => {
            if out.last().is_some_and(|last| last == "+" || last == "-") {
                out.pop();
            }
            return;
        }
        _ => {}
    }

    // a negative constant folds its sign into the `+` before it
    if text.starts_with('-') && out.last().is_some_and(|last| last == "+") {
        out.pop();
    }
    out.push(text.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use recas_parser::ast::Expr;
    use recas_parser::Parser;

    fn parsed(input: &str) -> Tree {
        Parser::new(input, "xy").parse().unwrap()
    }

    #[test]
    fn precedence_drops_redundant_parens() {
        assert_eq!(render(&parsed("(x * 2) + 1"), ""), "x*2+1");
        assert_eq!(render(&parsed("x * (2 + 1)"), ""), "x*(2+1)");
    }

    #[test]
    fn right_operand_of_subtraction_keeps_parens() {
        assert_eq!(render(&parsed("x - (y - 1)"), ""), "x-(y-1)");
        assert_eq!(render(&parsed("(x - y) - 1"), ""), "x-y-1");
    }

    #[test]
    fn identity_factor_vanishes() {
        let mut tree = Tree::new();
        let one = tree.leaf(Expr::Constant("1".to_string()));
        let x = tree.leaf(Expr::Variable("x".to_string()));
        let root = tree.binary(BinOpKind::Mul, one, x);
        tree.set_root(root);

        assert_eq!(render(&tree, ""), "x");
    }

    #[test]
    fn negative_one_factor_leaves_a_bare_minus() {
        // y + (-1 * x) prints as y - x
        let mut tree = Tree::new();
        let y = tree.leaf(Expr::Variable("y".to_string()));
        let neg_one = tree.leaf(Expr::Constant("-1".to_string()));
        let x = tree.leaf(Expr::Variable("x".to_string()));
        let product = tree.binary(BinOpKind::Mul, neg_one, x);
        let root = tree.binary(BinOpKind::Add, y, product);
        tree.set_root(root);

        assert_eq!(render(&tree, ""), "y-x");
    }

    #[test]
    fn negative_constant_merges_into_plus() {
        let mut tree = Tree::new();
        let x = tree.leaf(Expr::Variable("x".to_string()));
        let neg_two = tree.leaf(Expr::Constant("-2".to_string()));
        let root = tree.binary(BinOpKind::Add, x, neg_two);
        tree.set_root(root);

        assert_eq!(render(&tree, ""), "x-2");
    }

    #[test]
    fn zero_term_vanishes_with_its_sign() {
        let mut tree = Tree::new();
        let x = tree.leaf(Expr::Variable("x".to_string()));
        let zero = tree.leaf(Expr::Constant("0".to_string()));
        let root = tree.binary(BinOpKind::Add, x, zero);
        tree.set_root(root);

        assert_eq!(render(&tree, ""), "x");
    }

    #[test]
    fn leading_zero_term_leaves_the_plus() {
        // 0 + x has no earlier sign to absorb, so the + survives
        let mut tree = Tree::new();
        let zero = tree.leaf(Expr::Constant("0".to_string()));
        let x = tree.leaf(Expr::Variable("x".to_string()));
        let root = tree.binary(BinOpKind::Add, zero, x);
        tree.set_root(root);

        assert_eq!(render(&tree, ""), "+x");
    }

    #[test]
    fn delimiter_separates_tokens() {
        assert_eq!(render(&parsed("x + 2"), " "), "x + 2");
    }
}
