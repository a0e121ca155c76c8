//! Rewrites a single node into canonical monomial shape.
//!
//! The canonical form of a term is `constant * variable ^ exponent`. Getting there takes four
//! local rules: constants move to the left of `*`, subtraction becomes addition of a `-1`
//! multiple, a bare power gains a `1 *` scale, and a bare variable gains a `^ 1` exponent. Each
//! node matches at most one rule per visit; the caller revisits until the tree stops changing.

use recas_parser::ast::{Expr, NodeId, Tree};
use recas_parser::parser::op::BinOpKind;

/// Applies the first matching canonicalization rule to `node`, in place.
pub fn canonicalize(tree: &mut Tree, node: NodeId) {
    match tree.op(node) {
        Some(BinOpKind::Mul) => sort_constant_left(tree, node),
        Some(BinOpKind::Sub) => rewrite_subtraction(tree, node),
        Some(BinOpKind::Exp) => scale_power(tree, node),
        Some(BinOpKind::Add) | Some(BinOpKind::Div) => {}
        None => {
            if tree.is_variable(node) {
                raise_variable(tree, node);
            }
        }
    }
}

/// `<non-constant> * <constant>` swaps to put the constant on the left.
fn sort_constant_left(tree: &mut Tree, node: NodeId) {
    let Some([lhs, rhs]) = tree.children(node) else {
        return;
    };
    if tree.is_constant(rhs) && !tree.is_constant(lhs) {
        tree.swap_children(node);
    }
}

/// `a - b` becomes `a + (-1 * b)`, eliminating subtraction from the tree.
fn rewrite_subtraction(tree: &mut Tree, node: NodeId) {
    let Some([lhs, rhs]) = tree.children(node) else {
        return;
    };

    let minuend = tree.deep_copy(lhs);
    let subtrahend = tree.deep_copy(rhs);
    let neg_one = tree.leaf(Expr::Constant("-1".to_string()));
    let negated = tree.binary(BinOpKind::Mul, neg_one, subtrahend);
    let sum = tree.binary(BinOpKind::Add, minuend, negated);
    tree.replace_subtree(node, sum);
}

/// A `^` node not already sitting under a constant multiple becomes `1 * (base ^ exponent)`.
/// The root counts as unscaled.
fn scale_power(tree: &mut Tree, node: NodeId) {
    let scaled = match tree.parent(node) {
        Some(parent) if tree.op(parent) == Some(BinOpKind::Mul) => tree
            .sibling(node)
            .is_some_and(|sibling| tree.is_constant(sibling)),
        _ => false,
    };
    if scaled {
        return;
    }

    let power = tree.deep_copy(node);
    let one = tree.leaf(Expr::Constant("1".to_string()));
    let product = tree.binary(BinOpKind::Mul, one, power);
    tree.replace_subtree(node, product);
}

/// A variable not already serving as the base of a `^` node becomes `variable ^ 1`.
fn raise_variable(tree: &mut Tree, node: NodeId) {
    let under_power = tree
        .parent(node)
        .is_some_and(|parent| tree.op(parent) == Some(BinOpKind::Exp));
    if under_power {
        return;
    }

    let base = tree.deep_copy(node);
    let one = tree.leaf(Expr::Constant("1".to_string()));
    let power = tree.binary(BinOpKind::Exp, base, one);
    tree.replace_subtree(node, power);
}
