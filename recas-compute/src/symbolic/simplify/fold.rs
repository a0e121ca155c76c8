//! Constant folding over same-symbol operator chains.
//!
//! A chain is a run of operator nodes that all carry the symbol of the node being folded, e.g.
//! the three `+` nodes of `x + 2 + y + 3`. Folding walks the chain with an explicit stack,
//! accumulates every constant it finds along same-symbol links, and rebuilds the unconsumed
//! subtrees into a fresh chain with the folded constant attached on the right. The canonicalizer
//! moves that constant into canonical position on the next visit.
//!
//! The walk treats `^` chains like any other: constants combine pairwise with the node's own
//! symbol, so `2 ^ (x ^ 2)` folds to `x ^ 4`.

use recas_parser::ast::{Expr, NodeId, Tree};
use recas_parser::parser::op::BinOpKind;

/// Folds constants reachable from `node` through same-symbol links, rewriting in place.
///
/// Nothing happens unless the node's immediate shape offers a fold: two constant children fold
/// directly, a constant next to a same-symbol chain seeds a chain walk, and two same-symbol
/// chains fold jointly when both contain a constant.
pub fn fold_constants(tree: &mut Tree, node: NodeId) {
    let Some(op) = tree.op(node) else {
        return;
    };
    let Some([lhs, rhs]) = tree.children(node) else {
        return;
    };

    match (tree.constant_value(lhs), tree.constant_value(rhs)) {
        (Some(a), Some(b)) => {
            let leaf = tree.leaf(Expr::Constant(format_value(apply(op, a, b))));
            tree.replace_subtree(node, leaf);
        }
        (Some(seed), None) if tree.op(rhs) == Some(op) => {
            fold_into_chain(tree, node, op, seed, rhs);
        }
        (None, Some(seed)) if tree.op(lhs) == Some(op) => {
            fold_into_chain(tree, node, op, seed, lhs);
        }
        (None, None) if tree.op(lhs) == Some(op) && tree.op(rhs) == Some(op) => {
            fold_across_chains(tree, node, op, lhs, rhs);
        }
        _ => {}
    }
}

/// Combines a constant child with every constant found in the sibling chain.
fn fold_into_chain(tree: &mut Tree, node: NodeId, op: BinOpKind, seed: f64, chain: NodeId) {
    let Some((value, leftovers)) = collect_chain(tree, chain, op) else {
        return;
    };
    let folded = apply(op, seed, value);
    let remainder = build_remainder(tree, op, &leftovers);
    attach_fold(tree, node, op, folded, remainder);
}

/// Folds `chain <op> chain` when both sides contribute at least one constant. If either side
/// holds none, the node is left untouched and each side folds internally on later visits.
fn fold_across_chains(tree: &mut Tree, node: NodeId, op: BinOpKind, lhs: NodeId, rhs: NodeId) {
    let Some((lhs_value, mut leftovers)) = collect_chain(tree, lhs, op) else {
        return;
    };
    let Some((rhs_value, rhs_leftovers)) = collect_chain(tree, rhs, op) else {
        return;
    };

    let folded = apply(op, lhs_value, rhs_value);
    leftovers.extend(rhs_leftovers);
    let remainder = build_remainder(tree, op, &leftovers);
    attach_fold(tree, node, op, folded, remainder);
}

/// Walks the same-symbol chain under `start` depth first with an explicit stack.
///
/// Every constant child along a chain link joins the accumulated value; children that are
/// neither constants nor further chain links are returned in discovery order. Returns `None`
/// when the chain holds no constant at all.
fn collect_chain(tree: &Tree, start: NodeId, op: BinOpKind) -> Option<(f64, Vec<NodeId>)> {
    let mut pending = vec![start];
    let mut accumulated: Option<f64> = None;
    let mut leftovers = Vec::new();

    while let Some(link) = pending.pop() {
        let Some(children) = tree.children(link) else {
            continue;
        };
        for child in children {
            if let Some(value) = tree.constant_value(child) {
                accumulated = Some(match accumulated {
                    Some(so_far) => apply(op, so_far, value),
                    None => value,
                });
            } else if tree.op(child) == Some(op) {
                pending.push(child);
            } else {
                leftovers.push(child);
            }
        }
    }

    accumulated.map(|value| (value, leftovers))
}

/// Rebuilds the unconsumed subtrees into one left-associated chain of `op`, out of fresh
/// copies. `None` when the chain folded away completely.
fn build_remainder(tree: &mut Tree, op: BinOpKind, leftovers: &[NodeId]) -> Option<NodeId> {
    let mut ids = leftovers.iter();
    let mut remainder = tree.deep_copy(*ids.next()?);
    for &id in ids {
        let copy = tree.deep_copy(id);
        remainder = tree.binary(op, remainder, copy);
    }
    Some(remainder)
}

/// Replaces `node` with `remainder <op> constant`, or with the bare constant when the chain
/// folded away completely.
fn attach_fold(tree: &mut Tree, node: NodeId, op: BinOpKind, folded: f64, remainder: Option<NodeId>) {
    let constant = tree.leaf(Expr::Constant(format_value(folded)));
    let replacement = match remainder {
        Some(remainder) => tree.binary(op, remainder, constant),
        None => constant,
    };
    tree.replace_subtree(node, replacement);
}

fn apply(op: BinOpKind, a: f64, b: f64) -> f64 {
    match op {
        BinOpKind::Add => a + b,
        BinOpKind::Sub => a - b,
        BinOpKind::Mul => a * b,
        BinOpKind::Div => a / b,
        BinOpKind::Exp => a.powf(b),
    }
}

/// Formats a folded value back into constant text. Whole values print without a fractional
/// part: `2 + 3` folds to `5`, not `5.0`.
fn format_value(value: f64) -> String {
    format!("{}", value)
}
