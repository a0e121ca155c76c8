//! Distribution of multiplication over addition and subtraction.

use recas_parser::ast::{NodeId, Tree};
use recas_parser::parser::op::BinOpKind;

/// Rewrites `a * (p + q)` to `a * p + a * q` (and the `-` and mirrored variants), in place.
///
/// At most one distribution fires per visit; nested sums unfold over later passes of the
/// fixed-point loop. Returns whether the node was rewritten.
pub fn distribute(tree: &mut Tree, node: NodeId) -> bool {
    if tree.op(node) != Some(BinOpKind::Mul) {
        return false;
    }
    let Some([lhs, rhs]) = tree.children(node) else {
        return false;
    };

    for (sum, factor) in [(rhs, lhs), (lhs, rhs)] {
        let Some(sum_op @ (BinOpKind::Add | BinOpKind::Sub)) = tree.op(sum) else {
            continue;
        };
        let Some([p, q]) = tree.children(sum) else {
            continue;
        };

        // copies first, so the originals are intact while the replacement is assembled
        let p_product = {
            let factor_copy = tree.deep_copy(factor);
            let p_copy = tree.deep_copy(p);
            tree.binary(BinOpKind::Mul, factor_copy, p_copy)
        };
        let q_product = {
            let factor_copy = tree.deep_copy(factor);
            let q_copy = tree.deep_copy(q);
            tree.binary(BinOpKind::Mul, factor_copy, q_copy)
        };
        let replacement = tree.binary(sum_op, p_product, q_product);
        tree.replace_subtree(node, replacement);
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::render::render;
    use pretty_assertions::assert_eq;
    use recas_parser::Parser;

    fn distributed(input: &str) -> String {
        let mut tree = Parser::new(input, "x").parse().unwrap();
        let root = tree.root();
        assert!(distribute(&mut tree, root));
        render(&tree, " ")
    }

    #[test]
    fn factor_on_the_left() {
        assert_eq!(distributed("2 * (x + 3)"), "2 * x + 2 * 3");
    }

    #[test]
    fn factor_on_the_right() {
        assert_eq!(distributed("(x + 3) * 2"), "2 * x + 2 * 3");
    }

    #[test]
    fn subtraction_distributes_too() {
        assert_eq!(distributed("2 * (x - 3)"), "2 * x - 2 * 3");
    }

    #[test]
    fn plain_products_are_untouched() {
        let mut tree = Parser::new("2 * x", "x").parse().unwrap();
        let root = tree.root();
        assert!(!distribute(&mut tree, root));
        assert_eq!(render(&tree, " "), "2 * x");
    }
}
