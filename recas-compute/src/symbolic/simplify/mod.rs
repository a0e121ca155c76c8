//! The fixed-point simplification loop.

pub mod distribute;
pub mod fold;

use crate::symbolic::canonical::canonicalize;
use crate::symbolic::render::render;
use crate::symbolic::trace::PassTrace;
use recas_parser::ast::{NodeId, Tree};

/// Simplifies the tree in place until the rendered infix form stops changing.
///
/// Each pass walks the tree root first and applies, per node: canonicalize, distribute once,
/// fold constants, canonicalize again, refresh parent links, then recurse into both children.
/// The loop compares the rendered text after each pass rather than tree structure, so two
/// structurally different trees that print the same count as converged. Every pass is reported
/// to `trace`, including the final unchanged one.
pub fn simplify_tree(tree: &mut Tree, trace: &mut dyn PassTrace) {
    let mut rendered = render(tree, "");
    let mut pass = 0;
    loop {
        simplify_pass(tree, tree.root());
        pass += 1;

        let now = render(tree, "");
        trace.record(pass, &now);
        if now == rendered {
            return;
        }
        rendered = now;
    }
}

fn simplify_pass(tree: &mut Tree, node: NodeId) {
    canonicalize(tree, node);
    distribute::distribute(tree, node);
    fold::fold_constants(tree, node);
    canonicalize(tree, node);
    tree.fix_parents(tree.root());

    if let Some([lhs, rhs]) = tree.children(node) {
        simplify_pass(tree, lhs);
        simplify_pass(tree, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::trace::NoTrace;
    use pretty_assertions::assert_eq;
    use recas_parser::Parser;

    fn simplified(input: &str, variables: &str) -> String {
        let mut tree = Parser::new(input, variables).parse().unwrap();
        simplify_tree(&mut tree, &mut NoTrace);
        render(&tree, "")
    }

    #[test]
    fn constant_arithmetic_collapses() {
        assert_eq!(simplified("2 + 3", ""), "5");
        assert_eq!(simplified("2 * (3 + 4)", ""), "14");
        assert_eq!(simplified("2 ^ 3 ^ 2", ""), "512");
    }

    #[test]
    fn distribution_unfolds_products_over_sums() {
        assert_eq!(simplified("(x + 1) * 2", "x"), "2*x^1+2");
    }

    #[test]
    fn subtraction_folds_through_negation() {
        assert_eq!(simplified("x - 2 - 3", "x"), "x^1-5");
    }

    #[test]
    fn output_is_a_fixed_point() {
        let once = simplified("(x + 1) * 2 + 3 * x - 4", "x");
        let twice = simplified(&once, "x");
        assert_eq!(once, twice);
    }

    #[test]
    fn trace_sees_every_pass() {
        let mut tree = Parser::new("2 + 3", "").parse().unwrap();
        let mut passes: Vec<String> = Vec::new();
        simplify_tree(&mut tree, &mut passes);

        // the last recorded pass is the unchanged one that ended the loop
        assert!(passes.len() >= 2);
        assert_eq!(passes.last().map(String::as_str), Some("5"));
        assert_eq!(passes[passes.len() - 2], "5");
    }
}
