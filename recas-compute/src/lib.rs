//! The recas computation engine.
//!
//! Two independent pipelines share the parser's expression [`Tree`](recas_parser::ast::Tree):
//!
//! - [`simplify`] parses infix text and runs the symbolic rewrite loop (canonicalize,
//!   distribute, fold constants) to a fixed point, returning the rendered result.
//! - [`solve`] never builds a tree at all; it substitutes numeric guesses directly into the
//!   infix text and runs Newton's method over the whole guess range.

pub mod numerical;
pub mod symbolic;

use recas_error::Error;
use recas_parser::Parser;
use symbolic::render::render;
use symbolic::simplify::simplify_tree;
use symbolic::trace::{NoTrace, PassTrace};

/// Simplifies an infix expression over the given single-letter variable names.
pub fn simplify(variables: &str, infix: &str) -> Result<String, Error> {
    simplify_with(variables, infix, &mut NoTrace)
}

/// Like [`simplify`], reporting every pass of the rewrite loop to `trace`.
pub fn simplify_with(
    variables: &str,
    infix: &str,
    trace: &mut dyn PassTrace,
) -> Result<String, Error> {
    let mut tree = Parser::new(infix, variables).parse()?;
    simplify_tree(&mut tree, trace);
    Ok(render(&tree, ""))
}

/// Approximates the roots of `infix = 0`, solving for the first declared variable.
pub fn solve(variables: &str, infix: &str) -> Result<String, Error> {
    let Some(variable) = variables.chars().next() else {
        return Err(Error::new(
            vec![0..infix.len()],
            numerical::error::MissingVariable,
        ));
    };
    numerical::solve::solve_equation(infix, variable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;
    use numerical::eval::eval;
    use numerical::newton::substitute;
    use pretty_assertions::assert_eq;

    /// Evaluates rendered output at a sample point by substituting into the text.
    fn value_at(rendered: &str, x: f64) -> f64 {
        eval(&substitute(rendered, 'x', x)).unwrap()
    }

    #[test]
    fn plain_arithmetic_simplifies_to_one_constant() {
        assert_eq!(simplify("", "2 + 3").unwrap(), "5");
        assert_eq!(simplify("", "2 * (3 + 4) - 6 / 2").unwrap(), "11");
    }

    #[test]
    fn simplification_preserves_value() {
        let rendered = simplify("x", "(x + 1) * 2 + 3 * x - 4").unwrap();
        for x in [-2.0, -1.0, 0.0, 0.5, 1.0, 2.0, 10.0] {
            assert_float_absolute_eq!(value_at(&rendered, x), 5.0 * x - 2.0, 1e-9);
        }
    }

    #[test]
    fn simplification_is_idempotent() {
        for input in ["(x + 1) * 2", "x - 2 - 3", "x * x", "2 * x ^ 3 + x"] {
            let once = simplify("x", input).unwrap();
            let twice = simplify("x", &once).unwrap();
            assert_eq!(once, twice, "input {input}");
        }
    }

    #[test]
    fn solve_finds_parabola_roots() {
        let output = solve("x", "x^2-1").unwrap();
        assert!(output.contains("1.0") && output.contains("-1.0"), "got {output}");
    }

    #[test]
    fn solve_without_variables_is_an_error() {
        assert!(solve("", "2 + 2").is_err());
    }

    #[test]
    fn malformed_input_is_reported_not_panicked() {
        assert!(simplify("x", "x + * 2").is_err());
        assert!(simplify("x", "(x + 1").is_err());
    }
}
