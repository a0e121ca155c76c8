//! Newton's method over the text-substituting evaluator.

use crate::numerical::error::Error;
use crate::numerical::eval::eval;

/// Iterations run per guess. The fixed count is the only stopping condition; there is no
/// convergence or divergence check.
const ITERATIONS: u32 = 1000;

/// Step for the forward-difference derivative estimate.
const STEP: f64 = 0.0001;

/// Replaces every occurrence of `variable` in the expression text with the value as a
/// parenthesized decimal literal.
pub fn substitute(expression: &str, variable: char, value: f64) -> String {
    let literal = decimal_literal(value);
    let mut out = String::with_capacity(expression.len() + literal.len());
    for c in expression.chars() {
        if c == variable {
            out.push('(');
            out.push_str(&literal);
            out.push(')');
        } else {
            out.push(c);
        }
    }
    out
}

/// Formats a value as a plain decimal with up to 8 fractional digits and no exponent, the only
/// shape the evaluator's number grammar accepts.
fn decimal_literal(value: f64) -> String {
    let mut text = format!("{:.8}", value);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Runs a fixed number of Newton iterations from `guess` and rounds the result to 3 decimal
/// places. A non-finite iterate can never recover, so the loop bails out early and hands the
/// value to the caller's dedup and garbage filtering.
pub fn newton(expression: &str, variable: char, guess: f64) -> Result<f64, Error> {
    let mut x = guess;
    for _ in 0..ITERATIONS {
        if !x.is_finite() {
            break;
        }
        let here = eval(&substitute(expression, variable, x))?;
        let ahead = eval(&substitute(expression, variable, x + STEP))?;
        let slope = (ahead - here) / STEP;
        x -= here / slope;
    }
    Ok(round_to_3(x))
}

/// Half-up rounding to 3 decimal places.
fn round_to_3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn substitution_parenthesizes_the_value() {
        assert_eq!(substitute("x^2-x", 'x', -2.0), "(-2)^2-(-2)");
        assert_eq!(substitute("y+1", 'y', 0.5), "(0.5)+1");
    }

    #[test]
    fn literals_stay_plain_decimal() {
        assert_eq!(decimal_literal(3.0), "3");
        assert_eq!(decimal_literal(0.125), "0.125");
        assert_eq!(decimal_literal(1e-7), "0.0000001");
        assert_eq!(decimal_literal(1e12), "1000000000000");
    }

    #[test]
    fn converges_to_a_nearby_root() {
        // x^2 - 4 = 0 from either side
        assert_float_absolute_eq!(newton("x^2-4", 'x', 3.0).unwrap(), 2.0, 1e-3);
        assert_float_absolute_eq!(newton("x^2-4", 'x', -5.0).unwrap(), -2.0, 1e-3);
    }

    #[test]
    fn exact_root_guess_stays_put() {
        assert_eq!(newton("x^2-1", 'x', 1.0).unwrap(), 1.0);
    }

    #[test]
    fn non_finite_iterates_bail_out_instead_of_erroring() {
        // 0/0 poisons the first iterate; re-substituting NaN text would fail evaluation
        assert!(newton("x*0/0", 'x', 1.0).unwrap().is_nan());
    }

    #[test]
    fn rounding_is_to_3_places() {
        assert_eq!(round_to_3(0.12345), 0.123);
        assert_eq!(round_to_3(0.1235), 0.124);
        assert_eq!(round_to_3(-2.0004), -2.0);
    }
}
