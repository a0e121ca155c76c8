//! Root scanning over a fixed range of starting guesses.

use crate::numerical::error::Error;
use crate::numerical::newton::newton;
use std::ops::RangeInclusive;

/// Integer starting guesses handed to Newton's method.
const GUESSES: RangeInclusive<i32> = -100..=100;

/// Serialized solution lists longer than this are assumed to be divergence garbage and are
/// replaced with an empty list.
const GARBAGE_LIMIT: usize = 100;

/// Approximates the roots of `expression = 0` and formats them as `<variable> = [r1, r2, ...]`.
///
/// Every guess in the scan range runs to completion; results are deduplicated by exact bit
/// equality, so `NaN` collapses to one entry and `0.0`/`-0.0` stay distinct. A wildly long
/// result list means the iteration never settled anywhere, and the whole list is discarded.
pub fn solve_equation(expression: &str, variable: char) -> Result<String, Error> {
    let mut roots: Vec<f64> = Vec::new();
    for guess in GUESSES {
        // evaluator spans point into the substituted text, which the caller never sees;
        // re-span onto the whole expression the caller supplied
        let root = newton(expression, variable, f64::from(guess))
            .map_err(|err| Error { spans: vec![0..expression.len()], kind: err.kind })?;
        push_distinct(&mut roots, root);
    }

    let list = roots
        .iter()
        .map(|root| format!("{:?}", root))
        .collect::<Vec<_>>()
        .join(", ");
    let output = format!("{} = [{}]", variable, list);

    if output.len() > GARBAGE_LIMIT {
        return Ok(format!("{} = []", variable));
    }
    Ok(output)
}

/// Appends the root unless an earlier root has the same bit pattern. `NaN` therefore equals
/// `NaN`, and `0.0` and `-0.0` stay distinct.
fn push_distinct(roots: &mut Vec<f64>, root: f64) {
    if !roots.iter().any(|seen| seen.to_bits() == root.to_bits()) {
        roots.push(root);
    }
}
