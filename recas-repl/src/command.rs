//! Recognition of the `simplify(...)` and `solve(...)` command forms.

/// A recognized command, carrying the bare infix expression and the variables found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `simplify(<expression>)`
    Simplify {
        /// Letters of the expression in first-seen order.
        variables: String,

        /// The expression between the outermost parentheses.
        infix: String,
    },

    /// `solve(<lhs> = <rhs>)`. The equation is rewritten to `<lhs>-(<rhs>)` up front, so a root
    /// of the difference is a solution of the equation.
    Solve {
        /// Letters of the rewritten expression in first-seen order.
        variables: String,

        /// The rewritten difference expression.
        infix: String,
    },
}

impl Command {
    /// The infix text the command operates on.
    pub fn infix(&self) -> &str {
        match self {
            Command::Simplify { infix, .. } | Command::Solve { infix, .. } => infix,
        }
    }
}

/// Recognizes a command line. Returns `None` for anything that is not a command form, including
/// a `solve` with no `=` inside.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();

    if input.starts_with("simplify(") {
        let infix = inner_text(input)?.to_string();
        let variables = variable_names(&infix);
        return Some(Command::Simplify { variables, infix });
    }

    if input.starts_with("solve(") {
        let inner = inner_text(input)?;
        let (lhs, rhs) = inner.split_once('=')?;
        let infix = format!("{}-({})", lhs.trim(), rhs.trim());
        let variables = variable_names(&infix);
        return Some(Command::Solve { variables, infix });
    }

    None
}

/// The text between the first `(` and the last `)`.
fn inner_text(input: &str) -> Option<&str> {
    let open = input.find('(')?;
    let close = input.rfind(')')?;
    input.get(open + 1..close)
}

/// Every letter of the expression in first-seen order, duplicates removed.
fn variable_names(infix: &str) -> String {
    let mut variables = String::new();
    for c in infix.chars() {
        if c.is_alphabetic() && !variables.contains(c) {
            variables.push(c);
        }
    }
    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simplify_extracts_the_inner_expression() {
        assert_eq!(
            parse_command("simplify((x + 1) * 2)"),
            Some(Command::Simplify {
                variables: "x".to_string(),
                infix: "(x + 1) * 2".to_string(),
            })
        );
    }

    #[test]
    fn solve_rewrites_the_equation_as_a_difference() {
        assert_eq!(
            parse_command("solve(x^2 = 2*x + 3)"),
            Some(Command::Solve {
                variables: "x".to_string(),
                infix: "x^2-(2*x + 3)".to_string(),
            })
        );
    }

    #[test]
    fn variables_keep_first_seen_order() {
        let Some(Command::Simplify { variables, .. }) = parse_command("simplify(y + x + y)")
        else {
            panic!("not a simplify command");
        };
        assert_eq!(variables, "yx");
    }

    #[test]
    fn unknown_forms_are_rejected() {
        assert_eq!(parse_command("factor(x^2)"), None);
        assert_eq!(parse_command("solve(x + 1)"), None);
        assert_eq!(parse_command(""), None);
    }
}
