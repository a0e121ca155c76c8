//! Recursive-descent evaluation of a fully numeric expression string.
//!
//! This is the solver's arithmetic backend. It never sees the AST: the solver substitutes a
//! number for the variable in the raw infix text and hands the resulting string here.
//!
//! Grammar, with `^` and unary signs binding at the factor level:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := ('+' | '-') factor
//!             | '(' expression ')' ['^' factor]
//!             | number ['^' factor]
//!             | letters factor
//! ```
//!
//! A run of lowercase letters carries no meaning of its own; the factor after it passes through
//! unchanged. Substituted input contains no letters, so the rule only matters for raw text.

use crate::numerical::error::{
    Error, InvalidNumber, TrailingInput, UnexpectedChar, UnexpectedEnd,
};

/// Evaluates a numeric expression string.
pub fn eval(src: &str) -> Result<f64, Error> {
    let mut cursor = Cursor { src, pos: 0 };
    let value = cursor.expression()?;
    cursor.skip_spaces();
    if cursor.pos < cursor.src.len() {
        return Err(Error::new(vec![cursor.pos..cursor.src.len()], TrailingInput));
    }
    Ok(value)
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn byte(&self, at: usize) -> Option<u8> {
        self.src.as_bytes().get(at).copied()
    }

    fn skip_spaces(&mut self) {
        while self.byte(self.pos) == Some(b' ') {
            self.pos += 1;
        }
    }

    /// Consumes the given byte if it is next, skipping spaces first.
    fn eat(&mut self, byte: u8) -> bool {
        self.skip_spaces();
        if self.byte(self.pos) == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expression(&mut self) -> Result<f64, Error> {
        let mut value = self.term()?;
        loop {
            if self.eat(b'+') {
                value += self.term()?;
            } else if self.eat(b'-') {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> Result<f64, Error> {
        let mut value = self.factor()?;
        loop {
            if self.eat(b'*') {
                value *= self.factor()?;
            } else if self.eat(b'/') {
                value /= self.factor()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn factor(&mut self) -> Result<f64, Error> {
        if self.eat(b'+') {
            return self.factor();
        }
        if self.eat(b'-') {
            return Ok(-self.factor()?);
        }

        self.skip_spaces();
        let mut value = match self.byte(self.pos) {
            Some(b'(') => {
                self.pos += 1;
                let value = self.expression()?;
                self.eat(b')');
                value
            }
            Some(byte) if byte.is_ascii_digit() || byte == b'.' => self.number()?,
            Some(byte) if byte.is_ascii_lowercase() => {
                while self.byte(self.pos).is_some_and(|b| b.is_ascii_lowercase()) {
                    self.pos += 1;
                }
                self.factor()?
            }
            Some(_) => {
                // always a char boundary: everything meaningful to the grammar is ascii
                let found = self.src[self.pos..].chars().next().unwrap_or('\0');
                let span = self.pos..self.pos + found.len_utf8();
                return Err(Error::new(vec![span], UnexpectedChar { found }));
            }
            None => {
                return Err(Error::new(vec![self.pos..self.pos], UnexpectedEnd));
            }
        };

        if self.eat(b'^') {
            value = value.powf(self.factor()?);
        }
        Ok(value)
    }

    fn number(&mut self) -> Result<f64, Error> {
        let start = self.pos;
        while self
            .byte(self.pos)
            .is_some_and(|b| b.is_ascii_digit() || b == b'.')
        {
            self.pos += 1;
        }
        let text = &self.src[start..self.pos];
        text.parse().map_err(|_| {
            Error::new(
                vec![start..self.pos],
                InvalidNumber { text: text.to_string() },
            )
        })
    }
}
