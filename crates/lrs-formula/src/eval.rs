use std::collections::BTreeMap;

use crate::token::{Token, tokenize};

/// Evaluate `expr` against the closed `bindings` table.
///
/// Returns `None` for syntax errors, unknown identifiers, and non-finite
/// results (division by zero included). Callers treat `None` as "leave the
/// stored value alone".
pub fn evaluate(expr: &str, bindings: &BTreeMap<String, f64>) -> Option<f64> {
    let tokens = tokenize(expr)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        bindings,
    };
    let value = parser.expr()?;
    // Trailing tokens mean the expression was not fully consumed.
    if parser.pos != tokens.len() {
        return None;
    }
    value.is_finite().then_some(value)
}

/// Round to two decimal places, the precision derived values are stored at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    bindings: &'a BTreeMap<String, f64>,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn expr(&mut self) -> Option<f64> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Some(value)
    }

    fn term(&mut self) -> Option<f64> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    value /= self.factor()?;
                }
                _ => break,
            }
        }
        Some(value)
    }

    fn factor(&mut self) -> Option<f64> {
        match self.peek().cloned()? {
            Token::Minus => {
                self.pos += 1;
                Some(-self.factor()?)
            }
            Token::Number(value) => {
                self.pos += 1;
                Some(value)
            }
            Token::Ident(name) => {
                self.pos += 1;
                self.bindings.get(&name).copied()
            }
            Token::LParen => {
                self.pos += 1;
                let value = self.expr()?;
                match self.peek() {
                    Some(Token::RParen) => {
                        self.pos += 1;
                        Some(value)
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
