/*!
Reads a formula as a sequence of [positioned tokens](crate::structures::token::PositionedToken).

The scanner is an iterator, and reads a token only when asked to.
Whitespace is skipped, though counts toward the position of later tokens.

```rust
# use ergo_lib::procedures::scan::Scanner;
# use ergo_lib::structures::{atom::Atom, operator::Operator, token::Token};
let tokens = Scanner::new("a => ~b").collect::<Result<Vec<_>, _>>();

assert_eq!(
    tokens,
    Ok(vec![
        (0, Token::Atomic(Atom::A)),
        (2, Token::Operator(Operator::Implies)),
        (5, Token::Operator(Operator::Not)),
        (6, Token::Atomic(Atom::B)),
    ])
);
```

The scanner expects a lower-case formula.
Upper-case symbols are invalid tokens, and so the [parser](crate::procedures::parse) lower-cases a formula before handing it over.

# Errors

- An empty formula is an [EmptyExpression](ErrorKind::EmptyExpression) at position zero.
- The first character which does not begin a token (or whitespace) is an [InvalidToken](ErrorKind::InvalidToken).
  The invalid token is the string from that character up to the next readable token, or the end of the formula.

After an error the scanner is exhausted.
*/

use crate::{
    misc::log::targets::{self},
    structures::{atom::Atom, operator::Operator, token::{PositionedToken, Token}},
    types::err::{self, ErrorKind, Position},
};

/// Something read from the start of a string, and the count of bytes read.
enum Reading {
    Whitespace(usize),
    Token(Token, usize),
}

/// Reads the (single) token or whitespace character at the start of a string, if possible.
fn read(string: &str) -> Option<Reading> {
    let character = string.chars().next()?;

    if character.is_whitespace() {
        return Some(Reading::Whitespace(character.len_utf8()));
    }

    if let Some(operator) = Operator::from_prefix(string) {
        return Some(Reading::Token(Token::Operator(operator), operator.symbol().len()));
    }

    let token = match character {
        '(' => Token::LParen,
        ')' => Token::RParen,
        _ => Token::Atomic(Atom::from_symbol(character)?),
    };
    Some(Reading::Token(token, character.len_utf8()))
}

/// An iterator over the tokens of a formula.
pub struct Scanner {
    formula: String,

    /// The byte index of the next character to read.
    byte: usize,

    /// The position of the next character to read.
    position: Position,

    exhausted: bool,
}

impl Scanner {
    /// A scanner over the given (lower-case) formula.
    pub fn new(formula: impl Into<String>) -> Self {
        Scanner {
            formula: formula.into(),
            byte: 0,
            position: 0,
            exhausted: false,
        }
    }

    fn fail(&mut self, kind: ErrorKind) -> err::SyntaxError {
        self.exhausted = true;
        let error = err::SyntaxError::new(self.position, kind);
        log::debug!(target: targets::SCAN, "{error}");
        error
    }

    /// The string from the next character up to the next readable token or whitespace.
    fn unreadable(&self) -> String {
        let rest = &self.formula[self.byte..];
        let end = rest
            .char_indices()
            .skip(1)
            .find(|(index, _)| read(&rest[*index..]).is_some())
            .map_or(rest.len(), |(index, _)| index);
        rest[..end].to_string()
    }
}

impl Iterator for Scanner {
    type Item = Result<PositionedToken, err::SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if self.formula.is_empty() {
            return Some(Err(self.fail(ErrorKind::EmptyExpression)));
        }

        loop {
            let rest = &self.formula[self.byte..];
            if rest.is_empty() {
                self.exhausted = true;
                return None;
            }

            match read(rest) {
                None => {
                    let text = self.unreadable();
                    return Some(Err(self.fail(ErrorKind::InvalidToken(text))));
                }

                Some(Reading::Whitespace(length)) => {
                    self.byte += length;
                    self.position += 1;
                }

                Some(Reading::Token(token, length)) => {
                    let position = self.position;
                    self.byte += length;
                    self.position += token.width();
                    log::debug!(target: targets::SCAN, "Read '{token}' at {position}");
                    return Some(Ok((position, token)));
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner {}
