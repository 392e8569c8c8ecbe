//! Tokens, as read from a formula by the [scanner](crate::procedures::scan).

use crate::{
    structures::{atom::Atom, operator::Operator},
    types::err::Position,
};

/// A token of a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Atomic(Atom),
    Operator(Operator),
    LParen,
    RParen,
}

/// A token paired with the position of the formula at which it begins.
pub type PositionedToken = (Position, Token);

impl Token {
    /// Whether the token ends an expression, i.e. is an atom or a closing parenthesis.
    pub fn ends_expression(&self) -> bool {
        matches!(self, Token::Atomic(_) | Token::RParen)
    }

    /// A count of the characters used to write the token.
    pub fn width(&self) -> usize {
        match self {
            Token::Operator(operator) => operator.symbol().chars().count(),
            _ => 1,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Atomic(atom) => write!(f, "{atom}"),
            Token::Operator(operator) => write!(f, "{operator}"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}
