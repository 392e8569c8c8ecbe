//! Error types used in the library.
//!
//! All errors arise while compiling a formula, and each is paired with the (zero-based, character) position of the input at which the issue was noted.
//! - Scanning errors are noted at the first character which could not be read.
//! - Parsing errors are noted at the token which broke the grammar, or the operator which lacks an operand.
//!
//! Evaluation and entailment are total, and so have no errors.
//!
//! Names of the error enums overlap with the stage of compilation they are noted at.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{operator::Operator, token::Token};

/// A position in a (lower-cased) formula, counted in characters from zero.
pub type Position = usize;

/// The kinds of error which may be noted when compiling a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The formula was an empty string, or contained only whitespace.
    EmptyExpression,

    /// Some characters which do not begin any token.
    /// The string is the unreadable characters, up to the next readable token.
    InvalidToken(String),

    /// An operator is missing some (left or right) operand.
    MissingOperand(Operator),

    /// Two expressions are adjacent, without some connecting operator.
    /// The tokens are the end of the first expression and the start of the second.
    MissingOperator(Token, Token),

    /// A pair of parentheses with nothing between.
    EmptyParentheses,

    /// An opening parenthesis without a matching close.
    UnmatchedOpenParen,

    /// A closing parenthesis without a matching open.
    UnmatchedCloseParen,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "empty expression"),
            Self::InvalidToken(text) => write!(f, "invalid token '{text}'"),
            Self::MissingOperand(operator) => write!(f, "missing operand for '{operator}'"),
            Self::MissingOperator(before, after) => {
                write!(f, "missing operator between '{before}' and '{after}'")
            }
            Self::EmptyParentheses => write!(f, "empty parentheses"),
            Self::UnmatchedOpenParen => write!(f, "unpaired opening parenthesis"),
            Self::UnmatchedCloseParen => write!(f, "unpaired closing parenthesis"),
        }
    }
}

/// A syntax error, noted at some position of a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntaxError {
    /// Where the error was noted.
    pub position: Position,

    /// What the error is.
    pub kind: ErrorKind,
}

impl SyntaxError {
    pub fn new(position: Position, kind: ErrorKind) -> Self {
        SyntaxError { position, kind }
    }

    /// The message to display for the error, without the position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pos={}: {}", self.position, self.kind)
    }
}

impl std::error::Error for SyntaxError {}
