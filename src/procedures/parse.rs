/*!
Parses a formula to postfix (aka. reverse Polish) notation, using the shunting-yard algorithm.

The parser is an iterator over the postfix tokens of a formula, and pulls tokens from a [scanner](crate::procedures::scan) only when more output is required.

```rust
# use ergo_lib::procedures::parse::Parser;
let postfix = Parser::new("A v ~b ^ c")
    .map(|item| item.map(|(_, token)| token.to_string()))
    .collect::<Result<Vec<_>, _>>()
    .unwrap();

assert_eq!(postfix.concat(), "ab~c^v");
```

# Grammar

Alongside the usual work of the shunting-yard algorithm, the parser checks each token against the token before it:

- An atom or opening parenthesis may not follow an atom or closing parenthesis, as there would be no operator between the two.
- A closing parenthesis may not follow an opening parenthesis, as the parentheses would be empty.
- A closing parenthesis may not follow an operator, as the operator would be missing an (right) operand.
- Negation may not follow an atom or closing parenthesis.
- A binary operator may not begin a formula, or follow an opening parenthesis, or follow an operator.

And, a formula may not end with an operator, and parentheses must be paired.

So, the output of the parser is always postfix notation of a well-formed formula, up to the first error.

# Precedence

A binary operator pops every operator of at least the same precedence from the stack before being pushed, and so binary operators are left-associative.
Negation is pushed without popping anything, as there is nothing to the left of a prefix operator, and this allows negations to stack, e.g. `~~a`.
*/

use std::collections::VecDeque;

use crate::{
    misc::log::targets::{self},
    procedures::scan::Scanner,
    structures::{
        operator::Operator,
        token::{PositionedToken, Token},
    },
    types::err::{self, ErrorKind, Position},
};

/// An iterator over the postfix tokens of a formula.
pub struct Parser {
    scanner: Scanner,

    /// Operators and opening parentheses waiting on the remainder of the formula.
    stack: Vec<PositionedToken>,

    /// The most recently read token, if any.
    previous: Option<PositionedToken>,

    /// Output which has been settled, but not yet returned.
    output: VecDeque<PositionedToken>,

    /// An error to return once all settled output has been returned.
    failure: Option<err::SyntaxError>,

    finished: bool,
}

impl Parser {
    /// A parser for the given formula, which is lower-cased before being read.
    pub fn new(formula: &str) -> Self {
        Parser {
            scanner: Scanner::new(formula.to_lowercase()),
            stack: Vec::default(),
            previous: None,
            output: VecDeque::default(),
            failure: None,
            finished: false,
        }
    }

    /// Ensures the token does not directly follow an expression.
    fn not_after_expression(&self, position: Position, token: Token) -> Result<(), err::SyntaxError> {
        if let Some((_, previous)) = self.previous {
            if previous.ends_expression() {
                let kind = ErrorKind::MissingOperator(previous, token);
                return Err(err::SyntaxError::new(position, kind));
            }
        }
        Ok(())
    }

    /// Ensures the previous token was not an operator.
    fn not_after_operator(&self) -> Result<(), err::SyntaxError> {
        if let Some((position, Token::Operator(operator))) = self.previous {
            let kind = ErrorKind::MissingOperand(operator);
            return Err(err::SyntaxError::new(position, kind));
        }
        Ok(())
    }

    /// Takes a token read from the formula.
    fn shunt(&mut self, position: Position, token: Token) -> Result<(), err::SyntaxError> {
        match token {
            Token::Atomic(_) => {
                self.not_after_expression(position, token)?;
                self.output.push_back((position, token));
            }

            Token::LParen => {
                self.not_after_expression(position, token)?;
                self.stack.push((position, token));
            }

            Token::RParen => {
                if let Some((open, Token::LParen)) = self.previous {
                    return Err(err::SyntaxError::new(open, ErrorKind::EmptyParentheses));
                }
                self.not_after_operator()?;

                loop {
                    match self.stack.pop() {
                        None => {
                            let kind = ErrorKind::UnmatchedCloseParen;
                            return Err(err::SyntaxError::new(position, kind));
                        }
                        Some((_, Token::LParen)) => break,
                        Some(pending) => self.output.push_back(pending),
                    }
                }
            }

            Token::Operator(Operator::Not) => {
                self.not_after_expression(position, token)?;
                self.stack.push((position, token));
            }

            Token::Operator(operator) => {
                // A binary operator with nothing to its left is noted here, so it is reported ahead of any later error.
                match self.previous {
                    None | Some((_, Token::LParen)) => {
                        let kind = ErrorKind::MissingOperand(operator);
                        return Err(err::SyntaxError::new(position, kind));
                    }
                    _ => self.not_after_operator()?,
                }

                while let Some(&(top_position, Token::Operator(top))) = self.stack.last() {
                    if top.precedence() < operator.precedence() {
                        break;
                    }
                    self.stack.pop();
                    self.output.push_back((top_position, Token::Operator(top)));
                }
                self.stack.push((position, token));
            }
        }

        self.previous = Some((position, token));
        Ok(())
    }

    /// Settles the remaining output, once the formula has been read.
    fn finish(&mut self) -> Result<(), err::SyntaxError> {
        self.finished = true;
        self.not_after_operator()?;

        while let Some((position, token)) = self.stack.pop() {
            match token {
                Token::LParen => {
                    let kind = ErrorKind::UnmatchedOpenParen;
                    return Err(err::SyntaxError::new(position, kind));
                }
                _ => self.output.push_back((position, token)),
            }
        }
        Ok(())
    }
}

impl Iterator for Parser {
    type Item = Result<PositionedToken, err::SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(settled) = self.output.pop_front() {
                return Some(Ok(settled));
            }

            if let Some(error) = self.failure.take() {
                log::debug!(target: targets::PARSE, "{error}");
                return Some(Err(error));
            }

            if self.finished {
                return None;
            }

            let result = match self.scanner.next() {
                Some(Ok((position, token))) => self.shunt(position, token),
                Some(Err(e)) => Err(e),
                None => self.finish(),
            };

            if let Err(e) = result {
                self.finished = true;
                self.failure = Some(e);
            }
        }
    }
}

impl std::iter::FusedIterator for Parser {}
