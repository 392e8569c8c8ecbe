/*!
Compiles a formula to an [expression](crate::structures::expression::Expression).

Compilation is in three stages:
1. The formula is [scanned](crate::procedures::scan) to tokens.
2. The tokens are [parsed](crate::procedures::parse) to postfix notation.
3. An expression is built from the postfix notation, using a stack of expressions.

The first two stages happen together, as each is an iterator, and [compile] runs all three.

```rust
# use ergo_lib::procedures::compile::compile;
let premise = compile("a => (B v c)").unwrap();
assert_eq!(premise.to_string(), "a => (b v c)");

let error = compile("a => ()").unwrap_err();
assert_eq!(error.position, 5);
assert_eq!(error.message(), "empty parentheses");
```

The final stage may also be used by itself, with [build_expression], on any postfix token sequence.
In this case the sequence is checked as it is used, as the sequence may not be the output of the parser.
*/

use crate::{
    misc::log::targets::{self},
    procedures::parse::Parser,
    structures::{
        expression::Expression,
        operator::Arity,
        premise::Premise,
        token::{PositionedToken, Token},
    },
    types::err::{self, ErrorKind},
};

/// Compiles the given formula to a premise.
pub fn compile(formula: &str) -> Result<Premise, err::SyntaxError> {
    let expression = build_expression(Parser::new(formula))?;
    log::debug!(target: targets::COMPILE, "Compiled '{formula}' to '{expression}'");
    Ok(Premise::new(formula, expression))
}

/// Builds an expression from a sequence of postfix tokens.
///
/// Any error in the sequence is returned as soon as it is found.
pub fn build_expression(
    postfix: impl IntoIterator<Item = Result<PositionedToken, err::SyntaxError>>,
) -> Result<Expression, err::SyntaxError> {
    // Each expression is paired with the token it was built from, to note any leftovers.
    let mut stack: Vec<(PositionedToken, Expression)> = Vec::default();

    for item in postfix {
        let (position, token) = item?;

        let expression = match token {
            Token::Atomic(atom) => Expression::atomic(atom),

            Token::Operator(operator) => {
                let missing = || err::SyntaxError::new(position, ErrorKind::MissingOperand(operator));

                let (_, right) = stack.pop().ok_or_else(missing)?;
                match operator.arity() {
                    Arity::Unary => Expression::not(right),
                    Arity::Binary => {
                        let (_, left) = stack.pop().ok_or_else(missing)?;
                        Expression::binary(operator, left, right).ok_or_else(missing)?
                    }
                }
            }

            // Parentheses never appear in postfix notation.
            Token::LParen => {
                return Err(err::SyntaxError::new(position, ErrorKind::UnmatchedOpenParen))
            }
            Token::RParen => {
                return Err(err::SyntaxError::new(position, ErrorKind::UnmatchedCloseParen))
            }
        };

        log::debug!(target: targets::COMPILE, "Built from '{token}' at {position}");
        stack.push(((position, token), expression));
    }

    let mut remaining = stack.into_iter();
    match (remaining.next(), remaining.next()) {
        (None, _) => Err(err::SyntaxError::new(0, ErrorKind::EmptyExpression)),

        (Some((_, expression)), None) => Ok(expression),

        (Some(((_, first), _)), Some(((position, second), _))) => {
            let kind = ErrorKind::MissingOperator(first, second);
            Err(err::SyntaxError::new(position, kind))
        }
    }
}

/// Builds an expression from a slice of postfix tokens.
pub fn build_from_tokens(postfix: &[PositionedToken]) -> Result<Expression, err::SyntaxError> {
    build_expression(postfix.iter().copied().map(Ok))
}
