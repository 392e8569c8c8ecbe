/*!
Expressions, as trees.

An expression is built once by the [compiler](crate::procedures::compile), and is never mutated afterwards.

Expressions display fully parenthesised, in the same notation as the input, though without parentheses around the whole expression or around a negated atom or negation.

```rust
# use ergo_lib::structures::atom::Atom;
# use ergo_lib::structures::expression::Expression;
let a = Expression::atomic(Atom::A);
let b = Expression::atomic(Atom::B);
let c = Expression::atomic(Atom::C);

let expression = Expression::or(Expression::and(a, b), Expression::not(c));
assert_eq!(expression.to_string(), "(a ^ b) v ~c");
```

# Depth

The depth of an expression is bounded only by the length of the formula it was compiled from, e.g. `~~~~a` or `((((a))))`.
So, every walk through an expression keeps its own stack of pending work, rather than recursing.
This includes [evaluation](crate::procedures::evaluate), display, comparison, cloning, and dropping.
*/

use crate::structures::{atom::Atom, operator::Operator};

/// An expression.
#[derive(Debug, Eq)]
pub enum Expression {
    Atomic(Atom),
    Not(Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
    Implies(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn atomic(atom: Atom) -> Self {
        Expression::Atomic(atom)
    }

    pub fn not(operand: Expression) -> Self {
        Expression::Not(Box::new(operand))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Expression, right: Expression) -> Self {
        Expression::Implies(Box::new(left), Box::new(right))
    }

    /// The expression built by applying a binary operator to a pair of expressions.
    ///
    /// Returns `None` if the operator is not binary.
    pub fn binary(operator: Operator, left: Expression, right: Expression) -> Option<Self> {
        match operator {
            Operator::Implies => Some(Expression::implies(left, right)),
            Operator::Or => Some(Expression::or(left, right)),
            Operator::And => Some(Expression::and(left, right)),
            Operator::Not => None,
        }
    }

    /// The operator and operands of a binary expression, if the expression is binary.
    pub fn binary_parts(&self) -> Option<(Operator, &Expression, &Expression)> {
        match self {
            Expression::Atomic(_) | Expression::Not(_) => None,
            Expression::And(left, right) => Some((Operator::And, &**left, &**right)),
            Expression::Or(left, right) => Some((Operator::Or, &**left, &**right)),
            Expression::Implies(left, right) => Some((Operator::Implies, &**left, &**right)),
        }
    }

    /// A copy of the expression with each operand replaced by a placeholder atom.
    fn shell(&self) -> Expression {
        let placeholder = || Box::new(Expression::Atomic(Atom::A));
        match self {
            Expression::Atomic(atom) => Expression::Atomic(*atom),
            Expression::Not(_) => Expression::Not(placeholder()),
            Expression::And(..) => Expression::And(placeholder(), placeholder()),
            Expression::Or(..) => Expression::Or(placeholder(), placeholder()),
            Expression::Implies(..) => Expression::Implies(placeholder(), placeholder()),
        }
    }

    /// Moves each non-atomic operand to `detached`, leaving an atom in its place.
    fn detach_operands(&mut self, detached: &mut Vec<Expression>) {
        let mut detach = |operand: &mut Expression| {
            if !matches!(operand, Expression::Atomic(_)) {
                detached.push(std::mem::replace(operand, Expression::Atomic(Atom::A)));
            }
        };

        match self {
            Expression::Atomic(_) => {}
            Expression::Not(operand) => detach(&mut **operand),
            Expression::And(left, right)
            | Expression::Or(left, right)
            | Expression::Implies(left, right) => {
                detach(&mut **left);
                detach(&mut **right);
            }
        }
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut detached = Vec::default();
        self.detach_operands(&mut detached);
        // Each detached expression is dropped with atoms for operands.
        while let Some(mut expression) = detached.pop() {
            expression.detach_operands(&mut detached);
        }
    }
}

impl Clone for Expression {
    fn clone(&self) -> Self {
        let mut copy = Expression::Atomic(Atom::A);
        let mut pending: Vec<(&Expression, &mut Expression)> = vec![(self, &mut copy)];

        while let Some((source, target)) = pending.pop() {
            *target = source.shell();
            match (source, target) {
                (Expression::Not(source), Expression::Not(target)) => {
                    pending.push((&**source, &mut **target))
                }

                (Expression::And(source_l, source_r), Expression::And(target_l, target_r))
                | (Expression::Or(source_l, source_r), Expression::Or(target_l, target_r))
                | (Expression::Implies(source_l, source_r), Expression::Implies(target_l, target_r)) => {
                    pending.push((&**source_l, &mut **target_l));
                    pending.push((&**source_r, &mut **target_r));
                }

                _ => {}
            }
        }

        copy
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (Expression::Atomic(a), Expression::Atomic(b)) => {
                    if a != b {
                        return false;
                    }
                }

                (Expression::Not(a), Expression::Not(b)) => pending.push((&**a, &**b)),

                (Expression::And(a_l, a_r), Expression::And(b_l, b_r))
                | (Expression::Or(a_l, a_r), Expression::Or(b_l, b_r))
                | (Expression::Implies(a_l, a_r), Expression::Implies(b_l, b_r)) => {
                    pending.push((&**a_l, &**b_l));
                    pending.push((&**a_r, &**b_r));
                }

                _ => return false,
            }
        }

        true
    }
}

/// Something left to write when displaying an expression.
enum Piece<'e> {
    Expression(&'e Expression),
    /// An expression which is parenthesised if binary.
    Operand(&'e Expression),
    Text(&'static str),
    Operator(Operator),
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = vec![Piece::Expression(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,

                Piece::Operator(operator) => write!(f, " {operator} ")?,

                Piece::Operand(expression) => match expression.binary_parts() {
                    None => pending.push(Piece::Expression(expression)),
                    Some(_) => {
                        f.write_str("(")?;
                        pending.push(Piece::Text(")"));
                        pending.push(Piece::Expression(expression));
                    }
                },

                Piece::Expression(Expression::Atomic(atom)) => write!(f, "{atom}")?,

                Piece::Expression(Expression::Not(operand)) => {
                    write!(f, "{}", Operator::Not)?;
                    pending.push(Piece::Operand(&**operand));
                }

                Piece::Expression(expression) => {
                    if let Some((operator, left, right)) = expression.binary_parts() {
                        pending.push(Piece::Operand(right));
                        pending.push(Piece::Operator(operator));
                        pending.push(Piece::Operand(left));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let a = || Expression::atomic(Atom::A);
        let b = || Expression::atomic(Atom::B);

        assert_eq!(Expression::implies(a(), b()).to_string(), "a => b");
        assert_eq!(Expression::not(Expression::not(a())).to_string(), "~~a");
        assert_eq!(Expression::not(Expression::or(a(), b())).to_string(), "~(a v b)");
        assert_eq!(
            Expression::implies(Expression::implies(a(), b()), a()).to_string(),
            "(a => b) => a"
        );
    }

    #[test]
    fn comparison() {
        let a = || Expression::atomic(Atom::A);
        let b = || Expression::atomic(Atom::B);

        assert_eq!(Expression::and(a(), b()), Expression::and(a(), b()));
        assert_ne!(Expression::and(a(), b()), Expression::and(b(), a()));
        assert_ne!(Expression::and(a(), b()), Expression::or(a(), b()));
        assert_ne!(Expression::not(a()), a());
    }

    #[test]
    fn clone_is_equal() {
        let a = || Expression::atomic(Atom::A);
        let b = || Expression::atomic(Atom::B);
        let expression = Expression::implies(
            Expression::not(Expression::or(a(), b())),
            Expression::and(b(), Expression::not(a())),
        );
        let copy = expression.clone();
        assert_eq!(copy, expression);
        assert_eq!(copy.to_string(), "~(a v b) => (b ^ ~a)");
    }

    #[test]
    fn binary_parts() {
        let a = || Expression::atomic(Atom::A);
        let b = || Expression::atomic(Atom::B);
        let expression = Expression::or(a(), b());

        assert_eq!(expression.binary_parts(), Some((Operator::Or, &a(), &b())));
        assert_eq!(Expression::not(a()).binary_parts(), None);
        assert_eq!(a().binary_parts(), None);
    }

    #[test]
    fn deep_expressions() {
        let mut negations = Expression::atomic(Atom::A);
        let mut conjunctions = Expression::atomic(Atom::A);
        for _ in 0..200_000 {
            negations = Expression::not(negations);
            conjunctions = Expression::and(Expression::atomic(Atom::B), conjunctions);
        }

        let copy = negations.clone();
        assert!(copy == negations);
        assert!(negations.to_string().ends_with("~~~a"));
        assert!(conjunctions.to_string().ends_with("(b ^ a))"));
        assert!(conjunctions.clone() == conjunctions);
        assert!(conjunctions != negations);
    }

    #[test]
    fn binary_construction() {
        let a = Expression::atomic(Atom::A);
        assert!(Expression::binary(Operator::Not, a.clone(), a.clone()).is_none());
        assert_eq!(
            Expression::binary(Operator::And, a.clone(), a.clone()),
            Some(Expression::and(a.clone(), a))
        );
    }
}
