/*!
Evaluates an expression under a valuation.

Evaluation is by structure, though an explicit stack is kept in place of recursion:
- An atom has the value given to it by the valuation.
- Each operator combines the values of its operands:

| expression | value                 |
|------------|-----------------------|
| `~p`       | `!p`                  |
| `p ^ q`    | `p && q`              |
| `p v q`    | `p \|\| q`            |
| `p => q`   | `!p \|\| q`           |

As every valuation is full, evaluation always returns a value.

```rust
# use ergo_lib::procedures::compile::compile;
# use ergo_lib::structures::valuation::Assignment;
let premise = compile("a => b").unwrap();

// a true, b false, c false, d false
let counterexample = Assignment::try_from(0b1000).unwrap();
assert!(!premise.expression().evaluate(&counterexample));

// a false, and so the implication holds
let vacuous = Assignment::try_from(0b0000).unwrap();
assert!(premise.expression().evaluate(&vacuous));
```
*/

use crate::structures::{expression::Expression, operator::Operator, valuation::Valuation};

/// Work left to do when evaluating an expression.
enum Step<'e> {
    /// Evaluate the expression, leaving its value on the stack of values.
    Evaluate(&'e Expression),

    /// Apply the operator to the value(s) on top of the stack of values.
    Apply(Operator),
}

impl Expression {
    /// The value of the expression under the given valuation.
    ///
    /// The operands of each operator are evaluated before the operator is applied, left operand first.
    pub fn evaluate(&self, valuation: &impl Valuation) -> bool {
        let mut steps = vec![Step::Evaluate(self)];
        let mut values: Vec<bool> = Vec::default();

        while let Some(step) = steps.pop() {
            match step {
                Step::Evaluate(Expression::Atomic(atom)) => values.push(valuation.value_of(*atom)),

                Step::Evaluate(Expression::Not(operand)) => {
                    steps.push(Step::Apply(Operator::Not));
                    steps.push(Step::Evaluate(&**operand));
                }

                Step::Evaluate(expression) => {
                    if let Some((operator, left, right)) = expression.binary_parts() {
                        steps.push(Step::Apply(operator));
                        steps.push(Step::Evaluate(right));
                        steps.push(Step::Evaluate(left));
                    }
                }

                Step::Apply(Operator::Not) => {
                    if let Some(value) = values.last_mut() {
                        *value = !*value;
                    }
                }

                Step::Apply(operator) => {
                    if let (Some(right), Some(left)) = (values.pop(), values.last_mut()) {
                        *left = match operator {
                            Operator::And => *left && right,
                            Operator::Or => *left || right,
                            _ => !*left || right,
                        };
                    }
                }
            }
        }

        // The value of the whole expression is all that remains.
        values.pop() == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::structures::{atom::Atom, expression::Expression, valuation::Assignment};

    fn truth_table(expression: &Expression, atoms: [Atom; 2]) -> [bool; 4] {
        // Rows are (true, true), (true, false), (false, true), (false, false).
        let mut table = [false; 4];
        for (row, (left, right)) in [(true, true), (true, false), (false, true), (false, false)]
            .into_iter()
            .enumerate()
        {
            let mut valuation = [false; 4];
            valuation[atoms[0].index()] = left;
            valuation[atoms[1].index()] = right;
            table[row] = expression.evaluate(&valuation);
        }
        table
    }

    #[test]
    fn connectives() {
        let a = || Expression::atomic(Atom::A);
        let b = || Expression::atomic(Atom::B);
        let atoms = [Atom::A, Atom::B];

        assert_eq!(truth_table(&Expression::and(a(), b()), atoms), [true, false, false, false]);
        assert_eq!(truth_table(&Expression::or(a(), b()), atoms), [true, true, true, false]);
        assert_eq!(truth_table(&Expression::implies(a(), b()), atoms), [true, false, true, true]);
        assert_eq!(truth_table(&Expression::not(a()), atoms), [false, false, true, true]);
    }

    #[test]
    fn nested() {
        let a = || Expression::atomic(Atom::A);
        let b = || Expression::atomic(Atom::B);
        // (a => b) => a, which is true exactly when a is
        let peirce = Expression::implies(Expression::implies(a(), b()), a());
        assert_eq!(truth_table(&peirce, [Atom::A, Atom::B]), [true, true, false, false]);

        // ~(a ^ ~b) v (b => ~a)
        let mixed = Expression::or(
            Expression::not(Expression::and(a(), Expression::not(b()))),
            Expression::implies(b(), Expression::not(a())),
        );
        assert_eq!(truth_table(&mixed, [Atom::A, Atom::B]), [true, true, true, true]);
    }

    #[test]
    fn deep_negation() {
        let mut expression = Expression::atomic(Atom::C);
        for _ in 0..200_001 {
            expression = Expression::not(expression);
        }
        let only_c = Assignment::try_from(0b0010).unwrap();
        assert!(!expression.evaluate(&only_c));
        assert!(expression.evaluate(&Assignment::try_from(0).unwrap()));
    }

    #[test]
    fn atoms_read_the_assignment() {
        for assignment in Assignment::all() {
            let bits = assignment.bits();
            assert_eq!(Expression::atomic(Atom::A).evaluate(&assignment), bits & 0b1000 != 0);
            assert_eq!(Expression::atomic(Atom::D).evaluate(&assignment), bits & 0b0001 != 0);
        }
    }
}
