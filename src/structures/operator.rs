/*!
The operators of a formula.

| operator              | symbol | arity  | precedence |
|-----------------------|--------|--------|------------|
| [Implies](Operator::Implies) | `=>`   | binary | 0          |
| [Or](Operator::Or)           | `v`    | binary | 1          |
| [And](Operator::And)         | `^`    | binary | 2          |
| [Not](Operator::Not)         | `~`    | unary  | 3          |

Binary operators are left-associative, and negation is a prefix operator which binds tightest.

Note, `v` is an operator and not an atom, so `a v b` is a disjunction of two atoms.
*/

/// An operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Implies,
    Or,
    And,
    Not,
}

/// The operators, in order of increasing precedence.
pub const OPERATORS: [Operator; 4] = [Operator::Implies, Operator::Or, Operator::And, Operator::Not];

/// The arity of an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Implies => "=>",
            Operator::Or => "v",
            Operator::And => "^",
            Operator::Not => "~",
        }
    }

    /// Precedence, from 0 (loosest) to 3 (tightest).
    pub fn precedence(&self) -> u8 {
        *self as u8
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operator::Not => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// The operator whose symbol begins the given (lower-case) string, if any.
    pub fn from_prefix(string: &str) -> Option<Self> {
        OPERATORS
            .into_iter()
            .find(|operator| string.starts_with(operator.symbol()))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
