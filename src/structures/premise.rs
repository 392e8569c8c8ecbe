//! A premise, as a formula paired with the expression it compiles to.
//!
//! Premises are built by [compile](crate::procedures::compile::compile), and display as their (compiled) expression.

use crate::structures::{expression::Expression, valuation::Valuation};

/// A compiled formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Premise {
    formula: String,
    expression: Expression,
}

impl Premise {
    pub fn new(formula: impl Into<String>, expression: Expression) -> Self {
        Premise {
            formula: formula.into(),
            expression,
        }
    }

    /// The formula, as given.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The value of the premise under the given valuation.
    pub fn evaluate(&self, valuation: &impl Valuation) -> bool {
        self.expression.evaluate(valuation)
    }
}

impl std::fmt::Display for Premise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
