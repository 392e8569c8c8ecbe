//! The abstract elements of a formula and its valuations.
//!
//! - [Atoms](atom) and [operators](operator) make up the alphabet.
//! - [Tokens](token) are what the alphabet is read as.
//! - [Expressions](expression) are trees built from tokens, and [premises](premise) pair an expression with the formula it was built from.
//! - [Valuations](valuation) give each atom a value, and so each expression a value.

pub mod atom;
pub mod expression;
pub mod operator;
pub mod premise;
pub mod token;
pub mod valuation;
