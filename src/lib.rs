//! A library for determining which atomic propositions are (dis)proven by a collection of premises.
//!
//! Premises are propositional formulas built from four atoms, `a`, `b`, `c`, and `d`, parentheses, and four operators:
//!
//! | operator    | symbol |
//! |-------------|--------|
//! | negation    | `~`    |
//! | conjunction | `^`    |
//! | disjunction | `v`    |
//! | implication | `=>`   |
//!
//! Listed in order of decreasing precedence, with binary operators associating to the left.
//! Input is case-insensitive.
//!
//! Entailment is semantic: with only four atoms, there are only sixteen valuations, and each is examined in turn.
//! An atom is proven by the premises if it is true in every model of the premises, and disproven if false in every model.
//!
//! # Orientation
//!
//! The library is designed around two procedures:
//! - [compile](crate::procedures::compile::compile), which takes a formula to a [premise](crate::structures::premise::Premise), or a [syntax error](crate::types::err::SyntaxError) noted at some position of the formula.
//! - [entail](crate::procedures::entail::entail), which takes some premises to an [entailment](crate::reports::Entailment) report, giving a [verdict](crate::reports::Verdict) for each atom.
//!
//! A [context] bundles the two together.
//!
//! Useful starting points, then, may be:
//! - The [procedures], to see how a formula is read, and how a verdict is reached.
//! - The [structures], to familiarise yourself with tokens, expressions, and valuations.
//! - The [error types](crate::types::err), to see how a formula may fail to be read.
//!
//! # Examples
//!
//! ```rust
//! # use ergo_lib::context::Context;
//! # use ergo_lib::reports::Verdict;
//! # use ergo_lib::structures::atom::Atom;
//! let mut the_context = Context::default();
//!
//! for formula in ["a => b", "b => c", "A"] {
//!     assert!(the_context.add_premise(formula).is_ok());
//! }
//!
//! let entailment = the_context.entail();
//! assert_eq!(entailment[Atom::C], Verdict::ProvenTrue);
//! assert_eq!(entailment[Atom::D], Verdict::Unproven);
//! ```
//!
//! ```rust
//! # use ergo_lib::procedures::compile::compile;
//! # use ergo_lib::types::err::ErrorKind;
//! let error = compile("a v (b ^ c").unwrap_err();
//!
//! assert_eq!(error.kind, ErrorKind::UnmatchedOpenParen);
//! assert_eq!(error.position, 4);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made when reading a formula and when examining valuations, with targets listed in [misc::log].
//! As the library does not install a logger, these are silent unless a logger is installed by the caller.

pub mod context;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

pub mod misc;
