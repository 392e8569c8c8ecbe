/*!
The procedures which take a formula to a verdict.

- [scan] reads a formula as tokens.
- [parse] reorders tokens to postfix notation.
- [compile] builds an expression from postfix notation.
- [evaluate] gives the value of an expression under a valuation.
- [entail] examines every valuation, and reports what the premises entail.
*/

pub mod compile;
pub mod entail;
pub mod evaluate;
pub mod parse;
pub mod scan;
