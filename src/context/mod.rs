/*!
The context of some premises.

A context holds a collection of compiled premises, and is the usual way to interact with the library.

```rust
# use ergo_lib::context::Context;
# use ergo_lib::reports::Verdict;
# use ergo_lib::structures::atom::Atom;
let mut the_context = Context::default();

assert!(the_context.add_premise("a v b").is_ok());
assert!(the_context.add_premise("~a").is_ok());
assert!(the_context.add_premise("a ^").is_err());

assert_eq!(the_context.premises().len(), 2);

let entailment = the_context.entail();
assert_eq!(entailment[Atom::A], Verdict::ProvenFalse);
assert_eq!(entailment[Atom::B], Verdict::ProvenTrue);
```

A premise which fails to compile is not added to the context, and whether to continue with the remaining premises is left to the caller.
*/

use crate::{
    procedures::{compile::compile, entail},
    reports::Entailment,
    structures::{premise::Premise, valuation::Assignment},
    types::err::{self},
};

/// A collection of premises.
#[derive(Clone, Debug, Default)]
pub struct Context {
    premises: Vec<Premise>,
}

impl Context {
    pub fn from_premises(premises: Vec<Premise>) -> Self {
        Context { premises }
    }

    /// Compiles the formula and, if successful, adds the result as a premise.
    pub fn add_premise(&mut self, formula: &str) -> Result<&Premise, err::SyntaxError> {
        let premise = compile(formula)?;
        let index = self.premises.len();
        self.premises.push(premise);
        Ok(&self.premises[index])
    }

    pub fn premises(&self) -> &[Premise] {
        &self.premises
    }

    /// An iterator over the models of the premises, in ascending order.
    pub fn models(&self) -> impl Iterator<Item = Assignment> + '_ {
        entail::models(&self.premises)
    }

    /// What the premises entail about each atom.
    pub fn entail(&self) -> Entailment {
        entail::entail(&self.premises)
    }
}
