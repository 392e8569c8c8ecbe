/*!
Determines what a collection of premises entails about each atom.

Entailment is semantic, and determined by brute force:
1. Each of the 16 [assignments](Assignment) is examined, in ascending order.
2. An assignment is a model of the premises if each premise evaluates to true under the assignment.
3. Each model is [noted](Entailment::note_model) in the report, and the report of all models is the result.

```rust
# use ergo_lib::procedures::{compile::compile, entail::entail};
# use ergo_lib::reports::Verdict;
# use ergo_lib::structures::atom::Atom;
let premises = vec![compile("a").unwrap(), compile("a => b").unwrap()];
let entailment = entail(&premises);

assert_eq!(entailment[Atom::A], Verdict::ProvenTrue);
assert_eq!(entailment[Atom::B], Verdict::ProvenTrue);
assert_eq!(entailment[Atom::C], Verdict::Unproven);
```

With no premises every assignment is a model, and so every atom is [Unproven](crate::reports::Verdict::Unproven).

As premises are never mutated, and verdicts are combined by bitwise or, the order in which assignments are examined does not matter.
*/

use crate::{
    misc::log::targets::{self},
    reports::Entailment,
    structures::{premise::Premise, valuation::Assignment},
};

/// Whether the assignment is a model of each premise.
pub fn is_model(premises: &[Premise], assignment: &Assignment) -> bool {
    premises.iter().all(|premise| premise.evaluate(assignment))
}

/// An iterator over the models of the premises, in ascending order.
pub fn models(premises: &[Premise]) -> impl Iterator<Item = Assignment> + '_ {
    Assignment::all().filter(move |assignment| is_model(premises, assignment))
}

/// What the premises entail about each atom.
pub fn entail(premises: &[Premise]) -> Entailment {
    let mut entailment = Entailment::default();
    let mut model_count = 0;

    for model in models(premises) {
        log::debug!(target: targets::ENTAIL, "Model: {model}");
        entailment.note_model(&model);
        model_count += 1;
    }

    log::info!(
        target: targets::ENTAIL,
        "{} premises with {model_count} models: {entailment}",
        premises.len()
    );
    entailment
}
