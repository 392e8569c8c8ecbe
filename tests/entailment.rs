use ergo_lib::{
    context::Context,
    procedures::{compile::compile, entail::entail},
    reports::Verdict,
    structures::{
        atom::{Atom, ATOMS},
        valuation::Assignment,
    },
};

fn context_of(formulas: &[&str]) -> Context {
    let mut the_context = Context::default();
    for formula in formulas {
        assert!(the_context.add_premise(formula).is_ok(), "{formula}");
    }
    the_context
}

mod examples {
    use super::*;

    #[test]
    fn implication_alone() {
        let entailment = context_of(&["a => b"]).entail();
        for atom in ATOMS {
            assert_eq!(entailment[atom], Verdict::Unproven);
        }
    }

    #[test]
    fn modus_ponens() {
        let entailment = context_of(&["a", "a => b"]).entail();
        assert_eq!(entailment[Atom::A], Verdict::ProvenTrue);
        assert_eq!(entailment[Atom::B], Verdict::ProvenTrue);
        assert_eq!(entailment[Atom::C], Verdict::Unproven);
        assert_eq!(entailment[Atom::D], Verdict::Unproven);
    }

    #[test]
    fn contradiction() {
        let the_context = context_of(&["a", "~a"]);
        let entailment = the_context.entail();
        assert!(entailment.is_vacuous());
        for atom in ATOMS {
            assert_eq!(entailment[atom], Verdict::Vacuous);
        }
        assert_eq!(the_context.models().count(), 0);
    }

    #[test]
    fn no_premises() {
        let entailment = entail(&[]);
        for atom in ATOMS {
            assert_eq!(entailment[atom], Verdict::Unproven);
        }
        assert_eq!(Context::default().models().count(), 16);
    }
}

mod reasoning {
    use super::*;

    #[test]
    fn chain() {
        let entailment = context_of(&["a => b", "b => c", "c => d", "A"]).entail();
        for atom in ATOMS {
            assert_eq!(entailment[atom], Verdict::ProvenTrue);
        }
    }

    #[test]
    fn modus_tollens() {
        let entailment = context_of(&["a => b", "~b"]).entail();
        assert_eq!(entailment[Atom::A], Verdict::ProvenFalse);
        assert_eq!(entailment[Atom::B], Verdict::ProvenFalse);
    }

    #[test]
    fn disjunctive_syllogism() {
        let entailment = context_of(&["a v b", "~a"]).entail();
        assert_eq!(entailment[Atom::A], Verdict::ProvenFalse);
        assert_eq!(entailment[Atom::B], Verdict::ProvenTrue);
        assert_eq!(entailment[Atom::C], Verdict::Unproven);
    }

    #[test]
    fn tautology_proves_nothing() {
        let entailment = context_of(&["a v ~a", "(b => c) v (c => b)"]).entail();
        for atom in ATOMS {
            assert_eq!(entailment[atom], Verdict::Unproven);
        }
    }

    #[test]
    fn single_model() {
        let the_context = context_of(&["a ^ ~b", "c ^ ~d"]);
        let models = the_context.models().collect::<Vec<_>>();
        assert_eq!(models, vec![Assignment::try_from(0b1010).unwrap()]);

        let entailment = the_context.entail();
        assert_eq!(entailment.proven().collect::<Vec<_>>(), vec![Atom::A, Atom::C]);
        assert_eq!(entailment.disproven().collect::<Vec<_>>(), vec![Atom::B, Atom::D]);
    }

    #[test]
    fn premises_are_conjoined() {
        let separate = context_of(&["a v b", "~b v c", "~c"]).entail();
        let together = context_of(&["(a v b) ^ (~b v c) ^ ~c"]).entail();
        assert_eq!(separate, together);
    }
}

mod formulas {
    use super::*;

    #[test]
    fn double_negation() {
        let double = compile("~~a").unwrap();
        let single = compile("a").unwrap();
        for assignment in Assignment::all() {
            assert_eq!(double.evaluate(&assignment), single.evaluate(&assignment));
        }
    }

    #[test]
    fn case_insensitive() {
        let upper = compile("A V ~B => C ^ D").unwrap();
        let lower = compile("a v ~b => c ^ d").unwrap();
        assert_eq!(upper.expression(), lower.expression());
        assert_eq!(upper.formula(), "A V ~B => C ^ D");
    }

    #[test]
    fn compiled_form() {
        assert_eq!(compile("a ^ b v ~c").unwrap().to_string(), "(a ^ b) v ~c");
        assert_eq!(compile("a => b => a").unwrap().to_string(), "(a => b) => a");
        assert_eq!(compile("~(a v b)").unwrap().to_string(), "~(a v b)");
    }
}
