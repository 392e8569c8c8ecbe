/*!
Reports of what a collection of premises entails.

For each atom, the report is a [Verdict], built up as models of the premises are found:
- A model in which the atom is true adds [ProvenTrue](Verdict::ProvenTrue).
- A model in which the atom is false adds [ProvenFalse](Verdict::ProvenFalse).

And, verdicts are added by bitwise or, so:

| models found                       | verdict                          |
|------------------------------------|----------------------------------|
| none                               | [Vacuous](Verdict::Vacuous)      |
| only models with the atom true     | [ProvenTrue](Verdict::ProvenTrue) |
| only models with the atom false    | [ProvenFalse](Verdict::ProvenFalse) |
| models with the atom true or false | [Unproven](Verdict::Unproven)    |

```rust
# use ergo_lib::reports::Verdict;
let mut verdict = Verdict::Vacuous;
verdict |= Verdict::ProvenTrue;
assert_eq!(verdict, Verdict::ProvenTrue);

verdict |= Verdict::ProvenFalse;
assert_eq!(verdict, Verdict::Unproven);
```

A vacuous verdict is distinct from an unproven verdict.
The first notes the premises are contradictory, and so entail everything, while the second notes the atom is independent of the premises.
*/

use crate::structures::{
    atom::{Atom, ATOMS, ATOM_COUNT},
    valuation::Valuation,
};

/// What some premises entail about an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Verdict {
    /// The premises have no model, and so entail the atom and its negation.
    Vacuous = 0,

    /// The atom is true in every model of the premises.
    ProvenTrue = 1,

    /// The atom is false in every model of the premises.
    ProvenFalse = 2,

    /// The atom is true in some model and false in some model of the premises.
    Unproven = 3,
}

impl Verdict {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Verdict::Vacuous,
            1 => Verdict::ProvenTrue,
            2 => Verdict::ProvenFalse,
            _ => Verdict::Unproven,
        }
    }

    pub fn bits(&self) -> u8 {
        *self as u8
    }

    /// The verdict given by a model, with the given value of the atom.
    pub fn from_value(value: bool) -> Self {
        match value {
            true => Verdict::ProvenTrue,
            false => Verdict::ProvenFalse,
        }
    }

    /// A symbol for the verdict.
    pub fn mark(&self) -> char {
        match self {
            Verdict::Vacuous => '~',
            Verdict::ProvenTrue => '\u{2713}',
            Verdict::ProvenFalse => '\u{2717}',
            Verdict::Unproven => '?',
        }
    }
}

impl std::ops::BitOr for Verdict {
    type Output = Verdict;

    fn bitor(self, rhs: Self) -> Self::Output {
        Verdict::from_bits(self.bits() | rhs.bits())
    }
}

impl std::ops::BitOrAssign for Verdict {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vacuous => write!(f, "Vacuous"),
            Self::ProvenTrue => write!(f, "ProvenTrue"),
            Self::ProvenFalse => write!(f, "ProvenFalse"),
            Self::Unproven => write!(f, "Unproven"),
        }
    }
}

/// A verdict for each atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entailment {
    verdicts: [Verdict; ATOM_COUNT],
}

impl Default for Entailment {
    fn default() -> Self {
        Entailment {
            verdicts: [Verdict::Vacuous; ATOM_COUNT],
        }
    }
}

impl Entailment {
    /// Notes a model of the premises.
    pub fn note_model(&mut self, model: &impl Valuation) {
        for (atom, value) in model.atom_value_pairs() {
            self.verdicts[atom.index()] |= Verdict::from_value(value);
        }
    }

    pub fn verdict_of(&self, atom: Atom) -> Verdict {
        self.verdicts[atom.index()]
    }

    /// An iterator through all (Atom, Verdict) pairs, in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, Verdict)> + '_ {
        ATOMS.into_iter().map(|atom| (atom, self.verdict_of(atom)))
    }

    /// Whether the premises were found to have no model.
    pub fn is_vacuous(&self) -> bool {
        self.verdicts.iter().all(|verdict| *verdict == Verdict::Vacuous)
    }

    /// The atoms entailed to be true, vacuously or otherwise.
    pub fn proven(&self) -> impl Iterator<Item = Atom> + '_ {
        self.iter()
            .filter(|(_, verdict)| matches!(verdict, Verdict::ProvenTrue | Verdict::Vacuous))
            .map(|(atom, _)| atom)
    }

    /// The atoms entailed to be false (though not vacuously).
    pub fn disproven(&self) -> impl Iterator<Item = Atom> + '_ {
        self.iter()
            .filter(|(_, verdict)| *verdict == Verdict::ProvenFalse)
            .map(|(atom, _)| atom)
    }
}

impl std::ops::Index<Atom> for Entailment {
    type Output = Verdict;

    fn index(&self, atom: Atom) -> &Self::Output {
        &self.verdicts[atom.index()]
    }
}

impl std::fmt::Display for Entailment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self
            .iter()
            .map(|(atom, verdict)| format!("{atom} [{}]", verdict.mark()))
            .collect::<Vec<_>>();
        write!(f, "{}", entries.join("\t"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::valuation::Assignment;

    const VERDICTS: [Verdict; 4] = [
        Verdict::Vacuous,
        Verdict::ProvenTrue,
        Verdict::ProvenFalse,
        Verdict::Unproven,
    ];

    #[test]
    fn or_is_a_semilattice() {
        for x in VERDICTS {
            assert_eq!(x | x, x);
            assert_eq!(x | Verdict::Vacuous, x);
            assert_eq!(x | Verdict::Unproven, Verdict::Unproven);
            for y in VERDICTS {
                assert_eq!(x | y, y | x);
                for z in VERDICTS {
                    assert_eq!((x | y) | z, x | (y | z));
                }
            }
        }
    }

    #[test]
    fn bits_round_trip() {
        for verdict in VERDICTS {
            assert_eq!(Verdict::from_bits(verdict.bits()), verdict);
        }
    }

    #[test]
    fn noting_models() {
        let mut entailment = Entailment::default();
        assert!(entailment.is_vacuous());

        entailment.note_model(&Assignment::try_from(0b1100).unwrap());
        entailment.note_model(&Assignment::try_from(0b1010).unwrap());

        assert_eq!(entailment[Atom::A], Verdict::ProvenTrue);
        assert_eq!(entailment[Atom::B], Verdict::Unproven);
        assert_eq!(entailment[Atom::C], Verdict::Unproven);
        assert_eq!(entailment[Atom::D], Verdict::ProvenFalse);
        assert!(!entailment.is_vacuous());

        assert_eq!(entailment.proven().collect::<Vec<_>>(), vec![Atom::A]);
        assert_eq!(entailment.disproven().collect::<Vec<_>>(), vec![Atom::D]);
    }

    #[test]
    fn vacuous_proves_everything() {
        let entailment = Entailment::default();
        assert_eq!(entailment.proven().count(), 4);
        assert_eq!(entailment.disproven().count(), 0);
    }

    #[test]
    fn display() {
        let mut entailment = Entailment::default();
        entailment.note_model(&Assignment::try_from(0b1000).unwrap());
        entailment.note_model(&Assignment::try_from(0b1001).unwrap());
        assert_eq!(entailment.to_string(), "a [\u{2713}]\tb [\u{2717}]\tc [\u{2717}]\td [?]");
    }
}
