/*!
A (total) function from atoms to truth values.

As the alphabet is fixed, every valuation is full, and there are exactly 2<sup>4</sup> = 16 valuations.

The canonical representation of a valuation is an [Assignment]: an integer in [0, 16) whose bits, read from most significant to least significant, are the values of the atoms in alphabet order.
So, the most significant of the four bits is the value of `a`, and the least significant is the value of `d`.

```rust
# use ergo_lib::structures::atom::Atom;
# use ergo_lib::structures::valuation::{Assignment, Valuation};
let assignment = Assignment::try_from(0b1010).unwrap();

assert!(assignment.value_of(Atom::A));
assert!(!assignment.value_of(Atom::B));
assert!(assignment.value_of(Atom::C));
assert!(!assignment.value_of(Atom::D));
assert_eq!(assignment.to_string(), "a ~b c ~d");
```

The [Valuation] trait is also implemented for an array of booleans indexed by atom, which may be more convenient when writing a valuation by hand.
*/

use crate::structures::atom::{Atom, ATOMS, ATOM_COUNT};

/// A count of all valuations of the alphabet.
pub const ASSIGNMENT_COUNT: u8 = 1 << ATOM_COUNT;

/// Something which gives each atom a value.
pub trait Valuation {
    /// The value of the atom under the valuation.
    fn value_of(&self, atom: Atom) -> bool;

    /// An iterator through all (Atom, Value) pairs, in alphabet order.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        ATOMS.into_iter().map(|atom| (atom, self.value_of(atom)))
    }
}

/// The canonical representation of a valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Assignment(u8);

impl Assignment {
    /// The integer representation of the assignment.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// An iterator through every assignment, in ascending order.
    pub fn all() -> impl Iterator<Item = Assignment> {
        (0..ASSIGNMENT_COUNT).map(Assignment)
    }
}

/// An integer outside [0, 16) is returned as the error.
impl TryFrom<u8> for Assignment {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value < ASSIGNMENT_COUNT {
            true => Ok(Assignment(value)),
            false => Err(value),
        }
    }
}

impl Valuation for Assignment {
    fn value_of(&self, atom: Atom) -> bool {
        let shift = ATOM_COUNT - 1 - atom.index();
        (self.0 >> shift) & 1 == 1
    }
}

impl Valuation for [bool; ATOM_COUNT] {
    fn value_of(&self, atom: Atom) -> bool {
        self[atom.index()]
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literals = self
            .atom_value_pairs()
            .map(|(atom, value)| match value {
                true => format!("{atom}"),
                false => format!("~{atom}"),
            })
            .collect::<Vec<_>>();
        write!(f, "{}", literals.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_significant_is_first() {
        let only_a = Assignment::try_from(0b1000).unwrap();
        assert_eq!(
            only_a.atom_value_pairs().collect::<Vec<_>>(),
            vec![
                (Atom::A, true),
                (Atom::B, false),
                (Atom::C, false),
                (Atom::D, false)
            ]
        );

        let only_d = Assignment::try_from(1).unwrap();
        assert!(only_d.value_of(Atom::D));
        assert!(!only_d.value_of(Atom::A));
    }

    #[test]
    fn all_assignments() {
        let all = Assignment::all().collect::<Vec<_>>();
        assert_eq!(all.len(), 16);
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(all.first().map(|a| a.bits()), Some(0));
        assert_eq!(all.last().map(|a| a.bits()), Some(15));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(Assignment::try_from(16), Err(16));
    }

    #[test]
    fn array_valuation() {
        let valuation = [false, true, false, true];
        let assignment = Assignment::try_from(0b0101).unwrap();
        for atom in ATOMS {
            assert_eq!(valuation.value_of(atom), assignment.value_of(atom));
        }
    }
}
