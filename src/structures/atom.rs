/*!
The atoms (aka. 'atomics', or 'variables') of a formula.

The alphabet is fixed to four atoms, `a`, `b`, `c`, and `d`, in that order.
The order matters, as it fixes the bit of an [assignment](crate::structures::valuation::Assignment) which gives the value of each atom.

```rust
# use ergo_lib::structures::atom::{Atom, ATOMS};
assert_eq!(ATOMS.len(), 4);
assert_eq!(Atom::from_symbol('c'), Some(Atom::C));
assert_eq!(Atom::C.index(), 2);
assert_eq!(Atom::from_symbol('e'), None);
```

Input is case-insensitive, though this is handled by lower-casing a formula before it is scanned, and [from_symbol](Atom::from_symbol) only reads lower-case symbols.
*/

/// An atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Atom {
    A,
    B,
    C,
    D,
}

/// A count of the atoms in the alphabet.
pub const ATOM_COUNT: usize = 4;

/// The alphabet, in order.
pub const ATOMS: [Atom; ATOM_COUNT] = [Atom::A, Atom::B, Atom::C, Atom::D];

impl Atom {
    /// The atom written with the given (lower-case) symbol, if any.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'a' => Some(Atom::A),
            'b' => Some(Atom::B),
            'c' => Some(Atom::C),
            'd' => Some(Atom::D),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Atom::A => 'a',
            Atom::B => 'b',
            Atom::C => 'c',
            Atom::D => 'd',
        }
    }

    /// The index of the atom in the alphabet.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
