pub mod dna;
pub mod rna;

use bit_set::BitSet;
use std::borrow::Borrow;

/// Set of residue symbols a sequence kind accepts, backed by a bit set over
/// byte values.
#[derive(Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    pub fn insert(&mut self, a: u8) {
        self.symbols.insert(a as usize);
    }

    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter()
            .all(|c| self.symbols.contains(*c.borrow() as usize))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_eq_is_set_eq() {
        assert_eq!(Alphabet::new(b"ACGT"), Alphabet::new(b"ACGT"));
        assert_eq!(Alphabet::new(b"ACGT"), Alphabet::new(b"TAGC"));
        assert_ne!(Alphabet::new(b"ACGT"), Alphabet::new(b"ACG"));
    }

    #[test]
    fn insert_and_contains() {
        let mut a = Alphabet::new(b"AC");
        assert!(!a.contains(b'G'));
        a.insert(b'G');
        assert!(a.contains(b'G'));
        assert_eq!(a.len(), 3);
    }
}
