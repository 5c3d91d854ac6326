use crate::alphabets::Alphabet;

/// Strict DNA alphabet. Sequences are uppercased before validation, so the
/// lowercase forms are intentionally absent.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GATTACA"));
    }

    #[test]
    fn uracil_is_no_word() {
        assert!(!alphabet().is_word(b"GAUU"));
    }

    #[test]
    fn symbol_is_no_word() {
        assert!(!alphabet().is_word(b"#"));
    }
}
