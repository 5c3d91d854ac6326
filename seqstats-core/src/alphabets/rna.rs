use crate::alphabets::Alphabet;

/// Strict RNA alphabet, validated post-uppercasing like the DNA one.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGU")
}
