pub mod dna;
pub mod protein;
pub mod rna;
pub mod traits;

pub use dna::DnaSeq;
pub use protein::ProteinSeq;
pub use rna::RnaSeq;
pub use traits::{Nucleotide, SeqResidues};

use crate::alphabets::Alphabet;
use crate::error::{SeqError, SeqResult};
use std::fmt;
use std::str::FromStr;

/// Uppercase `raw` and check it against `alphabet`. Shared by the nucleotide
/// constructors; protein construction uppercases without the alphabet check.
pub(crate) fn normalize(raw: &str, alphabet: &Alphabet, name: &'static str) -> SeqResult<String> {
    let residues = raw.to_ascii_uppercase();
    if residues.is_empty() {
        return Err(SeqError::EmptySequence);
    }
    if !alphabet.is_word(residues.bytes()) {
        return Err(SeqError::InvalidAlphabet {
            seq: residues.into(),
            alphabet: name,
        });
    }
    Ok(residues)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeqKind {
    Dna,
    Rna,
    Protein,
}

impl SeqKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeqKind::Dna => "DNA",
            SeqKind::Rna => "RNA",
            SeqKind::Protein => "Protein",
        }
    }
}

impl fmt::Display for SeqKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeqKind {
    type Err = SeqError;

    fn from_str(s: &str) -> SeqResult<Self> {
        if s.eq_ignore_ascii_case("dna") {
            Ok(SeqKind::Dna)
        } else if s.eq_ignore_ascii_case("rna") {
            Ok(SeqKind::Rna)
        } else if s.eq_ignore_ascii_case("protein") {
            Ok(SeqKind::Protein)
        } else {
            Err(SeqError::UnsupportedKind { kind: s.into() })
        }
    }
}

/// Closed set of sequence variants. Exhaustive matching here is what keeps
/// the summarizer honest about which composition applies to which kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sequence {
    Dna(DnaSeq),
    Rna(RnaSeq),
    Protein(ProteinSeq),
}

impl Sequence {
    pub fn from_raw(kind: SeqKind, id: impl Into<Box<str>>, raw: &str) -> SeqResult<Self> {
        match kind {
            SeqKind::Dna => DnaSeq::new(id, raw).map(Sequence::Dna),
            SeqKind::Rna => RnaSeq::new(id, raw).map(Sequence::Rna),
            SeqKind::Protein => Ok(Sequence::Protein(ProteinSeq::new(id, raw))),
        }
    }

    pub fn kind(&self) -> SeqKind {
        match self {
            Sequence::Dna(_) => SeqKind::Dna,
            Sequence::Rna(_) => SeqKind::Rna,
            Sequence::Protein(_) => SeqKind::Protein,
        }
    }
}

impl SeqResidues for Sequence {
    fn id(&self) -> &str {
        match self {
            Sequence::Dna(seq) => seq.id(),
            Sequence::Rna(seq) => seq.id(),
            Sequence::Protein(seq) => seq.id(),
        }
    }

    fn residues(&self) -> &str {
        match self {
            Sequence::Dna(seq) => seq.residues(),
            Sequence::Rna(seq) => seq.residues(),
            Sequence::Protein(seq) => seq.residues(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [SeqKind::Dna, SeqKind::Rna, SeqKind::Protein] {
            assert_eq!(kind.as_str().parse::<SeqKind>().unwrap(), kind);
        }
        assert_eq!("dna".parse::<SeqKind>().unwrap(), SeqKind::Dna);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "plasmid".parse::<SeqKind>().unwrap_err();
        match err {
            SeqError::UnsupportedKind { kind } => assert_eq!(&*kind, "plasmid"),
            other => panic!("expected unsupported kind error, got {other:?}"),
        }
    }

    #[test]
    fn from_raw_dispatches_on_kind() {
        let dna = Sequence::from_raw(SeqKind::Dna, "d1", "acgt").unwrap();
        assert_eq!(dna.kind(), SeqKind::Dna);
        assert_eq!(dna.residues(), "ACGT");

        let rna = Sequence::from_raw(SeqKind::Rna, "r1", "acgu").unwrap();
        assert_eq!(rna.kind(), SeqKind::Rna);

        let protein = Sequence::from_raw(SeqKind::Protein, "p1", "mkv").unwrap();
        assert_eq!(protein.kind(), SeqKind::Protein);
        assert_eq!(protein.residues(), "MKV");
    }

    #[test]
    fn from_raw_propagates_validation() {
        assert!(Sequence::from_raw(SeqKind::Dna, "d1", "ACGU").is_err());
        assert!(Sequence::from_raw(SeqKind::Rna, "r1", "").is_err());
    }
}
