use crate::alphabets::rna;
use crate::error::SeqResult;
use crate::seq::normalize;
use crate::seq::traits::{Nucleotide, SeqResidues};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RnaSeq {
    id: Box<str>,
    residues: String,
}

impl RnaSeq {
    pub fn new(id: impl Into<Box<str>>, raw: &str) -> SeqResult<Self> {
        let residues = normalize(raw, &rna::alphabet(), "RNA")?;
        Ok(Self {
            id: id.into(),
            residues,
        })
    }
}

impl SeqResidues for RnaSeq {
    fn id(&self) -> &str {
        &self.id
    }

    fn residues(&self) -> &str {
        &self.residues
    }
}

impl Nucleotide for RnaSeq {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeqError;

    #[test]
    fn construction_uppercases() {
        let seq = RnaSeq::new("r1", "acgu").unwrap();
        assert_eq!(seq.residues(), "ACGU");
    }

    #[test]
    fn thymine_is_rejected() {
        match RnaSeq::new("r1", "ACGT").unwrap_err() {
            SeqError::InvalidAlphabet { alphabet, .. } => assert_eq!(alphabet, "RNA"),
            other => panic!("expected invalid alphabet error, got {other:?}"),
        }
    }

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(
            RnaSeq::new("r1", "").unwrap_err(),
            SeqError::EmptySequence
        ));
    }
}
