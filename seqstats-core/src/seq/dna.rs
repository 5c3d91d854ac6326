use crate::alphabets::dna;
use crate::codon;
use crate::error::SeqResult;
use crate::seq::normalize;
use crate::seq::traits::{Nucleotide, SeqResidues};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    id: Box<str>,
    residues: String,
}

impl DnaSeq {
    pub fn new(id: impl Into<Box<str>>, raw: &str) -> SeqResult<Self> {
        let residues = normalize(raw, &dna::alphabet(), "DNA")?;
        Ok(Self {
            id: id.into(),
            residues,
        })
    }

    /// Translate the coding strand in frame 0. Trailing bases that do not
    /// fill a codon are dropped.
    pub fn translate(&self) -> SeqResult<String> {
        codon::translate(&self.residues)
    }

    /// Codon count of the coding sequence, stop codons included.
    pub fn protein_len(&self) -> usize {
        self.residues.len() / 3
    }
}

impl SeqResidues for DnaSeq {
    fn id(&self) -> &str {
        &self.id
    }

    fn residues(&self) -> &str {
        &self.residues
    }
}

impl Nucleotide for DnaSeq {}
