use std::str::Chars;

/// Shared surface of every sequence value: an identifier plus an uppercase
/// residue string fixed at construction.
pub trait SeqResidues {
    fn id(&self) -> &str;
    fn residues(&self) -> &str;

    fn len(&self) -> usize {
        self.residues().len()
    }

    fn is_empty(&self) -> bool {
        self.residues().is_empty()
    }

    /// Restartable residue-by-residue iterator.
    fn chars(&self) -> Chars<'_> {
        self.residues().chars()
    }

    /// Renders the record back into the two-line format the reader consumes.
    fn to_fasta(&self) -> String {
        format!(">{}\n{}\n", self.id(), self.residues())
    }
}

/// Marker for the kinds GC content is defined on.
pub trait Nucleotide: SeqResidues {}
