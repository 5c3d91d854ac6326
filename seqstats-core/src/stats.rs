use memchr::memchr_iter;

use crate::error::{SeqError, SeqResult};
use crate::seq::traits::{Nucleotide, SeqResidues};
use crate::seq::{ProteinSeq, SeqKind, Sequence};

/// Amino acids counted as hydrophobic.
const HYDROPHOBIC: &[u8; 8] = b"AILMFWYV";

/// Reportable per-sequence summary. `fraction` is the GC fraction for
/// nucleotide kinds (rounded to two decimal places) and the unrounded
/// hydrophobic fraction for proteins.
#[derive(Clone, Debug, PartialEq)]
pub struct SeqStats {
    pub id: Box<str>,
    pub kind: SeqKind,
    pub length: usize,
    pub fraction: f64,
}

/// GC fraction rounded half-to-even to `decimal_places`. Nucleotide
/// construction rejects empty sequences, so the length is never zero here.
pub fn gc_fraction<S: Nucleotide>(seq: &S, decimal_places: u32) -> f64 {
    let bytes = seq.residues().as_bytes();
    debug_assert!(!bytes.is_empty());

    let gc = count_residue(bytes, b'G') + count_residue(bytes, b'C');
    round_ties_even(gc as f64 / bytes.len() as f64, decimal_places)
}

/// Unrounded fraction of hydrophobic residues. Protein construction does not
/// reject empty input, so the zero-length case is a real error path.
pub fn hydrophobic_fraction(seq: &ProteinSeq) -> SeqResult<f64> {
    let bytes = seq.residues().as_bytes();
    if bytes.is_empty() {
        return Err(SeqError::ZeroLengthComposition {
            id: seq.id().into(),
        });
    }

    let hydrophobic: usize = HYDROPHOBIC
        .iter()
        .map(|&aa| count_residue(bytes, aa))
        .sum();
    Ok(hydrophobic as f64 / bytes.len() as f64)
}

/// Per-kind dispatch: GC fraction at two decimal places for DNA/RNA,
/// hydrophobic fraction for proteins.
pub fn summarize(seq: &Sequence) -> SeqResult<SeqStats> {
    let fraction = match seq {
        Sequence::Dna(dna) => gc_fraction(dna, 2),
        Sequence::Rna(rna) => gc_fraction(rna, 2),
        Sequence::Protein(protein) => hydrophobic_fraction(protein)?,
    };

    Ok(SeqStats {
        id: seq.id().into(),
        kind: seq.kind(),
        length: seq.len(),
        fraction,
    })
}

#[inline]
fn count_residue(hay: &[u8], b: u8) -> usize {
    memchr_iter(b, hay).count()
}

fn round_ties_even(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (value * factor).round_ties_even() / factor
}
