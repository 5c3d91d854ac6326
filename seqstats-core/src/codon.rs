use crate::error::{SeqError, SeqResult};
use std::sync::LazyLock;

/// Base order the codon table is enumerated in. The amino-acid string below
/// is laid out for exactly this order, so it must stay T, C, A, G.
const BASES: &[u8; 4] = b"TCAG";

/// One amino acid per codon, codons enumerated with the first base varying
/// slowest. '*' marks a stop.
const AMINO_ACIDS: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    for (rank, &base) in BASES.iter().enumerate() {
        map[base as usize] = rank as u8;
    }
    map
});

/// Translate a coding sequence read in non-overlapping triplets from offset
/// 0. Trailing bases short of a codon are dropped. A triplet containing a
/// byte outside the table cannot occur for validated DNA, but is still
/// reported rather than mapped to a placeholder.
pub fn translate(residues: &str) -> SeqResult<String> {
    let bytes = residues.as_bytes();
    let mut out = String::with_capacity(bytes.len() / 3);
    for triplet in bytes.chunks_exact(3) {
        let i1 = BASE_INDEX[triplet[0] as usize];
        let i2 = BASE_INDEX[triplet[1] as usize];
        let i3 = BASE_INDEX[triplet[2] as usize];
        if i1 > 3 || i2 > 3 || i3 > 3 {
            return Err(SeqError::UnknownCodon {
                codon: String::from_utf8_lossy(triplet).into(),
            });
        }
        let idx = ((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize);
        out.push(AMINO_ACIDS[idx] as char);
    }
    Ok(out)
}
