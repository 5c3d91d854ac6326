pub mod alphabets;
pub mod codon;
pub mod error;
pub mod io;
pub mod seq;
pub mod stats;

pub use error::{SeqError, SeqResult};
pub use seq::{DnaSeq, Nucleotide, ProteinSeq, RnaSeq, SeqKind, SeqResidues, Sequence};
pub use stats::{gc_fraction, hydrophobic_fraction, summarize, SeqStats};
