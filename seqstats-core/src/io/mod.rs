pub mod fasta;

pub use fasta::{FastaRecords, RawRecord};
