use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeqError {
    #[error("sequence must not be empty")]
    EmptySequence,

    #[error("invalid residues in sequence '{seq}' for alphabet {alphabet}")]
    InvalidAlphabet {
        seq: Box<str>,
        alphabet: &'static str,
    },

    #[error("unknown codon '{codon}'")]
    UnknownCodon { codon: Box<str> },

    #[error("unsupported sequence kind '{kind}'")]
    UnsupportedKind { kind: Box<str> },

    #[error("cannot compute composition of zero-length sequence '{id}'")]
    ZeroLengthComposition { id: Box<str> },

    #[error("record format error at line {line}: {msg}")]
    Format { msg: &'static str, line: usize },

    #[error("record io error: {0}")]
    Io(#[from] io::Error),
}

pub type SeqResult<T> = Result<T, SeqError>;
