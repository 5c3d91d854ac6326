use crate::error::{SeqError, SeqResult};
use crate::seq::{SeqKind, Sequence};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// One parsed record, still untyped and unvalidated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub id: Box<str>,
    pub seq: String,
}

/// Lazy forward-only reader for the two-line record convention: a `>` header
/// whose remainder is the identifier, then exactly one sequence line. Lines
/// between a record's sequence line and the next header are skipped, so a
/// wrapped multi-line sequence is misread by design of the format.
pub struct FastaRecords<R> {
    reader: R,
    line_no: usize,
    buf_line: String,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf_line: String::new(),
        }
    }

    fn read_line(&mut self) -> SeqResult<Option<&str>> {
        self.buf_line.clear();
        match self.reader.read_line(&mut self.buf_line)? {
            0 => Ok(None),
            _ => {
                self.line_no += 1;
                Ok(Some(self.buf_line.trim_end_matches(&['\n', '\r'][..])))
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = SeqResult<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = loop {
            match self.read_line() {
                Ok(None) => return None,
                Err(err) => return Some(Err(err)),
                Ok(Some(line)) => {
                    if let Some(rest) = line.strip_prefix('>') {
                        break Box::<str>::from(rest);
                    }
                    // not a header: keep scanning
                }
            }
        };
        let header_line_no = self.line_no;

        let seq = match self.read_line() {
            Ok(Some(line)) => line.to_string(),
            Ok(None) => {
                return Some(Err(SeqError::Format {
                    msg: "header without sequence line",
                    line: header_line_no,
                }))
            }
            Err(err) => return Some(Err(err)),
        };

        Some(Ok(RawRecord { id, seq }))
    }
}

pub fn fasta_records_from_reader<R: BufRead>(reader: R) -> FastaRecords<R> {
    FastaRecords::new(reader)
}

pub fn fasta_records_from_path(
    path: impl AsRef<Path>,
) -> SeqResult<FastaRecords<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(FastaRecords::new(BufReader::new(file)))
}

pub fn fasta_records_from_bytes(data: &[u8]) -> FastaRecords<BufReader<Cursor<&[u8]>>> {
    FastaRecords::new(BufReader::new(Cursor::new(data)))
}

pub fn read_raw_records_from_reader<R: BufRead>(reader: R) -> SeqResult<Vec<RawRecord>> {
    let mut out = Vec::new();
    for record in fasta_records_from_reader(reader) {
        out.push(record?);
    }
    Ok(out)
}

/// Read every record and construct it as `kind`, propagating the first
/// read or validation error. Callers that want to skip bad records iterate
/// `FastaRecords` themselves.
pub fn read_sequences_from_reader<R: BufRead>(
    reader: R,
    kind: SeqKind,
) -> SeqResult<Vec<Sequence>> {
    let mut out = Vec::new();
    for record in fasta_records_from_reader(reader) {
        let record = record?;
        out.push(Sequence::from_raw(kind, record.id, &record.seq)?);
    }
    Ok(out)
}

pub fn read_sequences_from_path(
    path: impl AsRef<Path>,
    kind: SeqKind,
) -> SeqResult<Vec<Sequence>> {
    let file = File::open(path)?;
    read_sequences_from_reader(BufReader::new(file), kind)
}
