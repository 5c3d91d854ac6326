use crate::seq::traits::SeqResidues;

/// Protein sequences are uppercased but deliberately not checked against an
/// amino-acid alphabet, and emptiness is not rejected either; the composition
/// functions guard the zero-length case instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProteinSeq {
    id: Box<str>,
    residues: String,
    desc: Option<Box<str>>,
}

impl ProteinSeq {
    pub fn new(id: impl Into<Box<str>>, raw: &str) -> Self {
        Self {
            id: id.into(),
            residues: raw.to_ascii_uppercase(),
            desc: None,
        }
    }

    pub fn with_desc(mut self, desc: impl Into<Box<str>>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }
}

impl SeqResidues for ProteinSeq {
    fn id(&self) -> &str {
        &self.id
    }

    fn residues(&self) -> &str {
        &self.residues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_uppercases_without_validation() {
        let seq = ProteinSeq::new("p1", "mkv*x-");
        assert_eq!(seq.residues(), "MKV*X-");
        assert_eq!(seq.desc(), None);
    }

    #[test]
    fn empty_protein_is_allowed() {
        let seq = ProteinSeq::new("p1", "");
        assert!(seq.is_empty());
    }

    #[test]
    fn with_desc_builder() {
        let seq = ProteinSeq::new("p1", "MKV").with_desc("capsid protein");
        assert_eq!(seq.desc(), Some("capsid protein"));
    }
}
