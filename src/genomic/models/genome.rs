use crate::error::{Error, Result};

/// matches the first symbol which is not a nucleotide
const NON_NUCLEOTIDE_PATTERN: &'static str = r"[^ACGT]";

/// Immutable DNA sequence over the alphabet {A, C, G, T}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    sequence: String
}

impl Genome {
    /// Upper-cases the given sequence and rejects every symbol which is not A, C, G or T.
    pub fn new(sequence: &str) -> Result<Self> {
        let sequence: String = sequence.to_uppercase();
        let non_nucleotide_regex = onig::Regex::new(NON_NUCLEOTIDE_PATTERN)
            .map_err(|err| Error::Regex(format!("{:?}", err)))?;
        if let Some((begin, _)) = non_nucleotide_regex.find(sequence.as_str()) {
            let symbol: char = sequence[begin..].chars().next().unwrap_or('?');
            // begin is a byte offset, report the character index
            let position: usize = sequence[..begin].chars().count();
            return Err(Error::InvalidArgument(format!(
                "genome contains symbol '{}' at position {}, only A, C, G and T are allowed",
                symbol,
                position
            )));
        }
        return Ok(Self {
            sequence: sequence
        });
    }

    pub fn get_sequence(&self) -> &str {
        return self.sequence.as_str();
    }

    pub fn len(&self) -> usize {
        return self.sequence.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.sequence.is_empty();
    }

    /// Number of windows of the given length, which fit into the genome.
    pub fn get_number_of_windows(&self, window_length: usize) -> usize {
        if window_length == 0 || window_length > self.len() {
            return 0;
        }
        return self.len() - window_length + 1;
    }

    // caller must make sure offset + length <= len()
    pub fn get_window(&self, offset: usize, length: usize) -> &str {
        return &self.sequence[offset..offset + length];
    }
}
