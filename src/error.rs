use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors of the clump finder, the spectrum generator and the tasks around them.
#[derive(Debug, Error)]
pub enum Error {
    /// Parameters which do not fit the input, e.g. k > L or a non ACGT symbol in a genome
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A residue of a peptide which has no entry in the mass table
    #[error("unknown residue '{residue}' at position {position}")]
    UnknownResidue { residue: char, position: usize },

    /// Malformed row in a custom mass table
    #[error("malformed mass table: {0}")]
    MassTable(String),

    #[error("could not compile sequence pattern: {0}")]
    Regex(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A worker thread panicked while holding the shared result
    #[error("tried to lock a poisoned mutex for '{0}'")]
    Poisoned(String),
}
