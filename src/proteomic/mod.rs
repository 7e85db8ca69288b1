pub mod models;
pub mod utility;
pub mod tasks;

/// Peptide of the spectrum exercise, used when no peptide is given on the command line.
pub const DEFAULT_PEPTIDE: &'static str = "SDEGDLLHYGWR";
