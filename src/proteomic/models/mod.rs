pub mod amino_acids;
pub mod peptides;
