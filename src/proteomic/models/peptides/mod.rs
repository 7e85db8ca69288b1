pub mod cyclic_peptide;
