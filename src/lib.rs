pub mod error;
pub mod cli;
pub mod genomic;
pub mod proteomic;
pub mod utility;
