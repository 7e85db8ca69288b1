pub mod kmer_counter;
pub mod clump_finder;
pub mod genome_reader;
