pub mod models;
pub mod utility;
pub mod tasks;

/// Genome of the clump finding exercise, used when no genome is given on the command line.
pub const DEFAULT_GENOME: &'static str = include_str!("default_genome.txt");
pub const DEFAULT_K: usize = 9;
pub const DEFAULT_WINDOW_LENGTH: usize = 505;
pub const DEFAULT_TIMES: usize = 16;
