pub mod theoretical_spectrum;
pub mod sequence_mass;
