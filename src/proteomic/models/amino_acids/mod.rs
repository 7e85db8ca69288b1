pub mod amino_acid;
pub mod mass_table;
#[cfg(test)]
mod tests;
