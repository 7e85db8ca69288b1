use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::proteomic::models::amino_acids::mass_table::MassTable;
use crate::proteomic::models::peptides::cyclic_peptide::CyclicPeptide;

/// Theoretical spectrum of the cyclic peptide with the integer mass table.
pub fn theoretical_spectrum(peptide: &str) -> Result<Vec<u64>> {
    return Ok(CyclicPeptide::new(peptide, MassTable::integer())?.get_theoretical_spectrum());
}

/// Compares two spectra as multisets: order is ignored, multiplicity is not.
pub fn spectra_match(spectrum: &[u64], other_spectrum: &[u64]) -> bool {
    if spectrum.len() != other_spectrum.len() {
        return false;
    }
    return count_masses(spectrum) == count_masses(other_spectrum);
}

fn count_masses(spectrum: &[u64]) -> HashMap<u64, usize> {
    let mut mass_counts: HashMap<u64, usize> = HashMap::new();
    for mass in spectrum {
        *mass_counts.entry(*mass).or_insert(0) += 1;
    }
    return mass_counts;
}

/// Parses masses separated by whitespace and/or commas, e.g. "0 113 114" or "0,113,114".
pub fn parse_spectrum(spectrum: &str) -> Result<Vec<u64>> {
    return spectrum.split(|symbol: char| symbol == ',' || symbol.is_whitespace())
        .filter(|mass| !mass.is_empty())
        .map(|mass| mass.parse::<u64>().map_err(|_| Error::InvalidArgument(format!("'{}' is not an integer mass", mass))))
        .collect();
}
