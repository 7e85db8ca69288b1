use crate::error::Result;
use crate::proteomic::models::amino_acids::mass_table::MassTable;

/// Peptide whose ends are joined, so fragments may wrap around from the last to the first residue.
pub struct CyclicPeptide {
    residues: Vec<char>,
    residue_masses: Vec<u64>
}

impl CyclicPeptide {
    /// Fails with `Error::UnknownResidue` if a residue has no mass in the table.
    pub fn new(aa_sequence: &str, mass_table: &MassTable) -> Result<Self> {
        return Ok(Self {
            residue_masses: mass_table.get_residue_masses(aa_sequence)?,
            residues: aa_sequence.chars().collect()
        });
    }

    pub fn get_aa_sequence(&self) -> String {
        return self.residues.iter().collect();
    }

    pub fn get_length(&self) -> usize {
        return self.residues.len();
    }

    pub fn get_mass(&self) -> u64 {
        return self.residue_masses.iter().sum();
    }

    /// Every fragment of length 1 to N-1 starting at each of the N positions
    /// (taken from the peptide concatenated with itself), followed by the whole peptide,
    /// sorted by length. N * (N - 1) + 1 fragments in total.
    pub fn get_subpeptides(&self) -> Vec<String> {
        let length: usize = self.get_length();
        let dipeptide: Vec<char> = self.residues.iter().chain(self.residues.iter()).cloned().collect();
        let mut subpeptides: Vec<String> = Vec::with_capacity(length * length.saturating_sub(1) + 1);
        for start in 0..length {
            for fragment_length in 1..length {
                subpeptides.push(dipeptide[start..start + fragment_length].iter().collect());
            }
        }
        subpeptides.push(self.get_aa_sequence());
        // stable, fragments of equal length keep their order
        subpeptides.sort_by_key(|subpeptide| subpeptide.chars().count());
        return subpeptides;
    }

    /// Ascending masses of all cyclic fragments plus 0 for the empty fragment.
    /// Duplicate masses are kept, N * (N - 1) + 2 values in total.
    pub fn get_theoretical_spectrum(&self) -> Vec<u64> {
        let length: usize = self.get_length();
        let dipeptide_masses: Vec<u64> = self.residue_masses.iter().chain(self.residue_masses.iter()).cloned().collect();
        let mut spectrum: Vec<u64> = Vec::with_capacity(length * length.saturating_sub(1) + 2);
        spectrum.push(0);
        for start in 0..length {
            for fragment_length in 1..length {
                spectrum.push(dipeptide_masses[start..start + fragment_length].iter().sum());
            }
        }
        spectrum.push(self.get_mass());
        spectrum.sort();
        return spectrum;
    }
}
