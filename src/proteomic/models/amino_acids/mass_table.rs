use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{Error, Result};
use crate::proteomic::models::amino_acids::amino_acid::{AminoAcid, AMINO_ACIDS};

static INTEGER_MASS_TABLE: OnceLock<MassTable> = OnceLock::new();

/// Lookup from one letter code to integer residue mass.
/// A table is never changed after it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MassTable {
    masses: HashMap<char, u64>
}

impl MassTable {
    /// Nominal masses of the 20 standard amino acids, built on first use.
    pub fn integer() -> &'static MassTable {
        return INTEGER_MASS_TABLE.get_or_init(|| Self::from_amino_acids(AMINO_ACIDS));
    }

    pub fn from_amino_acids(amino_acids: &[AminoAcid]) -> Self {
        return Self {
            masses: amino_acids.iter()
                .map(|amino_acid| (amino_acid.get_one_letter_code(), amino_acid.get_mass()))
                .collect()
        };
    }

    /// Reads a table from a CSV file with the header `one_letter_code,mass`.
    pub fn from_csv_file<P: AsRef<Path>>(csv_path: P) -> Result<Self> {
        let mass_table: MassTable = Self::from_csv_reader(File::open(csv_path.as_ref())?)?;
        debug!(path = %csv_path.as_ref().display(), residues = mass_table.len(), "loaded mass table");
        return Ok(mass_table);
    }

    pub fn from_csv_reader<R: Read>(csv_reader: R) -> Result<Self> {
        // column count is checked per row in parse_csv_row
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(csv_reader);
        let mut masses: HashMap<char, u64> = HashMap::new();
        for (row_index, row) in reader.records().enumerate() {
            let row: csv::StringRecord = row?;
            // header is line 1
            let line: usize = row_index + 2;
            let (one_letter_code, mass) = Self::parse_csv_row(&row, line)?;
            if masses.insert(one_letter_code, mass).is_some() {
                return Err(Error::MassTable(format!("line {}: residue '{}' is defined twice", line, one_letter_code)));
            }
        }
        if masses.is_empty() {
            return Err(Error::MassTable("table contains no residues".to_owned()));
        }
        return Ok(Self {
            masses: masses
        });
    }

    fn parse_csv_row(row: &csv::StringRecord, line: usize) -> Result<(char, u64)> {
        if row.len() != 2 {
            return Err(Error::MassTable(format!("line {}: expected 2 columns, got {}", line, row.len())));
        }
        let code_field: &str = row.get(0).unwrap_or("").trim();
        let mut code_chars = code_field.chars();
        let one_letter_code: char = match (code_chars.next(), code_chars.next()) {
            (Some(code), None) => code,
            _ => return Err(Error::MassTable(format!("line {}: '{}' is not a one letter code", line, code_field)))
        };
        let mass_field: &str = row.get(1).unwrap_or("").trim();
        let mass: u64 = match mass_field.parse::<u64>() {
            Ok(mass) => mass,
            Err(_) => return Err(Error::MassTable(format!("line {}: '{}' is not an integer mass", line, mass_field)))
        };
        return Ok((one_letter_code, mass));
    }

    pub fn get_mass(&self, one_letter_code: char) -> Option<u64> {
        return self.masses.get(&one_letter_code).cloned();
    }

    pub fn len(&self) -> usize {
        return self.masses.len();
    }

    /// Masses of every residue of the sequence in order.
    /// Fails with `Error::UnknownResidue` at the first residue which is not in the table.
    pub fn get_residue_masses(&self, sequence: &str) -> Result<Vec<u64>> {
        return sequence.chars()
            .enumerate()
            .map(|(position, residue)| match self.get_mass(residue) {
                Some(mass) => Ok(mass),
                None => Err(Error::UnknownResidue { residue: residue, position: position })
            })
            .collect();
    }

    /// Sum of the residue masses of a sequence (no terminal groups added).
    pub fn mass_of(&self, sequence: &str) -> Result<u64> {
        return Ok(self.get_residue_masses(sequence)?.iter().sum());
    }
}
