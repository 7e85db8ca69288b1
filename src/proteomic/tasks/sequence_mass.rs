use tracing::debug;

use crate::error::{Error, Result};
use crate::proteomic::models::amino_acids::amino_acid::AminoAcid;
use crate::proteomic::models::amino_acids::mass_table::MassTable;

pub struct SequenceMassArguments {
    sequence: String,
    mass_table_file: Option<String>
}

impl SequenceMassArguments {
    pub fn get_sequence(&self) -> &str {
        return self.sequence.as_str();
    }

    pub fn get_mass_table_file(&self) -> Option<&str> {
        return self.mass_table_file.as_ref().map(|file| file.as_str());
    }

    pub fn from_cli_args(cli_args: &clap::ArgMatches) -> Result<Self> {
        let sequence: &str = match cli_args.value_of("SEQUENCE") {
            Some(sequence) => sequence,
            None => return Err(Error::InvalidArgument("no sequence specified".to_owned()))
        };
        return Ok(Self {
            sequence: sequence.trim().to_owned(),
            mass_table_file: cli_args.value_of("MASS_TABLE_FILE").map(|file| file.to_owned())
        });
    }
}

/// Sum of the residue masses of a linear sequence.
pub fn sequence_mass_task(sequence_mass_args: &SequenceMassArguments) -> Result<u64> {
    let custom_mass_table: MassTable;
    let mass_table: &MassTable = match sequence_mass_args.get_mass_table_file() {
        Some(file) => {
            custom_mass_table = MassTable::from_csv_file(file)?;
            &custom_mass_table
        },
        None => MassTable::integer()
    };
    let mass: u64 = mass_table.mass_of(sequence_mass_args.get_sequence())?;
    for residue in sequence_mass_args.get_sequence().chars() {
        if let Some(amino_acid) = AminoAcid::get(residue) {
            debug!(residue = amino_acid.get_three_letter_code(), name = amino_acid.get_name(), mass = ?mass_table.get_mass(residue), "residue");
        }
    }
    println!("sequence '{}' has a mass of {} Da", sequence_mass_args.get_sequence(), mass);
    return Ok(mass);
}
