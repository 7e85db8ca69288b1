use tracing::{info, warn};

use crate::error::Result;
use crate::proteomic;
use crate::proteomic::models::amino_acids::mass_table::MassTable;
use crate::proteomic::models::peptides::cyclic_peptide::CyclicPeptide;
use crate::proteomic::utility::spectrum;
use crate::utility::output;

pub struct TheoreticalSpectrumArguments {
    peptide: String,
    mass_table_file: Option<String>,
    expected_spectrum: Option<Vec<u64>>,
    output_file: Option<String>
}

impl TheoreticalSpectrumArguments {
    pub fn get_peptide(&self) -> &str {
        return self.peptide.as_str();
    }

    pub fn get_mass_table_file(&self) -> Option<&str> {
        return self.mass_table_file.as_ref().map(|file| file.as_str());
    }

    pub fn get_expected_spectrum(&self) -> Option<&[u64]> {
        return self.expected_spectrum.as_ref().map(|expected_spectrum| expected_spectrum.as_slice());
    }

    pub fn get_output_file(&self) -> Option<&str> {
        return self.output_file.as_ref().map(|file| file.as_str());
    }

    pub fn from_cli_args(cli_args: &clap::ArgMatches) -> Result<Self> {
        let peptide: &str = cli_args.value_of("PEPTIDE").unwrap_or(proteomic::DEFAULT_PEPTIDE);
        let expected_spectrum: Option<Vec<u64>> = match cli_args.value_of("EXPECTED_SPECTRUM") {
            Some(expected_spectrum) => Some(spectrum::parse_spectrum(expected_spectrum)?),
            None => None
        };
        return Ok(Self {
            peptide: peptide.trim().to_owned(),
            mass_table_file: cli_args.value_of("MASS_TABLE_FILE").map(|file| file.to_owned()),
            expected_spectrum: expected_spectrum,
            output_file: cli_args.value_of("OUTPUT_FILE").map(|file| file.to_owned())
        });
    }
}

pub struct TheoreticalSpectrumResult {
    spectrum: Vec<u64>,
    matches_expected: Option<bool>
}

impl TheoreticalSpectrumResult {
    pub fn get_spectrum(&self) -> &[u64] {
        return self.spectrum.as_slice();
    }

    /// None if no expected spectrum was given
    pub fn get_matches_expected(&self) -> Option<bool> {
        return self.matches_expected;
    }
}

/// Prints the theoretical spectrum on one line, compares it with the expected spectrum if given
/// and optionally writes it to a CSV file.
pub fn theoretical_spectrum_task(spectrum_args: &TheoreticalSpectrumArguments) -> Result<TheoreticalSpectrumResult> {
    let custom_mass_table: MassTable;
    let mass_table: &MassTable = match spectrum_args.get_mass_table_file() {
        Some(file) => {
            custom_mass_table = MassTable::from_csv_file(file)?;
            &custom_mass_table
        },
        None => MassTable::integer()
    };
    let peptide: CyclicPeptide = CyclicPeptide::new(spectrum_args.get_peptide(), mass_table)?;
    let theoretical_spectrum: Vec<u64> = peptide.get_theoretical_spectrum();
    info!(
        peptide = spectrum_args.get_peptide(),
        mass = peptide.get_mass(),
        masses = theoretical_spectrum.len(),
        "generated theoretical spectrum"
    );
    println!("{}", output::join_with_spaces(&theoretical_spectrum));
    let matches_expected: Option<bool> = spectrum_args.get_expected_spectrum().map(|expected_spectrum| {
        let matches: bool = spectrum::spectra_match(&theoretical_spectrum, expected_spectrum);
        if matches {
            info!("theoretical spectrum matches the expected spectrum");
        } else {
            warn!(
                expected = %output::join_with_spaces(expected_spectrum),
                "theoretical spectrum does not match the expected spectrum"
            );
        }
        matches
    });
    if let Some(output_file) = spectrum_args.get_output_file() {
        output::write_column_csv(output_file, "mass", &theoretical_spectrum)?;
    }
    return Ok(TheoreticalSpectrumResult {
        spectrum: theoretical_spectrum,
        matches_expected: matches_expected
    });
}
