use std::process;

use clump_spectrum::cli;
use clump_spectrum::genomic::tasks::clump_finding::{ClumpFindingArguments, clump_finding_task};
use clump_spectrum::proteomic::tasks::theoretical_spectrum::{TheoreticalSpectrumArguments, theoretical_spectrum_task};
use clump_spectrum::proteomic::tasks::sequence_mass::{SequenceMassArguments, sequence_mass_task};
use clump_spectrum::utility::configuration::Configuration;
use clump_spectrum::utility::logger;

fn main() {
    let configuration: Configuration = Configuration::load();
    logger::init_logger(configuration.get_log_filter());

    let matches = cli::build_cli().get_matches();
    // Ok(false) means the task ran but its check failed
    let result = match matches.subcommand() {
        ("clumps", Some(cli_args)) => ClumpFindingArguments::from_cli_args(cli_args, &configuration)
            .and_then(|clump_finding_args| clump_finding_task(&clump_finding_args))
            .map(|_| true),
        ("spectrum", Some(cli_args)) => TheoreticalSpectrumArguments::from_cli_args(cli_args)
            .and_then(|spectrum_args| theoretical_spectrum_task(&spectrum_args))
            .map(|spectrum_result| spectrum_result.get_matches_expected().unwrap_or(true)),
        ("sequence-mass", Some(cli_args)) => SequenceMassArguments::from_cli_args(cli_args)
            .and_then(|sequence_mass_args| sequence_mass_task(&sequence_mass_args))
            .map(|_| true),
        _ => Ok(true)
    };
    match result {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(err) => {
            tracing::error!("{}", err);
            process::exit(1);
        }
    }
}
