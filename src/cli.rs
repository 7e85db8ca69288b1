use clap::{App, AppSettings, Arg, SubCommand};

/// Command line of the binary, one subcommand per task.
pub fn build_cli() -> App<'static, 'static> {
    return App::new("clump_spectrum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds k-mer clumps in genomes and generates theoretical spectra of cyclic peptides")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("clumps")
                .about("Prints all k-mers which occur exactly t times in a window of length L")
                .arg(Arg::with_name("GENOME")
                    .long("genome")
                    .takes_value(true)
                    .conflicts_with("GENOME_FILE")
                    .help("Genome sequence (A, C, G, T), default: the exercise genome"))
                .arg(Arg::with_name("GENOME_FILE")
                    .long("genome-file")
                    .takes_value(true)
                    .help("Plain text or FASTA file containing the genome"))
                .arg(Arg::with_name("K")
                    .short("k")
                    .long("k")
                    .takes_value(true)
                    .help("Length of the k-mers, default: 9"))
                .arg(Arg::with_name("WINDOW_LENGTH")
                    .short("L")
                    .long("window-length")
                    .takes_value(true)
                    .help("Length of the window, default: 505"))
                .arg(Arg::with_name("TIMES")
                    .short("t")
                    .long("times")
                    .takes_value(true)
                    .help("Number of occurrences in a window, default: 16"))
                .arg(Arg::with_name("THREAD_COUNT")
                    .long("threads")
                    .takes_value(true)
                    .help("Number of worker threads, default: CLUMP_SPECTRUM_THREADS or number of CPUs"))
                .arg(Arg::with_name("OUTPUT_FILE")
                    .short("o")
                    .long("output")
                    .takes_value(true)
                    .help("Additionally write the k-mers to this CSV file"))
        )
        .subcommand(
            SubCommand::with_name("spectrum")
                .about("Prints the theoretical spectrum of a cyclic peptide")
                .arg(Arg::with_name("PEPTIDE")
                    .index(1)
                    .help("Amino acid sequence, default: SDEGDLLHYGWR"))
                .arg(Arg::with_name("MASS_TABLE_FILE")
                    .long("mass-table")
                    .takes_value(true)
                    .help("CSV file with columns one_letter_code,mass"))
                .arg(Arg::with_name("EXPECTED_SPECTRUM")
                    .long("expected")
                    .takes_value(true)
                    .help("Spectrum to compare with, masses separated by spaces or commas"))
                .arg(Arg::with_name("OUTPUT_FILE")
                    .short("o")
                    .long("output")
                    .takes_value(true)
                    .help("Additionally write the spectrum to this CSV file"))
        )
        .subcommand(
            SubCommand::with_name("sequence-mass")
                .about("Prints the mass of an amino acid sequence")
                .arg(Arg::with_name("SEQUENCE")
                    .index(1)
                    .required(true)
                    .help("Amino acid sequence"))
                .arg(Arg::with_name("MASS_TABLE_FILE")
                    .long("mass-table")
                    .takes_value(true)
                    .help("CSV file with columns one_letter_code,mass"))
        );
}
