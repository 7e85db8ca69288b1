use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::genomic;
use crate::genomic::models::genome::Genome;
use crate::genomic::models::clump_parameters::ClumpParameters;
use crate::genomic::utility::clump_finder;
use crate::genomic::utility::genome_reader;
use crate::utility::configuration::Configuration;
use crate::utility::output;

/// Where the genome comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenomeSource {
    Default,
    Sequence(String),
    File(String)
}

pub struct ClumpFindingArguments {
    genome_source: GenomeSource,
    k: usize,
    window_length: usize,
    times: usize,
    thread_count: usize,
    output_file: Option<String>
}

impl ClumpFindingArguments {
    pub fn get_genome_source(&self) -> &GenomeSource {
        return &self.genome_source;
    }

    pub fn get_k(&self) -> usize {
        return self.k;
    }

    pub fn get_window_length(&self) -> usize {
        return self.window_length;
    }

    pub fn get_times(&self) -> usize {
        return self.times;
    }

    pub fn get_thread_count(&self) -> usize {
        return self.thread_count;
    }

    pub fn get_output_file(&self) -> Option<&str> {
        return self.output_file.as_ref().map(|file| file.as_str());
    }

    pub fn from_cli_args(cli_args: &clap::ArgMatches, configuration: &Configuration) -> Result<Self> {
        let genome_source: GenomeSource = match (cli_args.value_of("GENOME"), cli_args.value_of("GENOME_FILE")) {
            (Some(sequence), None) => GenomeSource::Sequence(sequence.to_owned()),
            (None, Some(file)) => GenomeSource::File(file.to_owned()),
            (Some(_), Some(_)) => return Err(Error::InvalidArgument("genome and genome-file are mutually exclusive".to_owned())),
            (None, None) => {
                debug!("no genome specified, use the default genome");
                GenomeSource::Default
            }
        };
        // the configured value is only needed if --threads is missing
        let thread_count: usize = match parse_optional_count(cli_args, "THREAD_COUNT", "threads")? {
            Some(thread_count) => thread_count,
            None => configuration.get_thread_count()?
        };
        return Ok(Self {
            genome_source: genome_source,
            k: parse_count(cli_args, "K", "k", genomic::DEFAULT_K)?,
            window_length: parse_count(cli_args, "WINDOW_LENGTH", "window-length", genomic::DEFAULT_WINDOW_LENGTH)?,
            times: parse_count(cli_args, "TIMES", "times", genomic::DEFAULT_TIMES)?,
            thread_count: thread_count,
            output_file: cli_args.value_of("OUTPUT_FILE").map(|file| file.to_owned())
        });
    }
}

fn parse_optional_count(cli_args: &clap::ArgMatches, arg_name: &str, display_name: &str) -> Result<Option<usize>> {
    match cli_args.value_of(arg_name) {
        Some(number_string) => match number_string.trim().parse::<usize>() {
            Ok(count) => Ok(Some(count)),
            Err(_) => Err(Error::InvalidArgument(format!("could not parse {} '{}' to unsigned integer", display_name, number_string)))
        },
        None => Ok(None)
    }
}

fn parse_count(cli_args: &clap::ArgMatches, arg_name: &str, display_name: &str, default: usize) -> Result<usize> {
    match parse_optional_count(cli_args, arg_name, display_name)? {
        Some(count) => Ok(count),
        None => {
            debug!(default, "{} not specified", display_name);
            Ok(default)
        }
    }
}

fn load_genome(genome_source: &GenomeSource) -> Result<Genome> {
    match genome_source {
        GenomeSource::Default => Genome::new(genomic::DEFAULT_GENOME.trim()),
        GenomeSource::Sequence(sequence) => Genome::new(sequence.as_str()),
        GenomeSource::File(file) => genome_reader::read_genome_file(file.as_str())
    }
}

/// Finds the clumps, prints them sorted on one line and optionally writes them to a CSV file.
pub fn clump_finding_task(clump_finding_args: &ClumpFindingArguments) -> Result<Vec<String>> {
    let genome: Genome = load_genome(clump_finding_args.get_genome_source())?;
    let params: ClumpParameters = ClumpParameters::new(
        &genome,
        clump_finding_args.get_k(),
        clump_finding_args.get_window_length(),
        clump_finding_args.get_times()
    )?;
    info!(
        genome_length = genome.len(),
        k = params.get_k(),
        window_length = params.get_window_length(),
        times = params.get_times(),
        threads = clump_finding_args.get_thread_count(),
        "searching clumps"
    );
    let start_time: f64 = time::precise_time_s();
    let patterns: HashSet<String> = clump_finder::find_clumps_parallel(&genome, &params, clump_finding_args.get_thread_count())?;
    let stop_time: f64 = time::precise_time_s();
    info!(patterns = patterns.len(), seconds = stop_time - start_time, "finished clump search");
    // sets have no order, sort for reproducible output
    let mut patterns: Vec<String> = patterns.into_iter().collect();
    patterns.sort();
    println!("{}", output::join_with_spaces(&patterns));
    if let Some(output_file) = clump_finding_args.get_output_file() {
        output::write_column_csv(output_file, "kmer", &patterns)?;
    }
    return Ok(patterns);
}
