use std::env;
use std::fs;

use crate::cli::build_cli;
use crate::error::Error;
use crate::genomic;
use crate::genomic::tasks::clump_finding::{ClumpFindingArguments, GenomeSource, clump_finding_task};
use crate::utility::configuration::Configuration;

const SAMPLE_GENOME: &'static str = "CGGACTCGACAGATGTGAAGAAATGTGAAGACTGAGTGAAGAGAAGAGGAAACACGACACGACATTGCGACATAATGTACGAATGTAATGTGCCTATGGC";

fn arguments_with_configuration(args: &[&str], configuration: &Configuration) -> Result<ClumpFindingArguments, Error> {
    let mut command_line: Vec<&str> = vec!["clump_spectrum", "clumps"];
    command_line.extend_from_slice(args);
    let matches = build_cli().get_matches_from_safe(command_line).unwrap();
    return ClumpFindingArguments::from_cli_args(matches.subcommand_matches("clumps").unwrap(), configuration);
}

fn arguments_from(args: &[&str]) -> Result<ClumpFindingArguments, Error> {
    return arguments_with_configuration(args, &Configuration::from_variables(Some("2".to_owned()), None));
}

#[test]
pub fn test_default_arguments() {
    let clump_finding_args = arguments_from(&[]).unwrap();
    assert_eq!(&GenomeSource::Default, clump_finding_args.get_genome_source());
    assert_eq!(genomic::DEFAULT_K, clump_finding_args.get_k());
    assert_eq!(genomic::DEFAULT_WINDOW_LENGTH, clump_finding_args.get_window_length());
    assert_eq!(genomic::DEFAULT_TIMES, clump_finding_args.get_times());
    assert_eq!(2, clump_finding_args.get_thread_count());
    assert_eq!(None, clump_finding_args.get_output_file());
}

#[test]
pub fn test_unparsable_number() {
    match arguments_from(&["-k", "five"]) {
        Err(Error::InvalidArgument(_)) => (),
        Err(err) => panic!("expected InvalidArgument, got {:?}", err),
        Ok(_) => panic!("expected InvalidArgument")
    }
}

#[test]
pub fn test_threads_flag_overrides_configuration() {
    let invalid_configuration: Configuration = Configuration::from_variables(Some("zero".to_owned()), None);
    let clump_finding_args = arguments_with_configuration(&["--threads", "4"], &invalid_configuration).unwrap();
    assert_eq!(4, clump_finding_args.get_thread_count());
    match arguments_with_configuration(&[], &invalid_configuration) {
        Err(Error::InvalidArgument(_)) => (),
        Err(err) => panic!("expected InvalidArgument, got {:?}", err),
        Ok(_) => panic!("expected InvalidArgument")
    }
}

#[test]
pub fn test_unparsable_thread_count_names_flag() {
    match arguments_from(&["--threads", "many"]) {
        Err(Error::InvalidArgument(message)) => assert!(message.contains("threads 'many'")),
        Err(err) => panic!("expected InvalidArgument, got {:?}", err),
        Ok(_) => panic!("expected InvalidArgument")
    }
}

#[test]
pub fn test_task_with_sample_genome() {
    let mut output_path = env::temp_dir();
    output_path.push(format!("clump_spectrum_{}_kmers.csv", std::process::id()));
    let output_file: String = output_path.to_string_lossy().into_owned();
    let clump_finding_args = arguments_from(&[
        "--genome", SAMPLE_GENOME, "-k", "5", "-L", "75", "-t", "4", "--threads", "3", "--output", output_file.as_str()
    ]).unwrap();
    let patterns: Vec<String> = clump_finding_task(&clump_finding_args).unwrap();
    assert_eq!(vec!["AATGT", "CGACA", "GAAGA"], patterns);
    let content: String = fs::read_to_string(&output_path).unwrap();
    fs::remove_file(&output_path).unwrap();
    assert_eq!("kmer\nAATGT\nCGACA\nGAAGA\n", content);
}

#[test]
pub fn test_task_with_genome_file() {
    let mut genome_path = env::temp_dir();
    genome_path.push(format!("clump_spectrum_{}_task_genome.fasta", std::process::id()));
    fs::write(&genome_path, format!(">sample\n{}\n{}\n", &SAMPLE_GENOME[..50], &SAMPLE_GENOME[50..])).unwrap();
    let genome_file: String = genome_path.to_string_lossy().into_owned();
    let clump_finding_args = arguments_from(&["--genome-file", genome_file.as_str(), "-k", "5", "-L", "50", "-t", "4"]).unwrap();
    let patterns = clump_finding_task(&clump_finding_args);
    fs::remove_file(&genome_path).unwrap();
    assert_eq!(vec!["GAAGA"], patterns.unwrap());
}

#[test]
pub fn test_task_rejects_window_longer_than_genome() {
    let clump_finding_args = arguments_from(&["--genome", "ACGTACGT", "-k", "2", "-L", "9", "-t", "1"]).unwrap();
    match clump_finding_task(&clump_finding_args) {
        Err(Error::InvalidArgument(_)) => (),
        other => panic!("expected InvalidArgument, got {:?}", other)
    }
}
