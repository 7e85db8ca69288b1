use std::fs::File;
use std::io::BufReader;
use std::io::prelude::*;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::genomic::models::genome::Genome;

/// Reads a genome from plain text or FASTA.
/// Header lines (starting with '>') are skipped, all whitespace is removed
/// and the remaining lines are concatenated.
pub fn read_genome_file<P: AsRef<Path>>(path: P) -> Result<Genome> {
    let genome_file = BufReader::new(File::open(path.as_ref())?);
    let mut sequence: String = String::new();
    let mut header_count: usize = 0;
    for line in genome_file.lines() {
        let line: String = line?;
        if line.starts_with('>') {
            header_count += 1;
            continue;
        }
        sequence.extend(line.chars().filter(|symbol| !symbol.is_whitespace()));
    }
    debug!(path = %path.as_ref().display(), header_count, length = sequence.len(), "read genome file");
    let genome: Genome = Genome::new(sequence.as_str())?;
    if genome.is_empty() {
        warn!(path = %path.as_ref().display(), "genome file contains no sequence");
    }
    return Ok(genome);
}
