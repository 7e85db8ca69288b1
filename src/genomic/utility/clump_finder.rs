use std::cmp;
use std::collections::HashSet;
use std::mem;
use std::ops::Range;
use std::sync::{Arc, Mutex};

use threadpool::ThreadPool;
use tracing::debug;

use crate::error::{Error, Result};
use crate::genomic::models::genome::Genome;
use crate::genomic::models::clump_parameters::ClumpParameters;
use crate::genomic::utility::kmer_counter;

/// Finds all distinct k-mers which occur exactly `times` in at least one window
/// of length `window_length` of the genome.
///
/// The genome is validated (only A, C, G, T) and the parameters must satisfy
/// 1 <= k <= window_length <= genome length and times >= 1,
/// otherwise `Error::InvalidArgument` is returned.
pub fn find_patterns_forming_clumps(genome: &str, k: usize, window_length: usize, times: usize) -> Result<HashSet<String>> {
    let genome: Genome = Genome::new(genome)?;
    let params: ClumpParameters = ClumpParameters::new(&genome, k, window_length, times)?;
    return Ok(find_clumps(&genome, &params));
}

/// Scans every window of the genome.
pub fn find_clumps(genome: &Genome, params: &ClumpParameters) -> HashSet<String> {
    let number_of_windows: usize = genome.get_number_of_windows(params.get_window_length());
    return scan_windows(genome, params, 0..number_of_windows);
}

/// Same result as `find_clumps`, but the windows are split into contiguous chunks
/// which are scanned by a thread pool. At most one thread per window is started.
pub fn find_clumps_parallel(genome: &Genome, params: &ClumpParameters, thread_count: usize) -> Result<HashSet<String>> {
    if thread_count == 0 {
        return Err(Error::InvalidArgument("thread count must be at least 1".to_owned()));
    }
    let number_of_windows: usize = genome.get_number_of_windows(params.get_window_length());
    if thread_count == 1 || number_of_windows < 2 {
        return Ok(scan_windows(genome, params, 0..number_of_windows));
    }
    // more threads than windows would only idle
    let thread_count: usize = cmp::min(thread_count, number_of_windows);
    let chunk_size: usize = (number_of_windows + thread_count - 1) / thread_count;
    let genome_ptr: Arc<Genome> = Arc::new(genome.clone());
    let patterns: Arc<Mutex<HashSet<String>>> = Arc::new(Mutex::new(HashSet::new()));
    let thread_pool = ThreadPool::new(thread_count);
    let mut chunk_start: usize = 0;
    while chunk_start < number_of_windows {
        let chunk_end: usize = cmp::min(chunk_start + chunk_size, number_of_windows);
        // copies which can be moved into the thread
        let genome_ptr = genome_ptr.clone();
        let patterns_ptr = patterns.clone();
        let params: ClumpParameters = *params;
        thread_pool.execute(move || {
            let chunk_patterns: HashSet<String> = scan_windows(&genome_ptr, &params, chunk_start..chunk_end);
            debug!(chunk_start, chunk_end, patterns = chunk_patterns.len(), "scanned window chunk");
            // a poisoned mutex is detected by the caller after join()
            if let Ok(mut patterns) = patterns_ptr.lock() {
                patterns.extend(chunk_patterns);
            }
        });
        chunk_start = chunk_end;
    }
    thread_pool.join();
    if thread_pool.panic_count() > 0 {
        return Err(Error::Poisoned("patterns".to_owned()));
    }
    let mut patterns_guard = patterns.lock().map_err(|_| Error::Poisoned("patterns".to_owned()))?;
    let found_patterns: HashSet<String> = mem::replace(&mut *patterns_guard, HashSet::new());
    return Ok(found_patterns);
}

fn scan_windows(genome: &Genome, params: &ClumpParameters, window_offsets: Range<usize>) -> HashSet<String> {
    let mut patterns: HashSet<String> = HashSet::new();
    for offset in window_offsets {
        let window: &str = genome.get_window(offset, params.get_window_length());
        for (kmer, count) in kmer_counter::count_kmers(window, params.get_k()) {
            // exactly t, a k-mer occurring more often does not count for this window
            if count == params.get_times() {
                patterns.insert(kmer.to_owned());
            }
        }
    }
    return patterns;
}
