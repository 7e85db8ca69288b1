use crate::error::{Error, Result};
use crate::genomic::models::genome::Genome;

/// (L, t)-clump parameters for k-mers: a k-mer forms a clump
/// if it occurs exactly `times` in a window of length `window_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClumpParameters {
    k: usize,
    window_length: usize,
    times: usize
}

impl ClumpParameters {
    /// Checks 1 <= k <= L <= genome length and t >= 1.
    pub fn new(genome: &Genome, k: usize, window_length: usize, times: usize) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidArgument("k must be at least 1".to_owned()));
        }
        if k > window_length {
            return Err(Error::InvalidArgument(format!(
                "k ({}) must be less or equals than the window length ({})",
                k,
                window_length
            )));
        }
        if window_length > genome.len() {
            return Err(Error::InvalidArgument(format!(
                "window length ({}) must be less or equals than the genome length ({})",
                window_length,
                genome.len()
            )));
        }
        if times == 0 {
            return Err(Error::InvalidArgument("t must be at least 1".to_owned()));
        }
        return Ok(Self {
            k: k,
            window_length: window_length,
            times: times
        });
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
}
