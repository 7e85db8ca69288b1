use std::collections::HashMap;

/// All overlapping k-mers of the sequence in order of appearance.
/// Returns an empty vector if k is 0 or longer than the sequence.
/// Slicing uses byte offsets, so the sequence is expected to be ASCII.
pub fn make_kmers(sequence: &str, k: usize) -> Vec<&str> {
    if k == 0 || k > sequence.len() {
        return Vec::new();
    }
    return (0..sequence.len() - k + 1)
        .map(|offset| &sequence[offset..offset + k])
        .collect();
}

/// Exact-match frequency of every overlapping k-mer of the sequence.
pub fn count_kmers(sequence: &str, k: usize) -> HashMap<&str, usize> {
    let mut kmer_counts: HashMap<&str, usize> = HashMap::new();
    for kmer in make_kmers(sequence, k) {
        *kmer_counts.entry(kmer).or_insert(0) += 1;
    }
    return kmer_counts;
}
