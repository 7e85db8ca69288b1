use crate::error::Error;
use crate::genomic::models::genome::Genome;

#[test]
pub fn test_upper_cases_sequence() {
    let genome: Genome = Genome::new("acgtACGT").unwrap();
    assert_eq!("ACGTACGT", genome.get_sequence());
    assert_eq!(8, genome.len());
}

#[test]
pub fn test_rejects_non_nucleotide() {
    match Genome::new("ACGTNACGT") {
        Err(Error::InvalidArgument(message)) => assert!(message.contains("'N' at position 4")),
        other => panic!("expected InvalidArgument, got {:?}", other)
    }
}

#[test]
pub fn test_rejects_non_ascii_symbol() {
    match Genome::new("acgé") {
        Err(Error::InvalidArgument(message)) => assert!(message.contains("'É' at position 3")),
        other => panic!("expected InvalidArgument, got {:?}", other)
    }
}

#[test]
pub fn test_rejects_whitespace() {
    assert!(Genome::new("ACGT ACGT").is_err());
}

#[test]
pub fn test_number_of_windows() {
    let genome: Genome = Genome::new("ACGTACGTAC").unwrap();
    assert_eq!(1, genome.get_number_of_windows(10));
    assert_eq!(6, genome.get_number_of_windows(5));
    assert_eq!(0, genome.get_number_of_windows(11));
    assert_eq!(0, genome.get_number_of_windows(0));
}

#[test]
pub fn test_window() {
    let genome: Genome = Genome::new("ACGTACGTAC").unwrap();
    assert_eq!("GTA", genome.get_window(2, 3));
}
