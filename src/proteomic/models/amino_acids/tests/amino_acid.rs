use std::collections::HashSet;

use crate::proteomic::models::amino_acids::amino_acid::{AminoAcid, AMINO_ACIDS};

#[test]
pub fn test_twenty_distinct_amino_acids() {
    let codes: HashSet<char> = AMINO_ACIDS.iter().map(|amino_acid| amino_acid.get_one_letter_code()).collect();
    assert_eq!(20, AMINO_ACIDS.len());
    assert_eq!(20, codes.len());
}

#[test]
pub fn test_get() {
    let tryptophan: &AminoAcid = AminoAcid::get('W').unwrap();
    assert_eq!("Tryptophan", tryptophan.get_name());
    assert_eq!("Trp", tryptophan.get_three_letter_code());
    assert_eq!(186, tryptophan.get_mass());
    assert!(AminoAcid::get('X').is_none());
    assert!(AminoAcid::get('w').is_none());
}

#[test]
pub fn test_isobaric_amino_acids() {
    assert_eq!(AminoAcid::get('I').unwrap().get_mass(), AminoAcid::get('L').unwrap().get_mass());
    assert_eq!(AminoAcid::get('K').unwrap().get_mass(), AminoAcid::get('Q').unwrap().get_mass());
}
