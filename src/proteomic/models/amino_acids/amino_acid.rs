/// Proteinogenic amino acid with its nominal (integer) residue mass in Dalton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AminoAcid {
    name: &'static str,
    one_letter_code: char,
    three_letter_code: &'static str,
    mass: u64
}

/// The 20 standard amino acids with nominal masses.
/// I and L as well as K and Q share the same nominal mass.
pub const AMINO_ACIDS: &'static [AminoAcid] = &[
    AminoAcid { name: "Glycine", one_letter_code: 'G', three_letter_code: "Gly", mass: 57 },
    AminoAcid { name: "Alanine", one_letter_code: 'A', three_letter_code: "Ala", mass: 71 },
    AminoAcid { name: "Serine", one_letter_code: 'S', three_letter_code: "Ser", mass: 87 },
    AminoAcid { name: "Proline", one_letter_code: 'P', three_letter_code: "Pro", mass: 97 },
    AminoAcid { name: "Valine", one_letter_code: 'V', three_letter_code: "Val", mass: 99 },
    AminoAcid { name: "Threonine", one_letter_code: 'T', three_letter_code: "Thr", mass: 101 },
    AminoAcid { name: "Cysteine", one_letter_code: 'C', three_letter_code: "Cys", mass: 103 },
    AminoAcid { name: "Isoleucine", one_letter_code: 'I', three_letter_code: "Ile", mass: 113 },
    AminoAcid { name: "Leucine", one_letter_code: 'L', three_letter_code: "Leu", mass: 113 },
    AminoAcid { name: "Asparagine", one_letter_code: 'N', three_letter_code: "Asn", mass: 114 },
    AminoAcid { name: "Aspartic acid", one_letter_code: 'D', three_letter_code: "Asp", mass: 115 },
    AminoAcid { name: "Lysine", one_letter_code: 'K', three_letter_code: "Lys", mass: 128 },
    AminoAcid { name: "Glutamine", one_letter_code: 'Q', three_letter_code: "Gln", mass: 128 },
    AminoAcid { name: "Glutamic acid", one_letter_code: 'E', three_letter_code: "Glu", mass: 129 },
    AminoAcid { name: "Methionine", one_letter_code: 'M', three_letter_code: "Met", mass: 131 },
    AminoAcid { name: "Histidine", one_letter_code: 'H', three_letter_code: "His", mass: 137 },
    AminoAcid { name: "Phenylalanine", one_letter_code: 'F', three_letter_code: "Phe", mass: 147 },
    AminoAcid { name: "Arginine", one_letter_code: 'R', three_letter_code: "Arg", mass: 156 },
    AminoAcid { name: "Tyrosine", one_letter_code: 'Y', three_letter_code: "Tyr", mass: 163 },
    AminoAcid { name: "Tryptophan", one_letter_code: 'W', three_letter_code: "Trp", mass: 186 }
];

impl AminoAcid {
    pub fn get_name(&self) -> &'static str {
        return self.name;
    }

    pub fn get_one_letter_code(&self) -> char {
        return self.one_letter_code;
    }

    pub fn get_three_letter_code(&self) -> &'static str {
        return self.three_letter_code;
    }

    pub fn get_mass(&self) -> u64 {
        return self.mass;
    }

    pub fn get(one_letter_code: char) -> Option<&'static AminoAcid> {
        return AMINO_ACIDS.iter().find(|amino_acid| amino_acid.one_letter_code == one_letter_code);
    }
}
