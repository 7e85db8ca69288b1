mod amino_acid;
