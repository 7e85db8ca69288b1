mod clump_finding;
