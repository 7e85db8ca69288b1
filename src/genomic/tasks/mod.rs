pub mod clump_finding;
#[cfg(test)]
mod tests;
