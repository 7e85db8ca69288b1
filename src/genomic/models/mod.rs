pub mod genome;
pub mod clump_parameters;
#[cfg(test)]
mod tests;
