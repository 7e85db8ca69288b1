pub mod configuration;
pub mod logger;
pub mod output;
#[cfg(test)]
mod tests;
