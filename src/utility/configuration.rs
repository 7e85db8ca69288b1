use std::env;

use crate::error::{Error, Result};

/// environment variable for the default number of worker threads
pub const THREAD_COUNT_VARIABLE: &'static str = "CLUMP_SPECTRUM_THREADS";
/// environment variable for the log filter, e.g. "debug" or "clump_spectrum=trace"
pub const LOG_FILTER_VARIABLE: &'static str = "CLUMP_SPECTRUM_LOG";
pub const DEFAULT_LOG_FILTER: &'static str = "info";

/// Settings which do not change between tasks.
/// Values are taken from the environment, an optional .env file in the working directory is loaded first.
/// The thread count is only validated when a task asks for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    thread_count: Option<String>,
    log_filter: String
}

impl Configuration {
    pub fn load() -> Self {
        // a missing .env is fine, the environment or the defaults are used then
        dotenv::dotenv().ok();
        return Self::from_variables(
            env::var(THREAD_COUNT_VARIABLE).ok(),
            env::var(LOG_FILTER_VARIABLE).ok()
        );
    }

    /// Builds the configuration from raw variable values, unset values fall back to the defaults
    /// (number of CPUs, `DEFAULT_LOG_FILTER`).
    pub fn from_variables(thread_count: Option<String>, log_filter: Option<String>) -> Self {
        let log_filter: String = match log_filter {
            Some(ref filter) if !filter.trim().is_empty() => filter.trim().to_owned(),
            _ => DEFAULT_LOG_FILTER.to_owned()
        };
        return Self {
            thread_count: thread_count,
            log_filter: log_filter
        };
    }

    /// Fails with `Error::InvalidArgument` if the variable is set but not a positive integer.
    pub fn get_thread_count(&self) -> Result<usize> {
        match self.thread_count {
            Some(ref number_string) => match number_string.trim().parse::<usize>() {
                Ok(count) if count > 0 => Ok(count),
                _ => Err(Error::InvalidArgument(format!(
                    "{} must be a positive integer, got '{}'",
                    THREAD_COUNT_VARIABLE,
                    number_string
                )))
            },
            None => Ok(num_cpus::get())
        }
    }

    pub fn get_log_filter(&self) -> &str {
        return self.log_filter.as_str();
    }
}
