use crate::error::Error;
use crate::utility::configuration::{Configuration, DEFAULT_LOG_FILTER};

#[test]
pub fn test_defaults() {
    let configuration: Configuration = Configuration::from_variables(None, None);
    assert_eq!(num_cpus::get(), configuration.get_thread_count().unwrap());
    assert_eq!(DEFAULT_LOG_FILTER, configuration.get_log_filter());
}

#[test]
pub fn test_values_from_variables() {
    let configuration: Configuration = Configuration::from_variables(Some(" 3 ".to_owned()), Some("debug".to_owned()));
    assert_eq!(3, configuration.get_thread_count().unwrap());
    assert_eq!("debug", configuration.get_log_filter());
}

#[test]
pub fn test_blank_log_filter_uses_default() {
    let configuration: Configuration = Configuration::from_variables(None, Some("  ".to_owned()));
    assert_eq!(DEFAULT_LOG_FILTER, configuration.get_log_filter());
}

#[test]
pub fn test_invalid_thread_count() {
    for value in &["0", "-1", "many"] {
        // building the configuration succeeds, asking for the thread count fails
        let configuration: Configuration = Configuration::from_variables(Some((*value).to_owned()), Some("debug".to_owned()));
        assert_eq!("debug", configuration.get_log_filter());
        match configuration.get_thread_count() {
            Err(Error::InvalidArgument(message)) => assert!(message.contains("CLUMP_SPECTRUM_THREADS")),
            other => panic!("expected InvalidArgument for '{}', got {:?}", value, other)
        }
    }
}
