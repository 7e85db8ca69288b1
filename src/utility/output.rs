use std::fmt::Display;
use std::path::Path;

use tracing::info;

use crate::error::Result;

/// Result line as printed to stdout: values separated by single spaces.
pub fn join_with_spaces<I, T>(values: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display
{
    return values.into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<String>>()
        .join(" ");
}

/// Writes the values as a single column CSV file with the given header.
pub fn write_column_csv<P, I, T>(path: P, header: &str, values: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = T>,
    T: Display
{
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(&[header])?;
    let mut row_count: usize = 0;
    for value in values {
        writer.write_record(&[value.to_string()])?;
        row_count += 1;
    }
    writer.flush()?;
    info!(path = %path.as_ref().display(), row_count, "wrote result file");
    return Ok(());
}
