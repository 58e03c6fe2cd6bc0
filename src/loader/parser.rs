use serde::de::DeserializeOwned;
use std::fs;

use crate::error::{Error, Result};

/// Parses a JSON file into a given type `T`.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path).map_err(Error::IoError)?;

    let parsed_data: T = serde_json::from_str(&data).map_err(Error::DeserializationError)?;

    Ok(parsed_data)
}

/// Parses every record of a headed CSV file into `T`.
///
/// The first malformed record aborts parsing with `Error::CsvError`.
pub fn parse_csv_file<T: DeserializeOwned>(file_path: &str) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(file_path)?;

    let records = reader.deserialize::<T>().collect::<std::result::Result<Vec<T>, csv::Error>>()?;
    log::debug!("Parsed {} records from '{}'.", records.len(), file_path);

    Ok(records)
}
