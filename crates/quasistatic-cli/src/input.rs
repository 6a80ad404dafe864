use crate::config::InputConfig;
use crate::config::models::InputFormat;
use crate::error::{CliError, Result};
use quasistatic::core::io::csv::{ColumnSelector, CsvError, CsvProfile};
use quasistatic::core::io::text::{TextError, TextProfile};
use quasistatic::core::io::traits::ProfileFile;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Reads the samples of one profile file according to `config`.
///
/// With `allow_missing_files`, a file that does not exist is read as a single missing sample,
/// which the locator reports as an all-missing profile.
pub fn read_profile(path: &Path, config: &InputConfig) -> Result<Vec<f64>> {
    let format = config.format_for(path);
    debug!(?path, ?format, "Reading energy profile.");

    let result = match format {
        InputFormat::Text => read_text(path, config),
        InputFormat::Csv => read_csv(path, config),
    };

    match result {
        Err(CliError::Io(e)) if e.kind() == ErrorKind::NotFound && config.allow_missing_files => {
            warn!(
                "Input file {:?} not found; treating it as a missing profile.",
                path
            );
            Ok(vec![f64::NAN])
        }
        other => other,
    }
}

fn read_text(path: &Path, config: &InputConfig) -> Result<Vec<f64>> {
    let column = match &config.column {
        None => None,
        Some(ColumnSelector::Index(index)) => Some(*index),
        Some(ColumnSelector::Name(name)) => {
            return Err(CliError::Config(format!(
                "Text profile {:?} has no header; column '{}' must be a zero-based index.",
                path, name
            )));
        }
    };
    let format = TextProfile { column };
    format.read_from_path(path).map_err(|e| match e {
        TextError::Io(io) => CliError::Io(io),
        other => CliError::FileParsing {
            path: path.to_path_buf(),
            source: other.into(),
        },
    })
}

fn read_csv(path: &Path, config: &InputConfig) -> Result<Vec<f64>> {
    let column = config
        .column
        .clone()
        .unwrap_or_else(|| config.csv_default_column.clone());
    let format = CsvProfile::new(column);
    format.read_from_path(path).map_err(|e| match e {
        CsvError::Io(io) => CliError::Io(io),
        other => CliError::FileParsing {
            path: path.to_path_buf(),
            source: other.into(),
        },
    })
}
