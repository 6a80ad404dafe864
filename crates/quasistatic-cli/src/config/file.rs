use super::models::{InputFormat, OutputFormat};
use crate::error::{CliError, Result};
use quasistatic::core::io::csv::ColumnSelector;
use quasistatic::engine::config::SelectionMode;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// A column given in TOML either as an integer index or as a header name.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FileColumn {
    Index(usize),
    Name(String),
}

impl From<FileColumn> for ColumnSelector {
    fn from(c: FileColumn) -> Self {
        match c {
            FileColumn::Index(index) => ColumnSelector::Index(index),
            FileColumn::Name(name) => {
                let Ok(column) = name.parse::<ColumnSelector>();
                column
            }
        }
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileLocatorConfig {
    pub mode: Option<SelectionMode>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileInputConfig {
    pub format: Option<InputFormat>,
    pub column: Option<FileColumn>,
    pub allow_missing_files: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    pub precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub locator: Option<FileLocatorConfig>,
    pub input: Option<FileInputConfig>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_full_configuration() {
        let content = r#"
            [locator]
            mode = "nearest-to-barrier"

            [input]
            format = "csv"
            column = "potential-energy"
            allow-missing-files = true

            [output]
            format = "csv"
            precision = 3
        "#;
        let config: FileConfig = toml::from_str(content).unwrap();

        assert_eq!(
            config.locator.unwrap().mode,
            Some(SelectionMode::NearestToBarrier)
        );
        let input = config.input.unwrap();
        assert_eq!(input.format, Some(InputFormat::Csv));
        assert_eq!(
            input.column,
            Some(FileColumn::Name("potential-energy".to_string()))
        );
        assert_eq!(input.allow_missing_files, Some(true));
        let output = config.output.unwrap();
        assert_eq!(output.format, Some(OutputFormat::Csv));
        assert_eq!(output.precision, Some(3));
    }

    #[test]
    fn integer_column_is_an_index() {
        let config: FileConfig = toml::from_str("[input]\ncolumn = 2\n").unwrap();
        let column: ColumnSelector = config.input.unwrap().column.unwrap().into();
        assert_eq!(column, ColumnSelector::Index(2));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<FileConfig, _> =
            toml::from_str("[locator]\nsensitivity = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let result: std::result::Result<FileConfig, _> =
            toml::from_str("[locator]\nmode = \"deepest\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn from_file_reports_parse_failures_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[output\nprecision = ").unwrap();

        match FileConfig::from_file(&path) {
            Err(CliError::FileParsing { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected FileParsing error, got {:?}", other),
        }
    }

    #[test]
    fn from_file_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
