use super::parse_sample;
use super::traits::ProfileFile;
use ::csv::{ReaderBuilder, Trim};
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV parsing error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("Column '{0}' not found in CSV header")]
    ColumnNotFound(String),
    #[error("Column index {index} is out of range (header has {width} columns)")]
    ColumnOutOfRange { index: usize, width: usize },
    #[error("Parse error on line {line}: invalid number '{value}'")]
    InvalidNumber { line: u64, value: String },
}

/// Identifies the energy column of a CSV profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    Name(String),
    Index(usize),
}

impl Default for ColumnSelector {
    fn default() -> Self {
        ColumnSelector::Index(0)
    }
}

impl FromStr for ColumnSelector {
    type Err = std::convert::Infallible;

    /// A purely numeric selector is a zero-based index; anything else is a header name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<usize>() {
            Ok(index) => ColumnSelector::Index(index),
            Err(_) => ColumnSelector::Name(s.to_string()),
        })
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Name(name) => write!(f, "{}", name),
            ColumnSelector::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Comma-separated profiles with a header row; one column holds the energies.
///
/// Empty cells, short rows and missing-value markers are read as missing samples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvProfile {
    pub column: ColumnSelector,
}

impl CsvProfile {
    pub fn new(column: ColumnSelector) -> Self {
        Self { column }
    }

    fn resolve_column(&self, headers: &::csv::StringRecord) -> Result<usize, CsvError> {
        match &self.column {
            ColumnSelector::Name(name) => headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| CsvError::ColumnNotFound(name.clone())),
            ColumnSelector::Index(index) if *index < headers.len() => Ok(*index),
            ColumnSelector::Index(index) => Err(CsvError::ColumnOutOfRange {
                index: *index,
                width: headers.len(),
            }),
        }
    }
}

impl ProfileFile for CsvProfile {
    type Error = CsvError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Vec<f64>, Self::Error> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let column = self.resolve_column(csv_reader.headers()?)?;

        let mut samples = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let cell = record.get(column).unwrap_or("");
            let value = parse_sample(cell).ok_or_else(|| CsvError::InvalidNumber {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                value: cell.to_string(),
            })?;
            samples.push(value);
        }

        Ok(samples)
    }
}
