use super::parse_sample;
use super::traits::ProfileFile;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },
    #[error("Line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
}

/// Whitespace-separated plain-text profiles.
///
/// `#` starts a comment running to the end of the line and blank lines are skipped. Without a
/// column, every token is one sample in reading order; with a column, each data line
/// contributes the token at that zero-based position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextProfile {
    pub column: Option<usize>,
}

impl TextProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(column: usize) -> Self {
        Self {
            column: Some(column),
        }
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_token(token: &str, line: usize) -> Result<f64, TextError> {
    parse_sample(token).ok_or_else(|| TextError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

impl ProfileFile for TextProfile {
    type Error = TextError;

    fn read_from(&self, reader: &mut impl BufRead) -> Result<Vec<f64>, Self::Error> {
        let mut samples = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let data = strip_comment(&line);
            if data.trim().is_empty() {
                continue;
            }

            match self.column {
                None => {
                    for token in data.split_whitespace() {
                        samples.push(parse_token(token, line_num)?);
                    }
                }
                Some(column) => {
                    let token = data.split_whitespace().nth(column).ok_or(
                        TextError::MissingColumn {
                            line: line_num,
                            column,
                        },
                    )?;
                    samples.push(parse_token(token, line_num)?);
                }
            }
        }

        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Write};
    use tempfile::NamedTempFile;

    fn read(format: TextProfile, content: &str) -> Result<Vec<f64>, TextError> {
        let mut reader = BufReader::new(Cursor::new(content));
        format.read_from(&mut reader)
    }

    #[test]
    fn reads_one_sample_per_token_skipping_comments_and_blanks() {
        let content = "# potential energy\n1.0 0.5\n\n  -0.25   # trailing note\n2\n";
        let samples = read(TextProfile::new(), content).unwrap();
        assert_eq!(samples, vec![1.0, 0.5, -0.25, 2.0]);
    }

    #[test]
    fn missing_markers_become_nan() {
        let samples = read(TextProfile::new(), "1.0\nnan\nNaN\n-\n3.0\n").unwrap();
        assert_eq!(samples.len(), 5);
        assert!(samples[1].is_nan() && samples[2].is_nan() && samples[3].is_nan());
        assert_eq!(samples[4], 3.0);
    }

    #[test]
    fn selected_column_is_read_per_line() {
        let content = "0 -1.5\n1 -1.0\n2 nan\n";
        let samples = read(TextProfile::with_column(1), content).unwrap();
        assert_eq!(samples[0], -1.5);
        assert_eq!(samples[1], -1.0);
        assert!(samples[2].is_nan());
    }

    #[test]
    fn non_numeric_token_reports_line() {
        let err = read(TextProfile::new(), "1.0\n2.0 oops\n").unwrap_err();
        match err {
            TextError::InvalidNumber { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn short_line_reports_missing_column() {
        let err = read(TextProfile::with_column(2), "1 2 3\n4 5\n").unwrap_err();
        assert!(matches!(
            err,
            TextError::MissingColumn { line: 2, column: 2 }
        ));
    }

    #[test]
    fn infinite_tokens_are_passed_through_for_validation() {
        let samples = read(TextProfile::new(), "inf\n").unwrap();
        assert!(samples[0].is_infinite());
    }

    #[test]
    fn reads_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "3.0\n1.0\n2.0").unwrap();
        let samples = TextProfile::new().read_from_path(file.path()).unwrap();
        assert_eq!(samples, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TextProfile::new()
            .read_from_path(dir.path().join("absent.txt"))
            .unwrap_err();
        assert!(matches!(err, TextError::Io(_)));
    }
}
