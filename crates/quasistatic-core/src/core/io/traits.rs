use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading energy profiles from a file format.
///
/// Readers produce the raw sample sequence with `NaN` for missing samples. Validation of the
/// samples (non-empty, no infinities) is left to [`crate::core::models::profile::EnergyProfile`].
pub trait ProfileFile {
    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads the samples of a profile from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(&self, reader: &mut impl BufRead) -> Result<Vec<f64>, Self::Error>;

    /// Reads the samples of a profile from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(&self, path: P) -> Result<Vec<f64>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }
}
