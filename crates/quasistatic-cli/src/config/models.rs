use clap::ValueEnum;
use quasistatic::core::io::csv::ColumnSelector;
use quasistatic::engine::config::LocatorConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    Text,
    Csv,
}

impl InputFormat {
    /// `.csv` files are read as CSV; everything else as whitespace-separated text.
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputConfig {
    /// `None` infers the format per file.
    pub format: Option<InputFormat>,
    pub column: Option<ColumnSelector>,
    pub csv_default_column: ColumnSelector,
    pub allow_missing_files: bool,
}

impl InputConfig {
    pub fn format_for(&self, path: &Path) -> InputFormat {
        self.format.unwrap_or_else(|| InputFormat::infer(path))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub precision: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub inputs: Vec<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub locator: LocatorConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}
