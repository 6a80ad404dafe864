use super::models::OutputFormat;
use quasistatic::core::io::csv::ColumnSelector;
use quasistatic::engine::config::SelectionMode;

pub struct DefaultsConfig {
    pub mode: SelectionMode,
    pub csv_column: ColumnSelector,
    pub allow_missing_files: bool,
    pub output_format: OutputFormat,
    pub precision: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Absolute,
            csv_column: ColumnSelector::Name("energy".to_string()),
            allow_missing_files: false,
            output_format: OutputFormat::Table,
            precision: 6,
        }
    }
}
