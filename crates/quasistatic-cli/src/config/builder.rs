use super::defaults::DefaultsConfig;
use super::file::{FileColumn, FileConfig, FileInputConfig};
use super::models::{AppConfig, InputConfig, InputFormat, OutputConfig, OutputFormat};
use crate::cli::{InputArgs, LocateArgs};
use crate::error::{CliError, Result};
use clap::ValueEnum;
use quasistatic::core::io::csv::ColumnSelector;
use quasistatic::engine::config::{LocatorConfigBuilder, SelectionMode};

pub fn build_config(args: &LocateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let locator_file = file_config.locator.take().unwrap_or_default();
    let mode = if args.sensitive {
        SelectionMode::NearestToBarrier
    } else {
        args.mode.or(locator_file.mode).unwrap_or(defaults.mode)
    };
    let locator = LocatorConfigBuilder::new()
        .mode(mode)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let input_file = file_config.input.take().unwrap_or_default();
    let input = merge_input(&args.input, args.allow_missing_files, input_file, &defaults)?;

    let output_file = file_config.output.take().unwrap_or_default();
    let output = OutputConfig {
        format: args
            .format
            .or(output_file.format)
            .unwrap_or(defaults.output_format),
        precision: args
            .precision
            .or(output_file.precision)
            .unwrap_or(defaults.precision),
    };

    Ok(AppConfig {
        inputs: args.inputs.clone(),
        output_path: args.output.clone(),
        locator,
        input,
        output,
    })
}

/// Input settings from command-line flags alone, for commands without a config file.
pub fn build_input_config(args: &InputArgs) -> Result<InputConfig> {
    merge_input(
        args,
        false,
        FileInputConfig::default(),
        &DefaultsConfig::default(),
    )
}

fn merge_input(
    args: &InputArgs,
    allow_missing_files: bool,
    file: FileInputConfig,
    defaults: &DefaultsConfig,
) -> Result<InputConfig> {
    let column = match args.column.as_deref() {
        Some(raw) => Some(parse_column(raw)),
        None => file.column.map(Into::into),
    };

    let format = args.input_format.or(file.format);
    if let (Some(InputFormat::Text), Some(ColumnSelector::Name(name))) = (format, &column) {
        return Err(CliError::Config(format!(
            "Text profiles have no header; column '{}' must be a zero-based index.",
            name
        )));
    }

    Ok(InputConfig {
        format,
        column,
        csv_default_column: defaults.csv_column.clone(),
        allow_missing_files: allow_missing_files
            || file
                .allow_missing_files
                .unwrap_or(defaults.allow_missing_files),
    })
}

fn parse_column(raw: &str) -> ColumnSelector {
    let Ok(column) = raw.parse::<ColumnSelector>();
    column
}

fn invalid_value(key: &str, value: &str, expected: &str) -> CliError {
    CliError::Config(format!("Invalid {} value for {}: {}", expected, key, value))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();
        let value_str = value_str.trim();

        match key {
            "locator.mode" => {
                config.locator.get_or_insert_with(Default::default).mode = Some(
                    value_str
                        .parse()
                        .map_err(|_| invalid_value(key, value_str, "mode"))?,
                );
            }
            "input.format" => {
                config.input.get_or_insert_with(Default::default).format = Some(
                    <InputFormat as ValueEnum>::from_str(value_str, true)
                        .map_err(|_| invalid_value(key, value_str, "format"))?,
                );
            }
            "input.column" => {
                let column = match value_str.parse::<usize>() {
                    Ok(index) => FileColumn::Index(index),
                    Err(_) => FileColumn::Name(value_str.to_string()),
                };
                config.input.get_or_insert_with(Default::default).column = Some(column);
            }
            "input.allow-missing-files" => {
                config
                    .input
                    .get_or_insert_with(Default::default)
                    .allow_missing_files = Some(
                    value_str
                        .parse()
                        .map_err(|_| invalid_value(key, value_str, "boolean"))?,
                );
            }
            "output.format" => {
                config.output.get_or_insert_with(Default::default).format = Some(
                    <OutputFormat as ValueEnum>::from_str(value_str, true)
                        .map_err(|_| invalid_value(key, value_str, "format"))?,
                );
            }
            "output.precision" => {
                config.output.get_or_insert_with(Default::default).precision = Some(
                    value_str
                        .parse()
                        .map_err(|_| invalid_value(key, value_str, "integer"))?,
                );
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
