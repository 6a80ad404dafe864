use crate::config::models::{OutputConfig, OutputFormat};
use crate::error::Result;
use quasistatic::workflows::batch::BatchEntry;
use quasistatic::workflows::summary::ReactionSummary;
use serde::Serialize;
use std::io::Write;

const MISSING: &str = "-";

const TABLE_COLUMNS: [&str; 11] = [
    "profile", "samples", "lhs", "barrier", "rhs", "E_lhs", "E_barrier", "E_rhs", "forward",
    "reverse", "reaction",
];

/// One CSV record per profile. Undefined indices and energies are left empty.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    profile: &'a str,
    samples: usize,
    lhs: Option<usize>,
    barrier: Option<usize>,
    rhs: Option<usize>,
    energy_lhs: Option<String>,
    energy_barrier: Option<String>,
    energy_rhs: Option<String>,
    forward_barrier: Option<String>,
    reverse_barrier: Option<String>,
    reaction_energy: Option<String>,
    diagnostics: String,
    error: String,
}

pub fn write_report<W: Write>(entries: &[BatchEntry], config: &OutputConfig, writer: W) -> Result<()> {
    match config.format {
        OutputFormat::Table => write_table(entries, config.precision, writer),
        OutputFormat::Csv => write_csv(entries, config.precision, writer),
    }
}

fn write_table<W: Write>(entries: &[BatchEntry], precision: usize, mut writer: W) -> Result<()> {
    let rows: Vec<[String; 11]> = entries.iter().map(|e| table_cells(e, precision)).collect();

    let mut widths = TABLE_COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    writeln!(writer, "{}", join_padded(TABLE_COLUMNS.map(String::from).iter(), &widths))?;

    for (entry, row) in entries.iter().zip(&rows) {
        writeln!(writer, "{}", join_padded(row.iter(), &widths))?;
        match &entry.outcome {
            Ok(located) => {
                for message in located.messages() {
                    writeln!(writer, "  warning: {}", message)?;
                }
            }
            Err(e) => writeln!(writer, "  error: {}", e)?,
        }
    }

    writer.flush()?;
    Ok(())
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a String>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == 0 {
                format!("{:<width$}", cell, width = *width)
            } else {
                format!("{:>width$}", cell, width = *width)
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

fn table_cells(entry: &BatchEntry, precision: usize) -> [String; 11] {
    let states = entry.outcome.as_ref().ok().map(|located| located.value);
    let summary = entry.summary.unwrap_or_default();
    let index = |i: Option<usize>| i.map_or_else(|| MISSING.to_string(), |i| i.to_string());
    let energy = |e: Option<f64>| format_energy(e, precision).unwrap_or_else(|| MISSING.to_string());

    [
        entry.name.clone(),
        entry.sample_count.to_string(),
        index(states.and_then(|s| s.lhs)),
        index(states.and_then(|s| s.barrier)),
        index(states.and_then(|s| s.rhs)),
        energy(summary.energy_lhs),
        energy(summary.energy_barrier),
        energy(summary.energy_rhs),
        energy(summary.forward_barrier),
        energy(summary.reverse_barrier),
        energy(summary.reaction_energy),
    ]
}

fn write_csv<W: Write>(entries: &[BatchEntry], precision: usize, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entry in entries {
        let states = entry.outcome.as_ref().ok().map(|located| located.value);
        let summary: ReactionSummary = entry.summary.unwrap_or_default();
        let (diagnostics, error) = match &entry.outcome {
            Ok(located) => (located.messages().join("; "), String::new()),
            Err(e) => (String::new(), e.to_string()),
        };

        csv_writer.serialize(CsvRow {
            profile: &entry.name,
            samples: entry.sample_count,
            lhs: states.and_then(|s| s.lhs),
            barrier: states.and_then(|s| s.barrier),
            rhs: states.and_then(|s| s.rhs),
            energy_lhs: format_energy(summary.energy_lhs, precision),
            energy_barrier: format_energy(summary.energy_barrier, precision),
            energy_rhs: format_energy(summary.energy_rhs, precision),
            forward_barrier: format_energy(summary.forward_barrier, precision),
            reverse_barrier: format_energy(summary.reverse_barrier, precision),
            reaction_energy: format_energy(summary.reaction_energy, precision),
            diagnostics,
            error,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn format_energy(value: Option<f64>, precision: usize) -> Option<String> {
    value.map(|v| format!("{:.*}", precision, v))
}
