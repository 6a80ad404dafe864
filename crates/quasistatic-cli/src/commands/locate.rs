use crate::cli::LocateArgs;
use crate::config::{AppConfig, build_config};
use crate::error::{CliError, Result};
use crate::input::read_profile;
use crate::report::write_report;
use crate::utils::progress::CliProgressHandler;
use quasistatic::engine::progress::{Progress, ProgressReporter};
use quasistatic::workflows::batch::{self, BatchEntry, NamedProfile};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::{info, warn};

pub fn run(args: LocateArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args)?;
    info!(
        mode = %config.locator.mode,
        inputs = config.inputs.len(),
        "Configuration resolved."
    );

    let entries = locate_all(&config)?;
    emit_report(&entries, &config)?;

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    if failed > 0 {
        return Err(CliError::InvalidProfiles {
            count: failed,
            total: entries.len(),
        });
    }
    Ok(())
}

/// Reads every input profile and locates its states.
///
/// Unreadable files abort the run; profiles that read but fail validation come back as
/// error entries so the rest of the batch is still reported.
pub fn locate_all(config: &AppConfig) -> Result<Vec<BatchEntry>> {
    let profiles = config
        .inputs
        .iter()
        .map(|path| {
            info!("Loading energy profile from {:?}", path);
            let samples = read_profile(path, &config.input)?;
            Ok(NamedProfile::new(path.display().to_string(), samples))
        })
        .collect::<Result<Vec<_>>>()?;

    let progress_handler = CliProgressHandler::new(profiles.len() > 1);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let entries = batch::run(&profiles, &config.locator, &reporter);
    reporter.report(Progress::Message(format!(
        "{} profile(s) processed",
        entries.len()
    )));

    for entry in &entries {
        if let Ok(located) = &entry.outcome {
            for message in located.messages() {
                warn!(profile = %entry.name, "{}", message);
            }
        }
    }

    Ok(entries)
}

fn emit_report(entries: &[BatchEntry], config: &AppConfig) -> Result<()> {
    match &config.output_path {
        Some(path) => {
            info!("Writing report to {:?}", path);
            let file = File::create(path)?;
            write_report(entries, &config.output, BufWriter::new(file))?;
            println!("Report written to: {}", path.display());
        }
        None => write_report(entries, &config.output, io::stdout().lock())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InputArgs;
    use quasistatic::core::models::states::StateTriple;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn args(inputs: Vec<PathBuf>) -> LocateArgs {
        LocateArgs {
            inputs,
            config: None,
            mode: None,
            sensitive: false,
            input: InputArgs::default(),
            format: None,
            precision: None,
            output: None,
            allow_missing_files: false,
            set_values: vec![],
        }
    }

    #[test]
    fn locates_every_input_in_order() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.csv");
        fs::write(&first, "0\n3\n2\n5\n1\n").unwrap();
        fs::write(&second, "image,energy\n0,5\n1,1\n2,4\n3,2\n4,7\n").unwrap();

        let config = build_config(&args(vec![first.clone(), second])).unwrap();
        let entries = locate_all(&config).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, first.display().to_string());
        assert_eq!(
            entries[0].outcome.as_ref().unwrap().value,
            StateTriple::new(0, 3, 4)
        );
        assert_eq!(
            entries[1].outcome.as_ref().unwrap().value,
            StateTriple::new(1, 2, 3)
        );
    }

    #[test]
    fn sensitive_mode_changes_the_selected_states() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.txt");
        fs::write(&path, "0 3 2 5 1").unwrap();

        let mut locate_args = args(vec![path]);
        locate_args.sensitive = true;
        let entries = locate_all(&build_config(&locate_args).unwrap()).unwrap();
        assert_eq!(
            entries[0].outcome.as_ref().unwrap().value,
            StateTriple::new(2, 3, 4)
        );
    }

    #[test]
    fn unreadable_input_aborts_the_run() {
        let dir = tempdir().unwrap();
        let config = build_config(&args(vec![dir.path().join("absent.txt")])).unwrap();
        assert!(matches!(locate_all(&config), Err(CliError::Io(_))));
    }

    #[test]
    fn missing_file_is_reported_as_degenerate_when_allowed() {
        let dir = tempdir().unwrap();
        let mut locate_args = args(vec![dir.path().join("absent.txt")]);
        locate_args.allow_missing_files = true;
        let entries = locate_all(&build_config(&locate_args).unwrap()).unwrap();

        let located = entries[0].outcome.as_ref().unwrap();
        assert_eq!(located.value, StateTriple::undefined());
        assert_eq!(
            located.messages(),
            vec!["profile contains only missing values".to_string()]
        );
    }

    #[test]
    fn run_writes_report_and_flags_invalid_profiles() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.txt");
        let report = dir.path().join("report.csv");
        fs::write(&good, "0 3 2 5 1").unwrap();
        fs::write(&bad, "1.0\ninf\n").unwrap();

        let mut locate_args = args(vec![good, bad]);
        locate_args.output = Some(report.clone());
        locate_args.set_values = vec!["output.format=csv".to_string()];

        let result = run(locate_args);
        assert!(matches!(
            result,
            Err(CliError::InvalidProfiles { count: 1, total: 2 })
        ));

        let content = fs::read_to_string(report).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.lines().next().unwrap().starts_with("profile,"));
    }
}
