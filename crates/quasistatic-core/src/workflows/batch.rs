use super::locate::locate_in_profile;
use super::summary::ReactionSummary;
use crate::core::models::profile::EnergyProfile;
use crate::core::models::states::{Located, StateTriple};
use crate::engine::config::LocatorConfig;
use crate::engine::error::ProfileError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use tracing::{info, instrument, warn};

/// A profile tagged with the name it is reported under (typically its source path).
#[derive(Debug, Clone, PartialEq)]
pub struct NamedProfile {
    pub name: String,
    pub samples: Vec<f64>,
}

impl NamedProfile {
    pub fn new(name: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub name: String,
    pub sample_count: usize,
    pub outcome: Result<Located<StateTriple>, ProfileError>,
    pub summary: Option<ReactionSummary>,
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Locates states for every input profile independently.
///
/// Profiles are processed in parallel; entries come back in input order. A malformed profile
/// yields an error entry without affecting the others.
#[instrument(skip_all, name = "batch_locate_workflow", fields(profiles = inputs.len()))]
pub fn run(
    inputs: &[NamedProfile],
    config: &LocatorConfig,
    reporter: &ProgressReporter,
) -> Vec<BatchEntry> {
    reporter.report(Progress::PhaseStart {
        name: "Locating states",
    });
    reporter.report(Progress::TaskStart {
        total_steps: inputs.len() as u64,
    });

    let entries: Vec<BatchEntry> = inputs
        .par_iter()
        .map(|input| {
            let entry = locate_entry(input, config);
            reporter.report(Progress::TaskIncrement);
            entry
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    if failed > 0 {
        warn!(failed, "Some profiles were rejected as invalid input.");
    }
    info!(
        processed = entries.len(),
        failed, "Batch state location finished."
    );
    reporter.report(Progress::PhaseFinish);

    entries
}

fn locate_entry(input: &NamedProfile, config: &LocatorConfig) -> BatchEntry {
    let sample_count = input.samples.len();
    match EnergyProfile::new(&input.samples) {
        Ok(profile) => {
            let located = locate_in_profile(&profile, config.mode);
            let summary = ReactionSummary::from_states(&profile, &located.value);
            BatchEntry {
                name: input.name.clone(),
                sample_count,
                outcome: Ok(located),
                summary: Some(summary),
            }
        }
        Err(e) => BatchEntry {
            name: input.name.clone(),
            sample_count,
            outcome: Err(e),
            summary: None,
        },
    }
}
