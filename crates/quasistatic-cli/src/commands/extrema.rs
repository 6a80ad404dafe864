use crate::cli::ExtremaArgs;
use crate::config::build_input_config;
use crate::error::Result;
use crate::input::read_profile;
use quasistatic::core::models::profile::EnergyProfile;
use quasistatic::engine::extrema::{Extreme, find_local_extrema};
use std::io::{self, Write};
use tracing::info;

pub fn run(args: ExtremaArgs) -> Result<()> {
    let input = build_input_config(&args.input_options)?;

    info!("Loading energy profile from {:?}", &args.input);
    let samples = read_profile(&args.input, &input)?;
    let profile = EnergyProfile::new(&samples)?;

    write_extrema(&profile, io::stdout().lock())
}

fn write_extrema<W: Write>(profile: &EnergyProfile, mut writer: W) -> Result<()> {
    for (label, extreme) in [("minima", Extreme::Minimum), ("maxima", Extreme::Maximum)] {
        let indices = find_local_extrema(profile.values(), extreme);
        info!(kind = label, count = indices.len(), "Scanned local extrema.");

        writeln!(writer, "{} ({}):", label, indices.len())?;
        for index in indices {
            writeln!(writer, "  {:>6}  {}", index, profile.values()[index])?;
        }
    }
    writer.flush()?;
    Ok(())
}
