use crate::core::models::profile::EnergyProfile;
use crate::core::models::states::{Diagnostic, Located, Side, StateTriple};
use crate::engine::barrier::select_barrier;
use crate::engine::config::{LocatorConfig, SelectionMode};
use crate::engine::error::ProfileError;
use crate::engine::extrema::find_local_maxima;
use crate::engine::side::select_side_state;
use tracing::{debug, instrument};

/// Locates the left-hand stable state, the barrier and the right-hand stable state of a
/// sampled energy profile.
///
/// `NaN` samples are treated as missing. The returned diagnostics are advisory: the triple is
/// well defined whether or not a caller inspects them.
///
/// # Errors
///
/// Returns [`ProfileError`] for an empty profile or one containing an infinite sample. No
/// computation is attempted on such input.
#[instrument(skip_all, name = "locate_states", fields(samples = profile.len(), mode = %mode))]
pub fn locate_states(
    profile: &[f64],
    mode: SelectionMode,
) -> Result<Located<StateTriple>, ProfileError> {
    let profile = EnergyProfile::new(profile)?;
    Ok(locate_in_profile(&profile, mode))
}

/// [`locate_states`] driven by a [`LocatorConfig`].
pub fn locate_with_config(
    profile: &[f64],
    config: &LocatorConfig,
) -> Result<Located<StateTriple>, ProfileError> {
    locate_states(profile, config.mode)
}

/// Runs the state location on an already validated profile.
pub fn locate_in_profile(profile: &EnergyProfile, mode: SelectionMode) -> Located<StateTriple> {
    if profile.is_all_missing() {
        debug!("Profile is entirely missing; returning an undefined triple.");
        return Located::new(StateTriple::undefined(), vec![Diagnostic::AllMissing]);
    }

    let values = profile.values();
    let local_maxima = find_local_maxima(values);
    debug!(count = local_maxima.len(), "Scanned for local maxima.");

    let Located {
        value: barrier,
        mut diagnostics,
    } = select_barrier(profile, &local_maxima);

    let Some(barrier) = barrier else {
        return Located::new(StateTriple::undefined(), diagnostics);
    };

    let lhs = select_side_state(values, barrier, Side::Left, mode);
    let rhs = select_side_state(values, barrier, Side::Right, mode);
    diagnostics.extend(lhs.diagnostics);
    diagnostics.extend(rhs.diagnostics);

    debug!(
        lhs = lhs.value,
        barrier,
        rhs = rhs.value,
        diagnostics = diagnostics.len(),
        "Located reaction states."
    );

    Located::new(StateTriple::new(lhs.value, barrier, rhs.value), diagnostics)
}
