use super::extrema::{Extreme, arg_extreme, arg_extreme_among};
use crate::core::models::profile::EnergyProfile;
use crate::core::models::states::{Diagnostic, Located};
use tracing::debug;

/// Chooses the transition-barrier index of `profile`.
///
/// The barrier is the highest of the `local_maxima`, ties going to the lowest index. A noisy
/// or monotonic profile may have no interior peak; the global maximum over non-missing samples
/// is then used instead and a [`Diagnostic::NoLocalMaximum`] advisory is attached.
///
/// An all-missing profile yields `None` with [`Diagnostic::AllMissing`]. A partially missing
/// profile carries [`Diagnostic::SomeMissing`] ahead of any other advisory.
pub fn select_barrier(profile: &EnergyProfile, local_maxima: &[usize]) -> Located<Option<usize>> {
    let values = profile.values();
    let mut diagnostics = Vec::new();

    if profile.is_all_missing() {
        diagnostics.push(Diagnostic::AllMissing);
        return Located::new(None, diagnostics);
    }
    if profile.has_missing() {
        diagnostics.push(Diagnostic::SomeMissing);
    }

    let barrier = if local_maxima.is_empty() {
        debug!("No interior local maximum; using the global maximum as the barrier.");
        diagnostics.push(Diagnostic::NoLocalMaximum);
        arg_extreme(values, Extreme::Maximum)
    } else {
        arg_extreme_among(values, local_maxima, Extreme::Maximum)
    };

    Located::new(barrier, diagnostics)
}
