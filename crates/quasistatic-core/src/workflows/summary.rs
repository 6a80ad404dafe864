use crate::core::models::profile::EnergyProfile;
use crate::core::models::states::StateTriple;
use serde::Serialize;

/// Energies at the located states and the quantities derived from them.
///
/// A field is `None` when a state index is undefined or its sample is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ReactionSummary {
    pub energy_lhs: Option<f64>,
    pub energy_barrier: Option<f64>,
    pub energy_rhs: Option<f64>,
    /// `E(barrier) - E(lhs)`.
    pub forward_barrier: Option<f64>,
    /// `E(barrier) - E(rhs)`.
    pub reverse_barrier: Option<f64>,
    /// `E(rhs) - E(lhs)`.
    pub reaction_energy: Option<f64>,
}

impl ReactionSummary {
    pub fn from_states(profile: &EnergyProfile, states: &StateTriple) -> Self {
        let energy_at = |index: Option<usize>| index.and_then(|i| profile.get(i));
        let energy_lhs = energy_at(states.lhs);
        let energy_barrier = energy_at(states.barrier);
        let energy_rhs = energy_at(states.rhs);

        Self {
            energy_lhs,
            energy_barrier,
            energy_rhs,
            forward_barrier: difference(energy_barrier, energy_lhs),
            reverse_barrier: difference(energy_barrier, energy_rhs),
            reaction_energy: difference(energy_rhs, energy_lhs),
        }
    }
}

fn difference(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    Some(a? - b?)
}
