use super::config::SelectionMode;
use super::extrema::{Extreme, arg_extreme, find_local_minima};
use crate::core::models::states::{Diagnostic, Located, Side};
use tracing::trace;

/// The half of a profile on one side of the barrier.
///
/// Both halves include the barrier sample so that a minimum adjacent to the barrier is still
/// an interior point of its half. `offset` maps half-local indices back to profile indices.
#[derive(Debug, Clone, Copy)]
pub struct ProfileHalf<'a> {
    pub side: Side,
    pub values: &'a [f64],
    pub offset: usize,
}

impl<'a> ProfileHalf<'a> {
    /// Splits `values` at `barrier`: `[0, barrier]` on the left, `[barrier, n-1]` on the right.
    ///
    /// # Panics
    ///
    /// Panics if `barrier` is not a valid index into `values`.
    pub fn split(values: &'a [f64], barrier: usize, side: Side) -> Self {
        match side {
            Side::Left => Self {
                side,
                values: &values[..=barrier],
                offset: 0,
            },
            Side::Right => Self {
                side,
                values: &values[barrier..],
                offset: barrier,
            },
        }
    }

    fn is_all_missing(&self) -> bool {
        self.values.iter().all(|v| v.is_nan())
    }

    /// The local minimum closest to the barrier, in profile index space.
    fn nearest_local_minimum(&self) -> Option<usize> {
        let minima = find_local_minima(self.values);
        let nearest = match self.side {
            Side::Left => minima.last(),
            Side::Right => minima.first(),
        };
        nearest.map(|&i| i + self.offset)
    }

    /// The deepest non-missing sample of the half, in profile index space.
    fn absolute_minimum(&self) -> Option<usize> {
        arg_extreme(self.values, Extreme::Minimum).map(|i| i + self.offset)
    }
}

/// Chooses the stable-state index on `side` of the barrier.
///
/// - An all-missing half degenerates to the barrier itself.
/// - [`SelectionMode::NearestToBarrier`] takes the local minimum of the half closest to the
///   barrier (the last one on the left, the first one on the right), when the half has any.
/// - Otherwise the lowest non-missing sample of the half is taken, ties going to the first.
///
/// A nearest-to-barrier choice lying strictly above the barrier energy is kept, but flagged
/// with [`Diagnostic::NearestStateAboveBarrier`].
///
/// # Panics
///
/// Panics if `barrier` is not a valid index into `values`.
pub fn select_side_state(
    values: &[f64],
    barrier: usize,
    side: Side,
    mode: SelectionMode,
) -> Located<usize> {
    let half = ProfileHalf::split(values, barrier, side);
    let mut diagnostics = Vec::new();

    if half.is_all_missing() {
        trace!(%side, barrier, "Half is entirely missing; degenerating to the barrier.");
        return Located::new(barrier, diagnostics);
    }

    let nearest = match mode {
        SelectionMode::NearestToBarrier => half.nearest_local_minimum(),
        SelectionMode::Absolute => None,
    };

    let index = match nearest {
        Some(index) => {
            if values[index] > values[barrier] {
                diagnostics.push(Diagnostic::NearestStateAboveBarrier { side, index });
            }
            index
        }
        None => half.absolute_minimum().unwrap_or(barrier),
    };

    trace!(%side, %mode, index, "Selected stable state.");
    Located::new(index, diagnostics)
}
