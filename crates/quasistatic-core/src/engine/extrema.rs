//! NaN-aware local extrema detection and first-occurrence arg-extreme search.
//!
//! Extrema are strict: a sample qualifies only if it is strictly below (minimum) or strictly
//! above (maximum) both immediate neighbours, so plateaus never qualify. Any triple of samples
//! containing a missing value is skipped, which keeps the comparison unambiguous. Boundary
//! samples have only one neighbour and are never reported.

/// The kind of extreme being searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Minimum,
    Maximum,
}

impl Extreme {
    /// Whether `value` is strictly more extreme than `other` in this direction.
    #[inline]
    fn beats(self, value: f64, other: f64) -> bool {
        match self {
            Extreme::Minimum => value < other,
            Extreme::Maximum => value > other,
        }
    }
}

/// Indices of the strict local minima of `values`, in ascending order.
pub fn find_local_minima(values: &[f64]) -> Vec<usize> {
    find_local_extrema(values, Extreme::Minimum)
}

/// Indices of the strict local maxima of `values`, in ascending order.
pub fn find_local_maxima(values: &[f64]) -> Vec<usize> {
    find_local_extrema(values, Extreme::Maximum)
}

pub fn find_local_extrema(values: &[f64], extreme: Extreme) -> Vec<usize> {
    values
        .windows(3)
        .enumerate()
        .filter_map(|(start, window)| {
            let (prev, value, next) = (window[0], window[1], window[2]);
            if prev.is_nan() || value.is_nan() || next.is_nan() {
                return None;
            }
            (extreme.beats(value, prev) && extreme.beats(value, next)).then_some(start + 1)
        })
        .collect()
}

/// Index of the extreme non-missing value of `values`, tie-broken to the lowest index.
///
/// Returns `None` when every sample is missing (or the slice is empty).
pub fn arg_extreme(values: &[f64], extreme: Extreme) -> Option<usize> {
    select_extreme(values.iter().copied().enumerate(), extreme)
}

/// Like [`arg_extreme`], restricted to the given candidate indices.
///
/// Candidates are visited in the order given, so ties resolve to the first candidate
/// listed. Out-of-range candidates are ignored.
pub fn arg_extreme_among(values: &[f64], candidates: &[usize], extreme: Extreme) -> Option<usize> {
    select_extreme(
        candidates
            .iter()
            .filter_map(|&i| values.get(i).map(|&v| (i, v))),
        extreme,
    )
}

#[inline]
pub fn nan_argmin(values: &[f64]) -> Option<usize> {
    arg_extreme(values, Extreme::Minimum)
}

#[inline]
pub fn nan_argmax(values: &[f64]) -> Option<usize> {
    arg_extreme(values, Extreme::Maximum)
}

fn select_extreme<I>(samples: I, extreme: Extreme) -> Option<usize>
where
    I: Iterator<Item = (usize, f64)>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, value) in samples.filter(|(_, v)| !v.is_nan()) {
        match best {
            Some((_, current)) if !extreme.beats(value, current) => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAN: f64 = f64::NAN;

    #[test]
    fn finds_strict_minima_and_maxima() {
        let values = [1.0, 0.0, 2.0, 1.0, 3.0, 2.0, 1.0, 2.0, 0.0];
        assert_eq!(find_local_minima(&values), vec![1, 3, 6]);
        assert_eq!(find_local_maxima(&values), vec![2, 4, 7]);
    }

    #[test]
    fn short_sequences_have_no_extrema() {
        for values in [&[][..], &[1.0][..], &[1.0, 0.0][..]] {
            assert!(find_local_minima(values).is_empty());
            assert!(find_local_maxima(values).is_empty());
        }
    }

    #[test]
    fn plateaus_do_not_qualify() {
        let values = [0.0, 2.0, 2.0, 0.0, -1.0, -1.0, 0.0];
        assert!(find_local_maxima(&values).is_empty());
        assert!(find_local_minima(&values).is_empty());
    }

    #[test]
    fn monotonic_and_constant_sequences_have_no_extrema() {
        let increasing = [1.0, 2.0, 3.0, 4.0, 5.0];
        let decreasing = [5.0, 4.0, 3.0, 2.0, 1.0];
        let constant = [7.0; 6];
        for values in [&increasing[..], &decreasing[..], &constant[..]] {
            assert!(find_local_minima(values).is_empty());
            assert!(find_local_maxima(values).is_empty());
        }
    }

    #[test]
    fn missing_sample_excludes_its_neighbourhood() {
        // Index 2 would be a maximum, but its right neighbour is missing.
        let values = [0.0, 1.0, 5.0, NAN, 1.0, 3.0, 0.0];
        assert_eq!(find_local_maxima(&values), vec![5]);
        // Index 4 has a missing left neighbour.
        assert!(find_local_minima(&values).is_empty());
    }

    #[test]
    fn boundary_indices_are_never_reported() {
        let values = [0.0, 1.0, 0.0, 1.0, 0.0];
        let maxima = find_local_maxima(&values);
        let minima = find_local_minima(&values);
        assert_eq!(maxima, vec![1, 3]);
        assert_eq!(minima, vec![2]);
    }

    #[test]
    fn arg_extreme_ignores_missing_and_prefers_first_occurrence() {
        let values = [NAN, 3.0, -1.0, 3.0, NAN, -1.0];
        assert_eq!(nan_argmax(&values), Some(1));
        assert_eq!(nan_argmin(&values), Some(2));
    }

    #[test]
    fn arg_extreme_of_all_missing_is_none() {
        assert_eq!(nan_argmax(&[NAN, NAN]), None);
        assert_eq!(nan_argmin(&[]), None);
    }

    #[test]
    fn arg_extreme_among_restricts_to_candidates() {
        let values = [9.0, 2.0, 0.0, 5.0, 0.0, 5.0, 1.0];
        assert_eq!(
            arg_extreme_among(&values, &[1, 3, 5], Extreme::Maximum),
            Some(3)
        );
        assert_eq!(
            arg_extreme_among(&values, &[1, 3, 5], Extreme::Minimum),
            Some(1)
        );
        assert_eq!(arg_extreme_among(&values, &[], Extreme::Maximum), None);
        assert_eq!(
            arg_extreme_among(&values, &[42, 6], Extreme::Maximum),
            Some(6)
        );
    }
}
