use crate::engine::error::ProfileError;

/// A validated, borrowed view over a sampled reaction-energy profile.
///
/// Samples are ordered along the reaction coordinate. `NaN` marks a missing sample;
/// infinite values are rejected at construction, as is an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyProfile<'a> {
    values: &'a [f64],
}

impl<'a> EnergyProfile<'a> {
    /// Validates `values` and wraps them as a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Empty`] for an empty slice and [`ProfileError::NonFinite`]
    /// for the first infinite sample.
    pub fn new(values: &'a [f64]) -> Result<Self, ProfileError> {
        if values.is_empty() {
            return Err(ProfileError::Empty);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| v.is_infinite()) {
            return Err(ProfileError::NonFinite { index, value });
        }
        Ok(Self { values })
    }

    /// Builds an owned sample vector from optional values, mapping `None` to `NaN`.
    pub fn from_options<I>(samples: I) -> Vec<f64>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        samples.into_iter().map(|s| s.unwrap_or(f64::NAN)).collect()
    }

    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the sample at `index`, or `None` if it is out of range or missing.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().filter(|v| !v.is_nan())
    }

    pub fn is_all_missing(&self) -> bool {
        self.values.iter().all(|v| v.is_nan())
    }

    pub fn has_missing(&self) -> bool {
        self.values.iter().any(|v| v.is_nan())
    }
}
