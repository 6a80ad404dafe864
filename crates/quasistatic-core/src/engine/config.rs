use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Unknown selection mode '{0}'. Expected 'absolute' or 'nearest-to-barrier'.")]
    UnknownMode(String),
}

/// Policy for choosing the stable state on each side of the barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// The deepest well on each side.
    #[default]
    Absolute,
    /// The local minimum closest to the barrier on each side, when one exists.
    NearestToBarrier,
}

impl From<bool> for SelectionMode {
    /// Maps the "sensitive" switch: `true` selects [`SelectionMode::NearestToBarrier`].
    fn from(sensitive: bool) -> Self {
        if sensitive {
            SelectionMode::NearestToBarrier
        } else {
            SelectionMode::Absolute
        }
    }
}

impl FromStr for SelectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" => Ok(SelectionMode::Absolute),
            "nearest-to-barrier" | "nearest" | "sensitive" => Ok(SelectionMode::NearestToBarrier),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Absolute => write!(f, "absolute"),
            SelectionMode::NearestToBarrier => write!(f, "nearest-to-barrier"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocatorConfig {
    pub mode: SelectionMode,
}

#[derive(Default)]
pub struct LocatorConfigBuilder {
    mode: Option<SelectionMode>,
}

impl LocatorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn build(self) -> Result<LocatorConfig, ConfigError> {
        Ok(LocatorConfig {
            mode: self.mode.ok_or(ConfigError::MissingParameter("mode"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_absolute() {
        assert_eq!(SelectionMode::default(), SelectionMode::Absolute);
        assert_eq!(LocatorConfig::default().mode, SelectionMode::Absolute);
    }

    #[test]
    fn sensitive_switch_maps_to_nearest_to_barrier() {
        assert_eq!(SelectionMode::from(true), SelectionMode::NearestToBarrier);
        assert_eq!(SelectionMode::from(false), SelectionMode::Absolute);
    }

    #[test]
    fn mode_parses_from_kebab_case_and_aliases() {
        assert_eq!("absolute".parse::<SelectionMode>(), Ok(SelectionMode::Absolute));
        assert_eq!(
            "Nearest-To-Barrier".parse::<SelectionMode>(),
            Ok(SelectionMode::NearestToBarrier)
        );
        assert_eq!("sensitive".parse::<SelectionMode>(), Ok(SelectionMode::NearestToBarrier));
        assert_eq!(
            "deepest".parse::<SelectionMode>(),
            Err(ConfigError::UnknownMode("deepest".to_string()))
        );
    }

    #[test]
    fn mode_display_round_trips_through_from_str() {
        for mode in [SelectionMode::Absolute, SelectionMode::NearestToBarrier] {
            assert_eq!(mode.to_string().parse::<SelectionMode>(), Ok(mode));
        }
    }

    #[test]
    fn builder_requires_mode() {
        assert_eq!(
            LocatorConfigBuilder::new().build(),
            Err(ConfigError::MissingParameter("mode"))
        );
        let config = LocatorConfigBuilder::new()
            .mode(SelectionMode::NearestToBarrier)
            .build()
            .unwrap();
        assert_eq!(config.mode, SelectionMode::NearestToBarrier);
    }
}
