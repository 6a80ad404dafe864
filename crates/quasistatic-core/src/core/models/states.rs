use serde::Serialize;
use std::fmt;

/// Which side of the barrier a stable state lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Indices of the left-hand stable state, the transition barrier and the right-hand
/// stable state. `None` marks an undefined index.
///
/// When all three are defined, `lhs <= barrier <= rhs` holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct StateTriple {
    pub lhs: Option<usize>,
    pub barrier: Option<usize>,
    pub rhs: Option<usize>,
}

impl StateTriple {
    pub fn new(lhs: usize, barrier: usize, rhs: usize) -> Self {
        Self {
            lhs: Some(lhs),
            barrier: Some(barrier),
            rhs: Some(rhs),
        }
    }

    pub fn undefined() -> Self {
        Self::default()
    }

    pub fn is_defined(&self) -> bool {
        self.lhs.is_some() && self.barrier.is_some() && self.rhs.is_some()
    }

    pub fn as_array(&self) -> [Option<usize>; 3] {
        [self.lhs, self.barrier, self.rhs]
    }
}

/// A non-fatal advisory describing a degenerate or fallback condition met during a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    AllMissing,
    SomeMissing,
    NoLocalMaximum,
    /// The nearest-to-barrier minimum on `side` lies above the barrier energy.
    NearestStateAboveBarrier { side: Side, index: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::AllMissing => write!(f, "profile contains only missing values"),
            Diagnostic::SomeMissing => write!(f, "profile contains missing values"),
            Diagnostic::NoLocalMaximum => {
                write!(f, "no local maximum found; falling back to global maximum")
            }
            Diagnostic::NearestStateAboveBarrier { side, index } => write!(
                f,
                "nearest {} local minimum at index {} lies above the barrier energy",
                side, index
            ),
        }
    }
}

/// A computed value together with the ordered diagnostics produced while computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Located<T> {
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Human-readable diagnostic messages, in the order they were produced.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    pub fn has_diagnostic(&self, diagnostic: &Diagnostic) -> bool {
        self.diagnostics.contains(diagnostic)
    }
}
