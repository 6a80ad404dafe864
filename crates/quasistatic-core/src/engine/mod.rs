//! # Engine Module
//!
//! The algorithms that turn an energy profile into a state triple.
//!
//! ## Architecture
//!
//! - **Extrema Scanning** ([`extrema`]) - Strict, NaN-aware local minima/maxima and the
//!   first-occurrence arg-extreme helper shared by the selectors
//! - **Barrier Selection** ([`barrier`]) - Highest local maximum, falling back to the global
//!   maximum when the profile has no interior peak
//! - **Side Selection** ([`side`]) - Stable state on either half of the split profile
//! - **Configuration** ([`config`]) - Per-call selection mode and locator settings
//! - **Error Handling** ([`error`]) - Rejection of malformed profiles
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting for batch runs
//!
//! None of these components hold state between calls.

pub mod barrier;
pub mod config;
pub mod error;
pub mod extrema;
pub mod progress;
pub mod side;
