//! # Quasistatic Core Library
//!
//! Locates the three characteristic points of a one-dimensional reaction-energy profile:
//! the left-hand stable state, the transition barrier, and the right-hand stable state.
//! Profiles are sampled energies along a reaction coordinate and may contain missing
//! (`NaN`) samples.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`EnergyProfile`, `StateTriple`,
//!   `Diagnostic`) and readers for the plain-text and CSV profile formats.
//!
//! - **[`engine`]: The Logic Core.** The individual algorithms: NaN-aware local extrema
//!   scanning, barrier selection with a global-maximum fallback, and per-side stable-state
//!   selection under a configurable [`engine::config::SelectionMode`].
//!
//! - **[`workflows`]: The Public API.** The state locator that validates a profile, sequences
//!   the engine components and aggregates their diagnostics, plus reporting and batch helpers.
//!
//! Every computation is a pure function of its input. Advisory conditions are returned as
//! data alongside the result and never routed through a global channel.

pub mod core;
pub mod engine;
pub mod workflows;
