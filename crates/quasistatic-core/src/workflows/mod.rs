//! # Workflows Module
//!
//! Top-level entry points of the library.
//!
//! - **State Location** ([`locate`]) - Validates a profile, selects the barrier, splits the
//!   profile and selects a stable state on each side, aggregating diagnostics in order
//! - **Reporting** ([`summary`]) - Energies at the located states and the derived barrier
//!   heights and reaction energy
//! - **Batch Processing** ([`batch`]) - Independent, parallel state location over many named
//!   profiles with progress reporting

pub mod batch;
pub mod locate;
pub mod summary;
