//! # Core Module
//!
//! Fundamental data structures and file readers for reaction-energy profiles.
//!
//! - **Profile Representation** ([`models`]) - Validated energy profiles, state triples and
//!   the diagnostics attached to a computation
//! - **File I/O** ([`io`]) - Reading profiles from whitespace-separated text and CSV files

pub mod io;
pub mod models;
