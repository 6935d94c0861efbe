//! # word_freq_core
//!
//! Pure word-frequency analysis over in-memory text.
//!
//! - [`analyzer`]: per-line analysis (most frequent word(s) within one line)
//! - [`aggregate`]: cross-line aggregation (the peak count and the lines
//!   achieving it)
//!
//! Everything here is synchronous and allocation-only; reading lines from
//! files or other sources belongs to the engine crate.

#![allow(clippy::multiple_crate_versions)]

pub mod aggregate;
pub mod analyzer;

pub use aggregate::{Aggregator, Peak};
pub use analyzer::LineAnalysis;
