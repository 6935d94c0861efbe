// crates/engine/src/report.rs
use serde::Serialize;
use std::path::PathBuf;

use crate::error::EngineError;
use word_freq_core::Aggregator;

/// One peak line of a source, owned so the reporting layer can render it
/// after the aggregator is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeakLine {
    pub line_number: usize,
    pub highest_wf_words: Vec<String>,
    pub content: String,
}

/// Outcome of analyzing one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    /// Display name of the source: a file path, or `<stdin>`.
    pub source: String,
    pub line_count: usize,
    /// Maximum per-line word frequency across the whole source.
    pub highest_count: usize,
    /// Every line achieving `highest_count`, in source order.
    pub peak_lines: Vec<PeakLine>,
}

impl SourceReport {
    /// Project an aggregator's peak into an owned report.
    #[must_use]
    pub fn from_aggregator(source: String, aggregator: &Aggregator) -> Self {
        let peak = aggregator.peak();
        let peak_lines = peak
            .lines
            .iter()
            .map(|analysis| PeakLine {
                line_number: analysis.line_number,
                highest_wf_words: analysis.highest_wf_words.clone(),
                content: analysis.content.clone(),
            })
            .collect();

        Self {
            source,
            line_count: aggregator.len(),
            highest_count: peak.highest_count,
            peak_lines,
        }
    }
}

/// Reports plus the per-source failures collected by a non-strict run.
#[derive(Debug)]
pub struct RunResult {
    pub reports: Vec<SourceReport>,
    pub errors: Vec<(PathBuf, EngineError)>,
}
