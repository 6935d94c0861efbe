// crates/core/src/aggregate.rs
use crate::analyzer::LineAnalysis;

/// Ordered collection of per-line analyses for one source.
///
/// Appends and [`Aggregator::peak`] calls must be serialized by the caller;
/// no internal locking is provided.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    analyses: Vec<LineAnalysis>,
}

/// The cross-line maximum frequency and the lines achieving it.
///
/// Borrows from the aggregator it was computed over; `lines` preserves
/// source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peak<'a> {
    /// Maximum `highest_wf_count` over all analyzed lines; 0 for an empty
    /// source.
    pub highest_count: usize,
    /// Every analysis whose count equals `highest_count`, in source order.
    pub lines: Vec<&'a LineAnalysis>,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze every line of a source in order, assigning 0-based indices.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let analyses = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| LineAnalysis::analyze(line.as_ref(), index))
            .collect();
        Self { analyses }
    }

    /// Append the next line, numbered after the last one held.
    pub fn push_line(&mut self, line: &str) {
        let index = self.analyses.len();
        self.analyses.push(LineAnalysis::analyze(line, index));
    }

    #[must_use]
    pub fn analyses(&self) -> &[LineAnalysis] {
        &self.analyses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }

    /// Two-pass scan: find the maximum per-line count, then collect every
    /// line matching it in source order.
    ///
    /// Deterministic and idempotent for an unchanged aggregator.
    #[must_use]
    pub fn peak(&self) -> Peak<'_> {
        let highest_count = self
            .analyses
            .iter()
            .map(|analysis| analysis.highest_wf_count)
            .max()
            .unwrap_or(0);

        let lines = self
            .analyses
            .iter()
            .filter(|analysis| analysis.highest_wf_count == highest_count)
            .collect();

        Peak {
            highest_count,
            lines,
        }
    }
}
