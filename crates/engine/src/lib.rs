// crates/engine/src/lib.rs
//! Runs the word-frequency analysis over concrete line sources.
//!
//! The core crate is pure; this crate owns the I/O edge: opening files,
//! reading lines (trailing newlines preserved), and folding the aggregated
//! peak of each source into an owned [`report::SourceReport`].

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod report;
pub mod source;

use std::io::BufRead;
use std::path::Path;

use word_freq_core::Aggregator;

use crate::config::Config;
use crate::error::Result;
use crate::report::{RunResult, SourceReport};

/// Run the analysis over every configured input, in order.
///
/// # Errors
///
/// In strict mode the first source failure aborts the run. Otherwise
/// per-source errors are collected in [`RunResult::errors`] alongside the
/// successful reports.
pub fn run(config: &Config) -> Result<RunResult> {
    let mut reports = Vec::with_capacity(config.inputs.len());
    let mut errors = Vec::new();

    for path in &config.inputs {
        match analyze_path(path) {
            Ok(report) => reports.push(report),
            Err(e) if config.strict => return Err(e),
            Err(e) => errors.push((path.clone(), e)),
        }
    }

    Ok(RunResult { reports, errors })
}

/// Analyze a single file.
///
/// # Errors
///
/// Returns [`error::EngineError::FileRead`] when the file cannot be read.
pub fn analyze_path(path: &Path) -> Result<SourceReport> {
    let lines = source::read_path(path)?;
    let aggregator = Aggregator::from_lines(&lines);
    Ok(SourceReport::from_aggregator(
        path.display().to_string(),
        &aggregator,
    ))
}

/// Analyze an already-open reader, e.g. stdin.
///
/// # Errors
///
/// Propagates I/O failures from the reader.
pub fn analyze_reader<R: BufRead>(reader: R, name: &str) -> Result<SourceReport> {
    let lines = source::read_lines(reader)?;
    let aggregator = Aggregator::from_lines(&lines);
    Ok(SourceReport::from_aggregator(name.to_owned(), &aggregator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_analyze_path_finds_peak_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "sample.txt", "once\ntwice twice\nTwice twice twice\n");

        let report = analyze_path(&path).unwrap();
        assert_eq!(report.line_count, 3);
        assert_eq!(report.highest_count, 3);
        assert_eq!(report.peak_lines.len(), 1);
        assert_eq!(report.peak_lines[0].line_number, 2);
        assert_eq!(report.peak_lines[0].highest_wf_words, vec!["twice"]);
    }

    #[test]
    fn test_analyze_reader_names_the_source() {
        let report = analyze_reader(Cursor::new("tie tie toe toe\n"), source::STDIN_NAME).unwrap();
        assert_eq!(report.source, "<stdin>");
        assert_eq!(report.highest_count, 2);
        assert_eq!(report.peak_lines[0].highest_wf_words, vec!["tie", "toe"]);
    }

    #[test]
    fn test_run_collects_errors_when_not_strict() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_fixture(&dir, "good.txt", "ok ok\n");
        let missing = dir.path().join("missing.txt");

        let config = ConfigBuilder::default()
            .inputs(vec![good, missing.clone()])
            .build()
            .unwrap();

        let result = run(&config).unwrap();
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].0, missing);
    }

    #[test]
    fn test_run_strict_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let config = ConfigBuilder::default()
            .inputs(vec![missing])
            .strict(true)
            .build()
            .unwrap();

        assert!(run(&config).is_err());
    }

    #[test]
    fn test_run_with_no_inputs() {
        let config = Config::default();
        let result = run(&config).unwrap();
        assert!(result.reports.is_empty());
        assert!(result.errors.is_empty());
    }
}
