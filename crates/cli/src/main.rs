// crates/cli/src/main.rs
use clap::Parser;
use std::io;
use std::process::ExitCode;

use word_freq_cli::args::Args;
use word_freq_cli::config::Config;
use word_freq_cli::error::Result;
use word_freq_cli::presentation;
use word_freq_engine::source::STDIN_NAME;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when the run completed but some sources failed.
fn run(config: &Config) -> Result<bool> {
    if config.engine.inputs.is_empty() {
        let stdin = io::stdin();
        let report = word_freq_engine::analyze_reader(stdin.lock(), STDIN_NAME)?;
        presentation::print_results(std::slice::from_ref(&report), config)?;
        return Ok(true);
    }

    let result = word_freq_engine::run(&config.engine)?;
    for (path, err) in &result.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }
    presentation::print_results(&result.reports, config)?;

    Ok(result.errors.is_empty())
}
