// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "word_freq",
    version,
    about = "Find each line's most frequent words and the lines that peak across a text"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// Input files; reads stdin when none are given
    #[arg(value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Also print each peak line's number and content (text format)
    #[arg(long, help_heading = "Output")]
    pub show_lines: bool,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Fail on the first unreadable input instead of continuing
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["word_freq"]);
        assert_eq!(args.output.format, OutputFormat::Text);
        assert!(!args.output.show_lines);
        assert!(!args.behavior.strict);
        assert!(args.paths.is_empty());
    }

    #[test]
    fn test_format_and_paths() {
        let args = Args::parse_from(["word_freq", "--format", "json", "a.txt", "b.txt"]);
        assert_eq!(args.output.format, OutputFormat::Json);
        assert_eq!(args.paths.len(), 2);
    }
}
