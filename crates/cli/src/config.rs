// crates/cli/src/config.rs
use crate::args::Args;
use crate::options::OutputFormat;
pub use word_freq_engine::config::{Config as EngineConfig, ConfigBuilder};

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub engine: EngineConfig,
    pub format: OutputFormat,
    pub show_lines: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let engine = ConfigBuilder::default()
            .inputs(args.paths)
            .strict(args.behavior.strict)
            .build()
            .expect("Failed to build config");

        Self {
            engine,
            format: args.output.format,
            show_lines: args.output.show_lines,
        }
    }
}
