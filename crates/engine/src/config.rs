// crates/engine/src/config.rs
use derive_builder::Builder;
use std::path::PathBuf;

/// Engine run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Files to analyze; an empty list means the caller supplies a reader
    /// directly (e.g. stdin via [`crate::analyze_reader`]).
    #[builder(default)]
    pub inputs: Vec<PathBuf>,

    /// Abort on the first unreadable source instead of collecting the error.
    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![],
            strict: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_default() {
        let built = ConfigBuilder::default().build().unwrap();
        let default = Config::default();
        assert_eq!(built.inputs, default.inputs);
        assert_eq!(built.strict, default.strict);
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = ConfigBuilder::default()
            .inputs(vec![PathBuf::from("notes.txt")])
            .strict(true)
            .build()
            .unwrap();
        assert_eq!(config.inputs, vec![PathBuf::from("notes.txt")]);
        assert!(config.strict);
    }
}
