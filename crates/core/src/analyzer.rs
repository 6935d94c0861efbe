// crates/core/src/analyzer.rs
use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use serde::{Deserialize, Serialize};

/// Word-frequency analysis of a single line of text.
///
/// All derived fields are computed once by [`LineAnalysis::analyze`]; the
/// value never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAnalysis {
    /// The line exactly as provided, trailing line break included if present.
    pub content: String,
    /// Caller-supplied position of the line in its source.
    pub line_number: usize,
    /// Occurrences of the most frequent normalized word; 0 for a wordless line.
    pub highest_wf_count: usize,
    /// Every normalized word occurring exactly `highest_wf_count` times, in
    /// the order each was first encountered during tokenization.
    pub highest_wf_words: Vec<String>,
}

impl LineAnalysis {
    /// Analyze one line of text.
    ///
    /// A word is a maximal run of non-whitespace characters; punctuation
    /// stays attached, so `"end."` and `"end"` count separately. Counting is
    /// case-insensitive and the lowercased form is the canonical word.
    /// Ties for the maximum are all retained.
    #[must_use]
    pub fn analyze(content: &str, line_number: usize) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for token in content.split_whitespace() {
            let word = token.to_lowercase();
            match counts.entry(word) {
                Entry::Occupied(mut occupied) => *occupied.get_mut() += 1,
                Entry::Vacant(vacant) => {
                    first_seen.push(vacant.key().clone());
                    vacant.insert(1);
                }
            }
        }

        let highest_wf_count = counts.values().copied().max().unwrap_or(0);
        let highest_wf_words = first_seen
            .into_iter()
            .filter(|word| counts[word] == highest_wf_count)
            .collect();

        Self {
            content: content.to_owned(),
            line_number,
            highest_wf_count,
            highest_wf_words,
        }
    }

    /// Whether the line held no words at all.
    #[must_use]
    pub fn is_wordless(&self) -> bool {
        self.highest_wf_words.is_empty()
    }
}
