//! Keyword dictionary loading and automaton construction.
//!
//! The dictionary is a JSON array of entries, each carrying a canonical
//! `keyword` plus optional `aliases`. For filtering we only need the union
//! of surface terms, not which entry a term maps to: every canonical term
//! and alias is case-folded, deduplicated, and compiled into a single
//! Aho-Corasick automaton that tests a haystack against the whole term set
//! in one pass.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use aho_corasick::AhoCorasick;
use serde::Deserialize;

use crate::error::SiftError;

/// One entry of the keyword dictionary.
///
/// `category`, `type`, and `relevance_tier` are pass-through metadata for
/// downstream analysis tooling; the filter core ignores them.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub entry_type: Option<String>,
    #[serde(default)]
    pub relevance_tier: Option<i64>,
}

/// Compiled multi-pattern matcher over the deduplicated term set.
///
/// Immutable after construction; workers share it behind an `Arc` and no
/// locking is needed because matching never mutates the automaton.
#[derive(Debug)]
pub struct KeywordMatcher {
    automaton: AhoCorasick,
    term_count: usize,
}

impl KeywordMatcher {
    /// Load the dictionary at `path` and compile the matcher.
    pub fn from_path(path: &Path) -> Result<Self, SiftError> {
        let entries = load_entries(path)?;
        let terms = collect_terms(&entries);
        let automaton =
            AhoCorasick::new(&terms).map_err(|e| SiftError::DictionaryFormat {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;
        Ok(Self {
            automaton,
            term_count: terms.len(),
        })
    }

    /// Number of distinct case-folded terms compiled into the automaton.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    /// Does `text` contain at least one dictionary term as a substring,
    /// case-insensitively? No word-boundary requirement: a term inside a
    /// longer word still counts.
    pub fn is_match(&self, text: &str) -> bool {
        self.automaton.is_match(text.to_lowercase().as_str())
    }
}

/// Parse the dictionary file into entries.
///
/// A missing or unparseable file is a format error; an individual entry
/// that does not deserialize (no `keyword` string) is a schema error
/// naming the entry index. Both abort before any processing starts.
pub fn load_entries(path: &Path) -> Result<Vec<KeywordEntry>, SiftError> {
    let file = File::open(path).map_err(|e| SiftError::DictionaryFormat {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;
    let raw: Vec<serde_json::Value> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| SiftError::DictionaryFormat {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut entries = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        let entry: KeywordEntry = serde_json::from_value(value)
            .map_err(|source| SiftError::DictionarySchema { index, source })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Union of canonical terms and aliases, case-folded and deduplicated.
/// Empty terms are dropped: an empty pattern would match every record.
fn collect_terms(entries: &[KeywordEntry]) -> Vec<String> {
    let mut terms = BTreeSet::new();
    for entry in entries {
        terms.insert(entry.keyword.to_lowercase());
        for alias in &entry.aliases {
            terms.insert(alias.to_lowercase());
        }
    }
    terms.into_iter().filter(|t| !t.is_empty()).collect()
}
