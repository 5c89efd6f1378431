//! Dictionary recognizer
//!
//! Tags exact (case-sensitive) token matches of known phrases. At each position
//! the longest matching phrase wins; scanning resumes after a match, so spans
//! never overlap and come out in ascending order.

use std::collections::BTreeMap;
use std::path::Path;

use ablate_core::{Recognition, Result, Span};
use anyhow::Context;
use tracing::debug;

use crate::Recognizer;
use crate::tokenizer::tokenize;

#[derive(Debug, Clone)]
struct Entry {
    tokens: Vec<String>,
    label: String,
}

#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: Vec<Entry>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `phrase` under `label`; blank phrases are ignored
    pub fn add(&mut self, label: &str, phrase: &str) {
        let tokens = tokenize(phrase).into_inner();
        if tokens.is_empty() {
            return;
        }
        self.entries.push(Entry {
            tokens,
            label: label.to_string(),
        });
        // stable: among equal lengths, the first registered phrase wins
        self.entries.sort_by_key(|e| std::cmp::Reverse(e.tokens.len()));
    }

    pub fn with(mut self, label: &str, phrases: &[&str]) -> Self {
        for phrase in phrases {
            self.add(label, phrase);
        }
        self
    }

    /// Build from `label -> phrases`
    pub fn from_entries(entries: &BTreeMap<String, Vec<String>>) -> Self {
        let mut gazetteer = Self::new();
        for (label, phrases) in entries {
            for phrase in phrases {
                gazetteer.add(label, phrase);
            }
        }
        gazetteer
    }

    /// Load a TOML file of `LABEL = ["phrase", ...]` tables
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read gazetteer {}", path.display()))?;
        let entries: BTreeMap<String, Vec<String>> = toml::from_str(&content)
            .with_context(|| format!("Invalid gazetteer {}", path.display()))?;
        Ok(Self::from_entries(&entries))
    }

    /// Merge another gazetteer's phrases into this one
    pub fn extend(&mut self, other: Gazetteer) {
        self.entries.extend(other.entries);
        self.entries.sort_by_key(|e| std::cmp::Reverse(e.tokens.len()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn longest_match(&self, tokens: &[String], at: usize) -> Option<&Entry> {
        let rest = &tokens[at..];
        self.entries
            .iter()
            .find(|e| rest.len() >= e.tokens.len() && rest[..e.tokens.len()] == e.tokens[..])
    }
}

impl Recognizer for Gazetteer {
    fn name(&self) -> &str {
        "gazetteer"
    }

    fn recognize(&self, text: &str) -> Result<Recognition> {
        let tokens = tokenize(text);
        let mut spans = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            match self.longest_match(tokens.as_slice(), i) {
                Some(entry) => {
                    let end = i + entry.tokens.len();
                    spans.push(Span::new(i, end, entry.label.clone()));
                    i = end;
                }
                None => i += 1,
            }
        }

        debug!(tokens = tokens.len(), spans = spans.len(), "Gazetteer pass");
        Ok(Recognition::new(tokens, spans))
    }
}
