//! Token sequences and entity spans

use serde::{Deserialize, Serialize};

use crate::Error;

/// A labeled half-open interval `[start, end)` over token indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub label: String,
    #[serde(default = "default_confidence")]
    pub confidence: f32,
}

fn default_confidence() -> f32 {
    1.0
}

impl Span {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            confidence: default_confidence(),
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// True when the span is non-empty and ends at or before `limit`
    pub fn fits_within(&self, limit: usize) -> bool {
        self.start < self.end && self.end <= limit
    }
}

/// A span the substitutor refused to apply, with the token limit it was checked against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedSpan {
    pub span: Span,
    pub limit: usize,
}

impl SkippedSpan {
    pub fn to_error(&self) -> Error {
        Error::SpanOutOfBounds {
            start: self.span.start,
            end: self.span.end,
            label: self.span.label.clone(),
            len: self.limit,
        }
    }
}

/// Word-level tokens of one document
///
/// Indices are only meaningful until the sequence is mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    /// Split an already-normalized rendering on whitespace
    pub fn from_text(text: &str) -> Self {
        Self(text.split_whitespace().map(str::to_string).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Join tokens with single spaces
    pub fn join(&self) -> String {
        self.0.join(" ")
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}
