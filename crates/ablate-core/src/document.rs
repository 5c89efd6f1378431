use serde::{Deserialize, Serialize};

use crate::span::{SkippedSpan, Span, TokenSequence};

/// One biography to ablate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(default = "new_id")]
    pub id: String,
    pub text: String,
    /// Literal name of the subject, used by keyword redaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            name: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// blake3 hex digest of the raw text
    pub fn source_hash(&self) -> String {
        blake3::hash(self.text.as_bytes()).to_hex().to_string()
    }
}

/// Tokens and entity spans produced by one recognizer pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recognition {
    pub tokens: TokenSequence,
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl Recognition {
    pub fn new(tokens: TokenSequence, spans: Vec<Span>) -> Self {
        Self { tokens, spans }
    }
}

/// A document that arrives already tokenized and spanned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub recognition: Recognition,
}

impl AnnotatedDocument {
    /// Plain document whose text is the tokens joined by single spaces
    pub fn to_document(&self) -> Document {
        Document {
            id: self.id.clone(),
            text: self.recognition.tokens.join(),
            name: self.name.clone(),
        }
    }
}

/// Output of one redaction call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedactedText {
    pub text: String,
    /// Number of spans or keyword occurrences replaced
    pub applied: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedSpan>,
}

impl RedactedText {
    pub fn new(text: String, applied: usize) -> Self {
        Self {
            text,
            applied,
            skipped: Vec::new(),
        }
    }

    /// False when at least one selected span could not be applied
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
