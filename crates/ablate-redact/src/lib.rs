//! Redaction strategies
//!
//! Two independent ways to strip entities from a biography:
//! - [`SpanRedactor`] collapses recognizer spans into their label
//! - [`KeywordRedactor`] replaces literal variants of a known name
//!
//! Both end with the duplicate-tag [`normalizer`].

pub mod keyword;
pub mod normalizer;
pub mod selector;
pub mod substitutor;

use ablate_core::{CategorySet, Document, Recognition, RedactedText};
use tracing::debug;

pub use keyword::{MatchMode, redact_literal, redact_literal_with, variants};
pub use normalizer::normalize;
pub use selector::{LabelFilter, select, select_with};
pub use substitutor::{SubstitutionReport, apply};

/// Field name of the "every entity" variant
pub const ALL_ENTITIES_FIELD: &str = "ner_bio";

/// Field name of the keyword variant
pub const KEYWORD_FIELD: &str = "keyword_bio";

/// One way of producing a redacted rendering of a document
pub trait TextRedactor: Send + Sync {
    /// Output field this redactor fills
    fn field_name(&self) -> &str;

    /// Human-readable purpose, logged when the variant runs
    fn reason(&self) -> &str;

    /// Whether [`TextRedactor::redact`] reads the recognition
    fn needs_recognition(&self) -> bool {
        true
    }

    fn redact(&self, document: &Document, recognition: &Recognition) -> RedactedText;
}

/// Replaces selected recognizer spans with their labels
pub struct SpanRedactor {
    field: String,
    reason: String,
    filter: LabelFilter,
}

impl SpanRedactor {
    pub fn new(field: impl Into<String>, reason: impl Into<String>, filter: LabelFilter) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
            filter,
        }
    }

    /// Redactor for one catalog category set
    pub fn for_category(set: &CategorySet) -> Self {
        Self::new(set.field_name(), set.reason(), LabelFilter::Only(set.labels()))
    }

    /// Redactor that removes every recognized entity
    pub fn all_entities() -> Self {
        Self::new(ALL_ENTITIES_FIELD, "remove all named entities", LabelFilter::All)
    }

    /// Redact a recognition directly, without a source document
    pub fn redact_recognition(&self, recognition: &Recognition) -> RedactedText {
        let mut tokens = recognition.tokens.as_slice().to_vec();
        let selected = select_with(&recognition.spans, &self.filter);
        let report = apply(&mut tokens, &selected);

        debug!(
            field = %self.field,
            selected = selected.len(),
            applied = report.applied,
            skipped = report.skipped.len(),
            "Substituted spans"
        );

        RedactedText {
            text: normalize(&tokens.join(" ")),
            applied: report.applied,
            skipped: report.skipped,
        }
    }
}

impl TextRedactor for SpanRedactor {
    fn field_name(&self) -> &str {
        &self.field
    }

    fn reason(&self) -> &str {
        &self.reason
    }

    fn redact(&self, _document: &Document, recognition: &Recognition) -> RedactedText {
        self.redact_recognition(recognition)
    }
}

/// Replaces the document's subject name with a fixed keyword
pub struct KeywordRedactor {
    keyword: String,
    mode: MatchMode,
    reason: String,
}

impl KeywordRedactor {
    pub fn new(keyword: impl Into<String>, mode: MatchMode) -> Self {
        let keyword = keyword.into();
        let reason = format!("replace the subject's name with {}", keyword);
        Self {
            keyword,
            mode,
            reason,
        }
    }
}

impl TextRedactor for KeywordRedactor {
    fn field_name(&self) -> &str {
        KEYWORD_FIELD
    }

    fn reason(&self) -> &str {
        &self.reason
    }

    fn needs_recognition(&self) -> bool {
        false
    }

    fn redact(&self, document: &Document, _recognition: &Recognition) -> RedactedText {
        match &document.name {
            Some(name) => redact_literal_with(&document.text, name, &self.keyword, self.mode),
            None => RedactedText::new(document.text.clone(), 0),
        }
    }
}
