//! Per-document outcomes and batch summary

use std::collections::BTreeMap;

use ablate_core::RedactedText;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Result of ablating one document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentOutcome {
    Redacted {
        id: String,
        source_hash: String,
        /// Keyed by output field name, e.g. `ner_no_ppl_bio`
        variants: BTreeMap<String, RedactedText>,
    },
    Failed {
        id: String,
        source_hash: String,
        error: String,
    },
}

impl DocumentOutcome {
    pub fn id(&self) -> &str {
        match self {
            DocumentOutcome::Redacted { id, .. } | DocumentOutcome::Failed { id, .. } => id,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DocumentOutcome::Failed { .. })
    }

    /// True when some variant skipped at least one span
    pub fn is_partial(&self) -> bool {
        match self {
            DocumentOutcome::Redacted { variants, .. } => {
                variants.values().any(|v| !v.is_complete())
            }
            DocumentOutcome::Failed { .. } => false,
        }
    }

    pub fn variant(&self, field: &str) -> Option<&RedactedText> {
        match self {
            DocumentOutcome::Redacted { variants, .. } => variants.get(field),
            DocumentOutcome::Failed { .. } => None,
        }
    }
}

/// Counts for one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    #[serde(with = "time::serde::timestamp")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::timestamp")]
    pub finished_at: OffsetDateTime,
    pub documents: usize,
    pub redacted: usize,
    pub failed: usize,
    /// Redacted documents with at least one skipped span
    pub partial: usize,
}

impl BatchReport {
    pub fn start() -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            started_at: now,
            finished_at: now,
            documents: 0,
            redacted: 0,
            failed: 0,
            partial: 0,
        }
    }

    pub fn record(&mut self, outcome: &DocumentOutcome) {
        self.documents += 1;
        if outcome.is_failed() {
            self.failed += 1;
        } else {
            self.redacted += 1;
            if outcome.is_partial() {
                self.partial += 1;
            }
        }
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = OffsetDateTime::now_utc();
        self
    }
}
