//! Span selection by label

use ablate_core::{LabelSet, Span};

/// Which recognizer labels a redaction pass targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelFilter {
    /// Every span, whatever its label
    All,
    Only(LabelSet),
}

impl LabelFilter {
    pub fn matches(&self, label: &str) -> bool {
        match self {
            LabelFilter::All => true,
            LabelFilter::Only(labels) => labels.contains(label),
        }
    }
}

impl From<LabelSet> for LabelFilter {
    fn from(labels: LabelSet) -> Self {
        LabelFilter::Only(labels)
    }
}

/// Keep spans whose label is in `targets`, preserving input order
///
/// An empty target set selects nothing.
pub fn select<'a>(spans: &'a [Span], targets: &LabelSet) -> Vec<&'a Span> {
    spans.iter().filter(|s| targets.contains(&s.label)).collect()
}

/// Like [`select`], for any [`LabelFilter`]
pub fn select_with<'a>(spans: &'a [Span], filter: &LabelFilter) -> Vec<&'a Span> {
    spans.iter().filter(|s| filter.matches(&s.label)).collect()
}
