//! Reverse span substitution
//!
//! Each selected span collapses into a single token holding its label. Spans are
//! applied from the highest `start` down so that rewriting one span never moves
//! the indices of the spans still waiting to be applied.

use std::borrow::Borrow;

use ablate_core::{SkippedSpan, Span};
use tracing::warn;

/// What a substitution pass did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubstitutionReport {
    pub applied: usize,
    pub skipped: Vec<SkippedSpan>,
}

/// Replace every span in `tokens` with its label, in place
///
/// Input order does not matter: spans are sorted by `start` descending, ties by
/// `end` descending. A span is applied only if `start < end <= limit`, where
/// `limit` starts at `tokens.len()` and drops to the `start` of each applied
/// span. Anything else (zero-width, past the end, overlapping an applied span)
/// is skipped and reported.
pub fn apply<S: Borrow<Span>>(tokens: &mut Vec<String>, spans: &[S]) -> SubstitutionReport {
    let mut ordered: Vec<&Span> = spans
        .iter()
        .map(|s| <S as Borrow<Span>>::borrow(s))
        .collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start).then_with(|| b.end.cmp(&a.end)));

    let mut report = SubstitutionReport::default();
    let mut limit = tokens.len();

    for span in ordered {
        if !span.fits_within(limit) {
            let skipped = SkippedSpan {
                span: span.clone(),
                limit,
            };
            warn!(error = %skipped.to_error(), "Skipping span");
            report.skipped.push(skipped);
            continue;
        }

        tokens.splice(span.start..span.end, std::iter::once(span.label.clone()));
        limit = span.start;
        report.applied += 1;
    }

    report
}
