//! Literal keyword redaction
//!
//! For callers that know the subject's name but have no recognizer spans: every
//! variant of the name is replaced by a fixed keyword directly in the raw text.

use serde::{Deserialize, Serialize};

use ablate_core::RedactedText;

use crate::normalizer::normalize;

/// How a name variant must sit in the text to be replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Plain substring replacement; `Lee` also matches inside `Leeds`
    #[default]
    Substring,
    /// Only occurrences not flanked by word characters
    WholeWord,
}

/// The full name followed by its whitespace-separated parts
///
/// `"Brian M. Metcalf"` gives `["Brian M. Metcalf", "Brian", "M.", "Metcalf"]`.
pub fn variants(full_name: &str) -> Vec<String> {
    std::iter::once(full_name)
        .chain(full_name.split_whitespace())
        .map(str::to_string)
        .collect()
}

/// Replace every variant of `name` in `text` with `keyword` (substring match)
pub fn redact_literal(text: &str, name: &str, keyword: &str) -> String {
    redact_literal_with(text, name, keyword, MatchMode::Substring).text
}

/// Keyword redaction with an explicit [`MatchMode`]
///
/// Variants are applied longest first so a component never breaks up a longer
/// variant that contains it. Blank variants are ignored.
pub fn redact_literal_with(text: &str, name: &str, keyword: &str, mode: MatchMode) -> RedactedText {
    let mut ordered = Vec::new();
    for variant in variants(name) {
        if !variant.trim().is_empty() && !ordered.contains(&variant) {
            ordered.push(variant);
        }
    }
    ordered.sort_by_key(|v| std::cmp::Reverse(v.chars().count()));

    let mut result = text.to_string();
    let mut replaced = 0;

    for variant in &ordered {
        let (next, count) = match mode {
            MatchMode::Substring => {
                let count = result.matches(variant.as_str()).count();
                (result.replace(variant.as_str(), keyword), count)
            }
            MatchMode::WholeWord => replace_whole_words(&result, variant, keyword),
        };
        result = next;
        replaced += count;
    }

    RedactedText::new(normalize(&result), replaced)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn replace_whole_words(text: &str, needle: &str, keyword: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0;

    for (idx, _) in text.match_indices(needle) {
        let end = idx + needle.len();
        let before = text[..idx].chars().next_back();
        let after = text[end..].chars().next();
        if before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
            continue;
        }

        out.push_str(&text[last..idx]);
        out.push_str(keyword);
        last = end;
        count += 1;
    }

    out.push_str(&text[last..]);
    (out, count)
}
