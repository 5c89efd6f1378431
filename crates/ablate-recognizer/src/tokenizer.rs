//! Word-level tokenizer
//!
//! Initials (`M.`, `U.S.`) and words with inner apostrophes or hyphens stay
//! whole; every other punctuation mark becomes its own token. A lone capital
//! keeps its period only when whitespace follows, so `Plan B.` ends in a full
//! stop.

use ablate_core::TokenSequence;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // group 1 holds a single initial without the whitespace after it
    static ref TOKEN: Regex =
        Regex::new(r"(?:\p{Lu}\.){2,}|(\p{Lu}\.)\s|\w+(?:['’\-]\w+)*|[^\w\s]").unwrap();
}

pub fn tokenize(text: &str) -> TokenSequence {
    TOKEN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
        .map(|m| m.as_str().to_string())
        .collect::<Vec<_>>()
        .into()
}
