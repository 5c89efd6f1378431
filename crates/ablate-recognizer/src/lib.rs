//! Entity recognizers
//!
//! The statistical tagger lives outside this workspace; everything here talks to
//! it through [`Recognizer`]. [`Gazetteer`] is a dictionary-backed implementation
//! for running without a model.

pub mod gazetteer;
pub mod tokenizer;

use ablate_core::{Recognition, Result};

pub use gazetteer::Gazetteer;
pub use tokenizer::tokenize;

/// Trait for anything that can tokenize text and tag entity spans
///
/// Implementations are handed to the ablation driver, never looked up globally.
/// Each worker owns its own instance.
pub trait Recognizer: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Tokenize `text` and return spans over those tokens
    fn recognize(&self, text: &str) -> Result<Recognition>;
}
