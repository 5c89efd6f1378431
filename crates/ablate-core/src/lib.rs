//! Core domain models for ablate
//!
//! This crate contains:
//! - Domain models (Span, TokenSequence, Document, Recognition)
//! - The category catalog (which recognizer labels each ablation removes)
//! - The shared error taxonomy

pub mod category;
pub mod document;
pub mod error;
pub mod span;

pub use category::{Category, CategoryCatalog, CategorySet, LabelSet};
pub use document::{AnnotatedDocument, Document, Recognition, RedactedText};
pub use error::{Error, Result};
pub use span::{SkippedSpan, Span, TokenSequence};
