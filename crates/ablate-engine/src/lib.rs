//! Ablation driver
//!
//! Runs the recognizer once per document and feeds the same recognition to every
//! configured redactor, one output field per redactor.

pub mod report;

use std::collections::BTreeMap;

use ablate_core::{AnnotatedDocument, CategoryCatalog, Document, Error, Recognition, Result};
use ablate_recognizer::Recognizer;
use ablate_redact::{KeywordRedactor, MatchMode, SpanRedactor, TextRedactor};
use tracing::{debug, info, warn};

pub use report::{BatchReport, DocumentOutcome};

pub struct AblationDriver {
    recognizer: Box<dyn Recognizer>,
    redactors: Vec<Box<dyn TextRedactor>>,
}

impl AblationDriver {
    /// Driver with no variants configured yet
    pub fn new(recognizer: Box<dyn Recognizer>) -> Self {
        Self {
            recognizer,
            redactors: Vec::new(),
        }
    }

    /// Driver producing all seven catalog variants
    pub fn with_catalog(recognizer: Box<dyn Recognizer>, catalog: &CategoryCatalog) -> Self {
        let mut driver = Self::new(recognizer);
        for set in catalog.all() {
            driver.push(Box::new(SpanRedactor::for_category(set)));
        }
        driver
    }

    /// Add the variant for one named category set
    ///
    /// Fails with `UnknownCategory` and leaves the driver unchanged when the name
    /// is not in the catalog.
    pub fn add_category(&mut self, catalog: &CategoryCatalog, name: &str) -> Result<()> {
        let set = catalog.get(name)?;
        self.push(Box::new(SpanRedactor::for_category(set)));
        Ok(())
    }

    pub fn with_categories<S: AsRef<str>>(
        mut self,
        catalog: &CategoryCatalog,
        names: &[S],
    ) -> Result<Self> {
        for name in names {
            self.add_category(catalog, name.as_ref())?;
        }
        Ok(self)
    }

    /// Also produce `ner_bio`, with every recognized entity redacted
    pub fn with_all_entities(mut self) -> Self {
        self.push(Box::new(SpanRedactor::all_entities()));
        self
    }

    /// Also produce `keyword_bio` from each document's `name`
    pub fn with_keyword(mut self, keyword: impl Into<String>, mode: MatchMode) -> Self {
        self.push(Box::new(KeywordRedactor::new(keyword, mode)));
        self
    }

    // a field configured twice keeps its first redactor
    fn push(&mut self, redactor: Box<dyn TextRedactor>) {
        if self
            .redactors
            .iter()
            .any(|r| r.field_name() == redactor.field_name())
        {
            debug!(field = redactor.field_name(), "Variant already configured");
            return;
        }
        self.redactors.push(redactor);
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.redactors.iter().map(|r| r.field_name()).collect()
    }

    pub fn recognizer_name(&self) -> &str {
        self.recognizer.name()
    }

    fn needs_recognition(&self) -> bool {
        self.redactors.iter().any(|r| r.needs_recognition())
    }

    /// Recognize once, then redact every configured variant
    pub fn ablate(&self, document: &Document) -> DocumentOutcome {
        let recognition = if self.needs_recognition() {
            match self.recognize(document) {
                Ok(recognition) => recognition,
                Err(e) => return self.failed(document, e),
            }
        } else {
            Recognition::default()
        };

        self.redact_all(document, &recognition)
    }

    /// Redact a document that already carries tokens and spans
    pub fn ablate_annotated(&self, annotated: &AnnotatedDocument) -> DocumentOutcome {
        let document = annotated.to_document();
        self.redact_all(&document, &annotated.recognition)
    }

    pub fn run_batch<I>(&self, documents: I) -> (Vec<DocumentOutcome>, BatchReport)
    where
        I: IntoIterator<Item = Document>,
    {
        self.log_plan();
        let mut report = BatchReport::start();
        let outcomes: Vec<_> = documents
            .into_iter()
            .map(|document| {
                let outcome = self.ablate(&document);
                report.record(&outcome);
                outcome
            })
            .collect();
        (outcomes, report.finish())
    }

    pub fn run_annotated_batch<I>(&self, documents: I) -> (Vec<DocumentOutcome>, BatchReport)
    where
        I: IntoIterator<Item = AnnotatedDocument>,
    {
        self.log_plan();
        let mut report = BatchReport::start();
        let outcomes: Vec<_> = documents
            .into_iter()
            .map(|annotated| {
                let outcome = self.ablate_annotated(&annotated);
                report.record(&outcome);
                outcome
            })
            .collect();
        (outcomes, report.finish())
    }

    /// Log each configured variant and why it exists
    pub fn log_plan(&self) {
        for redactor in &self.redactors {
            info!(
                field = redactor.field_name(),
                reason = redactor.reason(),
                "Ablation variant"
            );
        }
    }

    fn recognize(&self, document: &Document) -> Result<Recognition> {
        let recognition = self
            .recognizer
            .recognize(&document.text)
            .map_err(|e| match e {
                failure @ Error::RecognizerFailure(_) => failure,
                other => Error::RecognizerFailure(other.to_string()),
            })?;

        if recognition.tokens.is_empty() && !document.text.trim().is_empty() {
            return Err(Error::RecognizerFailure(format!(
                "{} returned no tokens for non-empty text",
                self.recognizer.name()
            )));
        }

        Ok(recognition)
    }

    fn redact_all(&self, document: &Document, recognition: &Recognition) -> DocumentOutcome {
        let variants: BTreeMap<_, _> = self
            .redactors
            .iter()
            .map(|redactor| {
                let redacted = redactor.redact(document, recognition);
                (redactor.field_name().to_string(), redacted)
            })
            .collect();

        debug!(
            id = %document.id,
            spans = recognition.spans.len(),
            variants = variants.len(),
            "Ablated document"
        );

        DocumentOutcome::Redacted {
            id: document.id.clone(),
            source_hash: document.source_hash(),
            variants,
        }
    }

    fn failed(&self, document: &Document, error: Error) -> DocumentOutcome {
        warn!(id = %document.id, error = %error, "Document failed");
        DocumentOutcome::Failed {
            id: document.id.clone(),
            source_hash: document.source_hash(),
            error: error.to_string(),
        }
    }
}
