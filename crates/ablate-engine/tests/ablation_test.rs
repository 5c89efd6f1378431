use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ablate_core::{
    AnnotatedDocument, CategoryCatalog, Document, Error, Recognition, Result, Span, TokenSequence,
};
use ablate_engine::AblationDriver;
use ablate_recognizer::{Gazetteer, Recognizer};
use ablate_redact::{KeywordRedactor, MatchMode, SpanRedactor};

/// Wraps a gazetteer and counts recognize calls
struct CountingRecognizer {
    inner: Gazetteer,
    calls: Arc<AtomicUsize>,
}

impl Recognizer for CountingRecognizer {
    fn name(&self) -> &str {
        "counting"
    }

    fn recognize(&self, text: &str) -> Result<Recognition> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if text.contains("<<corrupt>>") {
            return Err(Error::RecognizerFailure("model crashed".to_string()));
        }
        self.inner.recognize(text)
    }
}

fn gazetteer() -> Gazetteer {
    Gazetteer::new()
        .with("PERSON", &["Hortensia Santoveña", "Ang Lee"])
        .with("GPE", &["Mexico", "Taiwan"])
        .with("LOC", &["the Pacific"])
        .with("NORP", &["Mexican", "Taiwanese"])
        .with("LANGUAGE", &["Spanish"])
}

fn counting_driver() -> (AblationDriver, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let recognizer = CountingRecognizer {
        inner: gazetteer(),
        calls: calls.clone(),
    };
    let driver = AblationDriver::with_catalog(Box::new(recognizer), &CategoryCatalog::new());
    (driver, calls)
}

#[test]
fn test_seven_variants_one_recognition() {
    let (driver, calls) = counting_driver();
    let document = Document::new(
        "Hortensia Santoveña was born in Mexico. The Mexican actress speaks Spanish.",
    )
    .with_id("nm0001");

    let outcome = driver.ablate(&document);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!outcome.is_failed());
    assert!(!outcome.is_partial());

    let text = |field: &str| outcome.variant(field).unwrap().text.clone();
    assert_eq!(
        text("ner_no_ppl_bio"),
        "PERSON was born in Mexico . The Mexican actress speaks Spanish ."
    );
    assert_eq!(
        text("ner_no_loc_bio"),
        "Hortensia Santoveña was born in GPE . The Mexican actress speaks Spanish ."
    );
    assert_eq!(
        text("ner_no_ethn_bio"),
        "Hortensia Santoveña was born in Mexico . The NORP actress speaks LANGUAGE ."
    );
    assert_eq!(
        text("ner_no_ethn+ppl_bio"),
        "PERSON was born in Mexico . The NORP actress speaks LANGUAGE ."
    );
    assert_eq!(
        text("ner_no_ethn+loc_bio"),
        "Hortensia Santoveña was born in GPE . The NORP actress speaks LANGUAGE ."
    );
    assert_eq!(
        text("ner_no_loc+ppl_bio"),
        "PERSON was born in GPE . The Mexican actress speaks Spanish ."
    );
    assert_eq!(
        text("ner_no_ppl+ethn+loc_bio"),
        "PERSON was born in GPE . The NORP actress speaks LANGUAGE ."
    );
}

#[test]
fn test_batch_survives_recognizer_failure() {
    let (driver, calls) = counting_driver();
    let documents = vec![
        Document::new("Ang Lee was born in Taiwan.").with_id("a"),
        Document::new("<<corrupt>>").with_id("b"),
        Document::new("Hortensia Santoveña sailed the Pacific.").with_id("c"),
    ];

    let (outcomes, report) = driver.run_batch(documents);

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(outcomes.len(), 3);
    assert_eq!(report.documents, 3);
    assert_eq!(report.redacted, 2);
    assert_eq!(report.failed, 1);

    assert!(outcomes[1].is_failed());
    assert_eq!(outcomes[1].id(), "b");
    assert_eq!(
        outcomes[2].variant("ner_no_loc_bio").unwrap().text,
        "Hortensia Santoveña sailed LOC ."
    );
}

#[test]
fn test_annotated_documents_skip_recognizer() {
    let (driver, calls) = counting_driver();
    let annotated = AnnotatedDocument {
        id: "nm0002".to_string(),
        name: None,
        recognition: Recognition::new(
            TokenSequence::from_text("Hortensia Santoveña was born in Mexico"),
            vec![Span::new(0, 2, "PERSON"), Span::new(5, 6, "GPE")],
        ),
    };

    let outcome = driver.ablate_annotated(&annotated);

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        outcome.variant("ner_no_loc_bio").unwrap().text,
        "Hortensia Santoveña was born in GPE"
    );
    assert_eq!(
        outcome.variant("ner_no_loc+ppl_bio").unwrap().text,
        "PERSON was born in GPE"
    );
}

#[test]
fn test_partial_redaction_is_visible() {
    let (driver, _) = counting_driver();
    let annotated = AnnotatedDocument {
        id: "nm0003".to_string(),
        name: None,
        recognition: Recognition::new(
            TokenSequence::from_text("Ang Lee was born in Taiwan"),
            vec![Span::new(0, 2, "PERSON"), Span::new(5, 9, "GPE")],
        ),
    };

    let (outcomes, report) = driver.run_annotated_batch(vec![annotated]);

    assert!(outcomes[0].is_partial());
    assert_eq!(report.partial, 1);

    let people = outcomes[0].variant("ner_no_ppl_bio").unwrap();
    assert!(people.is_complete());
    assert_eq!(people.text, "PERSON was born in Taiwan");

    let location = outcomes[0].variant("ner_no_loc_bio").unwrap();
    assert!(!location.is_complete());
    assert_eq!(location.text, "Ang Lee was born in Taiwan");
}

#[test]
fn test_keyword_variant_alongside_catalog() {
    let (driver, calls) = counting_driver();
    let driver = driver
        .with_all_entities()
        .with_keyword("PERSON", MatchMode::Substring);
    let document = Document::new("Ang Lee directed. Lee later moved to Taiwan.").with_name("Ang Lee");

    let outcome = driver.ablate(&document);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(driver.field_names().len(), 9);
    assert_eq!(
        outcome.variant("keyword_bio").unwrap().text,
        "PERSON directed. PERSON later moved to Taiwan."
    );
    assert_eq!(
        outcome.variant("ner_bio").unwrap().text,
        "PERSON directed . Lee later moved to GPE ."
    );
}

#[test]
fn test_outcome_serializes_as_json_line() {
    let (driver, _) = counting_driver();
    let outcome = driver.ablate(&Document::new("Ang Lee").with_id("x"));

    let line = serde_json::to_string(&outcome).unwrap();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();

    assert_eq!(value["status"], "redacted");
    assert_eq!(value["variants"]["ner_no_ppl_bio"]["text"], "PERSON");
    assert_eq!(value["variants"]["ner_no_ppl_bio"]["applied"], 1);
    assert!(value["variants"]["ner_no_ppl_bio"].get("skipped").is_none());
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_workers_can_share_components() {
    assert_send_sync::<AblationDriver>();
    assert_send_sync::<SpanRedactor>();
    assert_send_sync::<KeywordRedactor>();
    assert_send_sync::<Gazetteer>();
    assert_send_sync::<CategoryCatalog>();
    assert_send_sync::<Recognition>();
}

#[test]
fn test_driver_shared_across_threads() {
    let (driver, calls) = counting_driver();
    let driver = Arc::new(driver);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let driver = Arc::clone(&driver);
            std::thread::spawn(move || {
                let document = Document::new("Ang Lee was born in Taiwan.").with_id(format!("t{}", i));
                driver.ablate(&document)
            })
        })
        .collect();

    for handle in handles {
        let outcome = handle.join().unwrap();
        assert_eq!(
            outcome.variant("ner_no_loc+ppl_bio").unwrap().text,
            "PERSON was born in GPE ."
        );
    }
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}
