use ablate_config::Config;
use ablate_core::{AnnotatedDocument, Document, Error};
use ablate_engine::{AblationDriver, BatchReport, DocumentOutcome};
use anyhow::{Context, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tokio::sync::mpsc;
use tracing::{info, warn};

use super::{build_driver, load_gazetteer, match_mode};
use crate::cli::RunArgs;

/// One input line, parsed or not
enum Line {
    Plain(Document),
    Annotated(AnnotatedDocument),
    Invalid(DocumentOutcome),
}

pub async fn handle(config: &Config, args: RunArgs) -> Result<()> {
    let input = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let gazetteer = load_gazetteer(config, args.gazetteer.clone())?;
    let keyword = args.keyword.clone().or_else(|| config.ablation.keyword.clone());
    let driver = build_driver(
        config,
        gazetteer,
        &args.category,
        args.all_entities,
        keyword,
        match_mode(config, args.whole_word),
    )?;

    let lines = parse_lines(&input, args.annotated);
    info!(
        documents = lines.len(),
        recognizer = driver.recognizer_name(),
        "Starting ablation run"
    );

    let sink: Box<dyn AsyncWrite + Unpin + Send> = match &args.output {
        Some(path) => Box::new(
            tokio::fs::File::create(path)
                .await
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(tokio::io::stdout()),
    };
    let mut writer = BufWriter::new(sink);

    // recognition is blocking work; outcomes stream back one line at a time
    let (tx, mut rx) = mpsc::channel::<DocumentOutcome>(64);
    let worker = tokio::task::spawn_blocking(move || {
        ablate_lines(&driver, lines, |outcome| {
            // a closed channel means the writer already failed
            let _ = tx.blocking_send(outcome);
        })
    });

    while let Some(outcome) = rx.recv().await {
        let mut line = serde_json::to_vec(&outcome)?;
        line.push(b'\n');
        writer.write_all(&line).await.context("Failed to write outcome")?;
    }
    writer.flush().await.context("Failed to flush output")?;

    let report = worker.await.context("Ablation worker panicked")?;

    info!(
        documents = report.documents,
        redacted = report.redacted,
        partial = report.partial,
        failed = report.failed,
        elapsed_s = (report.finished_at - report.started_at).whole_seconds(),
        "Ablation run finished"
    );

    Ok(())
}

fn parse_lines(input: &str, annotated: bool) -> Vec<Line> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let parsed = if annotated {
                serde_json::from_str(line).map(Line::Annotated)
            } else {
                serde_json::from_str(line).map(Line::Plain)
            };
            parsed.unwrap_or_else(|e| invalid(index + 1, line, e))
        })
        .collect()
}

fn invalid(line_number: usize, line: &str, error: serde_json::Error) -> Line {
    let error = Error::InvalidDocument(format!("line {}: {}", line_number, error));
    warn!(line = line_number, error = %error, "Skipping malformed document");
    Line::Invalid(DocumentOutcome::Failed {
        id: format!("line:{}", line_number),
        source_hash: blake3::hash(line.as_bytes()).to_hex().to_string(),
        error: error.to_string(),
    })
}

/// Ablate every line in order, handing each outcome to `emit` as soon as it is ready
fn ablate_lines(
    driver: &AblationDriver,
    lines: Vec<Line>,
    mut emit: impl FnMut(DocumentOutcome),
) -> BatchReport {
    driver.log_plan();
    let mut report = BatchReport::start();

    for line in lines {
        let outcome = match line {
            Line::Plain(document) => driver.ablate(&document),
            Line::Annotated(annotated) => driver.ablate_annotated(&annotated),
            Line::Invalid(outcome) => outcome,
        };
        report.record(&outcome);
        emit(outcome);
    }

    report.finish()
}
