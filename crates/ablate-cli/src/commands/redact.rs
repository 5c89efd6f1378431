use std::path::PathBuf;

use ablate_config::Config;
use ablate_core::Document;
use ablate_engine::DocumentOutcome;
use anyhow::Result;

use super::{build_driver, load_gazetteer, match_mode};

pub fn handle(
    config: &Config,
    text: String,
    category: Vec<String>,
    all_entities: bool,
    gazetteer: Option<PathBuf>,
) -> Result<()> {
    let gazetteer = load_gazetteer(config, gazetteer)?;
    let driver = build_driver(
        config,
        gazetteer,
        &category,
        all_entities,
        None,
        match_mode(config, false),
    )?;

    match driver.ablate(&Document::new(text)) {
        DocumentOutcome::Redacted { variants, .. } => {
            for (field, redacted) in variants {
                if redacted.is_complete() {
                    println!("{}: {}", field, redacted.text);
                } else {
                    println!(
                        "{}: {} ({} span(s) skipped)",
                        field,
                        redacted.text,
                        redacted.skipped.len()
                    );
                    for skipped in &redacted.skipped {
                        println!("    {}", skipped.to_error());
                    }
                }
            }
            Ok(())
        }
        DocumentOutcome::Failed { error, .. } => anyhow::bail!("Redaction failed: {}", error),
    }
}
