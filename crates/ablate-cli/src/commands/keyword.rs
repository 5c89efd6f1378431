use ablate_config::Config;
use ablate_redact::redact_literal_with;
use anyhow::Result;

use super::match_mode;

pub fn handle(
    config: &Config,
    text: String,
    name: String,
    keyword: String,
    whole_word: bool,
) -> Result<()> {
    let mode = match_mode(config, whole_word);
    let redacted = redact_literal_with(&text, &name, &keyword, mode);

    tracing::debug!(replacements = redacted.applied, ?mode, "Keyword redaction");
    println!("{}", redacted.text);

    Ok(())
}
