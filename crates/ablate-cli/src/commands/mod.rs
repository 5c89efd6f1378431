pub mod categories;
pub mod completions;
pub mod keyword;
pub mod redact;
pub mod run;

use std::path::PathBuf;

use ablate_config::Config;
use ablate_core::CategoryCatalog;
use ablate_engine::AblationDriver;
use ablate_recognizer::Gazetteer;
use ablate_redact::MatchMode;
use anyhow::Result;

/// Gazetteer from the config file path (or an override) plus inline entries
pub fn load_gazetteer(config: &Config, path: Option<PathBuf>) -> Result<Gazetteer> {
    let mut gazetteer = Gazetteer::from_entries(&config.gazetteer.entries);
    if let Some(path) = path.or_else(|| config.gazetteer.path.clone()) {
        gazetteer.extend(Gazetteer::load(&path)?);
    }
    if gazetteer.is_empty() {
        tracing::warn!("Gazetteer is empty; no entities will be recognized");
    }
    Ok(gazetteer)
}

/// `--whole-word` wins over the configured mode
pub fn match_mode(config: &Config, whole_word: bool) -> MatchMode {
    if whole_word {
        MatchMode::WholeWord
    } else {
        config.ablation.match_mode
    }
}

/// Driver for the requested variants; an empty category list falls back to config
pub fn build_driver(
    config: &Config,
    gazetteer: Gazetteer,
    categories: &[String],
    all_entities: bool,
    keyword: Option<String>,
    mode: MatchMode,
) -> Result<AblationDriver> {
    let catalog = CategoryCatalog::new();
    let categories = if categories.is_empty() {
        config.ablation.categories.as_slice()
    } else {
        categories
    };

    let mut driver =
        AblationDriver::new(Box::new(gazetteer)).with_categories(&catalog, categories)?;
    if all_entities || config.ablation.all_entities {
        driver = driver.with_all_entities();
    }
    if let Some(keyword) = keyword {
        driver = driver.with_keyword(keyword, mode);
    }
    Ok(driver)
}
