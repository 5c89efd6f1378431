use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ablate_core::CategoryCatalog;
use ablate_redact::MatchMode;
use serde::{Deserialize, Serialize};

/// Configuration for ablate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ablation: AblationConfig,

    #[serde(default)]
    pub gazetteer: GazetteerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AblationConfig {
    /// Category sets to produce, by catalog name
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Also produce the variant with every entity redacted
    #[serde(default)]
    pub all_entities: bool,

    /// Keyword for name redaction; no keyword variant when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(default)]
    pub match_mode: MatchMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GazetteerConfig {
    /// TOML file of `LABEL = ["phrase", ...]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Inline phrases, merged with the file
    #[serde(default)]
    pub entries: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for AblationConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            all_entities: false,
            keyword: None,
            match_mode: MatchMode::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_categories() -> Vec<String> {
    CategoryCatalog::new().all().iter().map(|s| s.name()).collect()
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_create(&Self::config_path())
    }

    /// Load `path`, writing defaults there first if it does not exist
    ///
    /// An unwritable location is not an error: the defaults are used in memory
    /// and `path` stays absent.
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Config::default();
        // best effort; callers check `path.exists()` to report it
        let _ = config.write_to(path);
        Ok(config)
    }

    fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "ablate", "ablate") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.ablate/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ablation.categories.len(), 7);
        assert_eq!(config.ablation.match_mode, MatchMode::Substring);
        assert!(!config.ablation.all_entities);
        assert!(config.ablation.keyword.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.ablation.keyword = Some("PERSON".to_string());
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.ablation.categories, config.ablation.categories);
        assert_eq!(parsed.ablation.keyword.as_deref(), Some("PERSON"));
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[ablation]
categories = ["people", "ethnicity+people"]
match_mode = "whole_word"

[gazetteer]
entries = { PERSON = ["Ang Lee"], GPE = ["Taiwan"] }
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ablation.categories, vec!["people", "ethnicity+people"]);
        assert_eq!(config.ablation.match_mode, MatchMode::WholeWord);
        assert_eq!(config.gazetteer.entries["PERSON"], vec!["Ang Lee"]);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_or_create(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.ablation.categories.len(), 7);
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.ablation.categories, config.ablation.categories);
    }

    #[test]
    fn test_load_or_create_unwritable_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where the config directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        let config = Config::load_or_create(&path).unwrap();

        assert!(!path.exists());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.ablation.categories.len(), 7);
    }
}
