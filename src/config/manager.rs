//! Configuration file management.
//!
//! Settings live in `~/.config/slx/config.toml`; CLI flags always take
//! precedence over the file, and built-in defaults fill the rest.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::pipeline::PipelineConfig;
use crate::translation::{self, TranslationTarget, resolve_target};

/// Settings in the `[translation]` section of config.toml.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Re-translate entries even when a prior translation file exists.
    #[serde(default)]
    pub overwrite_existing: bool,
    /// Batch spans into grouped queries (one call per span when `false`).
    #[serde(default = "default_translate_together")]
    pub translate_together: bool,
    /// Character ceiling on one batch's query text.
    #[serde(default = "default_batch_chars")]
    pub batch_chars: usize,
    /// Entry ceiling per batch.
    #[serde(default = "default_batch_entries")]
    pub batch_entries: usize,
    /// Throttle unit threshold before a cooldown pause.
    #[serde(default = "default_throttle_units")]
    pub throttle_units: u64,
    /// Cooldown pause length in seconds.
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,
    /// Default target language codes when `--to` is not given.
    #[serde(default)]
    pub targets: Vec<String>,
}

const fn default_translate_together() -> bool {
    true
}

const fn default_batch_chars() -> usize {
    translation::DEFAULT_MAX_QUERY_CHARS
}

const fn default_batch_entries() -> usize {
    translation::DEFAULT_MAX_BATCH_ENTRIES
}

const fn default_throttle_units() -> u64 {
    translation::DEFAULT_THRESHOLD
}

const fn default_cooldown_secs() -> u64 {
    translation::DEFAULT_COOLDOWN.as_secs()
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            overwrite_existing: false,
            translate_together: default_translate_together(),
            batch_chars: default_batch_chars(),
            batch_entries: default_batch_entries(),
            throttle_units: default_throttle_units(),
            cooldown_secs: default_cooldown_secs(),
            targets: Vec::new(),
        }
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/slx/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Translation settings.
    #[serde(default)]
    pub translation: TranslationConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Target language codes from `--to`.
    pub to: Vec<String>,
    /// `--overwrite` flag.
    pub overwrite: bool,
    /// `--single` flag (disable batching).
    pub single: bool,
}

/// Resolves the pipeline configuration and target list.
///
/// # Errors
///
/// Returns an error if no targets were given (CLI or config) or a language
/// code is unknown.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<(PipelineConfig, Vec<TranslationTarget>)> {
    let translation = &config_file.translation;

    let codes = if options.to.is_empty() {
        &translation.targets
    } else {
        &options.to
    };
    if codes.is_empty() {
        anyhow::bail!(
            "No target languages given\n\n\
             Please provide them via:\n  \
             - CLI option: slx --to ja,ko <file>\n  \
             - Config file: targets = [\"ja\", \"ko\"] in ~/.config/slx/config.toml"
        );
    }
    let targets = codes
        .iter()
        .map(|code| resolve_target(code))
        .collect::<Result<Vec<_>>>()?;

    let pipeline = PipelineConfig {
        overwrite_existing: options.overwrite || translation.overwrite_existing,
        translate_together: !options.single && translation.translate_together,
        max_query_chars: translation.batch_chars,
        max_batch_entries: translation.batch_entries,
        throttle_threshold: translation.throttle_units,
        cooldown: Duration::from_secs(translation.cooldown_secs),
    };
    Ok((pipeline, targets))
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/slx/config.toml`
    /// or `~/.config/slx/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(
            manager.config_path(),
            "[translation]\n\
             overwrite_existing = true\n\
             translate_together = false\n\
             batch_chars = 500\n\
             batch_entries = 10\n\
             throttle_units = 100\n\
             cooldown_secs = 5\n\
             targets = [\"ja\", \"ko\"]\n",
        )
        .unwrap();

        let loaded = manager.load().unwrap();
        assert!(loaded.translation.overwrite_existing);
        assert!(!loaded.translation.translate_together);
        assert_eq!(loaded.translation.batch_chars, 500);
        assert_eq!(loaded.translation.targets, vec!["ja", "ko"]);
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "").unwrap();

        let loaded = manager.load().unwrap();
        assert!(!loaded.translation.overwrite_existing);
        assert!(loaded.translation.translate_together);
        assert_eq!(loaded.translation.batch_chars, 360);
        assert_eq!(loaded.translation.batch_entries, 28);
        assert_eq!(loaded.translation.throttle_units, 300);
        assert_eq!(loaded.translation.cooldown_secs, 10);
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert!(manager.load_or_default().translation.translate_together);
    }

    #[test]
    fn test_resolve_cli_targets_win() {
        let file = ConfigFile {
            translation: TranslationConfig {
                targets: vec!["fr".to_string()],
                ..TranslationConfig::default()
            },
        };
        let options = ResolveOptions {
            to: vec!["ja".to_string()],
            ..ResolveOptions::default()
        };

        let (_, targets) = resolve_config(&options, &file).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].code, "ja");
    }

    #[test]
    fn test_resolve_falls_back_to_config_targets() {
        let file = ConfigFile {
            translation: TranslationConfig {
                targets: vec!["fr".to_string(), "de".to_string()],
                ..TranslationConfig::default()
            },
        };

        let (_, targets) = resolve_config(&ResolveOptions::default(), &file).unwrap();
        assert_eq!(targets[0].code, "fr");
        assert_eq!(targets[1].code, "de");
    }

    #[test]
    fn test_resolve_no_targets_is_error() {
        let result = resolve_config(&ResolveOptions::default(), &ConfigFile::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_unknown_code_is_error() {
        let options = ResolveOptions {
            to: vec!["xx-invalid".to_string()],
            ..ResolveOptions::default()
        };
        assert!(resolve_config(&options, &ConfigFile::default()).is_err());
    }

    #[test]
    fn test_resolve_single_flag_disables_batching() {
        let options = ResolveOptions {
            to: vec!["ja".to_string()],
            single: true,
            ..ResolveOptions::default()
        };
        let (pipeline, _) = resolve_config(&options, &ConfigFile::default()).unwrap();
        assert!(!pipeline.translate_together);
    }

    #[test]
    fn test_resolve_overwrite_flag() {
        let options = ResolveOptions {
            to: vec!["ja".to_string()],
            overwrite: true,
            ..ResolveOptions::default()
        };
        let (pipeline, _) = resolve_config(&options, &ConfigFile::default()).unwrap();
        assert!(pipeline.overwrite_existing);
    }
}
