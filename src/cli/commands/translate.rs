//! The default command: translate a strings.xml into target languages.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::fs::atomic_write;
use crate::pipeline::{CancelFlag, ResourceStore, TranslationRun};
use crate::resource::{ResourceDocument, parse_document, render_document};
use crate::status;
use crate::translation::{GoogleClient, TranslationTarget, values_dir_name};
use crate::ui::Style;

pub struct TranslateOptions {
    pub file: String,
    pub to: Vec<String>,
    pub overwrite: bool,
    pub single: bool,
}

/// Backs the pipeline with the `res/values-<suffix>/strings.xml` layout.
///
/// `res_dir` is the parent of the source file's `values/` directory; each
/// target language reads and writes `values-<suffix>/strings.xml` beneath it.
pub struct ValuesDirStore {
    res_dir: PathBuf,
}

impl ValuesDirStore {
    pub const fn new(res_dir: PathBuf) -> Self {
        Self { res_dir }
    }

    fn strings_file(&self, target: &TranslationTarget) -> PathBuf {
        self.res_dir
            .join(values_dir_name(target.code))
            .join("strings.xml")
    }
}

impl ResourceStore for ValuesDirStore {
    fn load_prior(&self, target: &TranslationTarget) -> Result<Option<ResourceDocument>> {
        let path = self.strings_file(target);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let doc = parse_document(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(doc))
    }

    fn write(&mut self, target: &TranslationTarget, doc: &ResourceDocument) -> Result<()> {
        let path = self.strings_file(target);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        atomic_write(&path, &render_document(doc))?;
        status!("Wrote {}", path.display());
        Ok(())
    }
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config_file = ConfigManager::new().load_or_default();
    let resolve_options = ResolveOptions {
        to: options.to.clone(),
        overwrite: options.overwrite,
        single: options.single,
    };
    let (pipeline_config, targets) = resolve_config(&resolve_options, &config_file)?;

    let source_path = Path::new(&options.file);
    let contents = fs::read_to_string(source_path)
        .with_context(|| format!("Failed to read file: {}", options.file))?;
    let source = parse_document(&contents)
        .with_context(|| format!("Failed to parse {}", options.file))?;
    if source.entries.is_empty() {
        bail!("Error: {} contains no <string> entries", options.file);
    }

    let mut store = ValuesDirStore::new(res_dir_for(source_path)?);

    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!();
            handler_flag.cancel();
        }
    });

    let client = GoogleClient::new()?;
    let mut run = TranslationRun::new(&client, pipeline_config, cancel.clone());
    run.run(&source, &targets, &mut store).await?;

    if cancel.is_cancelled() {
        bail!("Translation run cancelled");
    }
    status!(
        "{} Done: {} language(s)",
        Style::success("✓"),
        targets.len()
    );
    Ok(())
}

/// The `res/` directory holding the locale folders: the source file's
/// parent's parent (e.g. `res/values/strings.xml` -> `res`).
fn res_dir_for(source_path: &Path) -> Result<PathBuf> {
    source_path
        .canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(source_path)
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Cannot determine the res/ directory for {}\n\n\
                 Expected a layout like res/values/strings.xml",
                source_path.display()
            )
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::resource::{Content, StringEntry};
    use tempfile::TempDir;

    const JA: TranslationTarget = TranslationTarget {
        code: "ja",
        name: "Japanese",
    };

    fn sample_doc() -> ResourceDocument {
        ResourceDocument {
            attrs: vec![],
            entries: vec![StringEntry::new("hello", vec![Content::text("こんにちは")])],
        }
    }

    #[test]
    fn test_store_write_then_load_prior() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ValuesDirStore::new(temp_dir.path().to_path_buf());

        store.write(&JA, &sample_doc()).unwrap();
        assert!(temp_dir.path().join("values-ja/strings.xml").exists());

        let loaded = store.load_prior(&JA).unwrap().unwrap();
        assert_eq!(loaded, sample_doc());
    }

    #[test]
    fn test_store_load_prior_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = ValuesDirStore::new(temp_dir.path().to_path_buf());
        assert!(store.load_prior(&JA).unwrap().is_none());
    }

    #[test]
    fn test_store_uses_locale_suffix_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = ValuesDirStore::new(temp_dir.path().to_path_buf());
        let zh = TranslationTarget {
            code: "zh-CN",
            name: "Chinese (Simplified)",
        };

        store.write(&zh, &sample_doc()).unwrap();
        assert!(temp_dir.path().join("values-zh-rCN/strings.xml").exists());
    }

    #[test]
    fn test_store_load_prior_malformed_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("values-ja");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("strings.xml"), "not xml at all <<<").unwrap();

        let store = ValuesDirStore::new(temp_dir.path().to_path_buf());
        assert!(store.load_prior(&JA).is_err());
    }

    #[test]
    fn test_res_dir_for_values_layout() {
        let temp_dir = TempDir::new().unwrap();
        let values = temp_dir.path().join("res").join("values");
        fs::create_dir_all(&values).unwrap();
        let source = values.join("strings.xml");
        fs::write(&source, "<resources/>").unwrap();

        let res_dir = res_dir_for(&source).unwrap();
        assert_eq!(
            res_dir.file_name().and_then(|n| n.to_str()),
            Some("res")
        );
    }
}
