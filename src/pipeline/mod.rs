//! Per-language translation pipeline.
//!
//! For each target language: partition the source entries against any prior
//! translation file, batch the pending spans, query and decode each batch in
//! order, consult the throttle, then merge and write the result. Languages
//! are processed sequentially; cancellation is checked at the top of each
//! language iteration and before every backend call.

mod merge;

pub use merge::{Partition, partition};

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::resource::ResourceDocument;
use crate::status;
use crate::ui::Spinner;
use crate::{output, warn};
use crate::translation::{
    AUTO_DETECT, Batch, BatchBuilder, DEFAULT_COOLDOWN, DEFAULT_MAX_BATCH_ENTRIES,
    DEFAULT_MAX_QUERY_CHARS, DEFAULT_THRESHOLD, Querier, Throttle, TranslationTarget,
    decode_batch, decode_single,
};

/// Tunables for one translation run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Re-translate even when a prior translation file exists.
    pub overwrite_existing: bool,
    /// Batch spans into grouped queries instead of one call per span.
    pub translate_together: bool,
    /// Character ceiling on a batch's query text.
    pub max_query_chars: usize,
    /// Entry ceiling per batch.
    pub max_batch_entries: usize,
    /// Throttle unit threshold before a cooldown.
    pub throttle_threshold: u64,
    /// Cooldown pause length.
    pub cooldown: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            overwrite_existing: false,
            translate_together: true,
            max_query_chars: DEFAULT_MAX_QUERY_CHARS,
            max_batch_entries: DEFAULT_MAX_BATCH_ENTRIES,
            throttle_threshold: DEFAULT_THRESHOLD,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

/// Cooperative cancellation signal shared with the Ctrl-C handler.
///
/// Once set, no further backend calls are issued; languages already written
/// stay written, the rest are skipped.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Storage collaborator: prior translations in, finished documents out.
///
/// The CLI backs this with `values-<suffix>/strings.xml` files; tests use an
/// in-memory map.
pub trait ResourceStore {
    /// Loads the existing translation file for a target, if any.
    fn load_prior(&self, target: &TranslationTarget) -> Result<Option<ResourceDocument>>;

    /// Writes a finished document for a target. Must be all-or-nothing.
    fn write(&mut self, target: &TranslationTarget, doc: &ResourceDocument) -> Result<()>;
}

/// Translated texts keyed by (entry name, span index).
type SpanResults = HashMap<(String, usize), String>;

/// One translation run over a source document.
///
/// Owns its throttle counter; nothing here is shared across runs.
pub struct TranslationRun<'a> {
    querier: &'a dyn Querier,
    config: PipelineConfig,
    cancel: CancelFlag,
    throttle: Throttle,
}

impl<'a> TranslationRun<'a> {
    pub fn new(querier: &'a dyn Querier, config: PipelineConfig, cancel: CancelFlag) -> Self {
        let throttle = Throttle::new(config.throttle_threshold, config.cooldown);
        Self {
            querier,
            config,
            cancel,
            throttle,
        }
    }

    /// Translates `source` into every target, writing each finished language
    /// to the store as it completes.
    ///
    /// # Errors
    ///
    /// Returns an error when loading a prior file or writing an output file
    /// fails. Backend and decode failures are tolerated per batch.
    pub async fn run(
        &mut self,
        source: &ResourceDocument,
        targets: &[TranslationTarget],
        store: &mut dyn ResourceStore,
    ) -> Result<()> {
        for target in targets {
            if self.cancel.is_cancelled() {
                status!("Cancelled; skipping remaining languages");
                break;
            }
            let spinner = (!output::is_quiet())
                .then(|| Spinner::new(format!("Translating into {}...", target.name)));

            let prior = if self.config.overwrite_existing {
                None
            } else {
                store.load_prior(target).with_context(|| {
                    format!("Failed to load prior translations for {}", target.code)
                })?
            };
            let part = partition(&source.entries, prior.as_ref().map(|d| d.entries.as_slice()));

            let results = if self.config.translate_together {
                self.translate_batched(&part, target, spinner.as_ref()).await
            } else {
                self.translate_spans(&part, target).await
            };
            drop(spinner);

            if self.cancel.is_cancelled() {
                status!("Cancelled; discarding unfinished {}", target.name);
                break;
            }

            let doc = merge_results(source, &part, &results);
            store
                .write(target, &doc)
                .with_context(|| format!("Failed to write output for {}", target.code))?;
            status!("Translated {} strings into {}", doc.entries.len(), target.name);
        }
        Ok(())
    }

    /// Batched mode: grouped queries decoded by the positional walk.
    async fn translate_batched(
        &mut self,
        part: &Partition,
        target: &TranslationTarget,
        spinner: Option<&Spinner>,
    ) -> SpanResults {
        let mut builder =
            BatchBuilder::new(self.config.max_query_chars, self.config.max_batch_entries);
        let mut batches = Vec::new();
        for (index, entry) in part.pending.iter().enumerate() {
            batches.extend(builder.push_entry(index, entry));
        }
        batches.extend(builder.finish());

        let mut results = SpanResults::new();
        let total_entries = part.pending.len();
        let mut processed_entries = 0;
        for (batch_index, batch) in batches.iter().enumerate() {
            if self.cancel.is_cancelled() {
                break;
            }
            if let Some(spinner) = spinner {
                spinner.update(format!(
                    "Translating into {} (batch {}/{})...",
                    target.name,
                    batch_index + 1,
                    batches.len()
                ));
            }
            let resolved = self
                .process_batch(batch, part, target, &mut results)
                .await;
            self.throttle.add(resolved);
            processed_entries += batch.entry_count;
            let remaining = total_entries - processed_entries;
            if self.throttle.pause_if_needed(remaining).await {
                status!(
                    "Paused {}s to stay under backend limits",
                    self.config.cooldown.as_secs()
                );
            }
        }
        results
    }

    /// Queries one batch and records its decoded spans.
    ///
    /// Returns the number of spans resolved; backend and decode failures
    /// resolve nothing and the spans keep their source text.
    async fn process_batch(
        &self,
        batch: &Batch,
        part: &Partition,
        target: &TranslationTarget,
        results: &mut SpanResults,
    ) -> u64 {
        let raw = match self
            .querier
            .query(AUTO_DETECT, target.code, &batch.query)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Backend call failed for a batch ({}): {e:#}", target.code);
                return 0;
            }
        };
        let translations = match decode_batch(&raw, batch.spans.len()) {
            Ok(t) => t,
            Err(e) => {
                warn!(
                    "Could not decode backend response ({}): {e}; keeping original text",
                    target.code
                );
                return 0;
            }
        };

        let mut resolved = 0;
        for (span_ref, translation) in batch.spans.iter().zip(&translations) {
            if translation.text.is_empty() {
                continue;
            }
            let name = part.pending[span_ref.entry].name().to_string();
            results.insert((name, span_ref.span), translation.text.clone());
            resolved += 1;
        }
        resolved
    }

    /// Per-span mode: one backend call per span, retried once when the
    /// result looks like a no-op.
    async fn translate_spans(&mut self, part: &Partition, target: &TranslationTarget) -> SpanResults {
        let mut results = SpanResults::new();
        let total_entries = part.pending.len();
        for (processed, entry) in part.pending.iter().enumerate() {
            if self.cancel.is_cancelled() {
                break;
            }
            for (span_index, content) in entry.translatable_spans() {
                if self.cancel.is_cancelled() {
                    break;
                }
                let mut calls = 0;
                let mut result = self.query_single(target, &content.text, &mut calls).await;
                let suspect = result
                    .as_ref()
                    .is_none_or(|t| t.trim().is_empty() || *t == content.text);
                if suspect {
                    result = self.query_single(target, &content.text, &mut calls).await;
                }
                self.throttle.add(calls);
                if let Some(text) = result.filter(|t| !t.is_empty()) {
                    results.insert((entry.name().to_string(), span_index), text);
                }
            }
            let remaining = total_entries - processed - 1;
            if self.throttle.pause_if_needed(remaining).await {
                status!(
                    "Paused {}s to stay under backend limits",
                    self.config.cooldown.as_secs()
                );
            }
        }
        results
    }

    async fn query_single(
        &self,
        target: &TranslationTarget,
        text: &str,
        calls: &mut u64,
    ) -> Option<String> {
        *calls += 1;
        match self.querier.query(AUTO_DETECT, target.code, text).await {
            Ok(raw) => match decode_single(&raw) {
                Ok(translated) => Some(translated),
                Err(e) => {
                    warn!("Could not decode backend response ({}): {e}", target.code);
                    None
                }
            },
            Err(e) => {
                warn!("Backend call failed ({}): {e:#}", target.code);
                None
            }
        }
    }
}

/// Builds the output document: source order, non-translatable entries
/// verbatim, reused entries from the prior set, pending entries with their
/// decoded span texts patched in (original text where decoding fell short).
fn merge_results(
    source: &ResourceDocument,
    part: &Partition,
    results: &SpanResults,
) -> ResourceDocument {
    let mut entries = Vec::with_capacity(source.entries.len());
    for entry in &source.entries {
        if !entry.is_translatable() {
            entries.push(entry.clone());
            continue;
        }
        if let Some(reused) = part.reuse.iter().find(|e| e.name() == entry.name()) {
            entries.push(reused.clone());
            continue;
        }
        let mut translated = entry.clone();
        for (span_index, content) in translated.contents.iter_mut().enumerate() {
            if content.ignore {
                continue;
            }
            if let Some(text) = results.get(&(entry.name().to_string(), span_index)) {
                content.text.clone_from(text);
            }
        }
        entries.push(translated);
    }
    ResourceDocument {
        attrs: source.attrs.clone(),
        entries,
    }
}
