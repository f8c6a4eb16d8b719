//! Decides, per entry, whether to reuse a prior translation or request a
//! new one.

use crate::resource::StringEntry;

/// Outcome of partitioning the source entries for one target language.
#[derive(Debug, Default)]
pub struct Partition {
    /// Entries found by name in the prior translation set; their existing
    /// content is used verbatim.
    pub reuse: Vec<StringEntry>,
    /// Translatable entries that need a fresh translation, cloned from the
    /// source.
    pub pending: Vec<StringEntry>,
}

/// Partitions translatable source entries against a prior translation set.
///
/// With `prior = None` (no prior file, or overwrite mode) every translatable
/// entry is pending. Entries marked `translatable="false"` land in neither
/// list; the caller passes them through unchanged.
///
/// A prior entry wins by name alone, even when the source text has since
/// changed. That keeps stale translations stale until overwrite mode is
/// used, matching long-standing behavior.
pub fn partition(source: &[StringEntry], prior: Option<&[StringEntry]>) -> Partition {
    let mut result = Partition::default();
    for entry in source {
        if !entry.is_translatable() {
            continue;
        }
        let existing = prior.and_then(|p| p.iter().find(|e| e.name() == entry.name()));
        match existing {
            Some(translated) => result.reuse.push(translated.clone()),
            None => result.pending.push(entry.clone()),
        }
    }
    result
}
