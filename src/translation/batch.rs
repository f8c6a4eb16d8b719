//! Groups translatable spans into size-bounded backend queries.
//!
//! A batch accumulates the non-ignored spans of consecutive entries. Its
//! query text is the spans' texts joined by newlines; the decoder relies on
//! the backend echoing those newlines back as span boundaries.

use crate::resource::StringEntry;

/// Default ceiling on a batch's query text, in characters.
pub const DEFAULT_MAX_QUERY_CHARS: usize = 360;

/// Default ceiling on the number of entries queued in one batch.
pub const DEFAULT_MAX_BATCH_ENTRIES: usize = 28;

/// Reference to one span of one pending entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanRef {
    /// Index into the pending entry list.
    pub entry: usize,
    /// Span index within that entry's contents.
    pub span: usize,
}

/// One sealed batch ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// Spans in source order, matching the query's newline-joined lines.
    pub spans: Vec<SpanRef>,
    /// Number of entries contributing to this batch.
    pub entry_count: usize,
    /// Newline-joined query text.
    pub query: String,
}

/// Accumulates entries into batches under dual ceilings.
///
/// A batch seals *before* an entry whose spans would push the query text
/// over the character ceiling, so only a batch holding a single oversized
/// entry may exceed it. The entry ceiling seals a batch as soon as it is
/// reached.
#[derive(Debug)]
pub struct BatchBuilder {
    max_query_chars: usize,
    max_batch_entries: usize,
    spans: Vec<SpanRef>,
    entry_count: usize,
    query: String,
    query_chars: usize,
}

impl BatchBuilder {
    pub fn new(max_query_chars: usize, max_batch_entries: usize) -> Self {
        Self {
            max_query_chars,
            max_batch_entries,
            spans: Vec::new(),
            entry_count: 0,
            query: String::new(),
            query_chars: 0,
        }
    }

    /// Queues one entry's translatable spans.
    ///
    /// Returns the batches a ceiling forced closed around this entry
    /// (usually none, at most one of each kind).
    pub fn push_entry(&mut self, entry_index: usize, entry: &StringEntry) -> Vec<Batch> {
        let entry_spans = entry.translatable_spans().count();
        if entry_spans == 0 {
            return Vec::new();
        }
        let entry_chars: usize = entry
            .translatable_spans()
            .map(|(_, c)| c.text.chars().count())
            .sum();

        // Chars the query would grow to with this entry appended, counting
        // one newline separator between adjacent spans.
        let mut sealed = Vec::new();
        if !self.spans.is_empty() {
            let prospective = self.query_chars + entry_spans + entry_chars;
            if prospective > self.max_query_chars {
                sealed.extend(self.seal());
            }
        }

        for (span_index, content) in entry.translatable_spans() {
            if !self.spans.is_empty() {
                self.query.push('\n');
                self.query_chars += 1;
            }
            self.query.push_str(&content.text);
            self.query_chars += content.text.chars().count();
            self.spans.push(SpanRef {
                entry: entry_index,
                span: span_index,
            });
        }
        self.entry_count += 1;

        if self.entry_count >= self.max_batch_entries {
            sealed.extend(self.seal());
        }
        sealed
    }

    /// Seals any in-progress batch at end of input.
    pub fn finish(mut self) -> Option<Batch> {
        self.seal()
    }

    fn seal(&mut self) -> Option<Batch> {
        if self.spans.is_empty() {
            return None;
        }
        let batch = Batch {
            spans: std::mem::take(&mut self.spans),
            entry_count: self.entry_count,
            query: std::mem::take(&mut self.query),
        };
        self.entry_count = 0;
        self.query_chars = 0;
        Some(batch)
    }
}
