//! Decodes the backend's nested-array response into per-span translations.
//!
//! The backend answers a newline-joined batch query with a deeply nested
//! JSON array. The element at top-level index 5 is a sequence of segments;
//! walking it in order while honoring the newline boundary markers recovers
//! one translated string per queried span.
//!
//! The shape assumptions live in [`classify_segments`]; the matching logic
//! is a separate pure walk over the classified list so each half can be
//! tested on its own.

use serde_json::Value;

use super::error::DecodeError;

/// One classified element of the backend's segment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// An ordinary translated fragment, appended to the current span.
    Fragment(String),
    /// A literal `"\n"` marker: the current span is finished.
    Boundary,
    /// Whitespace containing a newline: its de-newlined text is appended to
    /// the current span, which is then finished. Absorbs trailing whitespace
    /// the backend reorders around segment boundaries.
    WhitespaceBoundary(String),
    /// Anything the shape rules do not cover; skipped by the walker.
    Malformed,
}

/// Translation produced for one queried span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanTranslation {
    pub text: String,
    /// `false` when the response ran out before this span's boundary; the
    /// text is then whatever had accumulated, possibly empty.
    pub complete: bool,
}

/// Parses a raw response body and classifies its segment list.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not JSON or top-level index 5 is
/// not an array of segments.
pub fn classify_segments(raw: &str) -> Result<Vec<Segment>, DecodeError> {
    let root: Value = serde_json::from_str(raw)?;
    let segments = root
        .get(5)
        .ok_or_else(|| DecodeError::Shape("Missing segment list at index 5".to_string()))?
        .as_array()
        .ok_or_else(|| DecodeError::Shape("Segment list is not an array".to_string()))?;
    Ok(segments.iter().map(classify).collect())
}

fn classify(segment: &Value) -> Segment {
    if let Some(head) = segment.get(0).and_then(Value::as_str) {
        if head == "\n" {
            return Segment::Boundary;
        }
        if head.contains('\n') && head.trim().is_empty() {
            return Segment::WhitespaceBoundary(head.replace('\n', ""));
        }
    }
    // Translated text sits three levels deep: segment -> alternatives
    // group -> first alternative -> text.
    segment
        .get(2)
        .and_then(|v| v.get(0))
        .and_then(|v| v.get(0))
        .and_then(Value::as_str)
        .map_or(Segment::Malformed, |text| {
            Segment::Fragment(text.to_string())
        })
}

/// Maps a classified segment list onto `span_count` spans, in order.
///
/// A response shorter than the span count is tolerated: remaining spans get
/// whatever partial text accumulated, flagged incomplete.
pub fn assemble(segments: &[Segment], span_count: usize) -> Vec<SpanTranslation> {
    let mut results = Vec::with_capacity(span_count);
    let mut cursor = 0;
    for _ in 0..span_count {
        let mut text = String::new();
        let mut complete = false;
        while cursor < segments.len() {
            match &segments[cursor] {
                Segment::Fragment(fragment) => {
                    text.push_str(fragment);
                    cursor += 1;
                }
                Segment::Boundary => {
                    cursor += 1;
                    complete = true;
                    break;
                }
                Segment::WhitespaceBoundary(tail) => {
                    text.push_str(tail);
                    cursor += 1;
                    complete = true;
                    break;
                }
                Segment::Malformed => {
                    cursor += 1;
                }
            }
        }
        // The backend omits the trailing boundary; a span closed by the end
        // of the response still carries its accumulated text.
        if !complete && cursor >= segments.len() && !text.is_empty() {
            complete = true;
        }
        results.push(SpanTranslation { text, complete });
    }
    results
}

/// Decodes a raw response body into translations for `span_count` spans.
///
/// # Errors
///
/// Returns [`DecodeError`] if the response cannot be parsed at all; the
/// caller then leaves the batch's spans untranslated.
pub fn decode_batch(raw: &str, span_count: usize) -> Result<Vec<SpanTranslation>, DecodeError> {
    let segments = classify_segments(raw)?;
    Ok(assemble(&segments, span_count))
}

/// Decodes a single-text response (per-span mode, no batch walk).
///
/// The sentence list at top-level index 0 holds `[translated, original,
/// ...]` pairs; the translation is their concatenated first elements.
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not JSON or index 0 is not an
/// array.
pub fn decode_single(raw: &str) -> Result<String, DecodeError> {
    let root: Value = serde_json::from_str(raw)?;
    let sentences = root
        .get(0)
        .ok_or_else(|| DecodeError::Shape("Missing sentence list at index 0".to_string()))?
        .as_array()
        .ok_or_else(|| DecodeError::Shape("Sentence list is not an array".to_string()))?;
    Ok(sentences
        .iter()
        .filter_map(|s| s.get(0).and_then(Value::as_str))
        .collect())
}
