mod batch;
mod client;
mod decoder;
mod error;
mod language;
mod querier;
mod throttle;

pub use batch::{Batch, BatchBuilder, DEFAULT_MAX_BATCH_ENTRIES, DEFAULT_MAX_QUERY_CHARS, SpanRef};
pub use client::GoogleClient;
pub use decoder::{
    Segment, SpanTranslation, assemble, classify_segments, decode_batch, decode_single,
};
pub use error::DecodeError;
pub use language::{
    AUTO_DETECT, SUPPORTED_TARGETS, TranslationTarget, print_targets, resolve_target,
    values_dir_name,
};
pub use querier::Querier;
pub use throttle::{DEFAULT_COOLDOWN, DEFAULT_THRESHOLD, Throttle};
