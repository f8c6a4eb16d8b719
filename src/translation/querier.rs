//! Backend boundary: one operation, raw response out.

use anyhow::Result;
use async_trait::async_trait;

/// A translation backend the pipeline can query.
///
/// Implementations return the raw response body; interpreting it is the
/// decoder's job. `source` may be the [`AUTO_DETECT`] sentinel.
///
/// [`AUTO_DETECT`]: super::language::AUTO_DETECT
#[async_trait]
pub trait Querier: Send + Sync {
    /// Sends `text` for translation and returns the raw response body.
    async fn query(&self, source: &str, target: &str, text: &str) -> Result<String>;
}
