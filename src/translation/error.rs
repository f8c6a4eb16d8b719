//! Error type for backend response decoding.

use thiserror::Error;

/// The backend response could not be interpreted.
///
/// A decode failure never aborts a run: the affected batch's spans keep
/// their original text and the pipeline moves on.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The response body is not valid JSON.
    #[error("Response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The response parsed but does not have the expected nested-array shape.
    #[error("Unexpected response shape: {0}")]
    Shape(String),
}
