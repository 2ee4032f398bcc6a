//! Error types for playback management
//!
//! Transport errors are never returned across the public contract; they are
//! carried as data in [`PlaybackSnapshot`](crate::PlaybackSnapshot) for the
//! presentation layer to render. That is why [`PlaybackError`] is `Clone`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlaybackError {
    /// The exclusive audio focus could not be acquired; playback did not
    /// start. Recoverable by a later play retry.
    #[error("Audio focus denied")]
    FocusDenied,

    /// The decode/output pipeline reported a failure (corrupt file,
    /// unsupported format, I/O failure).
    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
