/// Track domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Audio track
///
/// Immutable once constructed; produced by the metadata scanner and consumed
/// by the playback queue. Identity is the stable `id` string (the file path),
/// which is also what queue index re-resolution matches on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier (the file path)
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: Option<String>,

    /// Track duration in milliseconds
    pub duration_ms: u64,

    /// File path on disk
    pub file_path: PathBuf,

    /// File size in bytes
    pub file_size: u64,

    /// When the track was added to the library
    pub added_at: DateTime<Utc>,

    /// Album artwork path, if extracted
    pub artwork_path: Option<PathBuf>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(title: impl Into<String>, file_path: PathBuf) -> Self {
        Self {
            id: file_path.display().to_string(),
            title: title.into(),
            artist: String::new(),
            album: None,
            duration_ms: 0,
            file_path,
            file_size: 0,
            added_at: Utc::now(),
            artwork_path: None,
        }
    }

    /// Get the track duration as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Set the track duration from a Duration
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_ms = duration.as_millis() as u64;
    }
}
